use anyhow::Result;
use clap::Parser;
use log::info;

use popcone_cli::cli::commands::auth::AuthSubcommands;
use popcone_cli::cli::commands::customer::CustomerSubcommands;
use popcone_cli::cli::{Cli, Commands};
use popcone_cli::commands::auth::{login_command, logout_command, status_command};
use popcone_cli::commands::customer::{
    add_command, import_command, list_command, remove_command, show_command, update_command,
};
use popcone_cli::commands::export::export_command;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting popcone-cli");

    match cli.command {
        Commands::Auth(auth) => match auth.command {
            AuthSubcommands::Login { username, password } => {
                login_command(username, password).await
            }
            AuthSubcommands::Logout => logout_command().await,
            AuthSubcommands::Status => status_command().await,
        },
        Commands::Customer(customer) => match customer.command {
            CustomerSubcommands::List { filters } => list_command(filters).await,
            CustomerSubcommands::Show { id } => show_command(id).await,
            CustomerSubcommands::Add { fields } => add_command(fields).await,
            CustomerSubcommands::Update { id, fields } => update_command(id, fields).await,
            CustomerSubcommands::Remove { id, force } => remove_command(id, force).await,
            CustomerSubcommands::Import { file } => import_command(file).await,
        },
        Commands::Export(args) => export_command(args).await,
    }
}
