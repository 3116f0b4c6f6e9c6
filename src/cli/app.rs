use super::commands::auth::AuthCommands;
use super::commands::customer::CustomerCommands;
use super::commands::export::ExportArgs;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "popcone-cli")]
#[command(about = "A CLI tool for managing Popcone customers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Login session management
    Auth(AuthCommands),
    /// Customer record management
    Customer(CustomerCommands),
    /// Export customers to a categorized Excel workbook
    Export(ExportArgs),
}
