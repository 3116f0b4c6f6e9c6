use anyhow::Result;
use log::info;

use crate::config::Config;

pub async fn status_command() -> Result<()> {
    info!("Executing auth status command");

    let config = Config::load()?;

    println!("Popcone CLI Session Status");
    println!("==========================");

    match &config.session {
        Some(session) => {
            println!("Logged in as: {}", session.username);
            println!(
                "Since:        {}",
                session.logged_in_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        None => {
            println!("Not logged in.");
            println!("Run 'popcone-cli auth login' to start a session.");
        }
    }

    Ok(())
}
