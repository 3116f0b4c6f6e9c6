use anyhow::Result;
use log::info;

use crate::config::Config;

pub async fn logout_command() -> Result<()> {
    info!("Executing auth logout command");

    let mut config = Config::load()?;
    if config.session.is_none() {
        println!("Not logged in.");
        return Ok(());
    }

    config.clear_session()?;
    println!("Logged out.");
    Ok(())
}
