use anyhow::{Result, bail};
use log::{info, warn};

use crate::config::Config;
use crate::ui::prompts::{password_input, text_input};

// The web app shipped with exactly one account, checked client-side.
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin@ashish";

/// Check the credential pair and persist a session on success.
///
/// # Arguments
/// * `username` - Username, prompted when not given
/// * `password` - Password, prompted (hidden) when not given
pub async fn login_command(username: Option<String>, password: Option<String>) -> Result<()> {
    info!("Executing auth login command");

    let username = match username {
        Some(username) => username,
        None => text_input("Username", None)?,
    };
    let password = match password {
        Some(password) => password,
        None => password_input("Password")?,
    };

    if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
        warn!("Login attempt failed for username: {}", username);
        bail!("Invalid username or password");
    }

    let mut config = Config::load()?;
    config.start_session(username.clone())?;

    println!("Logged in as '{}'.", username);
    Ok(())
}
