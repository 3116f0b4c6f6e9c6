use anyhow::Result;
use dialoguer::{Input, Password, Select};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

/// Simple confirmation prompt using the existing prompt_confirmation function
///
/// # Arguments
/// * `message` - The question to ask the user
/// * `default` - Whether "Yes" should be the default selection
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    prompt_confirmation(message, default)
}

/// Simple text input prompt with optional default value
///
/// # Arguments
/// * `prompt` - The prompt message to display
/// * `default` - Optional default value
///
/// # Returns
/// * `Ok(String)` - User input or default value
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_prompt = Input::<String>::new()
        .with_prompt(prompt);

    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }

    Ok(input_prompt.interact()?)
}

/// Hidden input for credential prompts.
pub fn password_input(prompt: &str) -> Result<String> {
    Ok(Password::new().with_prompt(prompt).interact()?)
}

/// Arrow-key selection over a fixed option list, returning the chosen
/// option.
pub fn select_option(prompt: &str, options: &[&str]) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .interact()?;

    Ok(options[selection].to_string())
}
