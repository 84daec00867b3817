use colored::Colorize;

use crate::{error::AppError, prompt::Prompter};

/// Prompts user for input until valid input is provided.
///
/// Input is trimmed before validation and returned trimmed.
pub fn prompt_until_valid<F>(
    prompter: &mut dyn Prompter,
    prompt_message: &str,
    default: Option<&str>,
    input_validation: F,
) -> Result<String, AppError>
where
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let input: String = prompter.text(prompt_message, default)?;
        let input: &str = input.trim();
        match input_validation(input) {
            Ok(_) => break Ok(input.to_string()),
            Err(AppError::Validation(msg)) => println!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

fn require_non_empty(value: &str, what: &str) -> Result<(), AppError> {
    if value.is_empty() {
        Err(AppError::Validation(format!("{what} cannot be empty")))
    } else {
        Ok(())
    }
}

// Validate input helper functions

/// Validates a configuration key
pub fn validate_input_key(key: &str) -> Result<(), AppError> {
    require_non_empty(key, "Key")
}

/// Validates a Git user name
pub fn validate_input_name(name: &str) -> Result<(), AppError> {
    require_non_empty(name, "Name")
}

/// Validates a Git email. Only emptiness is checked, never the format.
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    require_non_empty(email, "Email")
}

/// Validates an export directory
pub fn validate_input_export_dir(dir: &str) -> Result<(), AppError> {
    require_non_empty(dir, "Export path")
}
