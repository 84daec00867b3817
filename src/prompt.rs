use colored::Colorize;
use inquire::{Select, Text};

use crate::error::AppError;

/// Source of interactive answers
pub trait Prompter {
    /// Asks the user to pick one of `options` and returns its index
    fn select(&mut self, message: &str, options: Vec<String>) -> Result<usize, AppError>;

    /// Asks for a line of text, offering `default` when given
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String, AppError>;
}

/// Prompts on the terminal using `inquire`
#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select(&mut self, message: &str, options: Vec<String>) -> Result<usize, AppError> {
        let message: String = format!("{}", message.blue());
        let selected = Select::new(&message, options).raw_prompt()?;
        Ok(selected.index)
    }

    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String, AppError> {
        let message: String = format!("{}", message.blue());
        let mut prompt = Text::new(&message);
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        Ok(prompt.prompt()?)
    }
}
