//! Test doubles shared across test modules
//!
//! Handlers and the menu are driven by a scripted prompter and a recording
//! identity applier so tests never need a terminal or a `git` binary.

use std::{collections::VecDeque, io};

use inquire::InquireError;
use tempfile::TempDir;

use crate::{
    error::AppError,
    git::{ApplyReport, IdentityApplier},
    profile::{Profile, ProfileMap},
    prompt::Prompter,
    storage::{PROFILES_FILE_NAME, ProfileStore},
};

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Answer {
    /// Select the option with this label
    Pick(String),
    /// Type this text
    Text(String),
    /// Press enter on a text prompt, taking its default
    AcceptDefault,
    /// Press Esc
    Cancel,
    /// Press Ctrl+C
    Interrupt,
    /// The terminal cannot render prompts
    NotTty,
    /// The terminal fails mid-prompt
    Broken,
    /// The prompt fails outside the input library
    Fail,
}

impl Answer {
    pub fn pick(label: &str) -> Self {
        Self::Pick(label.to_string())
    }

    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Replays answers in order.
///
/// Once the script runs out every prompt reports an interrupt, so a menu loop
/// under test always terminates.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    /// Every prompt message shown, in order
    pub messages: Vec<String>,
    /// Options offered by each select prompt, in order
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, message: &str) -> Answer {
        self.messages.push(message.to_string());
        self.answers.pop_front().unwrap_or(Answer::Interrupt)
    }
}

fn input_error(answer: &Answer) -> Option<AppError> {
    match answer {
        Answer::Cancel => Some(InquireError::OperationCanceled.into()),
        Answer::Interrupt => Some(InquireError::OperationInterrupted.into()),
        Answer::NotTty => Some(InquireError::NotTTY.into()),
        Answer::Broken => Some(InquireError::IO(io::Error::other("terminal closed")).into()),
        Answer::Fail => Some(AppError::Io(io::Error::other("prompt backend failed"))),
        _ => None,
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, options: Vec<String>) -> Result<usize, AppError> {
        let answer = self.next_answer(message);
        self.offered.push(options.clone());
        if let Some(err) = input_error(&answer) {
            return Err(err);
        }
        match answer {
            Answer::Pick(label) => Ok(options
                .iter()
                .position(|option| *option == label)
                .unwrap_or_else(|| panic!("'{label}' not offered by '{message}': {options:?}"))),
            other => panic!("expected a pick for '{message}', got {other:?}"),
        }
    }

    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String, AppError> {
        let answer = self.next_answer(message);
        if let Some(err) = input_error(&answer) {
            return Err(err);
        }
        match answer {
            Answer::Text(value) => Ok(value),
            Answer::AcceptDefault => Ok(default.unwrap_or_default().to_string()),
            other => panic!("expected text for '{message}', got {other:?}"),
        }
    }
}

/// Records identities instead of running `git`
#[derive(Debug, Default)]
pub struct RecordingApplier {
    pub calls: Vec<(String, String)>,
    /// Report the name step as failed
    pub fail_name: bool,
}

impl IdentityApplier for RecordingApplier {
    fn apply(&mut self, name: &str, email: &str) -> ApplyReport {
        self.calls.push((name.to_string(), email.to_string()));
        let name = if self.fail_name {
            Err(AppError::GitCommand {
                key: "user.name".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "error: could not lock config file".to_string(),
            })
        } else {
            Ok(())
        };
        ApplyReport { name, email: Ok(()) }
    }
}

/// Creates a store inside `temp_dir`
pub fn setup_test_store(temp_dir: &TempDir) -> ProfileStore {
    ProfileStore::new(temp_dir.path().join(PROFILES_FILE_NAME))
}

/// Creates a store inside `temp_dir` holding `profiles`
pub fn seeded_store(temp_dir: &TempDir, profiles: &[(&str, &str, &str)]) -> ProfileStore {
    let store = setup_test_store(temp_dir);
    let profiles: ProfileMap = profiles
        .iter()
        .map(|(key, name, email)| (key.to_string(), Profile::new(*name, *email)))
        .collect();
    store.write_all(&profiles).unwrap();
    store
}
