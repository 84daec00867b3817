use std::process::{Command, Output};

use tracing::debug;

use crate::error::AppError;

/// Outcome of setting both halves of a Git identity
#[derive(Debug)]
pub struct ApplyReport {
    /// Result of setting `user.name`
    pub name: Result<(), AppError>,
    /// Result of setting `user.email`
    pub email: Result<(), AppError>,
}

impl ApplyReport {
    /// Errors of the steps that failed, name first
    pub fn failures(&self) -> impl Iterator<Item = &AppError> {
        [&self.name, &self.email]
            .into_iter()
            .filter_map(|step| step.as_ref().err())
    }
}

/// Sets the active global Git identity
pub trait IdentityApplier {
    /// Sets `user.name`, then `user.email` once the first step has finished.
    ///
    /// The email step runs whatever the outcome of the name step.
    fn apply(&mut self, name: &str, email: &str) -> ApplyReport;
}

/// Applies identities by running the system `git`
#[derive(Debug, Default, Clone, Copy)]
pub struct GitCli;

impl IdentityApplier for GitCli {
    fn apply(&mut self, name: &str, email: &str) -> ApplyReport {
        let name = set_global_config("user.name", name);
        let email = set_global_config("user.email", email);
        ApplyReport { name, email }
    }
}

/// Builds `git config --global <key> <value>`
fn global_config_command(key: &str, value: &str) -> Command {
    let mut command = Command::new("git");
    command.args(["config", "--global", key, value]);
    command
}

/// Executes a Git config set command against the global config
///
/// # Arguments
/// * `key` - Git config key to set (user.name or user.email)
/// * `value` - Value to set for key
pub fn set_global_config(key: &str, value: &str) -> Result<(), AppError> {
    debug!(key, value, "running git config --global");
    let git_command_output: Output = global_config_command(key, value).output()?;

    if !git_command_output.status.success() {
        return Err(config_failure(key, &git_command_output));
    }

    Ok(())
}

/// Describes a failed `git config` run; stderr is decoded lossily
fn config_failure(key: &str, output: &Output) -> AppError {
    AppError::GitCommand {
        key: key.to_string(),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}
