use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Error during JSON serialization or deserialization
    #[error("json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// Error when user input fails, including Ctrl+C and Esc.
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
    /// A `git config` invocation exited unsuccessfully
    #[error("git config {key} failed ({status}): {stderr}")]
    GitCommand {
        key: String,
        status: String,
        stderr: String,
    },
    /// Error during input validation.
    #[error("{0}")]
    Validation(String),
    /// Error when a profile key is not in the store.
    #[error("configuration not found: '{0}'")]
    ProfileNotFound(String),
    /// The home directory could not be determined.
    #[error("failed to find the home directory")]
    HomeDirNotFound,
}
