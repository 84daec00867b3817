use std::path::{Path, PathBuf};

use clap::Parser;

use crate::{error::AppError, menu::Language, storage::PROFILES_FILE_NAME};

/// CLI arguments parser using `clap`.
///
/// There are no subcommands: every action lives in the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "gitswap", version, about)]
pub struct Cli {
    /// Path of the profiles file
    #[arg(short, long, value_name = "FILE", env = "GITSWAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep the profiles file in the home directory instead of the current one
    #[arg(long)]
    pub home: bool,

    /// Language of the menu labels
    #[arg(short, long, value_enum, default_value_t = Language::En, env = "GITSWAP_LANG")]
    pub lang: Language,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolves the profiles file from the parsed flags
    pub fn store_path(&self) -> Result<PathBuf, AppError> {
        resolve_store_path(self.config.as_deref(), self.home)
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Picks the profiles file: `config`, then the home directory, then the working directory
fn resolve_store_path(config: Option<&Path>, home: bool) -> Result<PathBuf, AppError> {
    if let Some(path) = config {
        return Ok(path.to_path_buf());
    }

    if home {
        let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
        return Ok(home_dir.join(PROFILES_FILE_NAME));
    }

    Ok(PathBuf::from(PROFILES_FILE_NAME))
}
