mod cli;
mod commands;
mod error;
mod git;
mod menu;
mod profile;
mod prompt;
mod storage;
#[cfg(test)]
mod test_utils;
mod validation;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{cli::Cli, git::GitCli, menu::run_menu, prompt::InquirePrompter, storage::ProfileStore};

/// Installs the stderr logger; `RUST_LOG` overrides `default_filter`
fn init_logging(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_filter()) {
        eprintln!("{} {}", "failed to initialise logging:".red(), err);
        return ExitCode::FAILURE;
    }

    let store = match cli.store_path() {
        Ok(path) => ProfileStore::new(path),
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::FAILURE;
        }
    };
    debug!(path = %store.path().display(), language = ?cli.lang, "starting");

    run_menu(&store, &mut InquirePrompter, &mut GitCli, cli.lang);
    ExitCode::SUCCESS
}
