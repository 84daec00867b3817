use clap::ValueEnum;
use colored::Colorize;
use inquire::InquireError;
use tracing::debug;

use crate::{
    commands::{add_profile, delete_profile, export_profiles, switch_profile, update_profile},
    error::AppError,
    git::IdentityApplier,
    prompt::Prompter,
    storage::ProfileStore,
};

/// Language of the menu labels
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// English
    #[default]
    En,
    /// Simplified Chinese
    Zh,
}

/// Actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Switch,
    ExportAll,
    Update,
    Delete,
}

impl MenuAction {
    /// Menu order
    pub const ALL: [MenuAction; 5] = [
        MenuAction::Add,
        MenuAction::Switch,
        MenuAction::ExportAll,
        MenuAction::Update,
        MenuAction::Delete,
    ];

    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::En, MenuAction::Add) => "Add configuration",
            (Language::En, MenuAction::Switch) => "Switch configuration",
            (Language::En, MenuAction::ExportAll) => "Export all configurations",
            (Language::En, MenuAction::Update) => "Update configuration",
            (Language::En, MenuAction::Delete) => "Delete configuration",
            (Language::Zh, MenuAction::Add) => "新增配置",
            (Language::Zh, MenuAction::Switch) => "切换配置",
            (Language::Zh, MenuAction::ExportAll) => "导出全部配置",
            (Language::Zh, MenuAction::Update) => "更新配置",
            (Language::Zh, MenuAction::Delete) => "删除配置",
        }
    }
}

/// What the menu loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs one action against the store
fn run_action(
    action: MenuAction,
    store: &ProfileStore,
    prompter: &mut dyn Prompter,
    applier: &mut dyn IdentityApplier,
) -> Result<Flow, AppError> {
    debug!(?action, "running menu action");
    match action {
        MenuAction::Add => add_profile(store, prompter)?,
        MenuAction::Switch => {
            if switch_profile(store, prompter, applier)? {
                return Ok(Flow::Exit);
            }
        }
        MenuAction::ExportAll => export_profiles(store, prompter)?,
        MenuAction::Update => update_profile(store, prompter)?,
        MenuAction::Delete => delete_profile(store, prompter)?,
    }
    Ok(Flow::Continue)
}

/// Reports an input failure that ends the session
fn report_input_error(err: &InquireError) {
    match err {
        InquireError::OperationInterrupted | InquireError::OperationCanceled => {
            println!("{}", "Exiting the program. Goodbye!".yellow())
        }
        InquireError::NotTTY => {
            eprintln!("{}", "Prompt couldn't be rendered in the current environment.".red())
        }
        other => eprintln!("{} {}", "An unexpected error occurred:".red(), other),
    }
}

/// Runs interactive menu interface.
///
/// Loops until a profile has been switched to, the user presses Ctrl+C or Esc
/// at the main menu, or the terminal stops accepting input. Esc inside an
/// action returns to the menu.
pub fn run_menu(
    store: &ProfileStore,
    prompter: &mut dyn Prompter,
    applier: &mut dyn IdentityApplier,
    language: Language,
) {
    loop {
        let labels: Vec<String> = MenuAction::ALL
            .iter()
            .map(|action| action.label(language).to_string())
            .collect();

        let action: MenuAction = match prompter.select("Select an action:", labels) {
            Ok(index) => match MenuAction::ALL.get(index) {
                Some(action) => *action,
                None => continue,
            },
            Err(AppError::Inquire(err)) => {
                report_input_error(&err);
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "An unexpected error occurred:".red(), err);
                break;
            }
        };

        match run_action(action, store, prompter, applier) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(AppError::Inquire(InquireError::OperationCanceled)) => {
                debug!(?action, "action cancelled");
            }
            Err(AppError::Inquire(err)) => {
                report_input_error(&err);
                break;
            }
            Err(err) => eprintln!("{}", err.to_string().red()),
        }
    }
}
