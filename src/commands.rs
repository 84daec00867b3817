//! Handlers behind each menu action.
//!
//! Every handler reads the store afresh, prompts for what it needs, then
//! writes the whole mapping back. Handlers that pick an existing profile
//! return early with a message when the store is empty.

use std::path::Path;

use colored::Colorize;
use tracing::{debug, warn};

use crate::{
    error::AppError,
    git::IdentityApplier,
    profile::{Profile, ProfileMap},
    prompt::Prompter,
    storage::{self, ProfileStore},
    validation::{
        prompt_until_valid, validate_input_email, validate_input_export_dir, validate_input_key,
        validate_input_name,
    },
};

/// Prints the empty-store notice for `verb` and reports whether any profiles exist
fn check_if_profiles_exist(profiles: &ProfileMap, verb: &str) -> bool {
    if profiles.is_empty() {
        println!(
            "{}",
            format!("No configurations available to {verb}. Please add configurations first.").yellow()
        );
        return false;
    }
    true
}

/// Asks the user to pick one of the stored keys
fn select_key(prompter: &mut dyn Prompter, profiles: &ProfileMap, verb: &str) -> Result<String, AppError> {
    let keys: Vec<String> = profiles.keys().cloned().collect();
    let index: usize = prompter.select(&format!("Select a configuration to {verb}:"), keys.clone())?;
    keys.into_iter()
        .nth(index)
        .ok_or_else(|| AppError::Validation(format!("selection {index} is out of range")))
}

/// Adds a profile, silently replacing any profile stored under the same key
pub fn add_profile(store: &ProfileStore, prompter: &mut dyn Prompter) -> Result<(), AppError> {
    let key: String = prompt_until_valid(prompter, "Enter a key for the configuration:", None, validate_input_key)?;
    let name: String = prompt_until_valid(prompter, "Enter your Git name:", None, validate_input_name)?;
    let email: String = prompt_until_valid(prompter, "Enter your Git email:", None, validate_input_email)?;

    let mut profiles: ProfileMap = store.read_all();
    if profiles.insert(key.clone(), Profile::new(name, email)).is_some() {
        debug!(%key, "replaced existing profile");
    }
    store.write_all(&profiles)?;

    println!("{}", format!("Configuration added for {key}.").green());
    Ok(())
}

/// Switches the global Git identity to a stored profile.
///
/// Returns `true` once an identity has been applied, `false` when there was
/// nothing to switch to. Failed `git` steps are reported as warnings only.
pub fn switch_profile(
    store: &ProfileStore,
    prompter: &mut dyn Prompter,
    applier: &mut dyn IdentityApplier,
) -> Result<bool, AppError> {
    let profiles: ProfileMap = store.read_all();
    if !check_if_profiles_exist(&profiles, "switch") {
        return Ok(false);
    }

    let key: String = select_key(prompter, &profiles, "switch")?;
    let profile: &Profile = profiles
        .get(&key)
        .ok_or_else(|| AppError::ProfileNotFound(key.clone()))?;

    let report = applier.apply(&profile.name, &profile.email);
    for failure in report.failures() {
        warn!(%key, error = %failure, "failed to apply git identity");
        eprintln!("{} {}", "warning:".yellow(), failure);
    }

    println!("{}", format!("Switched to {key}: {profile}").green());
    Ok(true)
}

/// Replaces the name and email of a stored profile, offering the current values as defaults
pub fn update_profile(store: &ProfileStore, prompter: &mut dyn Prompter) -> Result<(), AppError> {
    let mut profiles: ProfileMap = store.read_all();
    if !check_if_profiles_exist(&profiles, "update") {
        return Ok(());
    }

    let key: String = select_key(prompter, &profiles, "update")?;
    let current: Profile = profiles
        .get(&key)
        .cloned()
        .ok_or_else(|| AppError::ProfileNotFound(key.clone()))?;

    let name: String = prompt_until_valid(
        prompter,
        "Enter your new Git name:",
        Some(&current.name),
        validate_input_name,
    )?;
    let email: String = prompt_until_valid(
        prompter,
        "Enter your new Git email:",
        Some(&current.email),
        validate_input_email,
    )?;

    profiles.insert(key.clone(), Profile::new(name, email));
    store.write_all(&profiles)?;

    println!("{}", format!("Configuration {key} has been updated.").green());
    Ok(())
}

/// Deletes a stored profile
pub fn delete_profile(store: &ProfileStore, prompter: &mut dyn Prompter) -> Result<(), AppError> {
    let profiles: ProfileMap = store.read_all();
    if !check_if_profiles_exist(&profiles, "delete") {
        return Ok(());
    }

    let key: String = select_key(prompter, &profiles, "delete")?;
    store.remove(&key)?;

    println!("{}", format!("Configuration {key} has been deleted.").green());
    Ok(())
}

/// Exports every profile to `git-configs.json` under a directory chosen by the user.
///
/// A failed write is reported and the menu carries on.
pub fn export_profiles(store: &ProfileStore, prompter: &mut dyn Prompter) -> Result<(), AppError> {
    let profiles: ProfileMap = store.read_all();
    if !check_if_profiles_exist(&profiles, "export") {
        return Ok(());
    }

    let export_dir: String = prompt_until_valid(
        prompter,
        "Enter the path where you want to export the configuration file:",
        None,
        validate_input_export_dir,
    )?;

    match storage::export_to(Path::new(&export_dir), &profiles) {
        Ok(export_path) => println!(
            "{}",
            format!("Configurations exported to {}.", export_path.display()).green()
        ),
        Err(err) => {
            warn!(dir = %export_dir, error = %err, "export failed");
            eprintln!("{} {}", "Error writing to file:".red(), err);
        }
    }
    Ok(())
}
