use std::{fs, path::{Path, PathBuf}};

use colored::Colorize;
use tracing::{debug, warn};

use crate::{
    error::AppError,
    profile::{Profile, ProfileMap},
};

/// File name of the profiles store and of every export
pub const PROFILES_FILE_NAME: &str = "git-configs.json";

/// The JSON file holding every saved profile.
///
/// Nothing is cached: each call reads or rewrites the whole file.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the profiles, failing on unreadable or malformed files
    pub fn load(&self) -> Result<ProfileMap, AppError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "profiles file does not exist");
            return Ok(ProfileMap::new());
        }

        let file_contents: String = fs::read_to_string(&self.path)?;
        if file_contents.trim().is_empty() {
            return Ok(ProfileMap::new());
        }

        let profiles: ProfileMap = serde_json::from_str(&file_contents)?;
        debug!(path = %self.path.display(), count = profiles.len(), "loaded profiles");
        Ok(profiles)
    }

    /// Loads the profiles, treating a missing or corrupt file as empty.
    ///
    /// A corrupt file is reported but never fatal.
    pub fn read_all(&self) -> ProfileMap {
        match self.load() {
            Ok(profiles) => profiles,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable profiles file");
                eprintln!("{} {}", "Error reading config file:".red(), err);
                ProfileMap::new()
            }
        }
    }

    /// Overwrites the profiles file with the whole mapping
    pub fn write_all(&self, profiles: &ProfileMap) -> Result<(), AppError> {
        write_profiles(&self.path, profiles)
    }

    /// Removes `key` from the store, returning the removed profile.
    ///
    /// An absent key leaves the file untouched.
    pub fn remove(&self, key: &str) -> Result<Option<Profile>, AppError> {
        let mut profiles: ProfileMap = self.read_all();
        let removed = profiles.remove(key);
        match removed {
            Some(_) => self.write_all(&profiles)?,
            None => debug!(key, "no profile to remove"),
        }
        Ok(removed)
    }
}

/// Writes `profiles` to `<dir>/git-configs.json` and returns the written path
pub fn export_to(dir: &Path, profiles: &ProfileMap) -> Result<PathBuf, AppError> {
    let export_path: PathBuf = dir.join(PROFILES_FILE_NAME);
    write_profiles(&export_path, profiles)?;
    Ok(export_path)
}

fn write_profiles(path: &Path, profiles: &ProfileMap) -> Result<(), AppError> {
    let json: String = serde_json::to_string_pretty(profiles)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), count = profiles.len(), "wrote profiles");
    Ok(())
}
