use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Profiles keyed by the user-chosen configuration key
pub type ProfileMap = BTreeMap<String, Profile>;

/// A Git identity stored in the profiles file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Git user name (user.name)
    pub name: String,
    /// Git email address (user.email)
    pub email: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
