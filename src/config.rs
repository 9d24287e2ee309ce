//! Runtime settings for one invocation.

use std::path::PathBuf;

use crate::utils::fs::expand_tilde;

/// Where the state file lives unless `--state-file` says otherwise.
pub const DEFAULT_STATE_FILE: &str = "~/.openclaw/workspace/.crabb-share-offer.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub state_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_state_file(DEFAULT_STATE_FILE)
    }
}

impl Settings {
    /// Build settings from a raw `--state-file` value, expanding `~`.
    #[must_use]
    pub fn from_state_file(raw: &str) -> Self {
        Self {
            state_file: expand_tilde(raw),
        }
    }
}
