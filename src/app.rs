use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::cli::Cli;
use crate::config::Settings;

/// Everything a command needs for one invocation.
pub struct AppContext {
    pub settings: Settings,
    /// Captured once so every decision and timestamp in a run agrees.
    pub now: DateTime<Utc>,
}

impl AppContext {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(Settings::from_state_file(&cli.state_file), Utc::now())
    }

    #[must_use]
    pub const fn new(settings: Settings, now: DateTime<Utc>) -> Self {
        Self { settings, now }
    }

    #[must_use]
    pub fn state_path(&self) -> &Path {
        &self.settings.state_file
    }

    /// The state path as it is reported in command output.
    #[must_use]
    pub fn state_file_display(&self) -> String {
        self.state_path().display().to_string()
    }

    #[must_use]
    pub fn with_state_file(path: impl Into<PathBuf>, now: DateTime<Utc>) -> Self {
        Self::new(
            Settings {
                state_file: path.into(),
            },
            now,
        )
    }
}
