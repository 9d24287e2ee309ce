use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Isolated directory holding one state file path.
pub struct StateFixture {
    pub temp_dir: TempDir,
    pub state_path: PathBuf,
}

impl Default for StateFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StateFixture {
    /// State file one directory below the temp root, so saves must create it.
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let state_path = temp_dir.path().join("workspace").join("share-offer.json");
        Self {
            temp_dir,
            state_path,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.state_path
    }

    /// Overwrite the state file with raw text.
    pub fn write_raw(&self, content: &str) {
        if let Some(parent) = self.state_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&self.state_path, content).expect("Failed to write state file");
    }

    #[must_use]
    pub fn read_raw(&self) -> Option<String> {
        std::fs::read_to_string(&self.state_path).ok()
    }

    /// Parse the state file as JSON, panicking if it is missing or invalid.
    #[must_use]
    pub fn read_json(&self) -> Value {
        let raw = self.read_raw().expect("state file missing");
        serde_json::from_str(&raw).expect("state file is not JSON")
    }
}
