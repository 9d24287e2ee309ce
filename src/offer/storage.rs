//! JSON storage for the share-offer state file.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, ShareOfferError};
use crate::utils::fs::{read_optional, write_atomic};

use super::repair::repair_document;
use super::state::StateDocument;

/// Load the state file, falling back to an empty document on any read problem.
#[must_use]
pub fn load_state(path: &Path) -> StateDocument {
    let raw = match read_optional(path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %path.display(), "state file absent, starting empty");
            return StateDocument::new();
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "state file unreadable, starting empty");
            return StateDocument::new();
        }
    };

    let value: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "state file is not JSON, starting empty");
            return StateDocument::new();
        }
    };

    let repaired = repair_document(value);
    for repair in &repaired.repairs {
        tracing::debug!(path = %path.display(), %repair, "repaired state file");
    }
    repaired.document
}

/// Write the state file as pretty-printed JSON with sorted keys.
pub fn save_state(path: &Path, document: &StateDocument) -> Result<()> {
    let payload = render_state(document)?;
    write_atomic(path, payload.as_bytes())?;
    tracing::debug!(path = %path.display(), users = document.users.len(), "saved state file");
    Ok(())
}

/// Pretty-printed, key-sorted JSON for a document.
///
/// Going through [`Value`] sorts every object's keys, including flattened
/// unknown ones, so equal documents always render to identical bytes.
pub fn render_state(document: &StateDocument) -> Result<String> {
    let value = serde_json::to_value(document)
        .map_err(|err| ShareOfferError::Serialization(format!("state serialize: {err}")))?;
    serde_json::to_string_pretty(&value)
        .map_err(|err| ShareOfferError::Serialization(format!("state serialize: {err}")))
}
