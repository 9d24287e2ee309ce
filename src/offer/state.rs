//! In-memory shape of the share-offer state file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATE_VERSION: u64 = 1;

/// Root of the persisted state file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDocument {
    pub version: u64,
    #[serde(default)]
    pub users: BTreeMap<String, UserSlot>,
    /// Keys this version does not know about, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for StateDocument {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            users: BTreeMap::new(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSlot {
    #[serde(default)]
    pub stats: FunnelStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_offer_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accept_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_decline_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cumulative funnel counters for one user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStats {
    #[serde(default)]
    pub shown: u64,
    #[serde(default)]
    pub accepted: u64,
    #[serde(default)]
    pub declined: u64,
}

impl StateDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn slot(&self, user_key: &str) -> Option<&UserSlot> {
        self.users.get(user_key)
    }
}

/// Return the slot for `user_key`, inserting a zeroed one if it is missing.
///
/// Slots coming out of [`crate::offer::repair`] are already well-formed, so
/// the only healing left to do here is creating absent users.
pub fn get_or_create_slot<'a>(document: &'a mut StateDocument, user_key: &str) -> &'a mut UserSlot {
    if !document.users.contains_key(user_key) {
        tracing::debug!(user = user_key, "creating empty offer slot");
    }
    document.users.entry(user_key.to_string()).or_default()
}
