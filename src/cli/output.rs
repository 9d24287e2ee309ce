use serde::Serialize;

use crate::error::{Result, ShareOfferError};
use crate::offer::{FunnelStats, OfferEvent, OfferReason};

/// Result line for `should-offer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShouldOfferOutput {
    pub should_offer: bool,
    pub reason: OfferReason,
    pub cooldown_hours: i64,
    pub user: String,
    pub state_file: String,
}

/// Result line for `record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutput {
    pub ok: bool,
    pub event: OfferEvent,
    pub user: String,
    pub stats: FunnelStats,
    pub state_file: String,
}

/// Render a value as a single compact JSON line.
pub fn render_line<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|err| ShareOfferError::Serialization(format!("serialize output: {err}")))
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = render_line(value)?;
    println!("{payload}");
    Ok(())
}
