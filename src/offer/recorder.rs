//! Funnel event recording.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::UserSlot;
use super::timestamp::format_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferEvent {
    Shown,
    Accepted,
    Declined,
}

impl OfferEvent {
    pub const ALL: [Self; 3] = [Self::Shown, Self::Accepted, Self::Declined];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shown => "shown",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for OfferEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply `event` to `slot`: bump its counter and stamp its timestamp with `now`.
///
/// Does not consult the cooldown policy.
pub fn record(slot: &mut UserSlot, event: OfferEvent, now: DateTime<Utc>) {
    let stamp = Some(format_timestamp(now));
    let stats = &mut slot.stats;
    match event {
        OfferEvent::Shown => {
            stats.shown = stats.shown.saturating_add(1);
            slot.last_offer_at = stamp;
        }
        OfferEvent::Accepted => {
            stats.accepted = stats.accepted.saturating_add(1);
            slot.last_accept_at = stamp;
        }
        OfferEvent::Declined => {
            stats.declined = stats.declined.saturating_add(1);
            slot.last_decline_at = stamp;
        }
    }
}
