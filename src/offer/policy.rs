//! Cooldown policy for share offers.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::state::UserSlot;
use super::timestamp::parse_timestamp;

pub const DEFAULT_COOLDOWN_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferReason {
    /// No usable `last_offer_at` on record.
    NoHistory,
    Cooldown,
    CooldownExpired,
}

impl OfferReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoHistory => "no_history",
            Self::Cooldown => "cooldown",
            Self::CooldownExpired => "cooldown_expired",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferDecision {
    pub should_offer: bool,
    pub reason: OfferReason,
}

impl OfferDecision {
    const fn offer(reason: OfferReason) -> Self {
        Self {
            should_offer: true,
            reason,
        }
    }

    const fn hold(reason: OfferReason) -> Self {
        Self {
            should_offer: false,
            reason,
        }
    }
}

/// Decide whether an offer may be shown to the owner of `slot` at `now`.
///
/// Negative cooldowns are treated as zero. Never touches storage.
#[must_use]
pub fn decide(slot: &UserSlot, cooldown_hours: i64, now: DateTime<Utc>) -> OfferDecision {
    let Some(last_offer) = slot.last_offer_at.as_deref().and_then(parse_timestamp) else {
        return OfferDecision::offer(OfferReason::NoHistory);
    };

    if now.signed_duration_since(last_offer) < cooldown_window(cooldown_hours) {
        OfferDecision::hold(OfferReason::Cooldown)
    } else {
        OfferDecision::offer(OfferReason::CooldownExpired)
    }
}

fn cooldown_window(cooldown_hours: i64) -> TimeDelta {
    TimeDelta::try_hours(cooldown_hours.max(0)).unwrap_or(TimeDelta::MAX)
}
