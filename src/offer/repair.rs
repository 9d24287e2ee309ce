//! Validation and repair of a parsed state file.
//!
//! Loading never fails: whatever JSON is on disk is walked once and turned
//! into a well-formed [`StateDocument`]. Every rule that had to fire is
//! reported as a [`Repair`] so callers can log it and tests can assert on it.

use std::fmt;

use serde_json::{Map, Value};

use super::state::{FunnelStats, STATE_VERSION, StateDocument, UserSlot};

const TIMESTAMP_FIELDS: [&str; 3] = ["last_offer_at", "last_accept_at", "last_decline_at"];
const COUNTER_FIELDS: [&str; 3] = ["shown", "accepted", "declined"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    /// The root was not a JSON object; everything was discarded.
    RootNotObject,
    VersionDefaulted,
    UsersReset,
    SlotReset { user: String },
    StatsReset { user: String },
    CounterReset { user: String, counter: &'static str },
    TimestampDropped { user: String, field: &'static str },
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootNotObject => write!(f, "state root is not an object"),
            Self::VersionDefaulted => write!(f, "version missing or invalid, set to {STATE_VERSION}"),
            Self::UsersReset => write!(f, "users is not an object, reset"),
            Self::SlotReset { user } => write!(f, "slot for {user} is not an object, reset"),
            Self::StatsReset { user } => write!(f, "stats for {user} is not an object, zeroed"),
            Self::CounterReset { user, counter } => {
                write!(f, "stats.{counter} for {user} is not a counter, zeroed")
            }
            Self::TimestampDropped { user, field } => {
                write!(f, "{field} for {user} is not a string, dropped")
            }
        }
    }
}

/// Outcome of a repair pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Repaired {
    pub document: StateDocument,
    pub repairs: Vec<Repair>,
}

impl Repaired {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.repairs.is_empty()
    }
}

/// Turn any parsed JSON value into a well-formed state document.
#[must_use]
pub fn repair_document(value: Value) -> Repaired {
    let mut repairs = Vec::new();

    let Value::Object(mut root) = value else {
        repairs.push(Repair::RootNotObject);
        return Repaired {
            document: StateDocument::new(),
            repairs,
        };
    };

    let version = match root.remove("version").as_ref().and_then(Value::as_u64) {
        Some(version) => version,
        None => {
            repairs.push(Repair::VersionDefaulted);
            STATE_VERSION
        }
    };

    let mut document = StateDocument {
        version,
        ..StateDocument::default()
    };

    match root.remove("users") {
        Some(Value::Object(users)) => {
            for (user, raw_slot) in users {
                let slot = repair_slot(&user, raw_slot, &mut repairs);
                document.users.insert(user, slot);
            }
        }
        _ => repairs.push(Repair::UsersReset),
    }

    document.extra = root;
    Repaired { document, repairs }
}

fn repair_slot(user: &str, value: Value, repairs: &mut Vec<Repair>) -> UserSlot {
    let Value::Object(mut raw) = value else {
        repairs.push(Repair::SlotReset {
            user: user.to_string(),
        });
        return UserSlot::default();
    };

    let stats = match raw.remove("stats") {
        Some(Value::Object(stats)) => repair_stats(user, &stats, repairs),
        _ => {
            repairs.push(Repair::StatsReset {
                user: user.to_string(),
            });
            FunnelStats::default()
        }
    };

    let [last_offer_at, last_accept_at, last_decline_at] =
        TIMESTAMP_FIELDS.map(|field| match raw.remove(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                repairs.push(Repair::TimestampDropped {
                    user: user.to_string(),
                    field,
                });
                None
            }
        });

    UserSlot {
        stats,
        last_offer_at,
        last_accept_at,
        last_decline_at,
        extra: raw,
    }
}

fn repair_stats(user: &str, raw: &Map<String, Value>, repairs: &mut Vec<Repair>) -> FunnelStats {
    let [shown, accepted, declined] = COUNTER_FIELDS.map(|counter| {
        match raw.get(counter).and_then(Value::as_u64) {
            Some(n) => n,
            None => {
                repairs.push(Repair::CounterReset {
                    user: user.to_string(),
                    counter,
                });
                0
            }
        }
    });
    FunnelStats {
        shown,
        accepted,
        declined,
    }
}
