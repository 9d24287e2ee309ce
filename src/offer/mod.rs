//! Share-offer state, cooldown policy and funnel recording.

pub mod policy;
pub mod recorder;
pub mod repair;
pub mod state;
pub mod storage;
pub mod timestamp;

pub use policy::{DEFAULT_COOLDOWN_HOURS, OfferDecision, OfferReason, decide};
pub use recorder::{OfferEvent, record};
pub use repair::{Repair, Repaired, repair_document};
pub use state::{FunnelStats, StateDocument, UserSlot, get_or_create_slot};
pub use storage::{load_state, render_state, save_state};
