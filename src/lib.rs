//! share-offer
//!
//! Decides whether a proactive "share this assistant" offer should be shown
//! to a chat user and keeps a small local funnel of shown/accepted/declined
//! events in a JSON state file.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod offer;
pub mod test_utils;
pub mod utils;

pub use error::{Result, ShareOfferError};
