//! Property tests for the offer policy, recorder and store.

mod offer_properties;
