//! E2E test suite entry point.

mod offer_workflow;
