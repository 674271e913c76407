//! Shared contracts for the hotel management dashboard.
//!
//! Holds the domain record shapes, the filter/stats engine backing every
//! list view, the booking-wizard state machine and the seed fixtures.
//! Everything here is UI-free and runs under native `cargo test`.

pub mod domain;
pub mod filters;
pub mod fixtures;
pub mod stats;
pub mod wizard;
