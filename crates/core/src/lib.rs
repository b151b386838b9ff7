//! slotsync_core - selection and aggregation engine for group availability polls.
//!
//! Functional core: every function here is pure and performs no I/O.

pub mod availability;
pub mod serde;
