//! slotsync_client - command-line front end for the slotsync engine.
//!
//! Reads events, selections and results from JSON files, runs them through
//! `slotsync_core` and prints the outcome.

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod output;

pub use config::Config;
pub use error::{ClientError, Result};
