//! CLI-specific functionality for polyrun
//!
//! This module contains all CLI-related code: argument parsing into the
//! core's option set, and runtime configuration discovery.

pub mod args;
pub mod config;

pub use args::Args;
pub use config::{ConfigDiscovery, RuntimeConfig};
