//! Configuration for the execution core.
//!
//! This module defines the configuration structure used to parameterize the
//! core. Configuration is supplied via JSON from an embedding harness, or use
//! `Config::default()` for the architectural baseline.

use serde::Deserialize;

/// Default configuration constants for the execution core.
mod defaults {
    /// Program-counter value established by reset.
    ///
    /// The PC register presents this value until the first INCREMENT tick
    /// after reset release.
    pub const RESET_PC: u32 = 0;
}

/// Execution-core configuration.
///
/// Missing fields deserialize to their architectural defaults, so an empty
/// JSON object (`{}`) is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program-counter value after reset.
    pub reset_pc: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_pc: defaults::RESET_PC,
        }
    }
}
