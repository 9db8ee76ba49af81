//! Program-counter register.
//!
//! A held 32-bit counter exposing only hold and increment. Loading a branch
//! target from the ALU, or stepping by the instruction width, is an
//! integration-level responsibility of the surrounding fetch logic and is
//! not modeled here.

use tracing::trace;

use crate::config::Config;

/// Program-counter update control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PcMode {
    /// Hold the current value across the tick.
    #[default]
    Nop,
    /// Increase the value by one per tick while enabled.
    Increment,
}

/// The program-counter register.
///
/// Mutated only through [`PcRegister::tick`]; the counter wraps modulo 2^32.
#[derive(Clone, Debug)]
pub struct PcRegister {
    pc: u32,
}

impl PcRegister {
    /// Creates a register holding the configured reset value.
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self {
            pc: config.reset_pc,
        }
    }

    /// Applies one tick of the update control.
    ///
    /// With `enable` deasserted or `mode` at [`PcMode::Nop`] the value is
    /// unchanged; with [`PcMode::Increment`] it advances by one, wrapping at
    /// 2^32.
    pub fn tick(&mut self, enable: bool, mode: PcMode) {
        if enable && mode == PcMode::Increment {
            self.pc = self.pc.wrapping_add(1);
            trace!(pc = self.pc, "pc increment");
        }
    }

    /// The current counter value.
    #[must_use]
    pub const fn pc(&self) -> u32 {
        self.pc
    }
}

impl Default for PcRegister {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
