//! Phase-sequencing control unit.
//!
//! A synchronous finite-state machine that drives the per-instruction cycle:
//! RESET → FETCH → DECODE → EXECUTE → PC_UPDATE → FETCH → … with exactly one
//! phase active per tick. Reset takes priority over normal advancement from
//! any state and discards in-flight phase progress; the tick after reset
//! release is always FETCH.
//!
//! Only the phase ordering and the exactly-one-active guarantee are
//! contractual, so the phase is a plain tagged enum rather than a one-hot
//! bit vector.

use tracing::trace;

/// One step of the per-instruction cycle.
///
/// Exactly one phase is active per tick. Consumers must sample decoder
/// outputs during [`Phase::Decode`] and ALU outputs during
/// [`Phase::Execute`]; sampling outside the designated window is a contract
/// violation, not a runtime fault.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Reset state; no instruction work is performed.
    #[default]
    Reset,
    /// Instruction fetch window.
    Fetch,
    /// Decoder output window.
    Decode,
    /// ALU output window.
    Execute,
    /// Program-counter update window.
    PcUpdate,
}

impl Phase {
    /// The successor phase under normal (non-reset) advancement.
    ///
    /// The cycle has no terminal state: `PcUpdate` wraps back to `Fetch`, so
    /// a full instruction cycle always spans exactly 4 non-reset ticks.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Reset => Self::Fetch,
            Self::Fetch => Self::Decode,
            Self::Decode => Self::Execute,
            Self::Execute => Self::PcUpdate,
            Self::PcUpdate => Self::Fetch,
        }
    }
}

/// The phase sequencer.
///
/// Owns the phase register exclusively; all state changes happen atomically
/// inside [`ControlUnit::tick`].
#[derive(Clone, Debug, Default)]
pub struct ControlUnit {
    phase: Phase,
}

impl ControlUnit {
    /// Creates a sequencer in the initial [`Phase::Reset`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Reset,
        }
    }

    /// Advances exactly one phase, sampling `reset` at the tick.
    ///
    /// An asserted reset forces [`Phase::Reset`] from any current phase,
    /// unconditionally; no phase completes while reset is held. Otherwise
    /// the phase follows the fixed cyclic order.
    pub fn tick(&mut self, reset: bool) {
        self.phase = if reset { Phase::Reset } else { self.phase.next() };
        trace!(phase = ?self.phase, reset, "control unit tick");
    }

    /// The currently active phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }
}
