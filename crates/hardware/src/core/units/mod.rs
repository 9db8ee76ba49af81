//! Execution units.
//!
//! The combinational ALU plus the two sequential units of the core: the
//! phase sequencer and the program counter. The decoder, equally
//! combinational, lives with the ISA definitions in [`crate::isa`].

/// Arithmetic Logic Unit for integer, jump, and branch operations.
pub mod alu;

/// Phase-sequencing control unit.
pub mod control;

/// Program-counter register.
pub mod pc;
