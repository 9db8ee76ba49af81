//! Core execution hardware.
//!
//! The units that carry instruction semantics: the ALU, the phase-sequencing
//! control unit, and the program-counter register.

/// Execution units (ALU, control unit, PC register).
pub mod units;
