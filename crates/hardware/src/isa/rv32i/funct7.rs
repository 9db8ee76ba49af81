//! RV32I function codes (funct7).
//!
//! The `funct7` field (bits 31-25) distinguishes between operations that
//! share the same `funct3`. Only bit 5 carries information in RV32I: set for
//! SUB and SRA, clear for ADD and SRL.

/// Default operation (ADD, SRL, and every single-encoding funct3).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB when funct3 is ADD_SUB).
pub const SUB: u32 = 0b0100000;
/// Alternate operation (SRA when funct3 is SRL_SRA).
pub const SRA: u32 = 0b0100000;

/// Bit within funct7 selecting the alternate operation.
pub const ALT_BIT: u32 = 0b0100000;
