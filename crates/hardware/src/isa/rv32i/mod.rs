//! RV32I base integer instruction set constants.
//!
//! Major opcodes and the funct3/funct7 secondary selectors used by the
//! decoder and the ALU.

/// funct3 codes per opcode family.
pub mod funct3;

/// funct7 discriminators for alternate encodings.
pub mod funct7;

/// Major opcodes (bits 6-0).
pub mod opcodes;
