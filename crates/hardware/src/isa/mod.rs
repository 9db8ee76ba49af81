//! Instruction set definitions.
//!
//! Decoding, instruction field extraction, and the RV32I opcode/funct
//! constant tables shared by the decoder and the ALU.

/// Instruction decoding (field extraction and per-format immediates).
pub mod decode;

/// Instruction field masks, the `InstructionBits` trait, and `Decoded`.
pub mod instruction;

/// RV32I opcode and function-code constants.
pub mod rv32i;
