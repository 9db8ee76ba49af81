//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the execute-stage compute unit for every RV32I
//! instruction family: OP-IMM, OP, LUI, AUIPC, JAL, JALR, and BRANCH. It is
//! purely combinational — a total function of the decoded fields, the operand
//! values, and the current program counter — and all results truncate to
//! 32 bits (implicit modulo 2^32).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Slt, Sltu, Xor, Or, And
//! - [`shifts`]:     Sll, Srl, Sra
//! - [`flow`]:       JAL, JALR, and the six conditional branches

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Control-flow resolution (jumps and conditional branches).
pub mod flow;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Execution-stage outputs.
///
/// `branch_target` is meaningful only when `should_branch` is set; for
/// non-control-flow instructions both branch fields stay at their defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// 32-bit computed result (link value for jumps).
    pub result: u32,
    /// Whether control flow transfers to `branch_target`.
    pub should_branch: bool,
    /// Candidate next program-counter value.
    pub branch_target: u32,
}

impl AluOutput {
    /// Wraps a plain value result with no control-flow transfer.
    #[must_use]
    pub const fn value(result: u32) -> Self {
        Self {
            result,
            should_branch: false,
            branch_target: 0,
        }
    }
}

/// Integer ALU operation selector.
///
/// Derived from funct3/funct7 by [`AluOp::from_op`] and
/// [`AluOp::from_op_imm`]; every funct3 value maps to exactly one variant, so
/// classification is total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    #[default]
    Add,
    /// Integer subtraction.
    Sub,
    /// Shift left logical.
    Sll,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
}

impl AluOp {
    /// Selects the register-register (OP) operation.
    ///
    /// funct3 0b000 and 0b101 each name two operations; funct7's alternate
    /// bit picks SUB over ADD and SRA over SRL.
    #[must_use]
    pub const fn from_op(f3: u32, f7: u32) -> Self {
        match f3 & 0b111 {
            funct3::ADD_SUB => {
                if f7 & funct7::ALT_BIT != 0 {
                    Self::Sub
                } else {
                    Self::Add
                }
            }
            funct3::SLL => Self::Sll,
            funct3::SLT => Self::Slt,
            funct3::SLTU => Self::Sltu,
            funct3::XOR => Self::Xor,
            funct3::SRL_SRA => {
                if f7 & funct7::ALT_BIT != 0 {
                    Self::Sra
                } else {
                    Self::Srl
                }
            }
            funct3::OR => Self::Or,
            _ => Self::And,
        }
    }

    /// Selects the immediate (OP-IMM) operation.
    ///
    /// Identical to [`Self::from_op`] except that funct3 0b000 is always
    /// ADDI: there is no SUBI, and funct7 overlaps the immediate bits there.
    /// SRLI/SRAI still consult the alternate bit, which occupies imm[10].
    #[must_use]
    pub const fn from_op_imm(f3: u32, f7: u32) -> Self {
        match f3 & 0b111 {
            funct3::ADD_SUB => Self::Add,
            _ => Self::from_op(f3, f7),
        }
    }
}

/// Arithmetic Logic Unit.
///
/// Stateless and reentrant; every method is a pure function.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Computes the execution-stage outputs for one instruction.
    ///
    /// # Arguments
    ///
    /// * `opcode` - Major opcode (bits 6-0 of the instruction).
    /// * `f3`     - funct3 field.
    /// * `f7`     - funct7 field (consulted only where an alternate encoding
    ///   exists).
    /// * `s1`     - First operand, the raw 32-bit register value.
    /// * `s2`     - Second operand, the raw 32-bit register value.
    /// * `imm`    - Sign-extended immediate from the decoder.
    /// * `pc`     - Current program counter.
    ///
    /// # Returns
    ///
    /// The computed [`AluOutput`]. Unsupported opcode/funct combinations
    /// yield `AluOutput::default()` — deterministic, never a panic.
    #[must_use]
    pub fn execute(opcode: u32, f3: u32, f7: u32, s1: u32, s2: u32, imm: i32, pc: u32) -> AluOutput {
        match opcode {
            opcodes::OP_IMM => {
                AluOutput::value(Self::integer(AluOp::from_op_imm(f3, f7), s1, imm as u32))
            }
            opcodes::OP_REG => AluOutput::value(Self::integer(AluOp::from_op(f3, f7), s1, s2)),
            opcodes::OP_LUI => AluOutput::value(imm as u32),
            opcodes::OP_AUIPC => AluOutput::value((imm as u32).wrapping_add(pc)),
            opcodes::OP_JAL | opcodes::OP_JALR | opcodes::OP_BRANCH => {
                flow::execute(opcode, f3, s1, s2, imm, pc)
            }
            _ => AluOutput::default(),
        }
    }

    /// Executes an integer operation, dispatching by category.
    ///
    /// `b` is the second operand: the register value for OP, the
    /// sign-extended immediate reinterpreted as a 32-bit pattern for OP-IMM.
    #[must_use]
    pub fn integer(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Slt | AluOp::Sltu | AluOp::Xor | AluOp::Or | AluOp::And => {
                logic::execute(op, a, b)
            }
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
