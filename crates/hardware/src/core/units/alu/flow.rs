//! Control-flow resolution.
//!
//! Computes link values, branch decisions, and branch targets for JAL, JALR,
//! and the six conditional branches. Targets are PC-relative except for
//! JALR, whose target is register-relative with bit 0 forced to zero
//! regardless of the parity of `s1 + imm` (RISC-V spec §2.5).

use super::AluOutput;
use crate::isa::rv32i::{funct3, opcodes};

/// Instruction width in bytes; the link value is the sequential PC.
const LINK_OFFSET: u32 = 4;

/// Bit mask clearing bit 0 of a JALR target.
const JALR_ALIGN_MASK: u32 = !1;

/// Resolves a control-flow instruction.
///
/// JAL and JALR always transfer; branches transfer when the funct3-selected
/// relational predicate holds. An undefined branch funct3 never transfers.
/// Returns `AluOutput::default()` for non-control-flow opcodes.
pub fn execute(opcode: u32, f3: u32, s1: u32, s2: u32, imm: i32, pc: u32) -> AluOutput {
    match opcode {
        opcodes::OP_JAL => AluOutput {
            result: pc.wrapping_add(LINK_OFFSET),
            should_branch: true,
            branch_target: pc.wrapping_add(imm as u32),
        },
        opcodes::OP_JALR => AluOutput {
            result: pc.wrapping_add(LINK_OFFSET),
            should_branch: true,
            branch_target: s1.wrapping_add(imm as u32) & JALR_ALIGN_MASK,
        },
        opcodes::OP_BRANCH => {
            let taken = match f3 {
                funct3::BEQ => s1 == s2,
                funct3::BNE => s1 != s2,
                funct3::BLT => (s1 as i32) < (s2 as i32),
                funct3::BGE => (s1 as i32) >= (s2 as i32),
                funct3::BLTU => s1 < s2,
                funct3::BGEU => s1 >= s2,
                _ => false,
            };
            AluOutput {
                result: 0,
                should_branch: taken,
                branch_target: pc.wrapping_add(imm as u32),
            }
        }
        _ => AluOutput::default(),
    }
}
