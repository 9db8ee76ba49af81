//! ALU shift operations.
//!
//! Shift-left logical (SLL), shift-right logical (SRL), and shift-right
//! arithmetic (SRA). The shift amount is masked to 5 bits (0-31), per
//! RISC-V spec §2.4, so an out-of-range amount is impossible by
//! construction. SRL zero-fills from the left; SRA replicates the sign bit.

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1F;

/// Executes a shift operation.
///
/// `b` carries the shift amount in its low 5 bits; upper bits are ignored.
/// Returns `0` for non-shift selectors.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    let shamt = b & SHAMT_MASK;
    match op {
        AluOp::Sll => a << shamt,
        AluOp::Srl => a >> shamt,
        AluOp::Sra => ((a as i32) >> shamt) as u32,
        _ => 0,
    }
}
