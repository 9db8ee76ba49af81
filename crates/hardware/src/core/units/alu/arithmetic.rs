//! ALU arithmetic operations.
//!
//! Integer addition and subtraction. Results wrap modulo 2^32: signed
//! overflow is not a trap condition in RV32I (RISC-V spec §2.4).

use super::AluOp;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic selectors.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
