//! ALU logical and comparison operations.
//!
//! Bitwise OR, AND, XOR, and set-less-than. Comparisons dispatch to signed
//! or unsigned semantics strictly by selector: `Slt` reinterprets both
//! operands as `i32`, `Sltu` compares the raw 32-bit patterns as values in
//! `[0, 2^32)` — so a sign-extended negative immediate becomes a large
//! unsigned operand. The comparison result is always 0 or 1.

use super::AluOp;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic selectors.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        AluOp::Sltu => (a < b) as u32,
        _ => 0,
    }
}
