//! RV32I instruction decoder.
//!
//! Translates a raw 32-bit instruction word into a structured [`Decoded`]
//! value: opcode, register selects, function codes, and the sign-extended
//! immediate for the instruction's format (I, S, B, U, or J).
//!
//! The decoder performs no legality checking: any 32-bit pattern decodes
//! deterministically, and unrecognized opcodes simply carry a zero immediate.

use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Width of an instruction word in bits.
const WORD_BITS: u32 = 32;

// I-type: `imm[11:0] | rs1 | funct3 | rd | opcode`. The immediate occupies
// the upper 12 bits and is sign-extended. Shift-immediates (SLLI/SRLI/SRAI)
// share this decode; the ALU consumes only imm[4:0] as the shift amount.

/// Bit position of the I-type immediate (bits 20-31).
const I_IMM_SHIFT: u32 = 20;

// S-type: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`. The
// immediate is split across two non-contiguous fields.

/// Bit position of the S-type low immediate field imm[4:0].
const S_IMM_LO_SHIFT: u32 = 7;
/// Bit mask of the S-type low immediate field (5 bits).
const S_IMM_LO_MASK: u32 = 0x1F;
/// Bit position of the S-type high immediate field imm[11:5].
const S_IMM_HI_SHIFT: u32 = 25;
/// Bit mask of the S-type high immediate field (7 bits).
const S_IMM_HI_MASK: u32 = 0x7F;
/// Position of imm[11:5] in the reassembled S-type immediate.
const S_IMM_HI_POS: u32 = 5;
/// Width of the S-type immediate before sign extension.
const S_IMM_BITS: u32 = 12;

// B-type: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] |
// opcode`. The immediate is an even branch offset; bit 0 is never encoded
// and is reinserted as zero during reassembly.

/// Bit position of imm[11] in the instruction word.
const B_IMM_11_SHIFT: u32 = 7;
/// Bit position of imm[4:1] in the instruction word.
const B_IMM_4_1_SHIFT: u32 = 8;
/// Bit mask of imm[4:1] (4 bits).
const B_IMM_4_1_MASK: u32 = 0xF;
/// Bit position of imm[10:5] in the instruction word.
const B_IMM_10_5_SHIFT: u32 = 25;
/// Bit mask of imm[10:5] (6 bits).
const B_IMM_10_5_MASK: u32 = 0x3F;
/// Bit position of imm[12], the sign bit, in the instruction word.
const B_IMM_12_SHIFT: u32 = 31;
/// Width of the B-type immediate before sign extension.
const B_IMM_BITS: u32 = 13;

// U-type: `imm[31:12] | rd | opcode`. The immediate is the upper 20 bits of
// the result; no further extension is required.

/// Bit mask of the U-type immediate field (already in final position).
const U_IMM_MASK: u32 = 0xFFFF_F000;

// J-type: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`. Like
// B-type, the offset is even and bit 0 is reinserted as zero.

/// Bit position of imm[19:12] in the instruction word.
const J_IMM_19_12_SHIFT: u32 = 12;
/// Bit mask of imm[19:12] (8 bits).
const J_IMM_19_12_MASK: u32 = 0xFF;
/// Bit position of imm[11] in the instruction word.
const J_IMM_11_SHIFT: u32 = 20;
/// Bit position of imm[10:1] in the instruction word.
const J_IMM_10_1_SHIFT: u32 = 21;
/// Bit mask of imm[10:1] (10 bits).
const J_IMM_10_1_MASK: u32 = 0x3FF;
/// Bit position of imm[20], the sign bit, in the instruction word.
const J_IMM_20_SHIFT: u32 = 31;
/// Width of the J-type immediate before sign extension.
const J_IMM_BITS: u32 = 21;

/// Single-bit mask used when picking individual immediate bits.
const BIT: u32 = 1;

/// Decodes a 32-bit RV32I instruction into its component fields.
///
/// A total function of the input word: field extraction is identical for
/// every opcode, and the immediate is selected by the opcode's format.
#[must_use]
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => i_type_imm(inst),
        opcodes::OP_STORE => s_type_imm(inst),
        opcodes::OP_BRANCH => b_type_imm(inst),
        opcodes::OP_LUI | opcodes::OP_AUIPC => u_type_imm(inst),
        opcodes::OP_JAL => j_type_imm(inst),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm,
    }
}

/// I-type immediate: bits 31:20, sign-extended from 12 bits.
fn i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// S-type immediate: bits 31:25 and 11:7 reassembled, sign-extended.
fn s_type_imm(inst: u32) -> i32 {
    let lo = (inst >> S_IMM_LO_SHIFT) & S_IMM_LO_MASK;
    let hi = (inst >> S_IMM_HI_SHIFT) & S_IMM_HI_MASK;
    sign_extend((hi << S_IMM_HI_POS) | lo, S_IMM_BITS)
}

/// B-type immediate: imm[12|11|10:5|4:1] reassembled with a zero LSB,
/// sign-extended from 13 bits.
fn b_type_imm(inst: u32) -> i32 {
    let bit_12 = (inst >> B_IMM_12_SHIFT) & BIT;
    let bit_11 = (inst >> B_IMM_11_SHIFT) & BIT;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;

    let assembled = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(assembled, B_IMM_BITS)
}

/// U-type immediate: bits 31:12 kept in place, low 12 bits zero.
fn u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// J-type immediate: imm[20|19:12|11|10:1] reassembled with a zero LSB,
/// sign-extended from 21 bits.
fn j_type_imm(inst: u32) -> i32 {
    let bit_20 = (inst >> J_IMM_20_SHIFT) & BIT;
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & BIT;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;

    let assembled = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(assembled, J_IMM_BITS)
}

/// Sign-extends the low `bits` of `val` to a 32-bit signed value.
///
/// Shared by every format whose immediate is narrower than the word: the
/// value is shifted so its sign bit lands in bit 31, then arithmetically
/// shifted back down.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = WORD_BITS - bits;
    ((val as i32) << shift) >> shift
}
