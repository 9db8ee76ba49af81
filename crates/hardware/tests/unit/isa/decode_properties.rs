//! Decoder properties.
//!
//! Verifies that `decode()` extracts opcode, register selects, function
//! codes, and sign-extended immediates for every RV32I instruction format,
//! and that encoding any field tuple per its format and decoding it recovers
//! exactly that tuple (including trailing-zero insertion for B/J offsets).

use proptest::prelude::*;
use rv32_core::decode;
use rv32_core::isa::instruction::InstructionBits;
use rv32_core::isa::rv32i::{funct3, funct7, opcodes};

use crate::common::encoding::{b_type, i_type, j_type, r_type, s_type, u_type};

// ──────────────────────────────────────────────────────────
// Field extraction
// ──────────────────────────────────────────────────────────

#[test]
fn field_extraction_opcode() {
    let inst: u32 = 0b1010101_00000_00000_000_00000_0110011;
    assert_eq!(inst.opcode(), opcodes::OP_REG);
}

#[test]
fn field_extraction_rd() {
    let inst = r_type(opcodes::OP_REG, 15, 0, 0, 0, 0);
    assert_eq!(inst.rd(), 15);
}

#[test]
fn field_extraction_rs1() {
    let inst = r_type(opcodes::OP_REG, 0, 0, 23, 0, 0);
    assert_eq!(inst.rs1(), 23);
}

#[test]
fn field_extraction_rs2() {
    let inst = r_type(opcodes::OP_REG, 0, 0, 0, 31, 0);
    assert_eq!(inst.rs2(), 31);
}

#[test]
fn field_extraction_funct3() {
    let inst = r_type(opcodes::OP_REG, 0, 5, 0, 0, 0);
    assert_eq!(inst.funct3(), 5);
}

#[test]
fn field_extraction_funct7() {
    let inst = r_type(opcodes::OP_REG, 0, 0, 0, 0, 0b0100000);
    assert_eq!(inst.funct7(), 0b0100000);
}

#[test]
fn field_extraction_all_ones() {
    let inst: u32 = 0xFFFF_FFFF;
    assert_eq!(inst.opcode(), 0x7F);
    assert_eq!(inst.rd(), 31);
    assert_eq!(inst.funct3(), 7);
    assert_eq!(inst.rs1(), 31);
    assert_eq!(inst.rs2(), 31);
    assert_eq!(inst.funct7(), 0x7F);
}

#[test]
fn field_extraction_all_zeros() {
    let inst: u32 = 0x0000_0000;
    assert_eq!(inst.opcode(), 0);
    assert_eq!(inst.rd(), 0);
    assert_eq!(inst.funct3(), 0);
    assert_eq!(inst.rs1(), 0);
    assert_eq!(inst.rs2(), 0);
    assert_eq!(inst.funct7(), 0);
}

#[test]
fn packed_funct_combines_funct3_and_funct7() {
    // function = funct3 | (funct7 << 3): both discriminators in 10 bits.
    let inst = r_type(opcodes::OP_REG, 1, funct3::SRL_SRA, 2, 3, funct7::SRA);
    let d = decode(inst);
    assert_eq!(d.funct(), funct3::SRL_SRA | (funct7::SRA << 3));
}

#[test]
fn packed_funct_max_is_10_bits() {
    let d = decode(0xFFFF_FFFF);
    assert_eq!(d.funct(), 0x3FF);
}

// ──────────────────────────────────────────────────────────
// R-type
// ──────────────────────────────────────────────────────────

#[test]
fn decode_r_type_add() {
    let inst = r_type(opcodes::OP_REG, 5, funct3::ADD_SUB, 10, 15, funct7::DEFAULT);
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_REG);
    assert_eq!(d.rd, 5);
    assert_eq!(d.rs1, 10);
    assert_eq!(d.rs2, 15);
    assert_eq!(d.funct3, funct3::ADD_SUB);
    assert_eq!(d.funct7, funct7::DEFAULT);
    assert_eq!(d.imm, 0, "R-type has no immediate");
}

#[test]
fn decode_r_type_sub() {
    let inst = r_type(opcodes::OP_REG, 1, funct3::ADD_SUB, 2, 3, funct7::SUB);
    let d = decode(inst);
    assert_eq!(d.funct3, funct3::ADD_SUB);
    assert_eq!(d.funct7, funct7::SUB);
}

#[test]
fn decode_r_type_sra() {
    let inst = r_type(opcodes::OP_REG, 1, funct3::SRL_SRA, 2, 3, funct7::SRA);
    let d = decode(inst);
    assert_eq!(d.funct3, funct3::SRL_SRA);
    assert_eq!(d.funct7, funct7::SRA);
}

// ──────────────────────────────────────────────────────────
// I-type
// ──────────────────────────────────────────────────────────

#[test]
fn decode_i_type_addi_negative() {
    let inst = i_type(opcodes::OP_IMM, 1, funct3::ADD_SUB, 2, -1);
    let d = decode(inst);
    assert_eq!(d.imm, -1, "I-type immediate must sign-extend -1");
}

#[test]
fn decode_i_type_boundaries() {
    for imm in [-2048, -1, 0, 1, 2047] {
        let inst = i_type(opcodes::OP_IMM, 1, funct3::ADD_SUB, 2, imm);
        assert_eq!(decode(inst).imm, imm);
    }
}

#[test]
fn decode_i_type_srai_carries_alt_bit_in_funct7() {
    // SRAI encodes funct7 inside imm[11:5]; the decoder still exposes it.
    let imm = (0b0100000 << 5) | 3; // shamt = 3
    let inst = i_type(opcodes::OP_IMM, 1, funct3::SRL_SRA, 2, imm);
    let d = decode(inst);
    assert_eq!(d.funct7, funct7::SRA);
    assert_eq!(d.imm & 0x1F, 3);
}

#[test]
fn decode_load_and_jalr_use_i_type() {
    assert_eq!(decode(i_type(opcodes::OP_LOAD, 1, 0b010, 2, -8)).imm, -8);
    assert_eq!(decode(i_type(opcodes::OP_JALR, 1, 0, 5, 12)).imm, 12);
}

#[test]
fn i_type_imm_round_trip_all_values() {
    // Exhaustive over the whole 12-bit signed range.
    for imm in -2048i32..=2047 {
        let inst = i_type(opcodes::OP_IMM, 0, 0, 0, imm);
        assert_eq!(decode(inst).imm, imm, "I-type round-trip failed for {imm}");
    }
}

// ──────────────────────────────────────────────────────────
// S-type
// ──────────────────────────────────────────────────────────

#[test]
fn decode_s_type_reassembles_split_immediate() {
    let inst = s_type(opcodes::OP_STORE, 0b010, 2, 3, 100);
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_STORE);
    assert_eq!(d.rs1, 2);
    assert_eq!(d.rs2, 3);
    assert_eq!(d.imm, 100);
}

#[test]
fn s_type_imm_round_trip_boundaries() {
    for imm in [-2048, -1, 0, 1, 7, 2047] {
        let inst = s_type(opcodes::OP_STORE, 0, 0, 0, imm);
        assert_eq!(decode(inst).imm, imm, "S-type round-trip failed for {imm}");
    }
}

// ──────────────────────────────────────────────────────────
// B-type
// ──────────────────────────────────────────────────────────

#[test]
fn decode_b_type_negative_offset() {
    let inst = b_type(opcodes::OP_BRANCH, funct3::BNE, 1, 2, -8);
    let d = decode(inst);
    assert_eq!(d.funct3, funct3::BNE);
    assert_eq!(d.imm, -8);
}

#[test]
fn b_type_imm_round_trip_extremes() {
    for imm in [-4096, -256, -2, 0, 2, 128, 4094] {
        let inst = b_type(opcodes::OP_BRANCH, 0, 0, 0, imm);
        assert_eq!(decode(inst).imm, imm, "B-type round-trip failed for {imm}");
    }
}

// ──────────────────────────────────────────────────────────
// U-type
// ──────────────────────────────────────────────────────────

#[test]
fn decode_lui_shifts_into_upper_bits() {
    let inst = u_type(opcodes::OP_LUI, 5, 0xDEADB);
    let d = decode(inst);
    assert_eq!(d.opcode, opcodes::OP_LUI);
    assert_eq!(d.rd, 5);
    assert_eq!(d.imm, 0xDEADB000_u32 as i32);
}

#[test]
fn decode_auipc_uses_u_type() {
    let d = decode(u_type(opcodes::OP_AUIPC, 10, 0x00001));
    assert_eq!(d.opcode, opcodes::OP_AUIPC);
    assert_eq!(d.imm, 0x1000);
}

#[test]
fn decode_u_type_low_12_bits_are_zero() {
    for imm20 in [0u32, 1, 0x7FFFF, 0x80000, 0xFFFFF] {
        let d = decode(u_type(opcodes::OP_LUI, 0, imm20));
        assert_eq!(d.imm, (imm20 << 12) as i32);
        assert_eq!(d.imm & 0xFFF, 0);
    }
}

// ──────────────────────────────────────────────────────────
// J-type
// ──────────────────────────────────────────────────────────

#[test]
fn decode_jal_negative_offset() {
    let d = decode(j_type(opcodes::OP_JAL, 1, -20));
    assert_eq!(d.opcode, opcodes::OP_JAL);
    assert_eq!(d.imm, -20);
}

#[test]
fn j_type_imm_round_trip_extremes() {
    for imm in [-1048576, -20, 0, 100, 1048574] {
        let inst = j_type(opcodes::OP_JAL, 0, imm);
        assert_eq!(decode(inst).imm, imm, "J-type round-trip failed for {imm}");
    }
}

// ──────────────────────────────────────────────────────────
// Unrecognized opcodes and NOP
// ──────────────────────────────────────────────────────────

#[test]
fn unrecognized_opcode_still_extracts_fields() {
    // Opcode 0b1111111 names no RV32I family; extraction must not care.
    let inst = r_type(0b1111111, 7, 3, 11, 13, 0x55);
    let d = decode(inst);
    assert_eq!(d.opcode, 0b1111111);
    assert_eq!(d.rd, 7);
    assert_eq!(d.rs1, 11);
    assert_eq!(d.rs2, 13);
    assert_eq!(d.imm, 0, "unknown formats carry a zero immediate");
}

#[test]
fn decode_is_deterministic() {
    let inst = 0xDEAD_BEEF;
    assert_eq!(decode(inst), decode(inst));
}

#[test]
fn decode_nop() {
    // NOP = ADDI x0, x0, 0.
    let d = decode(i_type(opcodes::OP_IMM, 0, funct3::ADD_SUB, 0, 0));
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.rd, 0);
    assert_eq!(d.rs1, 0);
    assert_eq!(d.imm, 0);
}

// ──────────────────────────────────────────────────────────
// Randomized round-trip properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_r_type_round_trip(
        rd in 0u32..32,
        f3 in 0u32..8,
        rs1 in 0u32..32,
        rs2 in 0u32..32,
        f7 in 0u32..128,
    ) {
        let d = decode(r_type(opcodes::OP_REG, rd, f3, rs1, rs2, f7));
        prop_assert_eq!(d.rd, rd as usize);
        prop_assert_eq!(d.funct3, f3);
        prop_assert_eq!(d.rs1, rs1 as usize);
        prop_assert_eq!(d.rs2, rs2 as usize);
        prop_assert_eq!(d.funct7, f7);
    }

    #[test]
    fn prop_s_type_round_trip(imm in -2048i32..=2047) {
        prop_assert_eq!(decode(s_type(opcodes::OP_STORE, 0, 0, 0, imm)).imm, imm);
    }

    #[test]
    fn prop_b_type_round_trip(raw in -2048i32..=2047) {
        // B-type offsets are even 13-bit values.
        let imm = raw * 2;
        prop_assert_eq!(decode(b_type(opcodes::OP_BRANCH, 0, 0, 0, imm)).imm, imm);
    }

    #[test]
    fn prop_j_type_round_trip(raw in -524288i32..=524287) {
        // J-type offsets are even 21-bit values.
        let imm = raw * 2;
        prop_assert_eq!(decode(j_type(opcodes::OP_JAL, 0, imm)).imm, imm);
    }

    #[test]
    fn prop_u_type_round_trip(imm20 in 0u32..0x10_0000) {
        prop_assert_eq!(decode(u_type(opcodes::OP_LUI, 0, imm20)).imm, (imm20 << 12) as i32);
    }

    #[test]
    fn prop_raw_field_is_identity(inst in any::<u32>()) {
        prop_assert_eq!(decode(inst).raw, inst);
    }
}
