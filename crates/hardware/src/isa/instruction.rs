//! Instruction field extraction.
//!
//! Provides bit masks, an extraction trait over raw 32-bit encodings, and the
//! `Decoded` structure holding every field the execute stage consumes.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Shift applied to funct7 when packing it above funct3 in the combined
/// function discriminator.
const FUNCT7_PACK_SHIFT: u32 = 3;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every extractor is total: any 32-bit pattern yields a defined value for
/// every field, whether or not the opcode is architecturally meaningful.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6), the primary family selector.
    fn opcode(&self) -> u32;

    /// Extracts the destination register select (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register select (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register select (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14), narrowing the operation
    /// within an opcode family (e.g. ADDI vs SLTI, BEQ vs BNE).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31), distinguishing alternate
    /// encodings that share a funct3 (ADD vs SUB, SRL vs SRA).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Decoded instruction fields.
///
/// Recomputed combinationally by [`crate::isa::decode::decode`]; nothing here
/// persists beyond the decode phase unless the integrating system latches it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register select.
    pub rd: usize,
    /// First source register select.
    pub rs1: usize,
    /// Second source register select.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Immediate, sign- or zero-extended per the instruction format.
    pub imm: i32,
}

impl Decoded {
    /// Combined 10-bit function discriminator: `funct3 | (funct7 << 3)`.
    ///
    /// Packs both selectors the execute stage needs into one value, for
    /// consumers that want a single dispatch key instead of the split fields.
    #[must_use]
    pub const fn funct(&self) -> u32 {
        self.funct3 | (self.funct7 << FUNCT7_PACK_SHIFT)
    }
}
