//! RV32I instruction-execution core.
//!
//! This crate implements the semantic heart of a single-issue RV32I CPU:
//! 1. **Decoder:** Combinational extraction of opcode, register selects, and
//!    format-dependent immediates from raw 32-bit instruction words.
//! 2. **ALU:** Combinational computation of results, branch decisions, and
//!    branch targets for every RV32I opcode/funct combination.
//! 3. **Control Unit:** Synchronous phase sequencer driving the per-instruction
//!    cycle of fetch, decode, execute, and pc-update.
//! 4. **PC Register:** A held 32-bit counter with hold/increment control.
//!
//! Register-file storage, instruction/data memory, and top-level fetch wiring
//! are external collaborators; this crate executes one instruction per
//! four-phase cycle and is not pipelined.

/// Core configuration (reset defaults).
pub mod config;
/// Execution units (ALU, control unit, PC register).
pub mod core;
/// Instruction set (decoding, field extraction, RV32I constants).
pub mod isa;

/// Core configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Arithmetic/logic/branch unit; call [`Alu::execute`] with decoded fields.
pub use crate::core::units::alu::{Alu, AluOutput};
/// Phase sequencer; advances one phase per [`ControlUnit::tick`].
pub use crate::core::units::control::{ControlUnit, Phase};
/// Program-counter register with hold/increment control.
pub use crate::core::units::pc::{PcMode, PcRegister};
/// Instruction decoder; a total function of the instruction word.
pub use crate::isa::decode::decode;
