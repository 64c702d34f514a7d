//! RISC-V Multiply Extension (M).
//!
//! The 'M' extension adds integer multiplication and division. These
//! instructions share the `OP_REG` opcode with base integer arithmetic but are
//! distinguished by the `funct7` field being 1 (`M_EXTENSION`). This core
//! implements `mul` only.
//!
//! # Structure
//!
//! - `opcodes`: M-extension specific constants.
//! - `funct3`: Function codes identifying specific M-ops.
//! - [`DESCRIPTORS`]: The registry entries appended after RV64I.

/// Function code 3 definitions for multiply operations.
pub mod funct3;

/// Multiply extension opcodes.
pub mod opcodes;

use crate::isa::registry::{Descriptor, MASK_OPCODE_FUNCT3_FUNCT7, Op, pattern_r};
use crate::isa::rv64i::opcodes::OP_REG;

/// Registry entries for the implemented RV64M subset.
pub const DESCRIPTORS: &[Descriptor] = &[Descriptor {
    name: "mul",
    mask: MASK_OPCODE_FUNCT3_FUNCT7,
    required: pattern_r(OP_REG, funct3::MUL, opcodes::M_EXTENSION),
    op: Op::Mul,
}];
