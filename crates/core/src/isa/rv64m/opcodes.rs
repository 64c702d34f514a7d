//! RISC-V Multiply Extension (M) opcodes.
//!
//! M-extension instructions live under the base `OP_REG` opcode; this funct7
//! value is what selects them.

/// The funct7 value marking an M-extension instruction.
pub const M_EXTENSION: u32 = 0b0000001;
