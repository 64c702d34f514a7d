//! RISC-V Base Integer (I) opcodes.
//!
//! Defines the major opcodes (bits 6-0) for the base integer instruction set,
//! plus the fixed `ebreak` encoding.

/// Load instructions (LB, LH, LW, LD, LBU, LHU, LWU).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;

/// 32-bit immediate arithmetic (ADDIW) - RV64 only.
pub const OP_IMM_32: u32 = 0b0011011;

/// Store instructions (SB, SH, SW, SD).
pub const OP_STORE: u32 = 0b0100011;

/// Register-register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;

/// 32-bit register-register arithmetic (ADDW) - RV64 only.
pub const OP_REG_32: u32 = 0b0111011;

/// Conditional branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;

/// System instruction opcode (EBREAK lives here).
pub const OP_SYSTEM: u32 = 0b1110011;

/// Environment Break (EBREAK), full fixed encoding.
///
/// rd = rs1 = funct3 = funct7 = 0, rs2 = 1, opcode = `1110011`. Used by this
/// core as the normal halt sentinel.
pub const EBREAK: u32 = 0x0010_0073;
