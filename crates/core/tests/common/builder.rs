//! Instruction encoding helpers.
//!
//! Raw encoders for the six RISC-V instruction formats, plus mnemonic
//! helpers for the instructions the scenario tests assemble by hand.

use rvkernel_core::isa::rv64i::{funct3, funct7, opcodes};
use rvkernel_core::isa::rv64m;

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, f3: u32, rs1: u32, rs2: u32, f7: u32) -> u32 {
    (f7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (f3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, f3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (f3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, f3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (f3 & 0x7) << 12
        | lo << 7
        | (opcode & 0x7F)
}

/// Encode a B-type instruction.
pub fn b_type(opcode: u32, f3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (f3 & 0x7) << 12
        | bits4_1 << 8
        | bit11 << 7
        | (opcode & 0x7F)
}

/// Encode a U-type instruction from the raw 20-bit immediate field.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xFFFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a J-type instruction.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    bit20 << 31
        | bits10_1 << 21
        | bit11 << 20
        | bits19_12 << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

// ──────────────────────────────────────────────────────────
// Mnemonic helpers for hand-assembled programs
// ──────────────────────────────────────────────────────────

/// `addi rd, rs1, imm`
pub fn addi(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::ADD_SUB, rs1, imm)
}

/// `addiw rd, rs1, imm`
pub fn addiw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_IMM_32, rd, funct3::ADD_SUB, rs1, imm)
}

/// `add rd, rs1, rs2`
pub fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::ADD_SUB, rs1, rs2, funct7::DEFAULT)
}

/// `sub rd, rs1, rs2`
pub fn sub(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::ADD_SUB, rs1, rs2, funct7::SUB)
}

/// `addw rd, rs1, rs2`
pub fn addw(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG_32, rd, funct3::ADD_SUB, rs1, rs2, funct7::DEFAULT)
}

/// `sll rd, rs1, rs2`
pub fn sll(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SLL, rs1, rs2, funct7::DEFAULT)
}

/// `srl rd, rs1, rs2`
pub fn srl(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SRL_SRA, rs1, rs2, funct7::DEFAULT)
}

/// `sra rd, rs1, rs2`
pub fn sra(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(opcodes::OP_REG, rd, funct3::SRL_SRA, rs1, rs2, funct7::SRA)
}

/// `slli rd, rs1, shamt`
pub fn slli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::SLL, rs1, (shamt & 0x3F) as i32)
}

/// `srli rd, rs1, shamt`
pub fn srli(rd: u32, rs1: u32, shamt: u32) -> u32 {
    i_type(opcodes::OP_IMM, rd, funct3::SRL_SRA, rs1, (shamt & 0x3F) as i32)
}

/// `srai rd, rs1, shamt`
pub fn srai(rd: u32, rs1: u32, shamt: u32) -> u32 {
    let imm = ((funct7::SHIFT_ARITHMETIC << 6) | (shamt & 0x3F)) as i32;
    i_type(opcodes::OP_IMM, rd, funct3::SRL_SRA, rs1, imm)
}

/// `lui rd, imm20`
pub fn lui(rd: u32, imm20: u32) -> u32 {
    u_type(opcodes::OP_LUI, rd, imm20)
}

/// `auipc rd, imm20`
pub fn auipc(rd: u32, imm20: u32) -> u32 {
    u_type(opcodes::OP_AUIPC, rd, imm20)
}

/// `lw rd, imm(rs1)`
pub fn lw(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LW, rs1, imm)
}

/// `ld rd, imm(rs1)`
pub fn ld(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_LOAD, rd, funct3::LD, rs1, imm)
}

/// `sw rs2, imm(rs1)`
pub fn sw(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(opcodes::OP_STORE, funct3::SW, rs1, rs2, imm)
}

/// `sd rs2, imm(rs1)`
pub fn sd(rs2: u32, rs1: u32, imm: i32) -> u32 {
    s_type(opcodes::OP_STORE, funct3::SD, rs1, rs2, imm)
}

/// `beq rs1, rs2, imm`
pub fn beq(rs1: u32, rs2: u32, imm: i32) -> u32 {
    b_type(opcodes::OP_BRANCH, funct3::BEQ, rs1, rs2, imm)
}

/// `jal rd, imm`
pub fn jal(rd: u32, imm: i32) -> u32 {
    j_type(opcodes::OP_JAL, rd, imm)
}

/// `jalr rd, rs1, imm`
pub fn jalr(rd: u32, rs1: u32, imm: i32) -> u32 {
    i_type(opcodes::OP_JALR, rd, funct3::JALR, rs1, imm)
}

/// `mul rd, rs1, rs2`
pub fn mul(rd: u32, rs1: u32, rs2: u32) -> u32 {
    r_type(
        opcodes::OP_REG,
        rd,
        rv64m::funct3::MUL,
        rs1,
        rs2,
        rv64m::opcodes::M_EXTENSION,
    )
}

/// The fixed `ebreak` encoding.
pub const EBREAK: u32 = opcodes::EBREAK;
