//! RISC-V Base Integer Instruction Set (I).
//!
//! Defines the encoding constants and the descriptor table for the implemented
//! RV64I subset.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.)
//!   and the fixed `ebreak` encoding.
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type and shift-immediate encodings.
//! - [`DESCRIPTORS`]: The registry entries, ordered narrow-mask-first.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Base integer instruction set opcodes.
pub mod opcodes;

use crate::isa::registry::{
    Descriptor, MASK_EXACT, MASK_OPCODE, MASK_OPCODE_FUNCT3, MASK_OPCODE_FUNCT3_FUNCT7,
    MASK_SHIFT_IMM, Op, pattern_i, pattern_r, pattern_shift,
};

/// Registry entries for the implemented RV64I subset.
///
/// Match order is significant: `ebreak` pins the whole word and goes first,
/// shift immediates (which must ignore funct7 bit 25) precede nothing they
/// conflict with but are kept with the other narrow masks, and opcode-only
/// entries (LUI, AUIPC, JAL) come last.
pub const DESCRIPTORS: &[Descriptor] = &[
    Descriptor {
        name: "ebreak",
        mask: MASK_EXACT,
        required: opcodes::EBREAK,
        op: Op::Ebreak,
    },
    Descriptor {
        name: "slli",
        mask: MASK_SHIFT_IMM,
        required: pattern_shift(opcodes::OP_IMM, funct3::SLL, funct7::SHIFT_LOGICAL),
        op: Op::Slli,
    },
    Descriptor {
        name: "srli",
        mask: MASK_SHIFT_IMM,
        required: pattern_shift(opcodes::OP_IMM, funct3::SRL_SRA, funct7::SHIFT_LOGICAL),
        op: Op::Srli,
    },
    Descriptor {
        name: "srai",
        mask: MASK_SHIFT_IMM,
        required: pattern_shift(opcodes::OP_IMM, funct3::SRL_SRA, funct7::SHIFT_ARITHMETIC),
        op: Op::Srai,
    },
    Descriptor {
        name: "add",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::ADD_SUB, funct7::DEFAULT),
        op: Op::Add,
    },
    Descriptor {
        name: "sub",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::ADD_SUB, funct7::SUB),
        op: Op::Sub,
    },
    Descriptor {
        name: "sll",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::SLL, funct7::DEFAULT),
        op: Op::Sll,
    },
    Descriptor {
        name: "slt",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::SLT, funct7::DEFAULT),
        op: Op::Slt,
    },
    Descriptor {
        name: "sltu",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::SLTU, funct7::DEFAULT),
        op: Op::Sltu,
    },
    Descriptor {
        name: "xor",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::XOR, funct7::DEFAULT),
        op: Op::Xor,
    },
    Descriptor {
        name: "srl",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::SRL_SRA, funct7::DEFAULT),
        op: Op::Srl,
    },
    Descriptor {
        name: "sra",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::SRL_SRA, funct7::SRA),
        op: Op::Sra,
    },
    Descriptor {
        name: "or",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::OR, funct7::DEFAULT),
        op: Op::Or,
    },
    Descriptor {
        name: "and",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG, funct3::AND, funct7::DEFAULT),
        op: Op::And,
    },
    Descriptor {
        name: "addw",
        mask: MASK_OPCODE_FUNCT3_FUNCT7,
        required: pattern_r(opcodes::OP_REG_32, funct3::ADD_SUB, funct7::DEFAULT),
        op: Op::Addw,
    },
    Descriptor {
        name: "addi",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_IMM, funct3::ADD_SUB),
        op: Op::Addi,
    },
    Descriptor {
        name: "slti",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_IMM, funct3::SLT),
        op: Op::Slti,
    },
    Descriptor {
        name: "sltiu",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_IMM, funct3::SLTU),
        op: Op::Sltiu,
    },
    Descriptor {
        name: "xori",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_IMM, funct3::XOR),
        op: Op::Xori,
    },
    Descriptor {
        name: "ori",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_IMM, funct3::OR),
        op: Op::Ori,
    },
    Descriptor {
        name: "andi",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_IMM, funct3::AND),
        op: Op::Andi,
    },
    Descriptor {
        name: "addiw",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_IMM_32, funct3::ADD_SUB),
        op: Op::Addiw,
    },
    Descriptor {
        name: "lb",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_LOAD, funct3::LB),
        op: Op::Lb,
    },
    Descriptor {
        name: "lh",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_LOAD, funct3::LH),
        op: Op::Lh,
    },
    Descriptor {
        name: "lw",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_LOAD, funct3::LW),
        op: Op::Lw,
    },
    Descriptor {
        name: "ld",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_LOAD, funct3::LD),
        op: Op::Ld,
    },
    Descriptor {
        name: "lbu",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_LOAD, funct3::LBU),
        op: Op::Lbu,
    },
    Descriptor {
        name: "lhu",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_LOAD, funct3::LHU),
        op: Op::Lhu,
    },
    Descriptor {
        name: "lwu",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_LOAD, funct3::LWU),
        op: Op::Lwu,
    },
    Descriptor {
        name: "sb",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_STORE, funct3::SB),
        op: Op::Sb,
    },
    Descriptor {
        name: "sh",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_STORE, funct3::SH),
        op: Op::Sh,
    },
    Descriptor {
        name: "sw",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_STORE, funct3::SW),
        op: Op::Sw,
    },
    Descriptor {
        name: "sd",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_STORE, funct3::SD),
        op: Op::Sd,
    },
    Descriptor {
        name: "beq",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_BRANCH, funct3::BEQ),
        op: Op::Beq,
    },
    Descriptor {
        name: "bne",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_BRANCH, funct3::BNE),
        op: Op::Bne,
    },
    Descriptor {
        name: "blt",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_BRANCH, funct3::BLT),
        op: Op::Blt,
    },
    Descriptor {
        name: "bge",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_BRANCH, funct3::BGE),
        op: Op::Bge,
    },
    Descriptor {
        name: "bltu",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_BRANCH, funct3::BLTU),
        op: Op::Bltu,
    },
    Descriptor {
        name: "bgeu",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_BRANCH, funct3::BGEU),
        op: Op::Bgeu,
    },
    Descriptor {
        name: "jalr",
        mask: MASK_OPCODE_FUNCT3,
        required: pattern_i(opcodes::OP_JALR, funct3::JALR),
        op: Op::Jalr,
    },
    Descriptor {
        name: "lui",
        mask: MASK_OPCODE,
        required: opcodes::OP_LUI,
        op: Op::Lui,
    },
    Descriptor {
        name: "auipc",
        mask: MASK_OPCODE,
        required: opcodes::OP_AUIPC,
        op: Op::Auipc,
    },
    Descriptor {
        name: "jal",
        mask: MASK_OPCODE,
        required: opcodes::OP_JAL,
        op: Op::Jal,
    },
];
