//! Instruction disassembler.
//!
//! Converts a 32-bit instruction word into the canonical textual rendering
//! used by trace output and the host debug shell:
//!
//! ```text
//! 0x00001000   addi x1, x0, -1
//! ```
//!
//! The address prefix is fixed-width (`0x` plus eight lowercase hex digits)
//! followed by three spaces. Register operands render as `x<n>` in decimal.
//! Negative immediates render in signed decimal, non-negative ones in
//! lowercase hex. Loads and stores use the `mn xR, imm(xBase)` form, with
//! stores substituting rs2 for rd. Words no descriptor matches render as
//! `unknown (<word>)`.

use crate::isa::decode::decode;
use crate::isa::instruction::SHAMT_MASK;
use crate::isa::registry::{Descriptor, Op, Registry};

/// Smallest caller buffer the buffer-filling API accepts.
///
/// Callers handing the kernel facade a buffer shorter than this receive
/// nothing; every rendered mnemonic with short operands fits.
pub const MIN_BUFFER_LEN: usize = 32;

/// Disassembles `word` as fetched from `pc` into the canonical rendering.
///
/// # Arguments
///
/// * `registry` - The descriptor registry to identify the word against.
/// * `pc` - The address the word was fetched from.
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(registry: &Registry, pc: u64, word: u32) -> String {
    let body = registry
        .search(word)
        .map_or_else(|| format!("unknown ({word:#010x})"), |d| render(d, word));
    format!("{pc:#010x}   {body}")
}

/// Renders an immediate: signed decimal when negative, lowercase hex otherwise.
fn imm(value: i64) -> String {
    if value < 0 {
        value.to_string()
    } else {
        format!("{value:#x}")
    }
}

/// Renders the operand list for a matched descriptor.
fn render(desc: &Descriptor, word: u32) -> String {
    let d = decode(word);
    let mn = desc.name;

    match desc.op {
        // U-type renders the raw 20-bit immediate field, not the shifted value.
        Op::Lui | Op::Auipc => {
            format!("{mn} x{}, {}", d.rd, imm((d.imm >> 12) & 0xFFFFF))
        }

        Op::Addi | Op::Slti | Op::Sltiu | Op::Xori | Op::Ori | Op::Andi | Op::Addiw => {
            format!("{mn} x{}, x{}, {}", d.rd, d.rs1, imm(d.imm))
        }

        Op::Slli | Op::Srli | Op::Srai => {
            format!("{mn} x{}, x{}, {}", d.rd, d.rs1, imm(d.imm & i64::from(SHAMT_MASK)))
        }

        Op::Add
        | Op::Sub
        | Op::Sll
        | Op::Slt
        | Op::Sltu
        | Op::Xor
        | Op::Srl
        | Op::Sra
        | Op::Or
        | Op::And
        | Op::Addw
        | Op::Mul => {
            format!("{mn} x{}, x{}, x{}", d.rd, d.rs1, d.rs2)
        }

        Op::Lb | Op::Lh | Op::Lw | Op::Ld | Op::Lbu | Op::Lhu | Op::Lwu => {
            format!("{mn} x{}, {}(x{})", d.rd, imm(d.imm), d.rs1)
        }

        Op::Sb | Op::Sh | Op::Sw | Op::Sd => {
            format!("{mn} x{}, {}(x{})", d.rs2, imm(d.imm), d.rs1)
        }

        Op::Beq | Op::Bne | Op::Blt | Op::Bge | Op::Bltu | Op::Bgeu => {
            format!("{mn} x{}, x{}, {}", d.rs1, d.rs2, imm(d.imm))
        }

        Op::Jal => format!("{mn} x{}, {}", d.rd, imm(d.imm)),
        Op::Jalr => format!("{mn} x{}, x{}, {}", d.rd, d.rs1, imm(d.imm)),

        Op::Ebreak => mn.to_string(),
    }
}
