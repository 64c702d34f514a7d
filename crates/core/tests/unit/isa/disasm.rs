//! Disassembler rendering checks.
//!
//! The canonical format is `"<0x%08x pc>   <mnemonic> <operands>"` with
//! registers as `x<n>`, negative immediates in signed decimal, and
//! non-negative immediates in lowercase hex.

use pretty_assertions::assert_eq;

use rvkernel_core::isa::disasm::{MIN_BUFFER_LEN, disassemble};
use rvkernel_core::isa::registry::Registry;
use rvkernel_core::isa::{rv64i, rv64m};

use crate::common::builder::{
    EBREAK, add, addi, addw, auipc, beq, jal, jalr, ld, lui, lw, mul, sd, srai, sw,
};

fn registry() -> Registry {
    let mut reg = Registry::new();
    reg.append(rv64i::DESCRIPTORS);
    reg.append(rv64m::DESCRIPTORS);
    reg
}

#[test]
fn addi_negative_immediate_renders_decimal() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 0x1000, addi(1, 0, -1)),
        "0x00001000   addi x1, x0, -1"
    );
}

#[test]
fn lui_renders_the_twenty_bit_field_in_hex() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 0x1000, lui(6, 0x1000)),
        "0x00001000   lui x6, 0x1000"
    );
}

#[test]
fn auipc_field_is_unsigned_even_when_bit_31_set() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 0, auipc(1, 0x80000)),
        "0x00000000   auipc x1, 0x80000"
    );
}

#[test]
fn r_type_renders_three_registers() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 4, add(3, 1, 2)),
        "0x00000004   add x3, x1, x2"
    );
    assert_eq!(
        disassemble(&reg, 4, addw(3, 1, 2)),
        "0x00000004   addw x3, x1, x2"
    );
    assert_eq!(
        disassemble(&reg, 4, mul(3, 1, 2)),
        "0x00000004   mul x3, x1, x2"
    );
}

#[test]
fn shift_immediate_renders_shamt() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 0, srai(6, 5, 4)),
        "0x00000000   srai x6, x5, 0x4"
    );
}

#[test]
fn loads_render_offset_base_form() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 0, lw(5, 2, 0)),
        "0x00000000   lw x5, 0x0(x2)"
    );
    assert_eq!(
        disassemble(&reg, 0, ld(5, 2, -16)),
        "0x00000000   ld x5, -16(x2)"
    );
}

#[test]
fn stores_swap_in_rs2() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 0, sw(3, 2, -4)),
        "0x00000000   sw x3, -4(x2)"
    );
    assert_eq!(
        disassemble(&reg, 0, sd(1, 2, 8)),
        "0x00000000   sd x1, 0x8(x2)"
    );
}

#[test]
fn branches_render_both_sources_and_offset() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 8, beq(1, 2, 8)),
        "0x00000008   beq x1, x2, 0x8"
    );
}

#[test]
fn jumps_render_link_register() {
    let reg = registry();
    assert_eq!(disassemble(&reg, 0, jal(1, -20)), "0x00000000   jal x1, -20");
    assert_eq!(
        disassemble(&reg, 0, jalr(2, 1, 8)),
        "0x00000000   jalr x2, x1, 0x8"
    );
}

#[test]
fn ebreak_renders_bare_mnemonic() {
    let reg = registry();
    assert_eq!(disassemble(&reg, 0x40, EBREAK), "0x00000040   ebreak");
}

#[test]
fn registry_miss_renders_unknown() {
    let reg = registry();
    assert_eq!(
        disassemble(&reg, 0, 0x0000_000F),
        "0x00000000   unknown (0x0000000f)"
    );
}

#[test]
fn renderings_fit_the_minimum_buffer() {
    // The facade's buffer contract promises that MIN_BUFFER_LEN bytes hold
    // any rendering with single-digit operands.
    let reg = registry();
    let text = disassemble(&reg, 0x1000, addi(1, 0, -1));
    assert!(text.len() <= MIN_BUFFER_LEN);
}
