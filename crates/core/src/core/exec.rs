//! Per-instruction executor.
//!
//! One arm per implemented mnemonic, dispatching on [`Op`] so missing
//! semantics are a compile error. Each arm updates registers, memory (through
//! the host services), or the PC, and returns whether it wrote the PC; when it
//! did not, the loop advances by 4.
//!
//! Width handling follows the RV64 register model: all register values are
//! 64-bit, W-variant results are computed in 32 bits and sign-extended, and
//! register-sourced shift amounts use the low six bits.

use crate::isa::decode::Decoded;
use crate::isa::instruction::SHAMT_MASK;
use crate::isa::registry::Op;

use super::cpu::CpuState;

/// Mask selecting the low six bits of a register-sourced shift amount.
const SHIFT_AMOUNT_MASK: u64 = 0x3F;

impl CpuState {
    /// Executes one decoded instruction.
    ///
    /// Returns `true` when the executor wrote the PC itself, suppressing the
    /// loop's default `pc + 4` advance.
    pub(crate) fn execute(&mut self, op: Op, d: &Decoded) -> bool {
        match op {
            Op::Lui => {
                self.regs.write(d.rd, d.imm as u64);
                false
            }
            Op::Auipc => {
                self.regs.write(d.rd, self.pc.wrapping_add(d.imm as u64));
                false
            }

            Op::Addi => {
                let v = self.regs.read(d.rs1).wrapping_add(d.imm as u64);
                self.regs.write(d.rd, v);
                false
            }
            Op::Slti => {
                let v = u64::from((self.regs.read(d.rs1) as i64) < d.imm);
                self.regs.write(d.rd, v);
                false
            }
            Op::Sltiu => {
                let v = u64::from(self.regs.read(d.rs1) < d.imm as u64);
                self.regs.write(d.rd, v);
                false
            }
            Op::Xori => {
                let v = self.regs.read(d.rs1) ^ d.imm as u64;
                self.regs.write(d.rd, v);
                false
            }
            Op::Ori => {
                let v = self.regs.read(d.rs1) | d.imm as u64;
                self.regs.write(d.rd, v);
                false
            }
            Op::Andi => {
                let v = self.regs.read(d.rs1) & d.imm as u64;
                self.regs.write(d.rd, v);
                false
            }
            Op::Slli => {
                let v = self.regs.read(d.rs1) << shamt(d);
                self.regs.write(d.rd, v);
                false
            }
            Op::Srli => {
                let v = self.regs.read(d.rs1) >> shamt(d);
                self.regs.write(d.rd, v);
                false
            }
            Op::Srai => {
                // Arithmetic shift: the sign bit replicates into vacated bits.
                let v = ((self.regs.read(d.rs1) as i64) >> shamt(d)) as u64;
                self.regs.write(d.rd, v);
                false
            }
            Op::Addiw => {
                let v = self.regs.read(d.rs1).wrapping_add(d.imm as u64);
                self.regs.write(d.rd, i64::from(v as i32) as u64);
                false
            }

            Op::Add => {
                let v = self.regs.read(d.rs1).wrapping_add(self.regs.read(d.rs2));
                self.regs.write(d.rd, v);
                false
            }
            Op::Sub => {
                let v = self.regs.read(d.rs1).wrapping_sub(self.regs.read(d.rs2));
                self.regs.write(d.rd, v);
                false
            }
            Op::Sll => {
                let sh = self.regs.read(d.rs2) & SHIFT_AMOUNT_MASK;
                let v = self.regs.read(d.rs1) << sh;
                self.regs.write(d.rd, v);
                false
            }
            Op::Slt => {
                let v =
                    u64::from((self.regs.read(d.rs1) as i64) < (self.regs.read(d.rs2) as i64));
                self.regs.write(d.rd, v);
                false
            }
            Op::Sltu => {
                let v = u64::from(self.regs.read(d.rs1) < self.regs.read(d.rs2));
                self.regs.write(d.rd, v);
                false
            }
            Op::Xor => {
                let v = self.regs.read(d.rs1) ^ self.regs.read(d.rs2);
                self.regs.write(d.rd, v);
                false
            }
            Op::Srl => {
                let sh = self.regs.read(d.rs2) & SHIFT_AMOUNT_MASK;
                let v = self.regs.read(d.rs1) >> sh;
                self.regs.write(d.rd, v);
                false
            }
            Op::Sra => {
                let sh = self.regs.read(d.rs2) & SHIFT_AMOUNT_MASK;
                let v = ((self.regs.read(d.rs1) as i64) >> sh) as u64;
                self.regs.write(d.rd, v);
                false
            }
            Op::Or => {
                let v = self.regs.read(d.rs1) | self.regs.read(d.rs2);
                self.regs.write(d.rd, v);
                false
            }
            Op::And => {
                let v = self.regs.read(d.rs1) & self.regs.read(d.rs2);
                self.regs.write(d.rd, v);
                false
            }
            Op::Addw => {
                let v = self.regs.read(d.rs1).wrapping_add(self.regs.read(d.rs2));
                self.regs.write(d.rd, i64::from(v as i32) as u64);
                false
            }

            Op::Lb => {
                let addr = self.effective_address(d);
                let v = i64::from(self.host.read_u8(addr) as i8) as u64;
                self.finish_load(d.rd, v)
            }
            Op::Lh => {
                let addr = self.effective_address(d);
                let v = i64::from(self.host.read_u16(addr) as i16) as u64;
                self.finish_load(d.rd, v)
            }
            Op::Lw => {
                let addr = self.effective_address(d);
                let v = i64::from(self.host.read_u32(addr) as i32) as u64;
                self.finish_load(d.rd, v)
            }
            Op::Ld => {
                let addr = self.effective_address(d);
                let v = self.host.read_u64(addr);
                self.finish_load(d.rd, v)
            }
            Op::Lbu => {
                let addr = self.effective_address(d);
                let v = u64::from(self.host.read_u8(addr));
                self.finish_load(d.rd, v)
            }
            Op::Lhu => {
                let addr = self.effective_address(d);
                let v = u64::from(self.host.read_u16(addr));
                self.finish_load(d.rd, v)
            }
            Op::Lwu => {
                let addr = self.effective_address(d);
                let v = u64::from(self.host.read_u32(addr));
                self.finish_load(d.rd, v)
            }

            Op::Sb => {
                let addr = self.effective_address(d);
                let v = self.regs.read(d.rs2) as u8;
                self.host.write_u8(addr, v);
                self.finish_store()
            }
            Op::Sh => {
                let addr = self.effective_address(d);
                let v = self.regs.read(d.rs2) as u16;
                self.host.write_u16(addr, v);
                self.finish_store()
            }
            Op::Sw => {
                let addr = self.effective_address(d);
                let v = self.regs.read(d.rs2) as u32;
                self.host.write_u32(addr, v);
                self.finish_store()
            }
            Op::Sd => {
                let addr = self.effective_address(d);
                let v = self.regs.read(d.rs2);
                self.host.write_u64(addr, v);
                self.finish_store()
            }

            Op::Jal => {
                let link = self.pc.wrapping_add(4);
                self.pc = self.pc.wrapping_add(d.imm as u64);
                self.regs.write(d.rd, link);
                true
            }
            Op::Jalr => {
                // rs1 is read before the link write: rd and rs1 may alias.
                let target = self.regs.read(d.rs1).wrapping_add(d.imm as u64) & !1;
                let link = self.pc.wrapping_add(4);
                self.pc = target;
                self.regs.write(d.rd, link);
                true
            }

            Op::Beq => self.branch(d, self.regs.read(d.rs1) == self.regs.read(d.rs2)),
            Op::Bne => self.branch(d, self.regs.read(d.rs1) != self.regs.read(d.rs2)),
            Op::Blt => self.branch(
                d,
                (self.regs.read(d.rs1) as i64) < (self.regs.read(d.rs2) as i64),
            ),
            Op::Bge => self.branch(
                d,
                (self.regs.read(d.rs1) as i64) >= (self.regs.read(d.rs2) as i64),
            ),
            Op::Bltu => self.branch(d, self.regs.read(d.rs1) < self.regs.read(d.rs2)),
            Op::Bgeu => self.branch(d, self.regs.read(d.rs1) >= self.regs.read(d.rs2)),

            Op::Ebreak => {
                self.signal_halt();
                true
            }

            Op::Mul => {
                let v = (self.regs.read(d.rs1) as i64).wrapping_mul(self.regs.read(d.rs2) as i64);
                self.regs.write(d.rd, v as u64);
                false
            }
        }
    }

    /// Computes `rs1 + imm` for loads and stores.
    fn effective_address(&self, d: &Decoded) -> u64 {
        self.regs.read(d.rs1).wrapping_add(d.imm as u64)
    }

    /// Writes a loaded value and bumps the load counter.
    fn finish_load(&mut self, rd: usize, value: u64) -> bool {
        self.regs.write(rd, value);
        self.stats.loads += 1;
        false
    }

    /// Bumps the store counter.
    fn finish_store(&mut self) -> bool {
        self.stats.stores += 1;
        false
    }

    /// Applies a branch: on a taken branch the PC moves by the B-immediate,
    /// otherwise the loop's default advance applies.
    fn branch(&mut self, d: &Decoded, taken: bool) -> bool {
        if taken {
            self.pc = self.pc.wrapping_add(d.imm as u64);
        }
        taken
    }
}

/// Extracts the 6-bit shift amount from a shift-immediate encoding.
fn shamt(d: &Decoded) -> u32 {
    (d.imm & i64::from(SHAMT_MASK)) as u32
}
