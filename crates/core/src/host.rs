//! Host-supplied services.
//!
//! The core owns no memory and no I/O. Everything it needs from the outside
//! world is reached through this trait, bound once at init and never looked up
//! again:
//! 1. **Memory:** Byte, halfword, word, and doubleword loads and stores at
//!    absolute guest addresses. MMIO side effects are permitted on any access.
//! 2. **Tracing:** A per-instruction architectural trace sink, gated by
//!    [`Config::TRACE_LOG`](crate::Config::TRACE_LOG).
//! 3. **Diagnostics:** An informational message sink and a fatal-error sink.

use crate::common::reg::GPR_COUNT;

/// Services the embedding host provides to the simulator core.
///
/// Reads of undefined regions must return zero; writes to undefined regions
/// must be silently ignored. Any service may be invoked at any point during
/// `run`.
pub trait HostServices {
    /// Loads one byte at the given guest address.
    fn read_u8(&mut self, addr: u64) -> u8;
    /// Loads two bytes (little-endian) at the given guest address.
    fn read_u16(&mut self, addr: u64) -> u16;
    /// Loads four bytes (little-endian) at the given guest address.
    fn read_u32(&mut self, addr: u64) -> u32;
    /// Loads eight bytes (little-endian) at the given guest address.
    ///
    /// Instruction fetch goes through this accessor; the low 32 bits of the
    /// returned value are the instruction word.
    fn read_u64(&mut self, addr: u64) -> u64;

    /// Stores one byte at the given guest address.
    fn write_u8(&mut self, addr: u64, val: u8);
    /// Stores two bytes (little-endian) at the given guest address.
    fn write_u16(&mut self, addr: u64, val: u16);
    /// Stores four bytes (little-endian) at the given guest address.
    fn write_u32(&mut self, addr: u64, val: u32);
    /// Stores eight bytes (little-endian) at the given guest address.
    fn write_u64(&mut self, addr: u64, val: u64);

    /// Architectural trace sink, invoked once per executed instruction when
    /// tracing is configured. `step` is the cumulative executed-instruction
    /// count since init (it carries across `run` invocations).
    fn trace_step(&mut self, step: u64, pc: u64, regs: &[u64; GPR_COUNT]) {
        let _ = (step, pc, regs);
    }

    /// Informational message sink. Non-fatal.
    fn log_message(&mut self, msg: &str) {
        let _ = msg;
    }

    /// Fatal-error sink.
    ///
    /// Production hosts are expected not to return to the core; the core
    /// nevertheless tolerates a returning implementation (test harnesses) by
    /// halting and surfacing the condition as a
    /// [`CoreError`](crate::common::CoreError).
    fn fatal(&mut self, msg: &str);
}
