//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the RV64
//! architecture. It performs the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Observability:** Provides a snapshot of the full file for trace sinks.

/// Number of general-purpose registers in the RV64 base ISA.
pub const GPR_COUNT: usize = 32;

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register
/// `x0` is hardwired to zero and cannot be modified. Callers are responsible
/// for index validation; the CPU layer maps out-of-range indices onto the host
/// fatal sink before reaching this type.
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [u64; GPR_COUNT],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers zeroed.
    pub const fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `x0` always returns 0.
    pub const fn read(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `x0` are ignored.
    /// * `val` - The 64-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Resets every register to zero.
    pub const fn reset(&mut self) {
        self.regs = [0; GPR_COUNT];
    }

    /// Returns a copy of the full register file, with the x0 invariant applied.
    ///
    /// Handed to the host's trace sink once per instruction when tracing is
    /// configured.
    pub const fn snapshot(&self) -> [u64; GPR_COUNT] {
        let mut out = self.regs;
        out[0] = 0;
        out
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
