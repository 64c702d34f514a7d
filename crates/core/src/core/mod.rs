//! CPU core: architectural state, executor, and run loop.
//!
//! This module owns everything that changes while the simulator runs:
//! 1. **State:** [`cpu::CpuState`] with the PC, register file, statistics,
//!    configuration, descriptor registry, and the bound host services.
//! 2. **Execution:** The per-instruction executor and the fetch/decode/execute
//!    loop with cooperative halt.

/// CPU state, initialization, and the run loop.
pub mod cpu;

mod exec;
