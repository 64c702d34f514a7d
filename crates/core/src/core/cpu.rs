//! CPU state and the fetch/decode/execute loop.
//!
//! [`CpuState`] holds all architectural state and drives execution:
//! 1. **Initialization:** Zeroed registers, PC, and statistics; the host
//!    services are bound by value and the descriptor registry is built once
//!    (RV64I, then RV64M) and never grows afterwards.
//! 2. **Run loop:** Fetch through the host's doubleword read (the low 32 bits
//!    are the instruction), fast-exit on the `ebreak` sentinel, first-match
//!    registry search, execute, advance PC unless the executor wrote it.
//! 3. **Halt:** A single atomic running flag, clearable from another thread
//!    through [`HaltHandle`]; the loop observes it between instructions.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, trace};

use crate::common::reg::GPR_COUNT;
use crate::common::{CoreError, Gpr};
use crate::config::Config;
use crate::host::HostServices;
use crate::isa::decode::decode;
use crate::isa::disasm;
use crate::isa::registry::{Descriptor, Registry};
use crate::isa::rv64i::opcodes::EBREAK;
use crate::isa::{rv64i, rv64m};
use crate::stats::Stats;

/// CPU architectural state and execution engine.
///
/// One value per kernel/host binding. The type is re-entrant over distinct
/// values; nothing in the core is process-global.
pub struct CpuState {
    /// Running flag; shared with every [`HaltHandle`] this state hands out.
    running: Arc<AtomicBool>,
    /// Configuration bitset; opaque except for the bits the core recognizes.
    config: Config,
    /// Host services, bound by value at init and never looked up elsewhere.
    pub(crate) host: Box<dyn HostServices>,
    /// Descriptor registry, immutable after construction.
    registry: Registry,
    /// Program counter. Raw 64 bits; the core imposes no alignment beyond
    /// what individual executors do.
    pub(crate) pc: u64,
    /// General-purpose register file.
    pub(crate) regs: Gpr,
    /// Execution statistics.
    pub(crate) stats: Stats,
}

/// Cloneable cross-thread halt handle.
///
/// The running flag is the only datum shared across threads; the handle
/// clears it with release ordering and the run loop observes the change with
/// acquire ordering no later than one instruction after the store.
#[derive(Clone, Debug)]
pub struct HaltHandle {
    running: Arc<AtomicBool>,
}

impl HaltHandle {
    /// Requests a cooperative halt of the associated CPU.
    pub fn halt(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Returns the current value of the running flag.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl CpuState {
    /// Creates a CPU bound to the given host services.
    ///
    /// All registers, the PC, the configuration, and the statistics start at
    /// zero. The registry is assembled from the implemented extension sets in
    /// order (RV64I, then RV64M).
    pub fn new(mut host: Box<dyn HostServices>) -> Self {
        let mut registry = Registry::new();
        registry.append(rv64i::DESCRIPTORS);
        registry.append(rv64m::DESCRIPTORS);
        debug!(descriptors = registry.len(), "cpu initialized");
        host.log_message("cpu core initialized");

        Self {
            running: Arc::new(AtomicBool::new(false)),
            config: Config::empty(),
            host,
            registry,
            pc: 0,
            regs: Gpr::new(),
            stats: Stats::new(),
        }
    }

    /// Returns the current configuration bits.
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Replaces the configuration bits. Unrecognized bits are retained.
    pub const fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Returns a snapshot of the execution statistics.
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Sets the program counter. Unchecked; misaligned values fault only
    /// insofar as the host's fetch reads from them.
    pub const fn set_pc(&mut self, pc: u64) {
        self.pc = pc;
    }

    /// Reads register `idx`.
    ///
    /// Register x0 reads as zero. An index outside 0..=31 is reported to the
    /// host fatal sink and surfaced as an error.
    pub fn reg(&mut self, idx: usize) -> Result<u64, CoreError> {
        if idx >= GPR_COUNT {
            self.host.fatal("register index out of range");
            return Err(CoreError::RegisterOutOfRange(idx));
        }
        Ok(self.regs.read(idx))
    }

    /// Writes register `idx`.
    ///
    /// Writes to x0 are silently ignored. An index outside 0..=31 is reported
    /// to the host fatal sink and surfaced as an error; nothing is stored.
    pub fn set_reg(&mut self, idx: usize, val: u64) -> Result<(), CoreError> {
        if idx >= GPR_COUNT {
            self.host.fatal("register index out of range");
            return Err(CoreError::RegisterOutOfRange(idx));
        }
        self.regs.write(idx, val);
        Ok(())
    }

    /// Returns the running flag.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Clears the running flag; the loop stops after the current instruction.
    pub fn signal_halt(&self) {
        trace!("halt signalled");
        self.running.store(false, Ordering::Release);
    }

    /// Returns a handle other threads can use to request a halt.
    pub fn halt_handle(&self) -> HaltHandle {
        HaltHandle {
            running: Arc::clone(&self.running),
        }
    }

    /// Searches the registry for the descriptor matching `word`.
    pub fn search(&self, word: u32) -> Option<&Descriptor> {
        self.registry.search(word)
    }

    /// Disassembles the instruction at the current PC.
    ///
    /// Takes `&mut self` because the fetch goes through the host services and
    /// may have MMIO side effects.
    pub fn disassemble_current(&mut self) -> String {
        let word = (self.host.read_u64(self.pc) & 0xFFFF_FFFF) as u32;
        disasm::disassemble(&self.registry, self.pc, word)
    }

    /// Runs until `ebreak`, a halt signal, or (when `limit` is set) at most
    /// `limit` instructions.
    ///
    /// Returns the number of instructions executed, including a terminating
    /// `ebreak`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnrecognizedInstruction`] when no descriptor matches the
    /// fetched word; the host fatal sink has already been invoked and the CPU
    /// is halted.
    pub fn run(&mut self, limit: Option<u64>) -> Result<u64, CoreError> {
        self.running.store(true, Ordering::Release);
        debug!(pc = self.pc, ?limit, "entering run loop");

        let mut executed: u64 = 0;
        while limit.is_none_or(|bound| executed < bound) {
            self.step_inner()?;
            executed += 1;
            if !self.running.load(Ordering::Acquire) {
                break;
            }
        }

        self.running.store(false, Ordering::Release);
        debug!(pc = self.pc, executed, "run loop finished");
        Ok(executed)
    }

    /// Executes exactly one instruction.
    ///
    /// Returns `false` when the instruction halted the CPU (`ebreak`).
    ///
    /// # Errors
    ///
    /// Same conditions as [`CpuState::run`].
    pub fn step(&mut self) -> Result<bool, CoreError> {
        self.running.store(true, Ordering::Release);
        self.step_inner()?;
        let still_running = self.running.load(Ordering::Acquire);
        if !still_running {
            self.running.store(false, Ordering::Release);
        }
        Ok(still_running)
    }

    /// One iteration of the loop: fetch, match, execute, count, trace.
    fn step_inner(&mut self) -> Result<(), CoreError> {
        let word = (self.host.read_u64(self.pc) & 0xFFFF_FFFF) as u32;

        // Fast exit on the halt sentinel; the word stays at PC and is counted.
        if word == EBREAK {
            self.stats.instructions += 1;
            self.running.store(false, Ordering::Release);
            trace!(pc = self.pc, "ebreak");
            self.emit_trace();
            return Ok(());
        }

        let op = match self.registry.search(word) {
            Some(d) => d.op,
            None => {
                error!(pc = self.pc, word, "registry miss");
                self.host.fatal("Unrecognized instruction");
                self.running.store(false, Ordering::Release);
                return Err(CoreError::UnrecognizedInstruction { pc: self.pc, word });
            }
        };

        let decoded = decode(word);
        let pc_written = self.execute(op, &decoded);
        if !pc_written {
            self.pc = self.pc.wrapping_add(4);
        }
        self.stats.instructions += 1;
        self.emit_trace();
        Ok(())
    }

    /// Emits the architectural trace record when tracing is configured.
    fn emit_trace(&mut self) {
        if self.config.contains(Config::TRACE_LOG) {
            let regs = self.regs.snapshot();
            self.host.trace_step(self.stats.instructions, self.pc, &regs);
        }
    }
}

impl fmt::Debug for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CpuState")
            .field("pc", &self.pc)
            .field("running", &self.is_running())
            .field("config", &self.config)
            .field("stats", &self.stats)
            .field("descriptors", &self.registry.len())
            .finish_non_exhaustive()
    }
}
