//! The kernel facade.
//!
//! [`Kernel`] owns one [`CpuState`] and forwards each API operation onto it.
//! The type is an ordinary owned value: hosts that need several independent
//! CPUs simply hold several `Kernel`s.

use tracing::debug;

use rvkernel_core::core::cpu::CpuState;
use rvkernel_core::isa::disasm::MIN_BUFFER_LEN;
use rvkernel_core::{Config, CoreError, HaltHandle, HostServices, Stats};

/// Capability strings describing this kernel, `"key=value"` or bare tags.
pub const INFO: &[&str] = &[
    "api=1.0",
    concat!("author=", env!("CARGO_PKG_AUTHORS")),
    concat!("version=", env!("CARGO_PKG_VERSION")),
];

/// Signals a host can deliver to a running kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Request a cooperative halt; takes effect between instructions.
    Halt,
}

/// The stable host-facing kernel surface.
#[derive(Debug)]
pub struct Kernel {
    cpu: CpuState,
}

impl Kernel {
    /// Returns the capability strings for this kernel build.
    pub const fn info() -> &'static [&'static str] {
        INFO
    }

    /// Creates a kernel bound to the given host services, with all
    /// architectural state zeroed.
    pub fn new(host: Box<dyn HostServices>) -> Self {
        debug!("kernel created");
        Self {
            cpu: CpuState::new(host),
        }
    }

    /// Re-initializes the kernel: resets all state and binds new services.
    ///
    /// Any previously handed-out [`HaltHandle`] refers to the old state and
    /// no longer affects this kernel.
    pub fn init(&mut self, host: Box<dyn HostServices>) {
        debug!("kernel re-initialized");
        self.cpu = CpuState::new(host);
    }

    /// Returns the raw configuration bits.
    pub fn config_get(&self) -> u64 {
        self.cpu.config().bits()
    }

    /// Replaces the configuration bits. Bits the core does not recognize are
    /// retained verbatim.
    pub fn config_set(&mut self, bits: u64) {
        self.cpu.set_config(Config::from_bits_retain(bits));
    }

    /// Returns a snapshot of the execution statistics.
    pub fn stats_report(&self) -> Stats {
        self.cpu.stats()
    }

    /// Returns the statistics snapshot rendered as a JSON object.
    pub fn stats_json(&self) -> String {
        // A plain struct of integer counters cannot fail to serialize.
        serde_json::to_string(&self.cpu.stats()).unwrap_or_default()
    }

    /// Reads register `idx` (0..=31); x0 reads as zero.
    ///
    /// # Errors
    ///
    /// [`CoreError::RegisterOutOfRange`] for indices past 31; the host fatal
    /// sink has already been invoked.
    pub fn reg_get(&mut self, idx: usize) -> Result<u64, CoreError> {
        self.cpu.reg(idx)
    }

    /// Writes register `idx` (0..=31); writes to x0 are ignored.
    ///
    /// # Errors
    ///
    /// [`CoreError::RegisterOutOfRange`] for indices past 31; the host fatal
    /// sink has already been invoked and nothing was stored.
    pub fn reg_set(&mut self, idx: usize, val: u64) -> Result<(), CoreError> {
        self.cpu.set_reg(idx, val)
    }

    /// Returns the program counter.
    pub fn pc_get(&self) -> u64 {
        self.cpu.pc()
    }

    /// Sets the program counter. Unchecked.
    pub fn pc_set(&mut self, pc: u64) {
        self.cpu.set_pc(pc);
    }

    /// Returns the running flag.
    pub fn running(&self) -> bool {
        self.cpu.is_running()
    }

    /// Delivers a signal to the CPU.
    pub fn signal(&self, signal: Signal) {
        match signal {
            Signal::Halt => self.cpu.signal_halt(),
        }
    }

    /// Returns a handle other threads can use to deliver a halt.
    pub fn halt_handle(&self) -> HaltHandle {
        self.cpu.halt_handle()
    }

    /// Runs the CPU until `ebreak`, a halt signal, or the cycle bound.
    ///
    /// A positive `cycles` executes at most that many instructions;
    /// zero or negative runs until `ebreak` or halt. Returns the executed
    /// count, including a terminating `ebreak`.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnrecognizedInstruction`] on a registry miss; the host
    /// fatal sink has already been invoked and the CPU is halted.
    pub fn run(&mut self, cycles: i64) -> Result<u64, CoreError> {
        let limit = u64::try_from(cycles).ok().filter(|&n| n > 0);
        self.cpu.run(limit)
    }

    /// Executes a single instruction; returns `false` once halted.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Kernel::run`].
    pub fn step(&mut self) -> Result<bool, CoreError> {
        self.cpu.step()
    }

    /// Disassembles the instruction at the current PC into `buf`.
    ///
    /// Writes nothing and returns 0 when `buf` is shorter than the 32-byte
    /// minimum; otherwise writes the rendering (truncated to `buf` if needed)
    /// and returns the byte count written.
    pub fn disassemble(&mut self, buf: &mut [u8]) -> usize {
        if buf.len() < MIN_BUFFER_LEN {
            return 0;
        }
        let text = self.cpu.disassemble_current();
        let bytes = text.as_bytes();
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        n
    }
}
