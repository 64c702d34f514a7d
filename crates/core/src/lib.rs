//! RISC-V instruction-set simulator kernel.
//!
//! This crate implements the core of an RV64 instruction-grain simulator behind a
//! host/kernel boundary:
//! 1. **ISA:** Field extraction, immediate decoding, a mask/required-bits descriptor
//!    registry, and a disassembler for the implemented RV64I/RV64M subset.
//! 2. **CPU:** Architectural state (PC, 32 integer registers), the per-instruction
//!    executor, and the fetch/decode/execute loop with cooperative halt.
//! 3. **Host boundary:** A [`HostServices`] trait the embedding host implements for
//!    memory, MMIO, tracing, and fatal-error reporting; the core holds no memory of
//!    its own.
//! 4. **Observability:** Execution statistics and an optional per-instruction
//!    architectural trace gated by [`Config::TRACE_LOG`].

/// Common types (errors, general-purpose register file).
pub mod common;
/// Simulator configuration bits.
pub mod config;
/// CPU state, executor, and run loop.
pub mod core;
/// Host-supplied services (memory, trace, logging, fatal sink).
pub mod host;
/// Instruction set (fields, immediates, registry, RV64I/RV64M, disassembly).
pub mod isa;
/// Execution statistics collection.
pub mod stats;

/// Core error enum (fatal conditions surfaced to the host).
pub use crate::common::CoreError;
/// Configuration bitset; `Config::TRACE_LOG` enables the architectural trace.
pub use crate::config::Config;
/// Main CPU type; owns the registry, registers, PC, and statistics.
pub use crate::core::cpu::CpuState;
/// Cloneable cross-thread halt handle.
pub use crate::core::cpu::HaltHandle;
/// Host-services trait implemented by the embedding host.
pub use crate::host::HostServices;
/// Execution statistics snapshot.
pub use crate::stats::Stats;
