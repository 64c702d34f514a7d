//! Stable kernel API for the RV64 simulator core.
//!
//! This crate is the narrow surface an embedding host links against. It
//! provides:
//! 1. **Lifecycle:** Capability strings, init (bind host services, reset
//!    state), and re-init.
//! 2. **State access:** Configuration bits, statistics snapshots (struct and
//!    JSON), registers, and the program counter.
//! 3. **Execution:** Bounded or free-running execution, single stepping,
//!    cooperative halt signalling (cross-thread safe), and disassembly of the
//!    instruction at the current PC into a caller-provided buffer.
//!
//! Every operation is a direct delegation onto
//! [`rvkernel_core`] primitives; no simulation logic lives here.

/// The kernel facade and its signal type.
pub mod kernel;

pub use crate::kernel::{Kernel, Signal};

/// Re-exported core types the facade surface speaks in.
pub use rvkernel_core::{Config, CoreError, HaltHandle, HostServices, Stats};
