//! Execution statistics collection.
//!
//! Counters accumulated by the run loop and the memory executors. All counters
//! are monotonically non-decreasing and survive across `run` invocations; they
//! reset only on init. The miss counters exist for host API compatibility and
//! remain zero: this core models no cache.

use serde::Serialize;

/// Execution statistics snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Instructions executed, including a terminating `ebreak`.
    pub instructions: u64,
    /// Memory loads performed by load executors (fetches excluded).
    pub loads: u64,
    /// Memory stores performed by store executors.
    pub stores: u64,
    /// Load misses. Always zero; reserved for cache-modelling hosts.
    pub load_misses: u64,
    /// Store misses. Always zero; reserved for cache-modelling hosts.
    pub store_misses: u64,
}

impl Stats {
    /// Returns a zeroed counter block.
    pub const fn new() -> Self {
        Self {
            instructions: 0,
            loads: 0,
            stores: 0,
            load_misses: 0,
            store_misses: 0,
        }
    }
}
