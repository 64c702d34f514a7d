//! Configuration bits for the simulator core.
//!
//! The host configures the kernel through a 64-bit bitset. The core treats the
//! set as opaque except where a bit gates behavior it owns; unknown bits are
//! preserved so a newer host can round-trip configuration through an older
//! kernel.

use bitflags::bitflags;

bitflags! {
    /// Kernel configuration bitset.
    ///
    /// `Config::empty()` is the reset state (no bits set).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Config: u64 {
        /// Emit the architectural trace (step, pc, registers) to the host's
        /// trace sink after every executed instruction.
        const TRACE_LOG = 1;

        // Bits the core does not recognize are retained verbatim.
        const _ = !0;
    }
}
