//! Core error definitions.
//!
//! Every fatal condition the core can encounter is represented here. The policy
//! is single-shot: the core never retries. Each error is reported to the host's
//! fatal sink at the point of detection and then surfaced to the caller through
//! `Result`; halted execution is not an error.

use thiserror::Error;

/// Fatal conditions reported by the simulator core.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No registry descriptor matched the fetched instruction word.
    #[error("unrecognized instruction {word:#010x} at pc {pc:#x}")]
    UnrecognizedInstruction {
        /// Program counter at the failed fetch.
        pc: u64,
        /// The raw 32-bit instruction word.
        word: u32,
    },

    /// A register index outside 0..=31 was passed through the API surface.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(usize),
}
