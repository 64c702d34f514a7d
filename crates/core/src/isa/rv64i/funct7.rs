//! RISC-V Base Integer (I) function codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions to
//! distinguish between operations that share the same `funct3` (e.g., ADD vs
//! SUB). Shift immediates reuse the top six bits only, since bit 25 carries
//! shamt\[5\] on RV64.

/// Default operation (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
/// Used to distinguish SUB from ADD, and SRA from SRL.
pub const SUB: u32 = 0b0100000;
/// Alias for SUB (used for Shift Right Arithmetic).
pub const SRA: u32 = 0b0100000;

/// Top six funct7 bits for logical shift immediates (SLLI, SRLI).
pub const SHIFT_LOGICAL: u32 = 0b000000;

/// Top six funct7 bits for the arithmetic shift immediate (SRAI).
pub const SHIFT_ARITHMETIC: u32 = 0b010000;
