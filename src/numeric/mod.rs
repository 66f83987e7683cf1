// ============================================================================
// Numeric Module
// Fixed-width base 36 numbers for persistence keys
// ============================================================================
//
// This module provides:
// - Base36Number: fixed-capacity unsigned integer in base 36
// - Digit: one position, either a symbol value or the `#` padding sentinel
// - Base36Error: error types for construction and arithmetic
//
// Design principles:
// - Storage order is least significant digit first; the wire string keeps it
// - All arithmetic returns Result (no panics, no silent wraparound)
// - Values are immutable; every operation returns a new number
// - Plain digit loops, no general bignum dependency

mod base36;
mod digit;
mod errors;

#[cfg(test)]
mod proptests;

pub use base36::Base36Number;
pub use digit::{Digit, ALPHABET, PADDING_CHAR, RADIX};
pub use errors::{Base36Error, Base36Result};
