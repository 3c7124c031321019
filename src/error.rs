//! Error types for the recoverable failure conditions of the engine.

use std::fmt;

/// Failures a caller can correct and retry.
///
/// Only malformed input and division by zero are recoverable; contract
/// violations such as operand width mismatches or out-of-range bit positions
/// are programming errors and assert instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// The input string contained a character outside `0-9A-Fa-f`.
    InvalidHexDigit(char),
    /// A zero denominator was passed to division; no computation was performed.
    DivisionByZero,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::InvalidHexDigit(digit) => write!(f, "invalid hex digit {:?}", digit),
            BigIntError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for BigIntError {}
