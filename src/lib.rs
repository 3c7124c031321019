//! Fixed-width big integer arithmetic for modular-exponentiation cryptography.
//!
//! Operands are 1024 bits wide, with a 2048-bit double width holding products
//! and Montgomery intermediates. Values are packed as 30-bit blocks inside
//! 32-bit words, leaving two spare high bits per block so carries can be read
//! with a plain shift. The [`montgomery`] module performs modular
//! multiplication and exponentiation against a precomputed reduction table.

/// Packed 30-bit-block big integer type and its arithmetic
pub mod bigint;
/// Typed errors for hex parsing and division
pub mod error;
/// Montgomery modular multiplication and exponentiation
pub mod montgomery;

pub use bigint::BigInt;
pub use error::BigIntError;
pub use montgomery::MontgomeryCtx;
