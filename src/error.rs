//! Error taxonomy for the multi-precision integer engine
//!
//! Every fallible operation in this crate reports one of the variants
//! below. Outputs are written only on success; when an operation fails,
//! any output integer is left in a safe but unspecified state and is
//! still safe to drop or reuse.

use thiserror::Error;

/// Errors reported by multi-precision integer operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MpiError {
    /// A limb allocation request exceeded the configured maximum.
    #[error("limb allocation request exceeds the configured maximum")]
    AllocFailed,

    /// An argument is outside the domain of the operation, for example a
    /// radix outside `2..=16`, a non-positive or even modulus passed to
    /// modular exponentiation, or a negative exponent.
    #[error("argument outside the domain of the operation")]
    InvalidInput,

    /// A character is not a valid digit for the requested radix.
    #[error("character is not a valid digit for the requested radix")]
    InvalidCharacter,

    /// The destination byte buffer cannot hold the value.
    #[error("destination buffer is too small for the value")]
    BufferTooSmall,

    /// The operation would produce a negative value where only a
    /// non-negative one is meaningful, for example an unsigned
    /// subtraction with a smaller minuend or a reduction by a negative
    /// modulus.
    #[error("operation would produce a negative value")]
    NegativeValue,

    /// Division or reduction by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The value failed an acceptance test: a primality candidate turned
    /// out to be composite, or a modular inverse was requested for
    /// non-coprime arguments.
    #[error("value failed the acceptance test")]
    NotAcceptable,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, MpiError>;
