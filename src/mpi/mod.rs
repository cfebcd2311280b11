//! Signed multi-precision integers
//!
//! This module defines [`Mpi`], the arbitrary-precision signed integer
//! used as the numeric foundation of Nebula's asymmetric cryptography.
//!
//! An `Mpi` is a sign flag plus a heap-backed array of machine-word
//! limbs, least significant limb first. The buffer only ever grows;
//! unused high limbs stay zero, and every algorithm that cares about
//! magnitude scans down from the top for the first significant limb.
//!
//! Provided operations:
//!
//! - lifecycle and container management ([`core`])
//! - magnitude and signed comparison ([`cmp`])
//! - addition and subtraction, unsigned and signed ([`ops`])
//! - schoolbook multiplication ([`mul`]) and bit shifts ([`shift`])
//! - division with remainder and modular reduction ([`div`])
//! - Montgomery-form modular exponentiation ([`exp`])
//! - binary GCD and modular inversion ([`gcd`])
//! - radix-string, byte-array and primitive-integer conversions
//!   ([`conv`])

mod cmp;
mod core;
mod div;
mod exp;
mod gcd;
mod mul;
mod ops;
mod shift;

pub mod conv;

pub use self::core::{LIMB_BITS, LIMB_BYTES, Limb, Mpi, Sign};

pub(crate) use self::core::bits_to_limbs;

/// Hard ceiling on a single limb buffer. Deliberately far above
/// [`MAX_BITS`]: intermediates such as full products and the Montgomery
/// scratch buffer legitimately run to a multiple of the value ceiling.
pub const MAX_LIMBS: usize = 10_000;

/// Ceiling on the size of a single value, in bytes.
pub const MAX_BYTES: usize = 1_250;

/// Ceiling on the size of a single value, in bits; bounds prime
/// generation requests.
pub const MAX_BITS: usize = MAX_BYTES * 8;

/// Largest number of random bytes a single [`Mpi::random`] draw
/// accepts: enough to fill every limb of a maximum-size value.
pub const MAX_FILL_BYTES: usize = MAX_BITS.div_ceil(LIMB_BITS) * LIMB_BYTES;

/// Widest window used by sliding-window exponentiation.
pub const WINDOW_SIZE: usize = 6;
