//! Multi-precision integer arithmetic for Nebula
//!
//! This crate provides the signed big-integer engine that underpins the
//! asymmetric cryptography used across the Nebula ecosystem (RSA, DH and
//! ECC parameter handling).
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on raw speed or a large API surface. All algorithms are explicit
//! schoolbook implementations with well-understood behavior.
//!
//! # Module overview
//!
//! - `mpi`
//!   The [`mpi::Mpi`] type: a signed, heap-backed, arbitrary-precision
//!   integer stored as a little-endian limb array. Ring operations
//!   (add/sub/mul/div/mod), bit shifts, comparisons, Montgomery-form
//!   modular exponentiation, binary GCD and modular inversion, plus
//!   radix-string and big-endian byte conversions.
//!
//! - `prime`
//!   Probabilistic primality testing (trial division over a small-prime
//!   table followed by Miller–Rabin) and random prime generation,
//!   including the safe-prime variant used for Diffie–Hellman moduli.
//!
//! - `rng`
//!   The [`rng::SecureRandom`] source-of-randomness trait consumed by
//!   the primality code, together with a ChaCha20-based, OS-seeded
//!   CSPRNG as the default implementation.
//!
//! - `error`
//!   The crate-wide [`error::MpiError`] taxonomy. Every fallible
//!   operation returns a `Result` with one of these variants; outputs
//!   are only written on success.
//!
//! # Design goals
//!
//! - Explicit ownership: every integer exclusively owns its limb buffer
//! - Buffers are wiped before release, so secret material does not
//!   linger in freed memory
//! - Minimal and explicit APIs with stable, well-defined semantics
//! - No concurrency and no shared mutable state inside the engine
//!
//! This crate is not a constant-time library. Montgomery multiplication
//! balances its final conditional subtraction, but shifts, comparisons
//! and divisions have input-dependent timing. Callers that need full
//! side-channel hardening must use a dedicated constant-time
//! implementation instead.

mod os;
mod wipe;

pub mod error;
pub mod mpi;
pub mod prime;
pub mod rng;

pub use error::{MpiError, Result};
pub use mpi::Mpi;
