//! Primality testing and prime generation
//!
//! Candidates are screened with trial division over a baked-in table of
//! small primes, then subjected to Miller–Rabin with a round count
//! scaled to the candidate size. Prime generation draws random odd
//! candidates of an exact bit length and steps them until the tests
//! accept, with an optional safe-prime mode that keeps `(p - 1) / 2`
//! prime as well.
//!
//! All randomness is drawn through the [`crate::rng::SecureRandom`]
//! trait, so callers control the entropy source; the crate's default
//! CSPRNG is suitable.

mod core;
mod sieve;

pub use self::core::{gen_prime, is_prime};
