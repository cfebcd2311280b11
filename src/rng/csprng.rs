//! ChaCha20-based CSPRNG
//!
//! A cryptographically secure pseudorandom generator built on the
//! ChaCha20 block function:
//! - seeded from the operating system entropy pool
//! - deterministic expansion from the seeded state
//! - forward secrecy through rekeying after every request
//!
//! This is the default [`SecureRandom`](super::SecureRandom) source for
//! prime generation.

use crate::os::sys_random;
use crate::rng::SecureRandom;
use crate::rng::chacha20::chacha20_block;
use crate::wipe::wipe_bytes;

/// Cryptographically secure pseudorandom number generator.
///
/// Internally holds a secret ChaCha20 key, a fixed nonce and a block
/// counter. After each output request the generator replaces its key
/// with fresh keystream, so compromise of the current state does not
/// reveal earlier outputs.
pub struct Csprng {
    /// Current ChaCha20 key (256-bit).
    key: [u8; 32],

    /// Nonce, fixed to zero for DRBG usage.
    nonce: [u8; 12],

    /// Block counter.
    counter: u32,
}

impl Csprng {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a generator seeded from the operating system entropy
    /// pool.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable for the
    /// output to be secure; a fixed seed gives a deterministic stream,
    /// which is useful in tests. The seed buffer is wiped after use.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        wipe_bytes(&mut seed);

        Self { key, nonce: [0u8; 12], counter: 0 }
    }

    /// Replaces the key with fresh keystream so earlier outputs cannot
    /// be reconstructed from the current state.
    fn rekey(&mut self) {
        let block = chacha20_block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl SecureRandom for Csprng {
    /// Fills the buffer with keystream in 64-byte blocks, then rekeys.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;

        while offset < dest.len() {
            let block = chacha20_block(&self.key, self.counter, &self.nonce);

            self.counter = self.counter.wrapping_add(1);

            let take = 64.min(dest.len() - offset);
            dest[offset..offset + take].copy_from_slice(&block[..take]);

            offset += take;
        }

        self.rekey();
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        wipe_bytes(&mut self.key);
    }
}
