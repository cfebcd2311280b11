//! Big-endian byte-array conversions
//!
//! This is the persistent representation used for key material: plain
//! unsigned bytes, most significant first. Reading strips leading zero
//! bytes; writing pads with leading zeros to the requested width.

use crate::error::{MpiError, Result};
use crate::mpi::core::bytes_to_limbs;
use crate::mpi::{LIMB_BYTES, Limb, MAX_FILL_BYTES, Mpi};
use crate::rng::SecureRandom;
use crate::wipe::wipe_bytes;

impl Mpi {
    /// Imports an unsigned value from big-endian bytes.
    pub fn from_bytes_be(buf: &[u8]) -> Result<Mpi> {
        let mut skip = 0;
        while skip < buf.len() && buf[skip] == 0 {
            skip += 1;
        }

        let mut x = Mpi::new();
        x.grow(bytes_to_limbs(buf.len() - skip))?;
        x.set_int(0);

        for (j, i) in ((skip + 1)..=buf.len()).rev().enumerate() {
            x.limbs[j / LIMB_BYTES] |= (buf[i - 1] as Limb) << ((j % LIMB_BYTES) * 8);
        }

        Ok(x)
    }

    /// Exports the magnitude as big-endian bytes into `buf`, padding
    /// with leading zeros.
    ///
    /// Fails with [`MpiError::BufferTooSmall`] when the magnitude does
    /// not fit.
    pub fn write_bytes_be(&self, buf: &mut [u8]) -> Result<()> {
        let n = self.byte_len();

        if buf.len() < n {
            return Err(MpiError::BufferTooSmall);
        }

        buf.fill(0);

        let mut i = buf.len();
        for j in 0..n {
            i -= 1;
            buf[i] = (self.limbs[j / LIMB_BYTES] >> ((j % LIMB_BYTES) * 8)) as u8;
        }

        Ok(())
    }

    /// Exports the magnitude as minimum-width big-endian bytes.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.byte_len()];

        // Cannot fail: the buffer is sized to fit by construction.
        let _ = self.write_bytes_be(&mut buf);

        buf
    }

    /// Draws a uniformly random magnitude of `size` bytes.
    ///
    /// The draw goes through a byte buffer so the result is identical
    /// across platforms of either endianness when the source is
    /// deterministic. The buffer is wiped afterwards. Fails with
    /// [`MpiError::InvalidInput`] for draws above [`MAX_FILL_BYTES`].
    pub fn random<R: SecureRandom + ?Sized>(size: usize, rng: &mut R) -> Result<Mpi> {
        if size > MAX_FILL_BYTES {
            return Err(MpiError::InvalidInput);
        }

        let mut buf = vec![0u8; size];
        rng.fill_bytes(&mut buf);

        let x = Mpi::from_bytes_be(&buf);
        wipe_bytes(&mut buf);

        x
    }
}
