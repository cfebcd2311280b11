//! The multi-precision integer container
//!
//! Defines the limb type, the [`Mpi`] struct and its lifecycle: growth,
//! assignment, small-integer initialization, and the bit-level queries
//! the arithmetic layers build on.

use crate::error::{MpiError, Result};
use crate::mpi::MAX_LIMBS;
use crate::wipe::wipe_limbs;

/// One word of the big-integer representation, the natural machine word.
#[cfg(target_pointer_width = "64")]
pub type Limb = u64;

/// One word of the big-integer representation, the natural machine word.
#[cfg(not(target_pointer_width = "64"))]
pub type Limb = u32;

/// Double-width product type for the multiply kernels.
#[cfg(target_pointer_width = "64")]
pub(crate) type DoubleLimb = u128;

/// Double-width product type for the multiply kernels.
#[cfg(not(target_pointer_width = "64"))]
pub(crate) type DoubleLimb = u64;

/// Bytes per limb.
pub const LIMB_BYTES: usize = size_of::<Limb>();

/// Bits per limb.
pub const LIMB_BITS: usize = LIMB_BYTES * 8;

/// Bits per half limb, used by the quotient-estimation and
/// single-word-modulus recurrences.
pub(crate) const HALF_LIMB_BITS: usize = LIMB_BITS / 2;

/// Number of limbs needed to hold `bits` bits.
pub(crate) const fn bits_to_limbs(bits: usize) -> usize {
    bits.div_ceil(LIMB_BITS)
}

/// Number of limbs needed to hold `bytes` bytes.
pub(crate) const fn bytes_to_limbs(bytes: usize) -> usize {
    bytes.div_ceil(LIMB_BYTES)
}

/// Sign of an [`Mpi`]. Zero is canonically positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Negative value.
    Neg,
    /// Zero or positive value.
    Pos,
}

impl Sign {
    /// The opposite sign.
    pub fn flip(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Sign of a product of two values with these signs.
    pub fn product(self, other: Sign) -> Sign {
        if self == other { Sign::Pos } else { Sign::Neg }
    }
}

/// Signed arbitrary-precision integer.
///
/// The value is `sign * Σ limbs[i] * 2^(i * LIMB_BITS)`: limbs are
/// little-endian machine words. `limbs.len()` is the allocated capacity,
/// not the magnitude; high limbs may be zero and are never trimmed.
/// A freshly created integer owns no buffer at all.
///
/// The limb buffer is wiped through a volatile view before it is
/// released, both on drop and on reallocation.
#[derive(Debug)]
pub struct Mpi {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<Limb>,
}

impl Mpi {
    /// Creates the integer zero, without allocating.
    pub fn new() -> Self {
        Mpi { sign: Sign::Pos, limbs: Vec::new() }
    }

    /// Builds a single-limb magnitude. Internal shortcut for the
    /// small-operand paths of multiplication and Montgomery reduction.
    pub(crate) fn from_limb(l: Limb) -> Self {
        Mpi { sign: Sign::Pos, limbs: vec![l] }
    }

    /// The sign flag. Zero may transiently carry a negative flag inside
    /// intermediate computations; comparisons treat it as positive.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Whether the value is numerically zero.
    pub fn is_zero(&self) -> bool {
        self.used_limbs() == 0
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Neg && !self.is_zero()
    }

    /// The magnitude of this value, as a fresh integer.
    pub fn abs(&self) -> Mpi {
        Mpi { sign: Sign::Pos, limbs: self.limbs.clone() }
    }

    /// Ensures the buffer holds at least `nblimbs` limbs.
    ///
    /// Never shrinks. New high limbs are zero. The old buffer, if one is
    /// replaced, is wiped before release.
    pub fn grow(&mut self, nblimbs: usize) -> Result<()> {
        if nblimbs > MAX_LIMBS {
            return Err(MpiError::AllocFailed);
        }

        if self.limbs.len() < nblimbs {
            let mut fresh = vec![0 as Limb; nblimbs];
            fresh[..self.limbs.len()].copy_from_slice(&self.limbs);
            wipe_limbs(&mut self.limbs);
            self.limbs = fresh;
        }

        Ok(())
    }

    /// Sets the value to a small signed integer.
    pub fn set_int(&mut self, z: i64) {
        self.limbs.fill(0);
        self.sign = if z < 0 { Sign::Neg } else { Sign::Pos };

        let mut magnitude = z.unsigned_abs();
        let mut idx = 0;

        while magnitude != 0 || idx == 0 {
            let limb = magnitude as Limb;

            if idx < self.limbs.len() {
                self.limbs[idx] = limb;
            } else {
                self.limbs.push(limb);
            }

            idx += 1;
            magnitude = magnitude.checked_shr(LIMB_BITS as u32).unwrap_or(0);
        }
    }

    /// Copies the value of `y` into `self`, reusing the existing buffer
    /// where possible. Copying from a never-allocated integer releases
    /// the buffer entirely.
    pub fn assign(&mut self, y: &Mpi) -> Result<()> {
        if core::ptr::eq(self, y) {
            return Ok(());
        }

        if y.limbs.is_empty() {
            self.clear();
            return Ok(());
        }

        let used = y.used_limbs().max(1);

        self.sign = y.sign;
        self.grow(used)?;
        self.limbs.fill(0);
        self.limbs[..used].copy_from_slice(&y.limbs[..used]);

        Ok(())
    }

    /// Exchanges the contents of two integers without copying limbs.
    pub fn swap(&mut self, other: &mut Mpi) {
        core::mem::swap(self, other);
    }

    /// Wipes and releases the buffer, resetting to a fresh zero.
    pub fn clear(&mut self) {
        wipe_limbs(&mut self.limbs);
        self.limbs = Vec::new();
        self.sign = Sign::Pos;
    }

    /// Count of significant limbs: the index just past the highest
    /// non-zero limb, or zero for a numerically zero value.
    pub(crate) fn used_limbs(&self) -> usize {
        let mut i = self.limbs.len();

        while i > 0 {
            if self.limbs[i - 1] != 0 {
                return i;
            }
            i -= 1;
        }

        0
    }

    /// 1-based index of the most significant set bit, zero for zero.
    pub fn bit_len(&self) -> usize {
        let used = self.used_limbs();

        if used == 0 {
            return 0;
        }

        let top = self.limbs[used - 1];
        (used - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }

    /// Number of trailing zero bits, zero for zero.
    pub fn lsb(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate() {
            if limb != 0 {
                return i * LIMB_BITS + limb.trailing_zeros() as usize;
            }
        }

        0
    }

    /// Minimum number of bytes needed to hold the magnitude.
    pub fn byte_len(&self) -> usize {
        self.bit_len().div_ceil(8)
    }
}

impl Default for Mpi {
    fn default() -> Self {
        Mpi::new()
    }
}

impl Clone for Mpi {
    fn clone(&self) -> Self {
        Mpi { sign: self.sign, limbs: self.limbs.clone() }
    }
}

impl Drop for Mpi {
    fn drop(&mut self) {
        wipe_limbs(&mut self.limbs);
    }
}
