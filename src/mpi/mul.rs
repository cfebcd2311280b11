//! Schoolbook multiplication
//!
//! The multiply-accumulate kernel is the inner loop shared with
//! Montgomery multiplication: it adds `s * b` into `d` and then settles
//! the outgoing carry into the limbs of `d` above the scanned range.

use crate::error::Result;
use crate::mpi::core::DoubleLimb;
use crate::mpi::{LIMB_BITS, Limb, Mpi};

/// Multiply-accumulate: `d[..s.len()] += s * b`, then propagates the
/// carry into `d[s.len()..]` until it settles into a limb without
/// overflowing.
///
/// `d` must extend at least one limb past `s.len()`; the caller sizes
/// the destination so the carry always has room to land.
pub(crate) fn mul_hlp(s: &[Limb], d: &mut [Limb], b: Limb) {
    let mut carry: Limb = 0;

    for i in 0..s.len() {
        let t = (s[i] as DoubleLimb) * (b as DoubleLimb)
            + (d[i] as DoubleLimb)
            + (carry as DoubleLimb);
        d[i] = t as Limb;
        carry = (t >> LIMB_BITS) as Limb;
    }

    let mut i = s.len();
    loop {
        let (v, c) = d[i].overflowing_add(carry);
        d[i] = v;
        carry = c as Limb;
        i += 1;

        if carry == 0 {
            break;
        }
    }
}

impl Mpi {
    /// Signed multiplication `self * other`.
    ///
    /// The result sign is the product of the operand signs; a zero
    /// result keeps that sign uncanonicalised, which comparisons treat
    /// as equal to zero. Both operands may be the same integer.
    pub fn mul(&self, other: &Mpi) -> Result<Mpi> {
        let i = self.used_limbs();
        let j = other.used_limbs();

        let mut x = Mpi::new();
        x.grow(i + j)?;

        for jj in (0..j).rev() {
            mul_hlp(&self.limbs[..i], &mut x.limbs[jj..], other.limbs[jj]);
        }

        x.sign = self.sign.product(other.sign);

        Ok(x)
    }

    /// Multiplication by a single unsigned word.
    pub fn mul_int(&self, b: Limb) -> Result<Mpi> {
        self.mul(&Mpi::from_limb(b))
    }
}
