//! Addition and subtraction
//!
//! The unsigned in-place forms are the carry/borrow workhorses; the
//! signed forms dispatch on the operand signs and pick the larger
//! magnitude as the minuend. Results that happen to be zero may keep the
//! sign the dispatch computed; comparisons canonicalise.

use core::cmp::Ordering;

use crate::error::{MpiError, Result};
use crate::mpi::{Limb, Mpi, Sign};

/// Subtracts `s` from `d` in place over `n` limbs, propagating the
/// borrow into the limbs of `d` above `n` until it settles.
///
/// The caller guarantees that `d` holds at least `n` limbs and that the
/// overall difference is non-negative, so the borrow always settles
/// inside `d`.
pub(crate) fn sub_hlp(n: usize, s: &[Limb], d: &mut [Limb]) {
    let mut borrow: Limb = 0;

    for i in 0..n {
        let z = (d[i] < borrow) as Limb;
        d[i] = d[i].wrapping_sub(borrow);
        borrow = ((d[i] < s[i]) as Limb) + z;
        d[i] = d[i].wrapping_sub(s[i]);
    }

    let mut i = n;
    while borrow != 0 {
        let z = (d[i] < borrow) as Limb;
        d[i] = d[i].wrapping_sub(borrow);
        borrow = z;
        i += 1;
    }
}

impl Mpi {
    /// In-place `|self| += |b|`. The result is always positive.
    pub(crate) fn uadd_assign(&mut self, b: &Mpi) -> Result<()> {
        self.sign = Sign::Pos;

        let j = b.used_limbs();
        self.grow(j)?;

        let mut carry: Limb = 0;

        for i in 0..j {
            let (t, c1) = self.limbs[i].overflowing_add(carry);
            let (t, c2) = t.overflowing_add(b.limbs[i]);
            self.limbs[i] = t;
            carry = c1 as Limb + c2 as Limb;
        }

        let mut i = j;
        while carry != 0 {
            if i >= self.limbs.len() {
                self.grow(i + 1)?;
            }

            let (t, c) = self.limbs[i].overflowing_add(carry);
            self.limbs[i] = t;
            carry = c as Limb;
            i += 1;
        }

        Ok(())
    }

    /// In-place `|self| -= |b|`. Fails with [`MpiError::NegativeValue`]
    /// when `|self| < |b|`. The result is always positive.
    pub(crate) fn usub_assign(&mut self, b: &Mpi) -> Result<()> {
        if self.cmp_abs(b) == Ordering::Less {
            return Err(MpiError::NegativeValue);
        }

        self.sign = Sign::Pos;

        let n = b.used_limbs();
        sub_hlp(n, &b.limbs[..n], &mut self.limbs);

        Ok(())
    }

    /// In-place signed addition `self += b`.
    pub(crate) fn add_assign_mpi(&mut self, b: &Mpi) -> Result<()> {
        let s = self.sign;

        if self.sign != b.sign {
            if self.cmp_abs(b) != Ordering::Less {
                self.usub_assign(b)?;
                self.sign = s;
            } else {
                let mut t = Mpi::new();
                t.assign(b)?;
                t.usub_assign(self)?;
                self.assign(&t)?;
                self.sign = s.flip();
            }
        } else {
            self.uadd_assign(b)?;
            self.sign = s;
        }

        Ok(())
    }

    /// In-place signed subtraction `self -= b`.
    pub(crate) fn sub_assign_mpi(&mut self, b: &Mpi) -> Result<()> {
        let s = self.sign;

        if self.sign == b.sign {
            if self.cmp_abs(b) != Ordering::Less {
                self.usub_assign(b)?;
                self.sign = s;
            } else {
                let mut t = Mpi::new();
                t.assign(b)?;
                t.usub_assign(self)?;
                self.assign(&t)?;
                self.sign = s.flip();
            }
        } else {
            self.uadd_assign(b)?;
            self.sign = s;
        }

        Ok(())
    }

    /// Unsigned addition `|self| + |other|`.
    pub fn add_abs(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.uadd_assign(other)?;
        Ok(x)
    }

    /// Unsigned subtraction `|self| - |other|`.
    ///
    /// Fails with [`MpiError::NegativeValue`] when `|self| < |other|`.
    pub fn sub_abs(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.usub_assign(other)?;
        Ok(x)
    }

    /// Signed addition.
    pub fn add(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.add_assign_mpi(other)?;
        Ok(x)
    }

    /// Signed subtraction.
    pub fn sub(&self, other: &Mpi) -> Result<Mpi> {
        let mut x = self.clone();
        x.sub_assign_mpi(other)?;
        Ok(x)
    }

    /// Signed addition of a small integer.
    pub fn add_int(&self, b: i64) -> Result<Mpi> {
        self.add(&Mpi::from(b))
    }

    /// Signed subtraction of a small integer.
    pub fn sub_int(&self, b: i64) -> Result<Mpi> {
        self.sub(&Mpi::from(b))
    }
}
