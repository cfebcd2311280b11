//! Division and modular reduction
//!
//! Long division follows Knuth's Algorithm D: normalise the divisor so
//! its top bit is set, estimate each quotient digit from the top limbs
//! with a half-limb long-division recurrence, correct the estimate with
//! a three-limb compare loop, then multiply-subtract with an add-back
//! step for the rare overshoot.

use core::cmp::Ordering;

use crate::error::{MpiError, Result};
use crate::mpi::core::HALF_LIMB_BITS;
use crate::mpi::{LIMB_BITS, Limb, Mpi, Sign};

/// Estimates a quotient digit from the dividend limbs `(x1, x0)` and the
/// normalised divisor limb `d`, using half-limb long division with the
/// remainder-correction loops of the classic recurrence.
fn estimate_digit(x1: Limb, x0: Limb, d: Limb) -> Limb {
    let d0 = (d << HALF_LIMB_BITS) >> HALF_LIMB_BITS;
    let d1 = d >> HALF_LIMB_BITS;

    let mut q1 = x1 / d1;
    let mut r1 = x1 - d1 * q1;
    r1 <<= HALF_LIMB_BITS;
    r1 |= x0 >> HALF_LIMB_BITS;

    let m = q1.wrapping_mul(d0);
    if r1 < m {
        q1 = q1.wrapping_sub(1);
        r1 = r1.wrapping_add(d);
        while r1 >= d && r1 < m {
            q1 = q1.wrapping_sub(1);
            r1 = r1.wrapping_add(d);
        }
    }
    r1 = r1.wrapping_sub(m);

    let mut q0 = r1 / d1;
    let mut r0 = r1 - d1 * q0;
    r0 <<= HALF_LIMB_BITS;
    r0 |= (x0 << HALF_LIMB_BITS) >> HALF_LIMB_BITS;

    let m = q0.wrapping_mul(d0);
    if r0 < m {
        q0 = q0.wrapping_sub(1);
        r0 = r0.wrapping_add(d);
        while r0 >= d && r0 < m {
            q0 = q0.wrapping_sub(1);
            r0 = r0.wrapping_add(d);
        }
    }

    (q1 << HALF_LIMB_BITS) | q0
}

impl Mpi {
    /// Euclidean division: returns `(quotient, remainder)` with
    /// `self = quotient * other + remainder` and `|remainder| < |other|`.
    ///
    /// The remainder carries the sign of the dividend; the quotient sign
    /// is the product of the operand signs. Fails with
    /// [`MpiError::DivisionByZero`] for a zero divisor.
    pub fn div_rem(&self, other: &Mpi) -> Result<(Mpi, Mpi)> {
        if other.is_zero() {
            return Err(MpiError::DivisionByZero);
        }

        if self.cmp_abs(other) == Ordering::Less {
            let mut q = Mpi::new();
            q.set_int(0);
            return Ok((q, self.clone()));
        }

        let mut x = Mpi::new();
        let mut y = Mpi::new();
        x.assign(self)?;
        y.assign(other)?;
        x.sign = Sign::Pos;
        y.sign = Sign::Pos;

        let mut z = Mpi::new();
        z.grow(x.limbs.len() + 2)?;

        // Normalise so the divisor's top bit sits at the top of its
        // top limb; the same shift is applied to the dividend and
        // undone on the remainder at the end.
        let mut k = y.bit_len() % LIMB_BITS;
        if k < LIMB_BITS - 1 {
            k = LIMB_BITS - 1 - k;
            x.shl_assign(k)?;
            y.shl_assign(k)?;
        } else {
            k = 0;
        }

        let n = x.limbs.len() - 1;
        let t = y.limbs.len() - 1;

        y.shl_assign(LIMB_BITS * (n - t))?;

        while x.cmp(&y) != Ordering::Less {
            z.limbs[n - t] += 1;
            x.sub_assign_mpi(&y)?;
        }
        y.shr_assign(LIMB_BITS * (n - t));

        let mut t1 = Mpi::new();
        t1.grow(2)?;
        let mut t2 = Mpi::new();
        t2.grow(3)?;

        for i in (t + 1..=n).rev() {
            let q = if x.limbs[i] >= y.limbs[t] {
                Limb::MAX
            } else {
                estimate_digit(x.limbs[i], x.limbs[i - 1], y.limbs[t])
            };

            // Correction loop: compare the two top divisor limbs times
            // the candidate digit against the three top dividend limbs.
            z.limbs[i - t - 1] = q.wrapping_add(1);
            loop {
                z.limbs[i - t - 1] = z.limbs[i - t - 1].wrapping_sub(1);

                t1.set_int(0);
                t1.limbs[0] = if t < 1 { 0 } else { y.limbs[t - 1] };
                t1.limbs[1] = y.limbs[t];
                let t1q = t1.mul_int(z.limbs[i - t - 1])?;

                t2.set_int(0);
                t2.limbs[0] = if i < 2 { 0 } else { x.limbs[i - 2] };
                t2.limbs[1] = if i < 1 { 0 } else { x.limbs[i - 1] };
                t2.limbs[2] = x.limbs[i];

                if t1q.cmp(&t2) != Ordering::Greater {
                    break;
                }
            }

            let mut t1 = y.mul_int(z.limbs[i - t - 1])?;
            t1.shl_assign(LIMB_BITS * (i - t - 1))?;
            x.sub_assign_mpi(&t1)?;

            if x.cmp_int(0) == Ordering::Less {
                let mut back = Mpi::new();
                back.assign(&y)?;
                back.shl_assign(LIMB_BITS * (i - t - 1))?;
                x.add_assign_mpi(&back)?;
                z.limbs[i - t - 1] -= 1;
            }
        }

        let mut q = Mpi::new();
        q.assign(&z)?;
        q.sign = self.sign.product(other.sign);

        x.shr_assign(k);
        x.sign = self.sign;
        let mut r = Mpi::new();
        r.assign(&x)?;
        if r.is_zero() {
            r.sign = Sign::Pos;
        }

        Ok((q, r))
    }

    /// Division by a small signed integer.
    pub fn div_int(&self, b: i64) -> Result<(Mpi, Mpi)> {
        self.div_rem(&Mpi::from(b))
    }

    /// Reduction into `[0, other)`.
    ///
    /// Fails with [`MpiError::NegativeValue`] for a negative modulus and
    /// [`MpiError::DivisionByZero`] for a zero one.
    pub fn modulo(&self, other: &Mpi) -> Result<Mpi> {
        if other.cmp_int(0) == Ordering::Less {
            return Err(MpiError::NegativeValue);
        }

        let (_, mut r) = self.div_rem(other)?;

        while r.cmp_int(0) == Ordering::Less {
            r.add_assign_mpi(other)?;
        }

        while r.cmp(other) != Ordering::Less {
            r.sub_assign_mpi(other)?;
        }

        Ok(r)
    }

    /// Reduction by a single word, streamed through a half-limb
    /// long-division recurrence.
    ///
    /// Only small moduli are meaningful here: `b` must fit in half a
    /// limb for the recurrence to stay exact, which covers every caller
    /// in this crate (radix digits and the trial-division table).
    pub fn mod_int(&self, b: Limb) -> Result<Limb> {
        if b == 0 {
            return Err(MpiError::DivisionByZero);
        }

        if b == 1 {
            return Ok(0);
        }

        if b == 2 {
            return Ok(self.limbs.first().copied().unwrap_or(0) & 1);
        }

        let mut y: Limb = 0;

        for i in (0..self.limbs.len()).rev() {
            let x = self.limbs[i];

            y = (y << HALF_LIMB_BITS) | (x >> HALF_LIMB_BITS);
            y -= (y / b) * b;

            let x = x << HALF_LIMB_BITS;
            y = (y << HALF_LIMB_BITS) | (x >> HALF_LIMB_BITS);
            y -= (y / b) * b;
        }

        // A negative dividend leaves a residue counted from the wrong
        // end of the interval.
        if self.sign == Sign::Neg && y != 0 {
            y = b - y;
        }

        Ok(y)
    }
}
