//! Greatest common divisor and modular inverse
//!
//! Both use the binary method: powers of two are handled with shifts,
//! everything else with subtraction, so no division is needed. The
//! inverse additionally tracks Bezout coefficients with the usual
//! parity-preserving halving rule.

use core::cmp::Ordering;

use crate::error::{MpiError, Result};
use crate::mpi::{Mpi, Sign};

impl Mpi {
    /// Greatest common divisor of the magnitudes of `self` and `other`.
    pub fn gcd(&self, other: &Mpi) -> Result<Mpi> {
        let mut ta = Mpi::new();
        let mut tb = Mpi::new();
        ta.assign(self)?;
        tb.assign(other)?;

        // Factor out the common power of two up front; it multiplies
        // back into the result at the end.
        let lz = ta.lsb().min(tb.lsb());

        ta.shr_assign(lz);
        tb.shr_assign(lz);

        ta.sign = Sign::Pos;
        tb.sign = Sign::Pos;

        while !ta.is_zero() {
            ta.shr_assign(ta.lsb());
            tb.shr_assign(tb.lsb());

            if ta.cmp(&tb) != Ordering::Less {
                ta.usub_assign(&tb)?;
                ta.shr_assign(1);
            } else {
                tb.usub_assign(&ta)?;
                tb.shr_assign(1);
            }
        }

        tb.shl_assign(lz)?;

        Ok(tb)
    }

    /// Modular inverse: the `x` in `[0, n)` with `self * x ≡ 1 (mod n)`.
    ///
    /// Fails with [`MpiError::InvalidInput`] for a non-positive modulus
    /// and [`MpiError::NotAcceptable`] when `self` and `n` are not
    /// coprime.
    pub fn inv_mod(&self, n: &Mpi) -> Result<Mpi> {
        if n.cmp_int(0) != Ordering::Greater {
            return Err(MpiError::InvalidInput);
        }

        let g = self.gcd(n)?;
        if g.cmp_int(1) != Ordering::Equal {
            return Err(MpiError::NotAcceptable);
        }

        let ta = self.modulo(n)?;
        let mut tu = Mpi::new();
        tu.assign(&ta)?;
        let mut tb = Mpi::new();
        tb.assign(n)?;
        let mut tv = Mpi::new();
        tv.assign(n)?;

        let mut u1 = Mpi::new();
        let mut u2 = Mpi::new();
        let mut v1 = Mpi::new();
        let mut v2 = Mpi::new();
        u1.set_int(1);
        u2.set_int(0);
        v1.set_int(0);
        v2.set_int(1);

        while !tu.is_zero() {
            while tu.limbs[0] & 1 == 0 {
                tu.shr_assign(1);

                // Keep the coefficients even before halving them; the
                // adjustment is a no-op modulo n.
                if u1.limbs[0] & 1 != 0 || u2.limbs[0] & 1 != 0 {
                    u1.add_assign_mpi(&tb)?;
                    u2.sub_assign_mpi(&ta)?;
                }

                u1.shr_assign(1);
                u2.shr_assign(1);
            }

            while tv.limbs[0] & 1 == 0 {
                tv.shr_assign(1);

                if v1.limbs[0] & 1 != 0 || v2.limbs[0] & 1 != 0 {
                    v1.add_assign_mpi(&tb)?;
                    v2.sub_assign_mpi(&ta)?;
                }

                v1.shr_assign(1);
                v2.shr_assign(1);
            }

            if tu.cmp(&tv) != Ordering::Less {
                tu.sub_assign_mpi(&tv)?;
                u1.sub_assign_mpi(&v1)?;
                u2.sub_assign_mpi(&v2)?;
            } else {
                tv.sub_assign_mpi(&tu)?;
                v1.sub_assign_mpi(&u1)?;
                v2.sub_assign_mpi(&u2)?;
            }
        }

        while v1.cmp_int(0) == Ordering::Less {
            v1.add_assign_mpi(n)?;
        }

        while v1.cmp(n) != Ordering::Less {
            v1.sub_assign_mpi(n)?;
        }

        Ok(v1)
    }
}
