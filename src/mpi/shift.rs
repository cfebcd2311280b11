//! Bit shifts
//!
//! Both directions split the count into a whole-limb move and an
//! intra-limb shift with a rolling carry of the displaced bits. Left
//! shifts grow the buffer first; right shifts never shrink it.

use crate::error::Result;
use crate::mpi::core::bits_to_limbs;
use crate::mpi::{LIMB_BITS, Mpi};

impl Mpi {
    /// In-place left shift `self <<= count`.
    pub fn shl_assign(&mut self, count: usize) -> Result<()> {
        let v0 = count / LIMB_BITS;
        let t1 = count % LIMB_BITS;

        let bits = self.bit_len() + count;

        if self.limbs.len() * LIMB_BITS < bits {
            self.grow(bits_to_limbs(bits))?;
        }

        if v0 > 0 {
            for i in (v0..self.limbs.len()).rev() {
                self.limbs[i] = self.limbs[i - v0];
            }

            for i in 0..v0 {
                self.limbs[i] = 0;
            }
        }

        if t1 > 0 {
            let mut r0 = 0;

            for i in v0..self.limbs.len() {
                let r1 = self.limbs[i] >> (LIMB_BITS - t1);
                self.limbs[i] = (self.limbs[i] << t1) | r0;
                r0 = r1;
            }
        }

        Ok(())
    }

    /// In-place right shift `self >>= count`. Shifting past the total
    /// bit width leaves zero.
    pub fn shr_assign(&mut self, count: usize) {
        let v0 = count / LIMB_BITS;
        let v1 = count % LIMB_BITS;

        if v0 > self.limbs.len() || (v0 == self.limbs.len() && v1 > 0) {
            self.set_int(0);
            return;
        }

        if v0 > 0 {
            let len = self.limbs.len();

            for i in 0..len - v0 {
                self.limbs[i] = self.limbs[i + v0];
            }

            for i in len - v0..len {
                self.limbs[i] = 0;
            }
        }

        if v1 > 0 {
            let mut r0 = 0;

            for i in (0..self.limbs.len()).rev() {
                let r1 = self.limbs[i] << (LIMB_BITS - v1);
                self.limbs[i] = (self.limbs[i] >> v1) | r0;
                r0 = r1;
            }
        }
    }

    /// Left shift into a fresh integer.
    pub fn shl(&self, count: usize) -> Result<Mpi> {
        let mut x = self.clone();
        x.shl_assign(count)?;
        Ok(x)
    }

    /// Right shift into a fresh integer.
    pub fn shr(&self, count: usize) -> Mpi {
        let mut x = self.clone();
        x.shr_assign(count);
        x
    }
}
