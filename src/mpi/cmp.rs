//! Magnitude and signed comparison
//!
//! Comparisons never trust `limbs.len()`: both operands are scanned from
//! the top for their first significant limb, so stale zero high limbs do
//! not affect ordering. A transient negative zero compares equal to
//! zero.

use core::cmp::Ordering;

use crate::mpi::{Mpi, Sign};

impl Mpi {
    /// Compares magnitudes, ignoring signs.
    pub fn cmp_abs(&self, other: &Mpi) -> Ordering {
        let i = self.used_limbs();
        let j = other.used_limbs();

        if i == 0 && j == 0 {
            return Ordering::Equal;
        }

        if i != j {
            return i.cmp(&j);
        }

        for k in (0..i).rev() {
            match self.limbs[k].cmp(&other.limbs[k]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }

    /// Compares against a small signed integer.
    pub fn cmp_int(&self, z: i64) -> Ordering {
        self.cmp(&Mpi::from(z))
    }
}

impl Ord for Mpi {
    fn cmp(&self, other: &Mpi) -> Ordering {
        let i = self.used_limbs();
        let j = other.used_limbs();

        if i == 0 && j == 0 {
            return Ordering::Equal;
        }

        if i > j {
            return match self.sign {
                Sign::Pos => Ordering::Greater,
                Sign::Neg => Ordering::Less,
            };
        }

        if j > i {
            return match other.sign {
                Sign::Pos => Ordering::Less,
                Sign::Neg => Ordering::Greater,
            };
        }

        if self.sign == Sign::Pos && other.sign == Sign::Neg {
            return Ordering::Greater;
        }

        if self.sign == Sign::Neg && other.sign == Sign::Pos {
            return Ordering::Less;
        }

        for k in (0..i).rev() {
            let magnitude = self.limbs[k].cmp(&other.limbs[k]);

            if magnitude != Ordering::Equal {
                return match self.sign {
                    Sign::Pos => magnitude,
                    Sign::Neg => magnitude.reverse(),
                };
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for Mpi {
    fn partial_cmp(&self, other: &Mpi) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Mpi {
    fn eq(&self, other: &Mpi) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Mpi {}
