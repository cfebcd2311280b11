//! Primitive-integer conversions
//!
//! Widening constructors are provided as `From` implementations for the
//! common unsigned and signed machine integers. Narrowing back out is
//! checked: a value that does not fit, or a negative value requested as
//! unsigned, is an error.

use crate::error::MpiError;
use crate::mpi::{LIMB_BITS, Limb, Mpi, Sign};

fn from_u64(v: u64) -> Mpi {
    let mut x = Mpi::new();
    let mut v = v;
    let mut idx = 0;

    while v != 0 || idx == 0 {
        x.limbs.push(v as Limb);
        idx += 1;
        v = v.checked_shr(LIMB_BITS as u32).unwrap_or(0);
    }

    x
}

impl From<u8> for Mpi {
    fn from(v: u8) -> Mpi {
        from_u64(v as u64)
    }
}

impl From<u16> for Mpi {
    fn from(v: u16) -> Mpi {
        from_u64(v as u64)
    }
}

impl From<u32> for Mpi {
    fn from(v: u32) -> Mpi {
        from_u64(v as u64)
    }
}

impl From<u64> for Mpi {
    fn from(v: u64) -> Mpi {
        from_u64(v)
    }
}

impl From<usize> for Mpi {
    fn from(v: usize) -> Mpi {
        from_u64(v as u64)
    }
}

impl From<i32> for Mpi {
    fn from(v: i32) -> Mpi {
        Mpi::from(v as i64)
    }
}

impl From<i64> for Mpi {
    fn from(v: i64) -> Mpi {
        let mut x = from_u64(v.unsigned_abs());

        if v < 0 {
            x.sign = Sign::Neg;
        }

        x
    }
}

impl TryFrom<&Mpi> for u64 {
    type Error = MpiError;

    fn try_from(x: &Mpi) -> Result<u64, MpiError> {
        if x.is_negative() {
            return Err(MpiError::NegativeValue);
        }

        if x.bit_len() > 64 {
            return Err(MpiError::BufferTooSmall);
        }

        let mut v: u64 = 0;

        for i in (0..x.used_limbs()).rev() {
            v = v.checked_shl(LIMB_BITS as u32).unwrap_or(0);
            v |= x.limbs[i] as u64;
        }

        Ok(v)
    }
}
