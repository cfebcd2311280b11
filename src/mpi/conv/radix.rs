//! Radix-string conversions
//!
//! Strings use ASCII digits `0-9A-Fa-f` with an optional leading `-`.
//! Radix 16 is special-cased in both directions: reading packs nibbles
//! straight into limbs from the low end, and writing walks the limb
//! bytes from the high end. Every other radix goes through generic
//! multiply-add (reading) or divide-remainder (writing) loops.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

use crate::error::{MpiError, Result};
use crate::mpi::core::bits_to_limbs;
use crate::mpi::{LIMB_BYTES, Limb, Mpi, Sign};

/// Value of one ASCII digit, rejecting characters outside the radix.
fn digit_value(c: u8, radix: u32) -> Result<Limb> {
    let d: Limb = match c {
        b'0'..=b'9' => (c - b'0') as Limb,
        b'A'..=b'F' => (c - b'A' + 10) as Limb,
        b'a'..=b'f' => (c - b'a' + 10) as Limb,
        _ => return Err(MpiError::InvalidCharacter),
    };

    if d >= radix as Limb {
        return Err(MpiError::InvalidCharacter);
    }

    Ok(d)
}

impl Mpi {
    /// Parses a signed value from an ASCII string in the given radix.
    ///
    /// The radix must lie in `2..=16`; anything else fails with
    /// [`MpiError::InvalidInput`]. A character that is not a digit of
    /// the radix fails with [`MpiError::InvalidCharacter`].
    pub fn from_radix_str(s: &str, radix: u32) -> Result<Mpi> {
        if !(2..=16).contains(&radix) {
            return Err(MpiError::InvalidInput);
        }

        let bytes = s.as_bytes();
        let mut x = Mpi::new();
        x.set_int(0);

        if radix == 16 {
            let nibbles_per_limb = 2 * LIMB_BYTES;

            x.grow(bits_to_limbs(bytes.len() * 4))?;

            for (j, i) in (1..=bytes.len()).rev().enumerate() {
                if i == 1 && bytes[i - 1] == b'-' {
                    x.sign = Sign::Neg;
                    break;
                }

                let d = digit_value(bytes[i - 1], radix)?;
                x.limbs[j / nibbles_per_limb] |= d << ((j % nibbles_per_limb) * 4);
            }
        } else {
            for (i, &c) in bytes.iter().enumerate() {
                if i == 0 && c == b'-' {
                    x.sign = Sign::Neg;
                    continue;
                }

                let d = digit_value(c, radix)?;
                let t = x.mul_int(radix as Limb)?;

                x = if t.sign == Sign::Pos {
                    t.add_int(d as i64)?
                } else {
                    t.sub_int(d as i64)?
                };
            }
        }

        Ok(x)
    }

    /// Renders the value as an ASCII string in the given radix, using
    /// uppercase digits and a leading `-` for negative values.
    ///
    /// The radix must lie in `2..=16`.
    pub fn to_radix_string(&self, radix: u32) -> Result<String> {
        if !(2..=16).contains(&radix) {
            return Err(MpiError::InvalidInput);
        }

        let mut out = String::new();

        if self.is_negative() {
            out.push('-');
        }

        if radix == 16 {
            // Walk the limb bytes from the most significant end,
            // skipping leading zero bytes but always emitting the last.
            let mut started = false;

            for i in (1..=self.limbs.len()).rev() {
                for j in (1..=LIMB_BYTES).rev() {
                    let byte = (self.limbs[i - 1] >> ((j - 1) * 8)) as u8;

                    if byte == 0 && !started && (i + j) != 2 {
                        continue;
                    }

                    const HEX: &[u8; 16] = b"0123456789ABCDEF";
                    out.push(HEX[(byte >> 4) as usize] as char);
                    out.push(HEX[(byte & 0xF) as usize] as char);
                    started = true;
                }
            }
        } else {
            let mut t = self.abs();
            let mut digits = Vec::new();

            loop {
                let r = t.mod_int(radix as Limb)?;
                let (q, _) = t.div_int(radix as i64)?;
                t = q;

                digits.push(if r < 10 {
                    b'0' + r as u8
                } else {
                    b'A' + (r as u8 - 10)
                });

                if t.cmp_int(0) == Ordering::Equal {
                    break;
                }
            }

            for &d in digits.iter().rev() {
                out.push(d as char);
            }
        }

        Ok(out)
    }
}

impl Display for Mpi {
    /// Renders in hexadecimal, matching [`Mpi::to_radix_string`] with
    /// radix 16.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let s = self.to_radix_string(16).map_err(|_| core::fmt::Error)?;
        f.write_str(&s)
    }
}
