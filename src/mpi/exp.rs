//! Montgomery-form modular exponentiation
//!
//! Multiplication modulo an odd `N` is done in Montgomery form: with
//! `R = 2^(n * LIMB_BITS)` for an `n`-limb modulus, `montmul` computes
//! `A * B * R^-1 mod N` using only word multiplications and shifts by
//! whole limbs. The exponent is scanned with a sliding window over a
//! table of odd powers.
//!
//! The scratch buffer holds `2n + 2` limbs with the top two kept zero:
//! each round writes the retired low limb into the slot the
//! accumulation just vacated, so the division by `2^LIMB_BITS` is a
//! plain one-limb advance of the working window.

use core::cmp::Ordering;

use crate::error::{MpiError, Result};
use crate::mpi::mul::mul_hlp;
use crate::mpi::ops::sub_hlp;
use crate::mpi::{LIMB_BITS, Limb, Mpi, Sign, WINDOW_SIZE};

/// Computes `-N[0]^-1 mod 2^LIMB_BITS` by Newton doubling from a seed
/// correct to three bits.
pub(crate) fn montg_init(n: &Mpi) -> Limb {
    let m0 = n.limbs[0];

    let mut x = m0;
    x = x.wrapping_add((m0.wrapping_add(2) & 4) << 1);

    let mut bits = LIMB_BITS;
    while bits >= 8 {
        x = x.wrapping_mul((2 as Limb).wrapping_sub(m0.wrapping_mul(x)));
        bits /= 2;
    }

    x.wrapping_neg()
}

/// One full Montgomery accumulation pass into the scratch buffer:
/// `t <- (a * b + u * N) / R` with the per-round multiplier `u` chosen
/// so every intermediate is divisible by the limb base.
fn mont_accumulate(t: &mut Mpi, a: &[Limb], b: &[Limb], n: &[Limb], mm: Limb) {
    t.limbs.fill(0);

    let nn = n.len();
    let m = if b.len() < nn { b.len() } else { nn };

    for i in 0..nn {
        let d = &mut t.limbs[i..];

        let u0 = a[i];
        let u1 = d[0].wrapping_add(u0.wrapping_mul(b[0])).wrapping_mul(mm);

        mul_hlp(&b[..m], d, u0);
        mul_hlp(&n[..nn], d, u1);

        d[0] = u0;
        d[nn + 2] = 0;
    }
}

/// Copies the accumulated window back into `a` and reduces once if it
/// reached the modulus. The other branch performs a subtraction of
/// equal cost into the scratch buffer so both paths do the same work.
fn mont_finish(a: &mut Mpi, n: &Mpi, t: &mut Mpi) {
    let nn = n.limbs.len();

    a.limbs[..nn + 1].copy_from_slice(&t.limbs[nn..2 * nn + 1]);

    if a.cmp_abs(n) != Ordering::Less {
        sub_hlp(nn, &n.limbs[..nn], &mut a.limbs);
    } else {
        sub_hlp(nn, &a.limbs[..nn], &mut t.limbs);
    }
}

/// Montgomery multiplication `a <- a * b * R^-1 mod N`.
///
/// `a` must hold at least `n + 1` limbs and `t` at least `2n + 2`.
pub(crate) fn montmul(a: &mut Mpi, b: &Mpi, n: &Mpi, mm: Limb, t: &mut Mpi) {
    mont_accumulate(t, &a.limbs, &b.limbs, &n.limbs, mm);
    mont_finish(a, n, t);
}

/// Montgomery squaring `a <- a * a * R^-1 mod N`.
pub(crate) fn montsqr(a: &mut Mpi, n: &Mpi, mm: Limb, t: &mut Mpi) {
    mont_accumulate(t, &a.limbs, &a.limbs, &n.limbs, mm);
    mont_finish(a, n, t);
}

/// Montgomery reduction `a <- a * R^-1 mod N`, leaving Montgomery form.
pub(crate) fn montred(a: &mut Mpi, n: &Mpi, mm: Limb, t: &mut Mpi) {
    let one = Mpi::from_limb(1);
    montmul(a, &one, n, mm, t);
}

impl Mpi {
    /// Sliding-window modular exponentiation `self^exponent mod modulus`.
    ///
    /// The modulus must be positive and odd, the exponent non-negative.
    /// When `rr_cache` is supplied, the `R^2 mod N` constant is read
    /// from it if already computed and stored into it otherwise, which
    /// makes repeated exponentiations under one modulus cheaper.
    pub fn exp_mod(
        &self,
        exponent: &Mpi,
        modulus: &Mpi,
        rr_cache: Option<&mut Mpi>,
    ) -> Result<Mpi> {
        if modulus.cmp_int(0) != Ordering::Greater
            || modulus.limbs.first().copied().unwrap_or(0) & 1 == 0
        {
            return Err(MpiError::InvalidInput);
        }

        if exponent.cmp_int(0) == Ordering::Less {
            return Err(MpiError::InvalidInput);
        }

        let mm = montg_init(modulus);

        let bits = exponent.bit_len();
        let mut wsize: usize = if bits > 671 {
            6
        } else if bits > 239 {
            5
        } else if bits > 79 {
            4
        } else if bits > 23 {
            3
        } else {
            1
        };

        if wsize > WINDOW_SIZE {
            wsize = WINDOW_SIZE;
        }

        let j = modulus.limbs.len() + 1;

        let mut x = Mpi::new();
        x.grow(j)?;
        let mut t = Mpi::new();
        t.grow(j * 2)?;

        // A negative base is exponentiated by magnitude and corrected
        // at the end.
        let a_abs;
        let base = if self.sign == Sign::Neg {
            a_abs = self.abs();
            &a_abs
        } else {
            self
        };

        let mut rr = Mpi::new();
        match rr_cache {
            Some(cache) if !cache.limbs.is_empty() => {
                rr.assign(cache)?;
            }
            cache => {
                rr.set_int(1);
                rr.shl_assign(modulus.limbs.len() * 2 * LIMB_BITS)?;
                rr = rr.modulo(modulus)?;

                if let Some(cache) = cache {
                    cache.assign(&rr)?;
                }
            }
        }

        let mut w = vec![Mpi::new(); 1 << wsize];

        // W[1] = base * R mod N
        if base.cmp(modulus) != Ordering::Less {
            w[1] = base.modulo(modulus)?;
        } else {
            w[1].assign(base)?;
        }
        w[1].grow(j)?;
        montmul(&mut w[1], &rr, modulus, mm, &mut t);

        // X = R mod N
        x.assign(&rr)?;
        x.grow(j)?;
        montred(&mut x, modulus, mm, &mut t);

        if wsize > 1 {
            // W[2^(w-1)] by repeated squaring, then each further odd
            // power by one multiplication.
            let anchor = 1usize << (wsize - 1);

            w[anchor] = w[1].clone();
            w[anchor].grow(j)?;

            for _ in 0..wsize - 1 {
                montsqr(&mut w[anchor], modulus, mm, &mut t);
            }

            for idx in anchor + 1..1 << wsize {
                let (head, tail) = w.split_at_mut(idx);
                tail[0] = head[idx - 1].clone();
                tail[0].grow(j)?;
                montmul(&mut tail[0], &head[1], modulus, mm, &mut t);
            }
        }

        // Exponent scan: skip leading zeros, square through runs of
        // zeros, and gather set bits into a window that is flushed with
        // `wsize` squarings and one table multiplication.
        let mut nblimbs = exponent.limbs.len();
        let mut bufsize = 0;
        let mut nbits = 0;
        let mut wbits: usize = 0;
        let mut state = 0;

        loop {
            if bufsize == 0 {
                if nblimbs == 0 {
                    break;
                }

                nblimbs -= 1;
                bufsize = LIMB_BITS;
            }

            bufsize -= 1;

            let ei = (exponent.limbs[nblimbs] >> bufsize) & 1;

            if ei == 0 && state == 0 {
                continue;
            }

            if ei == 0 && state == 1 {
                montsqr(&mut x, modulus, mm, &mut t);
                continue;
            }

            state = 2;

            nbits += 1;
            wbits |= (ei as usize) << (wsize - nbits);

            if nbits == wsize {
                for _ in 0..wsize {
                    montsqr(&mut x, modulus, mm, &mut t);
                }

                montmul(&mut x, &w[wbits], modulus, mm, &mut t);

                state = 1;
                nbits = 0;
                wbits = 0;
            }
        }

        // Flush a partial window bit by bit.
        for _ in 0..nbits {
            montsqr(&mut x, modulus, mm, &mut t);

            wbits <<= 1;

            if wbits & (1 << wsize) != 0 {
                montmul(&mut x, &w[1], modulus, mm, &mut t);
            }
        }

        montred(&mut x, modulus, mm, &mut t);

        if self.sign == Sign::Neg
            && exponent.limbs.first().copied().unwrap_or(0) & 1 == 1
        {
            x.sign = Sign::Neg;
            x = modulus.add(&x)?;
        }

        Ok(x)
    }
}
