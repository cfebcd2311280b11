//! Miller–Rabin testing and prime generation

use core::cmp::Ordering;

use crate::error::{MpiError, Result};
use crate::mpi::{LIMB_BYTES, MAX_BITS, Mpi, bits_to_limbs};
use crate::prime::sieve::check_small_factors;
use crate::rng::SecureRandom;

/// Miller–Rabin witness loop (HAC 4.24) on a positive odd candidate.
///
/// The number of rounds follows HAC table 4.4: larger candidates need
/// fewer rounds for the same error bound.
fn miller_rabin<R: SecureRandom + ?Sized>(x: &Mpi, rng: &mut R) -> Result<()> {
    // x - 1 = 2^s * r with r odd
    let w = x.sub_int(1)?;
    let s = w.lsb();
    let mut r = Mpi::new();
    r.assign(&w)?;
    r.shr_assign(s);

    let bits = x.bit_len();
    let rounds = if bits >= 1300 {
        2
    } else if bits >= 850 {
        3
    } else if bits >= 650 {
        4
    } else if bits >= 350 {
        8
    } else if bits >= 250 {
        12
    } else if bits >= 150 {
        18
    } else {
        27
    };

    let mut rr_cache = Mpi::new();

    for _ in 0..rounds {
        // pick a random witness 3 <= a < x - 1, odd
        let mut a = Mpi::random(x.limbs.len() * LIMB_BYTES, rng)?;

        if a.cmp(&w) != Ordering::Less {
            let excess = a.bit_len() - w.bit_len();
            a.shr_assign(excess + 1);
        }
        a.limbs[0] |= 3;

        let mut a = a.exp_mod(&r, x, Some(&mut rr_cache))?;

        if a.cmp(&w) == Ordering::Equal || a.cmp_int(1) == Ordering::Equal {
            continue;
        }

        let mut j = 1;
        while j < s && a.cmp(&w) != Ordering::Equal {
            a = a.mul(&a)?.modulo(x)?;

            if a.cmp_int(1) == Ordering::Equal {
                break;
            }

            j += 1;
        }

        // composite unless the squaring chain passed through x - 1
        if a.cmp(&w) != Ordering::Equal || a.cmp_int(1) == Ordering::Equal {
            return Err(MpiError::NotAcceptable);
        }
    }

    Ok(())
}

/// Combined trial-division and Miller–Rabin screen, for candidates
/// already known to be odd and at least 3.
fn passes_tests<R: SecureRandom + ?Sized>(x: &Mpi, rng: &mut R) -> Result<()> {
    if check_small_factors(x)? {
        return Ok(());
    }

    miller_rabin(x, rng)
}

/// Probabilistic primality test.
///
/// Returns `Ok(())` when the magnitude of `x` is prime with
/// overwhelming probability and [`MpiError::NotAcceptable`] when it is
/// zero, one, or composite.
pub fn is_prime<R: SecureRandom + ?Sized>(x: &Mpi, rng: &mut R) -> Result<()> {
    let xx = x.abs();

    if xx.cmp_int(0) == Ordering::Equal || xx.cmp_int(1) == Ordering::Equal {
        return Err(MpiError::NotAcceptable);
    }

    if xx.cmp_int(2) == Ordering::Equal {
        return Ok(());
    }

    passes_tests(&xx, rng)
}

/// Generates a random prime of exactly `nbits` bits.
///
/// With `safe` set, the result `p` additionally has `(p - 1) / 2` prime,
/// which is the shape wanted for Diffie–Hellman moduli. `nbits` must lie
/// in `3..=MAX_BITS`.
pub fn gen_prime<R: SecureRandom + ?Sized>(
    nbits: usize,
    safe: bool,
    rng: &mut R,
) -> Result<Mpi> {
    if !(3..=MAX_BITS).contains(&nbits) {
        return Err(MpiError::InvalidInput);
    }

    let n = bits_to_limbs(nbits);

    let mut x = Mpi::random(n * LIMB_BYTES, rng)?;

    // normalise to exactly nbits bits and force odd, not 1 mod 4
    let k = x.bit_len();
    if k < nbits {
        x.shl_assign(nbits - k)?;
    }
    if k > nbits {
        x.shr_assign(k - nbits);
    }

    x.limbs[0] |= 3;

    if !safe {
        let two = Mpi::from(2u32);

        loop {
            match is_prime(&x, rng) {
                Ok(()) => break,
                Err(MpiError::NotAcceptable) => x.add_assign_mpi(&two)?,
                Err(e) => return Err(e),
            }
        }

        return Ok(x);
    }

    // Safe-prime search. A necessary condition for y and x = 2y + 1 to
    // both be prime is x = 2 mod 3; establish it while keeping
    // x = 3 mod 4, then step by 12 so both congruences survive.
    match x.mod_int(3)? {
        0 => x.add_assign_mpi(&Mpi::from(8u32))?,
        1 => x.add_assign_mpi(&Mpi::from(4u32))?,
        _ => {}
    }

    let mut y = Mpi::new();
    y.assign(&x)?;
    y.shr_assign(1);

    let step_x = Mpi::from(12u32);
    let step_y = Mpi::from(6u32);

    loop {
        let screened = check_small_factors(&x)
            .and_then(|cx| check_small_factors(&y).map(|cy| (cx, cy)));

        let result = match screened {
            Ok((certain_x, certain_y)) => {
                let mut r = Ok(());

                if !certain_x {
                    r = miller_rabin(&x, rng);
                }
                if r.is_ok() && !certain_y {
                    r = miller_rabin(&y, rng);
                }

                r
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => break,
            Err(MpiError::NotAcceptable) => {
                x.add_assign_mpi(&step_x)?;
                y.add_assign_mpi(&step_y)?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(x)
}
