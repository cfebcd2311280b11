use bignum::{Mpi, MpiError};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

fn random_mpi(rng: &mut StdRng, max_bytes: usize) -> Mpi {
    let len = rng.gen_range(0..=max_bytes);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);

    let x = Mpi::from_bytes_be(&bytes).unwrap();

    if rng.gen_bool(0.5) {
        Mpi::new().sub(&x).unwrap()
    } else {
        x
    }
}

#[test]
fn division_identity_holds() {
    let mut rng = StdRng::seed_from_u64(10);

    for _ in 0..60 {
        let a = random_mpi(&mut rng, 96);
        let mut b = random_mpi(&mut rng, 40);

        if b.is_zero() {
            b = Mpi::from(3u32);
        }

        let (q, r) = a.div_rem(&b).unwrap();

        // a = q * b + r
        assert_eq!(q.mul(&b).unwrap().add(&r).unwrap(), a);

        // |r| < |b|
        assert_eq!(r.cmp_abs(&b), std::cmp::Ordering::Less);

        // remainder sign follows the dividend
        if !r.is_zero() {
            assert_eq!(r.is_negative(), a.is_negative());
        }

        // quotient sign is the product of the operand signs
        if !q.is_zero() {
            assert_eq!(q.is_negative(), a.is_negative() != b.is_negative());
        }
    }
}

#[test]
fn division_with_small_operands() {
    let a = Mpi::from(7u32);
    let b = Mpi::from(-2i64);

    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, Mpi::from(-3i64));
    assert_eq!(r, Mpi::from(1u32));

    let a = Mpi::from(-7i64);
    let b = Mpi::from(2u32);

    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, Mpi::from(-3i64));
    assert_eq!(r, Mpi::from(-1i64));
}

#[test]
fn division_by_smaller_magnitude_dividend() {
    let a = Mpi::from(-5i64);
    let b = Mpi::from(100u32);

    let (q, r) = a.div_rem(&b).unwrap();
    assert!(q.is_zero());
    assert_eq!(r, a);
}

#[test]
fn division_by_zero_is_rejected() {
    let a = Mpi::from(5u32);
    let zero = Mpi::new();

    assert!(matches!(a.div_rem(&zero), Err(MpiError::DivisionByZero)));
    assert!(matches!(a.modulo(&zero), Err(MpiError::DivisionByZero)));
    assert!(matches!(a.mod_int(0), Err(MpiError::DivisionByZero)));
}

#[test]
fn modulo_lands_in_range() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..60 {
        let a = random_mpi(&mut rng, 80);
        let mut n = random_mpi(&mut rng, 32).abs();

        if n.is_zero() {
            n = Mpi::from(17u32);
        }

        let r = a.modulo(&n).unwrap();

        assert!(!r.is_negative());
        assert!(r < n);

        // r is congruent to a modulo n
        assert!(a.sub(&r).unwrap().modulo(&n).unwrap().is_zero());
    }
}

#[test]
fn modulo_by_negative_is_rejected() {
    let a = Mpi::from(5u32);
    let n = Mpi::from(-3i64);

    assert!(matches!(a.modulo(&n), Err(MpiError::NegativeValue)));
}

#[test]
fn mod_int_matches_modulo() {
    let mut rng = StdRng::seed_from_u64(12);

    for &b in &[3u64, 7, 10, 16, 255, 997] {
        for _ in 0..20 {
            let a = random_mpi(&mut rng, 64);

            let expected = a.modulo(&Mpi::from(b)).unwrap();
            let got = a.mod_int(b as bignum::mpi::Limb).unwrap();

            assert_eq!(Mpi::from(got), expected);
        }
    }
}

#[test]
fn mod_int_fast_paths() {
    let a = Mpi::from(12345u32);

    assert_eq!(a.mod_int(1).unwrap(), 0);
    assert_eq!(a.mod_int(2).unwrap(), 1);

    let b = Mpi::from(-9i64);
    assert_eq!(b.mod_int(5).unwrap(), 1);
}

#[test]
fn div_int_agrees_with_div_rem() {
    let a = Mpi::from_radix_str("123456789ABCDEF0123456789", 16).unwrap();

    let (q1, r1) = a.div_int(1000).unwrap();
    let (q2, r2) = a.div_rem(&Mpi::from(1000u32)).unwrap();

    assert_eq!(q1, q2);
    assert_eq!(r1, r2);
}
