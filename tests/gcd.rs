use bignum::Mpi;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

#[test]
fn known_gcd_pairs() {
    let pairs: &[(u64, u64, u64)] = &[
        (693, 609, 21),
        (1764, 868, 28),
        (768454923, 542167814, 1),
    ];

    for &(a, b, g) in pairs {
        let got = Mpi::from(a).gcd(&Mpi::from(b)).unwrap();
        assert_eq!(got, Mpi::from(g));
    }
}

#[test]
fn gcd_divides_both_operands() {
    let mut rng = StdRng::seed_from_u64(30);

    for _ in 0..40 {
        let mut a_bytes = vec![0u8; rng.gen_range(1..48)];
        let mut b_bytes = vec![0u8; rng.gen_range(1..48)];
        rng.fill_bytes(&mut a_bytes);
        rng.fill_bytes(&mut b_bytes);

        let mut a = Mpi::from_bytes_be(&a_bytes).unwrap();
        let mut b = Mpi::from_bytes_be(&b_bytes).unwrap();

        if a.is_zero() {
            a = Mpi::from(1u32);
        }
        if b.is_zero() {
            b = Mpi::from(1u32);
        }

        let g = a.gcd(&b).unwrap();

        assert!(!g.is_zero());
        assert!(a.modulo(&g).unwrap().is_zero());
        assert!(b.modulo(&g).unwrap().is_zero());

        // any common divisor divides the gcd: check with a shared factor
        let f = Mpi::from(rng.gen_range(2u32..1000));
        let fa = a.mul(&f).unwrap();
        let fb = b.mul(&f).unwrap();
        let fg = fa.gcd(&fb).unwrap();

        assert!(fg.modulo(&f).unwrap().is_zero());
        assert_eq!(fg, g.mul(&f).unwrap());
    }
}

#[test]
fn gcd_is_symmetric_and_unsigned() {
    let a = Mpi::from(-48i64);
    let b = Mpi::from(18u32);

    let g1 = a.gcd(&b).unwrap();
    let g2 = b.gcd(&a).unwrap();

    assert_eq!(g1, g2);
    assert_eq!(g1, Mpi::from(6u32));
}

#[test]
fn gcd_with_zero_left_operand() {
    let b = Mpi::from(270u32);

    assert_eq!(Mpi::new().gcd(&b).unwrap(), b);
}
