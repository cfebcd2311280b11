use bignum::prime::{gen_prime, is_prime};
use bignum::rng::Csprng;
use bignum::{Mpi, MpiError};

fn rng(tag: u8) -> Csprng {
    Csprng::from_seed([tag; 32])
}

#[test]
fn small_values() {
    let mut r = rng(1);

    assert_eq!(is_prime(&Mpi::new(), &mut r), Err(MpiError::NotAcceptable));
    assert_eq!(
        is_prime(&Mpi::from(1u32), &mut r),
        Err(MpiError::NotAcceptable)
    );
    assert!(is_prime(&Mpi::from(2u32), &mut r).is_ok());
    assert!(is_prime(&Mpi::from(3u32), &mut r).is_ok());
    assert_eq!(
        is_prime(&Mpi::from(4u32), &mut r),
        Err(MpiError::NotAcceptable)
    );
    assert!(is_prime(&Mpi::from(997u32), &mut r).is_ok());
}

#[test]
fn negative_candidates_are_tested_by_magnitude() {
    let mut r = rng(2);

    assert!(is_prime(&Mpi::from(-7i64), &mut r).is_ok());
    assert_eq!(
        is_prime(&Mpi::from(-9i64), &mut r),
        Err(MpiError::NotAcceptable)
    );
}

#[test]
fn trial_division_catches_small_factors() {
    let mut r = rng(3);

    // 3 * 5 * 7 * 11 * 13 * 17 * 19 * 23
    let composite = Mpi::from(223092870u64 / 2);
    assert_eq!(is_prime(&composite, &mut r), Err(MpiError::NotAcceptable));

    // even
    assert_eq!(
        is_prime(&Mpi::from(1024u32), &mut r),
        Err(MpiError::NotAcceptable)
    );
}

#[test]
fn miller_rabin_accepts_known_primes() {
    let mut r = rng(4);

    assert!(is_prime(&Mpi::from(65537u32), &mut r).is_ok());

    // Mersenne primes 2^61 - 1 and 2^127 - 1
    let m61 = Mpi::from(2305843009213693951u64);
    assert!(is_prime(&m61, &mut r).is_ok());

    let m127 =
        Mpi::from_radix_str("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF", 16).unwrap();
    assert!(is_prime(&m127, &mut r).is_ok());
}

#[test]
fn miller_rabin_rejects_composites_with_no_small_factor() {
    let mut r = rng(5);

    // 1009 * 1013: both factors above the trial-division table
    let c = Mpi::from(1022117u64);
    assert_eq!(is_prime(&c, &mut r), Err(MpiError::NotAcceptable));

    // 2^67 - 1 = 193707721 * 761838257287
    let m67 = Mpi::from_radix_str("7FFFFFFFFFFFFFFFF", 16).unwrap();
    assert_eq!(is_prime(&m67, &mut r), Err(MpiError::NotAcceptable));
}

#[test]
fn generated_prime_has_requested_shape() {
    let mut r = rng(6);

    let p = gen_prime(256, false, &mut r).unwrap();

    assert_eq!(p.bit_len(), 256);
    assert_eq!(p.mod_int(2).unwrap(), 1);

    // independent re-tests with fresh witnesses must keep accepting
    for tag in 10..15 {
        let mut fresh = rng(tag);
        assert!(is_prime(&p, &mut fresh).is_ok());
    }
}

#[test]
fn generated_safe_prime_pairs() {
    let mut r = rng(7);

    let p = gen_prime(64, true, &mut r).unwrap();

    assert_eq!(p.bit_len(), 64);

    let mut y = p.sub_int(1).unwrap();
    y.shr_assign(1);

    let mut fresh = rng(8);
    assert!(is_prime(&p, &mut fresh).is_ok());
    assert!(is_prime(&y, &mut fresh).is_ok());

    // p = 3 mod 4 and p = 2 mod 3, so p = 11 mod 12
    assert_eq!(p.mod_int(12).unwrap(), 11);
}

#[test]
fn generation_rejects_out_of_range_sizes() {
    let mut r = rng(9);

    assert_eq!(gen_prime(2, false, &mut r), Err(MpiError::InvalidInput));
    assert_eq!(
        gen_prime(bignum::mpi::MAX_BITS + 1, false, &mut r),
        Err(MpiError::InvalidInput)
    );
}
