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
fn radix_round_trips() {
    let mut rng = StdRng::seed_from_u64(40);

    for radix in 2..=16u32 {
        for _ in 0..15 {
            let x = random_mpi(&mut rng, 40);

            let s = x.to_radix_string(radix).unwrap();
            let back = Mpi::from_radix_str(&s, radix).unwrap();

            assert_eq!(back, x, "radix {radix} string {s}");
        }
    }
}

#[test]
fn hex_parsing_matches_bytes() {
    let x = Mpi::from_radix_str("0123456789ABCDEFfedcba", 16).unwrap();
    let bytes = hex::decode("0123456789abcdeffedcba").unwrap();

    assert_eq!(x, Mpi::from_bytes_be(&bytes).unwrap());
}

#[test]
fn radix_parsing_handles_signs_and_rejects_junk() {
    let neg = Mpi::from_radix_str("-1F", 16).unwrap();
    assert_eq!(neg, Mpi::from(-31i64));

    let dec = Mpi::from_radix_str("-12345", 10).unwrap();
    assert_eq!(dec, Mpi::from(-12345i64));

    assert_eq!(
        Mpi::from_radix_str("12G4", 16),
        Err(MpiError::InvalidCharacter)
    );
    assert_eq!(
        Mpi::from_radix_str("129", 8),
        Err(MpiError::InvalidCharacter)
    );
    assert_eq!(Mpi::from_radix_str("101", 17), Err(MpiError::InvalidInput));
    assert_eq!(Mpi::from_radix_str("101", 1), Err(MpiError::InvalidInput));
    assert_eq!(
        Mpi::from(5u32).to_radix_string(17),
        Err(MpiError::InvalidInput)
    );
}

#[test]
fn hex_rendering_uses_byte_pairs() {
    assert_eq!(Mpi::from(10u32).to_radix_string(16).unwrap(), "0A");
    assert_eq!(Mpi::from(0xABCDu32).to_radix_string(16).unwrap(), "ABCD");
    assert_eq!(Mpi::new().to_radix_string(16).unwrap(), "");
    assert_eq!(Mpi::from(0u32).to_radix_string(16).unwrap(), "00");
    assert_eq!(Mpi::from(-255i64).to_radix_string(16).unwrap(), "-FF");

    assert_eq!(format!("{}", Mpi::from(0xBEEFu32)), "BEEF");
}

#[test]
fn decimal_rendering() {
    assert_eq!(Mpi::from(0u32).to_radix_string(10).unwrap(), "0");
    assert_eq!(
        Mpi::from(1234567890123u64).to_radix_string(10).unwrap(),
        "1234567890123"
    );
    assert_eq!(Mpi::from(-42i64).to_radix_string(10).unwrap(), "-42");
}

#[test]
fn binary_round_trips_with_padding() {
    let mut rng = StdRng::seed_from_u64(41);

    for _ in 0..30 {
        let x = random_mpi(&mut rng, 48).abs();
        let width = x.byte_len() + rng.gen_range(0..8);

        let mut buf = vec![0u8; width];
        x.write_bytes_be(&mut buf).unwrap();

        assert_eq!(Mpi::from_bytes_be(&buf).unwrap(), x);
    }
}

#[test]
fn binary_read_strips_leading_zeros() {
    let a = Mpi::from_bytes_be(&[0, 0, 0, 1, 2]).unwrap();
    let b = Mpi::from_bytes_be(&[1, 2]).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.byte_len(), 2);

    assert!(Mpi::from_bytes_be(&[]).unwrap().is_zero());
    assert!(Mpi::from_bytes_be(&[0, 0, 0]).unwrap().is_zero());
}

#[test]
fn binary_write_checks_capacity() {
    let x = Mpi::from(0x010203u32);

    let mut exact = [0u8; 3];
    x.write_bytes_be(&mut exact).unwrap();
    assert_eq!(exact, [1, 2, 3]);

    let mut padded = [0u8; 5];
    x.write_bytes_be(&mut padded).unwrap();
    assert_eq!(padded, [0, 0, 1, 2, 3]);

    let mut small = [0u8; 2];
    assert_eq!(x.write_bytes_be(&mut small), Err(MpiError::BufferTooSmall));

    assert_eq!(x.to_bytes_be(), vec![1, 2, 3]);
}

#[test]
fn primitive_conversions() {
    assert_eq!(u64::try_from(&Mpi::from(77u32)).unwrap(), 77);
    assert_eq!(
        u64::try_from(&Mpi::from(u64::MAX)).unwrap(),
        u64::MAX
    );

    assert_eq!(
        u64::try_from(&Mpi::from(-1i64)),
        Err(MpiError::NegativeValue)
    );

    let wide = Mpi::from(1u32).shl(80).unwrap();
    assert_eq!(u64::try_from(&wide), Err(MpiError::BufferTooSmall));

    assert_eq!(Mpi::from(usize::MAX), Mpi::from(usize::MAX as u64));
    assert_eq!(Mpi::from(-1i32), Mpi::from(-1i64));
    assert_eq!(Mpi::from(255u8), Mpi::from(255u16));
}

#[test]
fn random_draws_have_requested_width() {
    use bignum::rng::{Csprng, SecureRandom};

    let mut rng = Csprng::from_seed([3u8; 32]);

    let x = Mpi::random(32, &mut rng).unwrap();
    assert!(x.byte_len() <= 32);
    assert!(!x.is_zero());

    assert_eq!(
        Mpi::random(bignum::mpi::MAX_FILL_BYTES + 1, &mut rng),
        Err(MpiError::InvalidInput)
    );

    // trait object sources work too
    let dynamic: &mut dyn SecureRandom = &mut rng;
    let y = Mpi::random(16, dynamic).unwrap();
    assert!(y.byte_len() <= 16);
}
