use bignum::Mpi;
use bignum::rng::{Csprng, SecureRandom};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn fixture(bytes: usize, tag: u8, force_odd: bool) -> Mpi {
    let mut rng = Csprng::from_seed([tag; 32]);
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);

    buf[0] |= 0x80;
    if force_odd {
        buf[bytes - 1] |= 1;
    }

    Mpi::from_bytes_be(&buf).unwrap()
}

pub fn bench_mul(c: &mut Criterion) {
    let a = fixture(128, 1, false);
    let b = fixture(128, 2, false);

    c.bench_function("mul 1024x1024 bits", |bench| {
        bench.iter(|| black_box(&a).mul(black_box(&b)).unwrap())
    });
}

pub fn bench_exp_mod(c: &mut Criterion) {
    let base = fixture(64, 3, false);
    let exp = fixture(64, 4, false);
    let modulus = fixture(64, 5, true);

    c.bench_function("exp_mod 512 bits", |bench| {
        let mut rr = Mpi::new();
        bench.iter(|| {
            black_box(&base)
                .exp_mod(black_box(&exp), black_box(&modulus), Some(&mut rr))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_mul, bench_exp_mod);
criterion_main!(benches);
