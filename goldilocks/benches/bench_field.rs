use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rpo_field::PrimeCharacteristicRing;
use rpo_field_testing::{benchmark_inv, benchmark_mul, benchmark_root_n, benchmark_square};
use rpo_goldilocks::Goldilocks;

type F = Goldilocks;

fn bench_field(c: &mut Criterion) {
    let name = "Goldilocks";
    benchmark_mul::<F>(c, name);
    benchmark_square::<F>(c, name);
    benchmark_inv::<F>(c, name);
    benchmark_root_n::<F, 7>(c, name);

    // Generic square-and-multiply, for comparison with the fixed chain above.
    let mut rng = SmallRng::seed_from_u64(1);
    c.bench_function("Goldilocks exp_u64 root_7", |b| {
        b.iter_batched(
            || rng.random::<F>(),
            |x| x.exp_u64(10540996611094048183),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(goldilocks_arithmetic, bench_field);
criterion_main!(goldilocks_arithmetic);
