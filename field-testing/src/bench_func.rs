use alloc::format;

use criterion::{BatchSize, Criterion};
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rpo_field::Field;

pub fn benchmark_mul<F: Field>(c: &mut Criterion, name: &str)
where
    StandardUniform: Distribution<F>,
{
    let mut rng = SmallRng::seed_from_u64(1);
    let x = rng.random::<F>();
    let y = rng.random::<F>();
    c.bench_function(&format!("{name} mul"), |b| {
        b.iter(|| core::hint::black_box(core::hint::black_box(x) * core::hint::black_box(y)))
    });
}

pub fn benchmark_square<F: Field>(c: &mut Criterion, name: &str)
where
    StandardUniform: Distribution<F>,
{
    let mut rng = SmallRng::seed_from_u64(1);
    let x = rng.random::<F>();
    c.bench_function(&format!("{name} square"), |b| {
        b.iter(|| core::hint::black_box(core::hint::black_box(x).square()))
    });
}

pub fn benchmark_inv<F: Field>(c: &mut Criterion, name: &str)
where
    StandardUniform: Distribution<F>,
{
    let mut rng = SmallRng::seed_from_u64(1);
    let x = rng.random::<F>();
    c.bench_function(&format!("{name} inv"), |b| {
        b.iter(|| core::hint::black_box(core::hint::black_box(x)).inverse())
    });
}

/// Benchmark the `N`-th root, i.e. the inverse of the degree `N` S-box.
pub fn benchmark_root_n<F, const N: u64>(c: &mut Criterion, name: &str)
where
    F: Field + rpo_field::PermutationMonomial<N>,
    StandardUniform: Distribution<F>,
{
    c.bench_function(&format!("{name} root_{N}"), |b| {
        b.iter_batched(
            || SmallRng::seed_from_u64(1).random::<F>(),
            |x| x.injective_exp_root_n(),
            BatchSize::SmallInput,
        )
    });
}
