//! Utilities for testing field implementations.

#![no_std]

extern crate alloc;

mod bench_func;

pub use bench_func::*;
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rpo_field::{Field, PermutationMonomial, PrimeCharacteristicRing, PrimeField64};

pub fn test_add_neg_sub_mul<R>(zeros: &[R], ones: &[R])
where
    R: PrimeCharacteristicRing + Copy + Eq,
    StandardUniform: Distribution<R>,
{
    let mut rng = SmallRng::seed_from_u64(1);
    let x = rng.random::<R>();
    let y = rng.random::<R>();
    let z = rng.random::<R>();

    for &zero in zeros {
        assert_eq!(x + zero, x, "Error when testing additive identity.");
        assert_eq!(zero + x, x, "Error when testing additive identity.");
        assert_eq!(x * zero, R::ZERO, "Error when testing multiplication by zero.");
    }
    for &one in ones {
        assert_eq!(x * one, x, "Error when testing multiplicative identity.");
        assert_eq!(one * x, x, "Error when testing multiplicative identity.");
    }

    assert_eq!(x + (-x), R::ZERO, "Error when testing additive inverse.");
    assert_eq!(x + (R::ZERO - x), R::ZERO, "Error when testing subtraction.");
    assert_eq!(x - x, R::ZERO, "Error when testing subtraction.");
    assert_eq!(x - y, x + (-y), "Error when testing subtraction.");
    assert_eq!(-(-x), x, "Error when testing double negation.");
    assert_eq!(x + y, y + x, "Error when testing additive commutativity.");
    assert_eq!(x * y, y * x, "Error when testing multiplicative commutativity.");
    assert_eq!((x + y) + z, x + (y + z), "Error when testing additive associativity.");
    assert_eq!((x * y) * z, x * (y * z), "Error when testing multiplicative associativity.");
    assert_eq!(x * (y + z), x * y + x * z, "Error when testing distributivity.");
    assert_eq!(x.double(), x + x, "Error when testing double.");
    assert_eq!(x.square(), x * x, "Error when testing square.");
    assert_eq!(x.cube(), x * x * x, "Error when testing cube.");
    assert_eq!(R::TWO, R::ONE + R::ONE, "Error when testing TWO.");
    assert_eq!(R::NEG_ONE, -R::ONE, "Error when testing NEG_ONE.");

    let mut acc = x;
    acc += y;
    acc -= z;
    acc *= x;
    assert_eq!(acc, (x + y - z) * x, "Error when testing assign operators.");

    let sum: R = [x, y, z].into_iter().sum();
    assert_eq!(sum, x + y + z, "Error when testing sum.");
    let product: R = [x, y, z].into_iter().product();
    assert_eq!(product, x * y * z, "Error when testing product.");
}

pub fn test_exponentiation<R>()
where
    R: PrimeCharacteristicRing + Copy + Eq,
    StandardUniform: Distribution<R>,
{
    let mut rng = SmallRng::seed_from_u64(1);
    let x = rng.random::<R>();

    assert_eq!(x.exp_u64(0), R::ONE);
    assert_eq!(x.exp_u64(1), x);
    assert_eq!(x.exp_u64(7), x * x * x * x * x * x * x);
    assert_eq!(x.exp_const_u64::<7>(), x.exp_u64(7));
    assert_eq!(x.exp_const_u64::<5>(), x.exp_u64(5));
    assert_eq!(x.exp_power_of_2(3), x.exp_u64(8));
    assert_eq!(x.exp_u64(1 << 20) * x, x.exp_u64((1 << 20) + 1));
}

pub fn test_inverse<F: Field>()
where
    StandardUniform: Distribution<F>,
{
    assert_eq!(None, F::ZERO.try_inverse());
    assert_eq!(Some(F::ONE), F::ONE.try_inverse());

    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..100 {
        let x = rng.random::<F>();
        if !x.is_zero() {
            assert_eq!(x * x.inverse(), F::ONE);
            assert_eq!(x / x, F::ONE);
        }
    }
}

/// Check that `x -> x^N` and `x -> x^{1/N}` undo each other.
pub fn test_permutation_monomial<F, const N: u64>()
where
    F: Field + PermutationMonomial<N>,
    StandardUniform: Distribution<F>,
{
    let mut rng = SmallRng::seed_from_u64(1);
    for x in [F::ZERO, F::ONE, F::TWO, F::NEG_ONE] {
        assert_eq!(x.injective_exp_n().injective_exp_root_n(), x);
        assert_eq!(x.injective_exp_root_n().injective_exp_n(), x);
    }
    for _ in 0..1000 {
        let x = rng.random::<F>();
        assert_eq!(x.injective_exp_n(), x.exp_u64(N));
        assert_eq!(x.injective_exp_n().injective_exp_root_n(), x);
        assert_eq!(x.injective_exp_root_n().injective_exp_n(), x);
    }
}

/// Operands on and around the interesting bit boundaries of a 64-bit prime field.
pub fn boundary_operands<F: PrimeField64>() -> [u64; 12] {
    let p = F::ORDER_U64;
    [
        0,
        1,
        2,
        (1 << 32) - 1,
        1 << 32,
        (1 << 32) + 1,
        p >> 1,
        p - 2,
        p - 1,
        p,
        p + 1,
        u64::MAX,
    ]
}

/// Compare `+`, `-` and `*` against arbitrary precision arithmetic and check every result is
/// canonical.
pub fn test_prime_field_64<F: PrimeField64>()
where
    StandardUniform: Distribution<F>,
{
    let order = BigUint::from(F::ORDER_U64);
    assert_eq!(F::order(), order);

    let check = |a: F, b: F| {
        let (ab, bb) = (a.as_canonical_biguint(), b.as_canonical_biguint());
        let sum = a + b;
        let diff = a - b;
        let prod = a * b;
        for r in [sum, diff, prod, -a] {
            assert!(r.as_canonical_u64() < F::ORDER_U64);
        }
        assert_eq!(sum.as_canonical_biguint(), (&ab + &bb) % &order);
        assert_eq!(diff.as_canonical_biguint(), (&ab + &order - &bb) % &order);
        assert_eq!(prod.as_canonical_biguint(), (&ab * &bb) % &order);
    };

    let boundaries = boundary_operands::<F>();
    for &a in &boundaries {
        let fa = F::from_u64(a);
        assert_eq!(fa.as_canonical_biguint(), BigUint::from(a) % &order);
        for &b in &boundaries {
            check(fa, F::from_u64(b));
        }
    }

    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..10_000 {
        check(rng.random(), rng.random());
    }
}

pub fn test_canonical_conversions<F: PrimeField64>() {
    let p = F::ORDER_U64;
    assert_eq!(F::from_canonical_checked(p - 1), Some(F::NEG_ONE));
    assert_eq!(F::from_canonical_checked(p), None);
    assert_eq!(F::from_canonical_checked(u64::MAX), None);
    assert_eq!(F::from_u64(p), F::ZERO);
    assert_eq!(F::from_u64(p + 1), F::ONE);
    assert_eq!(F::from_u64(u64::MAX).as_canonical_u64(), u64::MAX - p);
    assert_eq!(F::from_u8(3) * F::from_u32(5), F::from_u64(15));
    assert_eq!(F::from_bool(true), F::ONE);
    assert_eq!(F::from_bool(false), F::ZERO);
}

#[macro_export]
macro_rules! test_field {
    ($field:ty, $zeros: expr, $ones: expr) => {
        mod field_tests {
            #[test]
            fn test_add_neg_sub_mul() {
                $crate::test_add_neg_sub_mul::<$field>($zeros, $ones);
            }
            #[test]
            fn test_exponentiation() {
                $crate::test_exponentiation::<$field>();
            }
            #[test]
            fn test_inverse() {
                $crate::test_inverse::<$field>();
            }
        }
    };
}

#[macro_export]
macro_rules! test_prime_field_64 {
    ($field:ty) => {
        mod prime_field_64_tests {
            #[test]
            fn test_prime_field_64() {
                $crate::test_prime_field_64::<$field>();
            }
            #[test]
            fn test_canonical_conversions() {
                $crate::test_canonical_conversions::<$field>();
            }
        }
    };
}

#[macro_export]
macro_rules! test_permutation_monomial {
    ($field:ty, $n:literal) => {
        mod permutation_monomial_tests {
            #[test]
            fn test_permutation_monomial() {
                $crate::test_permutation_monomial::<$field, $n>();
            }
        }
    };
}
