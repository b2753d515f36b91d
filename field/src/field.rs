use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;

use crate::exponentiation::exp_u64_by_squaring;

/// A commutative ring with prime characteristic.
///
/// Everything the permutation layers need is expressed in terms of this trait, so that they can be
/// run over a concrete field or over any other type implementing ring arithmetic.
pub trait PrimeCharacteristicRing:
    Sized
    + Default
    + Clone
    + Debug
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Neg<Output = Self>
    + Mul<Output = Self>
    + MulAssign
    + Sum
    + Product
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const NEG_ONE: Self;

    /// Map an integer into the ring, reducing modulo the characteristic.
    fn from_u64(int: u64) -> Self;

    #[inline]
    fn from_bool(b: bool) -> Self {
        if b { Self::ONE } else { Self::ZERO }
    }

    #[inline]
    fn from_u8(int: u8) -> Self {
        Self::from_u64(int.into())
    }

    #[inline]
    fn from_u32(int: u32) -> Self {
        Self::from_u64(int.into())
    }

    #[must_use]
    #[inline(always)]
    fn double(&self) -> Self {
        self.clone() + self.clone()
    }

    #[must_use]
    #[inline(always)]
    fn square(&self) -> Self {
        self.clone() * self.clone()
    }

    #[must_use]
    #[inline(always)]
    fn cube(&self) -> Self {
        self.square() * self.clone()
    }

    /// Exponentiation by an arbitrary `u64` using square-and-multiply.
    #[must_use]
    #[inline]
    fn exp_u64(&self, power: u64) -> Self {
        exp_u64_by_squaring(self.clone(), power)
    }

    /// Exponentiation by a constant.
    ///
    /// Small powers get short hand-written chains; everything else falls back to `exp_u64`.
    #[must_use]
    #[inline(always)]
    fn exp_const_u64<const POWER: u64>(&self) -> Self {
        match POWER {
            0 => Self::ONE,
            1 => self.clone(),
            2 => self.square(),
            3 => self.cube(),
            4 => self.square().square(),
            5 => self.square().square() * self.clone(),
            7 => {
                // x^2, x^4, then x * (x^2 * x^4): four multiplications.
                let x2 = self.square();
                let x4 = x2.square();
                self.clone() * (x2 * x4)
            }
            _ => self.exp_u64(POWER),
        }
    }

    /// Square `self` `power_log` times, i.e. compute `self^(2^power_log)`.
    #[must_use]
    #[inline]
    fn exp_power_of_2(&self, power_log: usize) -> Self {
        let mut res = self.clone();
        for _ in 0..power_log {
            res = res.square();
        }
        res
    }
}

/// A field.
pub trait Field:
    PrimeCharacteristicRing
    + Copy
    + Div<Self, Output = Self>
    + Eq
    + Hash
    + Display
    + Send
    + Sync
    + 'static
{
    /// A generator of this field's multiplicative group.
    const GENERATOR: Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// The multiplicative inverse of this field element, if it exists.
    ///
    /// NOTE: The inverse of `0` is undefined and will return `None`.
    #[must_use]
    fn try_inverse(&self) -> Option<Self>;

    #[must_use]
    fn inverse(&self) -> Self {
        self.try_inverse().expect("Tried to invert zero")
    }

    fn order() -> BigUint;
}

/// A prime field of order less than `2^64`.
pub trait PrimeField64: Field + Ord {
    const ORDER_U64: u64;

    /// Return the representative of `self` in the canonical range `[0, ORDER_U64)`.
    fn as_canonical_u64(&self) -> u64;

    /// Convert `int` into a field element, returning `None` unless `int < ORDER_U64`.
    fn from_canonical_checked(int: u64) -> Option<Self>;

    #[inline]
    fn as_canonical_biguint(&self) -> BigUint {
        self.as_canonical_u64().into()
    }
}

/// A ring on which `x -> x^N` is injective.
pub trait InjectiveMonomial<const N: u64>: PrimeCharacteristicRing {
    #[must_use]
    #[inline]
    fn injective_exp_n(&self) -> Self {
        self.exp_const_u64::<N>()
    }
}

/// A ring on which `x -> x^N` is a permutation, so that the inverse map `x -> x^{1/N}` exists.
pub trait PermutationMonomial<const N: u64>: InjectiveMonomial<N> {
    /// Compute `x^{1/N}`.
    ///
    /// This is the unique element `y` with `y^N = x`.
    #[must_use]
    fn injective_exp_root_n(&self) -> Self;
}
