use core::fmt;
use core::fmt::{Debug, Display, Formatter};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use rpo_field::exponentiation::{exp_10540996611094048183, exp_acc};
use rpo_field::{
    Field, InjectiveMonomial, PermutationMonomial, PrimeCharacteristicRing, PrimeField64,
};
use rpo_util::branch_hint;
use serde::{Deserialize, Serialize};

/// The Goldilocks prime
const P: u64 = 0xFFFF_FFFF_0000_0001;

/// The prime field known as Goldilocks, defined as `F_p` where `p = 2^64 - 2^32 + 1`.
///
/// The internal value is always canonical, i.e. in `[0, p)`. Every constructor reduces its input
/// and every arithmetic operation returns a canonical result, so the value can be written out
/// directly wherever a fixed encoding is needed.
///
/// Serialized as its canonical `u64`. Deserializing accepts any `u64` and reduces it.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
#[repr(transparent)] // Important for reasoning about memory layout
pub struct Goldilocks {
    value: u64,
}

impl Goldilocks {
    /// Create a field element from an arbitrary `u64`, reducing it modulo `p`.
    ///
    /// A single conditional subtraction suffices since `2p > 2^64`.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        if value >= P {
            Self { value: value - P }
        } else {
            Self { value }
        }
    }

    /// Convert a constant u64 array into a constant Goldilocks array.
    ///
    /// This is a const version of `.map(Goldilocks::new)`.
    #[inline]
    #[must_use]
    pub const fn new_array<const N: usize>(input: [u64; N]) -> [Self; N] {
        let mut output = [Self::ZERO; N];
        let mut i = 0;
        while i < N {
            output[i] = Self::new(input[i]);
            i += 1;
        }
        output
    }

    /// Two's complement of `ORDER`, i.e. `2^64 - ORDER = 2^32 - 1`.
    const NEG_ORDER: u64 = P.wrapping_neg();
}

impl From<u64> for Goldilocks {
    #[inline]
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Goldilocks> for u64 {
    #[inline]
    fn from(value: Goldilocks) -> Self {
        value.value
    }
}

impl Display for Goldilocks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl Debug for Goldilocks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.value, f)
    }
}

impl Distribution<Goldilocks> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Goldilocks {
        loop {
            let next_u64 = rng.next_u64();
            let is_canonical = next_u64 < P;
            if is_canonical {
                return Goldilocks { value: next_u64 };
            }
        }
    }
}

impl PrimeCharacteristicRing for Goldilocks {
    const ZERO: Self = Self { value: 0 };
    const ONE: Self = Self { value: 1 };
    const TWO: Self = Self { value: 2 };
    const NEG_ONE: Self = Self { value: P - 1 };

    #[inline]
    fn from_u64(int: u64) -> Self {
        Self::new(int)
    }
}

/// Degree of the smallest permutation polynomial for Goldilocks.
///
/// As p - 1 = 2^32 * 3 * 5 * 17 * ... the smallest choice for a degree D satisfying gcd(p - 1, D) = 1 is 7.
impl InjectiveMonomial<7> for Goldilocks {}

impl PermutationMonomial<7> for Goldilocks {
    /// In the field `Goldilocks`, `a^{1/7}` is equal to a^{10540996611094048183}.
    ///
    /// This follows from the calculation `7*10540996611094048183 = 4*(2^64 - 2**32) + 1 = 1 mod (p - 1)`.
    fn injective_exp_root_n(&self) -> Self {
        exp_10540996611094048183(*self)
    }
}

impl Field for Goldilocks {
    // Sage: GF(2^64 - 2^32 + 1).multiplicative_generator()
    const GENERATOR: Self = Self { value: 7 };

    #[inline]
    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        // From Fermat's little theorem, in a prime field `F_p`, the inverse of `a` is `a^(p-2)`.
        //
        // compute a^(p - 2) using 72 multiplications
        // The exponent p - 2 is represented in binary as:
        // 0b1111111111111111111111111111111011111111111111111111111111111111

        // compute base^11
        let t2 = self.square() * *self;

        // compute base^111
        let t3 = t2.square() * *self;

        // compute base^111111 (6 ones)
        // repeatedly square t3 3 times and multiply by t3
        let t6 = exp_acc(3, t3, t3);
        let t60 = t6.square();
        let t7 = t60 * *self;

        // compute base^111111111111 (12 ones)
        // repeatedly square t6 6 times and multiply by t6
        let t12 = exp_acc(5, t60, t6);

        // compute base^111111111111111111111111 (24 ones)
        // repeatedly square t12 12 times and multiply by t12
        let t24 = exp_acc(12, t12, t12);

        // compute base^1111111111111111111111111111111 (31 ones)
        // repeatedly square t24 6 times and multiply by t6 first. then square t30 and
        // multiply by base
        let t31 = exp_acc(7, t24, t7);

        // compute base^111111111111111111111111111111101111111111111111111111111111111
        // repeatedly square t31 32 times and multiply by t31
        let t63 = exp_acc(32, t31, t31);

        // compute base^1111111111111111111111111111111011111111111111111111111111111111
        Some(t63.square() * *self)
    }

    #[inline]
    fn order() -> BigUint {
        P.into()
    }
}

impl PrimeField64 for Goldilocks {
    const ORDER_U64: u64 = P;

    #[inline]
    fn as_canonical_u64(&self) -> u64 {
        self.value
    }

    #[inline]
    fn from_canonical_checked(int: u64) -> Option<Self> {
        (int < P).then_some(Self { value: int })
    }
}

impl Add for Goldilocks {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        // Both inputs are below p, so the true sum is below 2p.
        let (sum, over) = self.value.overflowing_add(rhs.value);
        let sum = if over {
            // The wrapped sum lost 2^64 = p + (2^32 - 1). Adding 2^32 - 1 back gives sum - p,
            // which cannot overflow.
            branch_hint();
            sum + Self::NEG_ORDER
        } else if sum >= P {
            sum - P
        } else {
            sum
        };
        Self { value: sum }
    }
}

impl AddAssign for Goldilocks {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Goldilocks {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        // This sum will not overflow so long as iter.len() < 2^64.
        let sum = iter.map(|x| x.value as u128).sum::<u128>();
        reduce128(sum)
    }
}

impl Sub for Goldilocks {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (diff, under) = self.value.overflowing_sub(rhs.value);
        let diff = if under {
            // diff = a - b + 2^64 and we want a - b + p. Since b < p the subtraction cannot
            // underflow.
            branch_hint();
            diff - Self::NEG_ORDER
        } else {
            diff
        };
        Self { value: diff }
    }
}

impl SubAssign for Goldilocks {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Goldilocks {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::ZERO - self
    }
}

impl Mul for Goldilocks {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        reduce128(u128::from(self.value) * u128::from(rhs.value))
    }
}

impl MulAssign for Goldilocks {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Product for Goldilocks {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.reduce(|x, y| x * y).unwrap_or(Self::ONE)
    }
}

impl Div for Goldilocks {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

/// Reduce a 128-bit value modulo `p`. The result is canonical.
///
/// Write `x = x_lo + 2^64 * (x_hi_lo + 2^32 * x_hi_hi)` with `x_hi_lo, x_hi_hi < 2^32`. Using
/// `2^64 = 2^32 - 1` and `2^96 = -1` modulo `p`:
///
/// `x = x_lo - x_hi_lo - x_hi_hi + 2^32 * x_hi_lo`
///
/// which costs two subtractions and one addition, with no division. Each of the three terms is
/// already canonical: `2^32 * x_hi_lo <= 2^64 - 2^32 = p - 1`.
#[inline]
pub fn reduce128(x: u128) -> Goldilocks {
    let (x_lo, x_hi) = split(x); // This is a no-op
    let x_hi_hi = x_hi >> 32;
    let x_hi_lo = x_hi & Goldilocks::NEG_ORDER;

    Goldilocks::new(x_lo)
        - Goldilocks { value: x_hi_lo }
        - Goldilocks { value: x_hi_hi }
        + Goldilocks {
            value: x_hi_lo << 32,
        }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn split(x: u128) -> (u64, u64) {
    (x as u64, (x >> 64) as u64)
}
