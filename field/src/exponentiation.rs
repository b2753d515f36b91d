use crate::PrimeCharacteristicRing;

/// Compute `val^power` by scanning the bits of `power` from least to most significant.
pub fn exp_u64_by_squaring<R: PrimeCharacteristicRing>(val: R, power: u64) -> R {
    let mut current = val;
    let mut product = R::ONE;

    for j in 0..bits_u64(power) {
        if (power >> j) & 1 != 0 {
            product *= current.clone();
        }
        current = current.square();
    }
    product
}

const fn bits_u64(n: u64) -> usize {
    (64 - n.leading_zeros()) as usize
}

/// Squares `base` `m` times and multiplies the result by `tail`.
#[inline(always)]
pub fn exp_acc<R: PrimeCharacteristicRing>(m: usize, base: R, tail: R) -> R {
    base.exp_power_of_2(m) * tail
}

/// Compute `val^10540996611094048183`, the inverse of `x -> x^7` over `p = 2^64 - 2^32 + 1`.
///
/// Note that `7 * 10540996611094048183 = 4 * (2^64 - 2^32) + 1 = 1 mod (p - 1)`, so for every `a` in
/// `F_p` we have `(a^10540996611094048183)^7 = a`.
///
/// The chain below is the fixed one used by the RPO inverse S-box. Writing `e(x)` for the exponent
/// held in `x`:
///
/// ```text
/// t1 = 2, t2 = 4
/// t3 = t2 * 2^3  + t2 = 36
/// t4 = t3 * 2^6  + t3 = 2340
/// t  = t4 * 2^12 + t4
/// t5 = t  * 2^6  + t3
/// t6 = t5 * 2^31 + t5
/// a  = (t6 * 2 + t5) * 4
/// result = a + (t1 + t2 + 1)
/// ```
///
/// This uses 63 squarings and 9 multiplications.
pub fn exp_10540996611094048183<R: PrimeCharacteristicRing>(val: R) -> R {
    let t1 = val.square();
    let t2 = t1.square();
    let t3 = exp_acc(3, t2.clone(), t2.clone());
    let t4 = exp_acc(6, t3.clone(), t3.clone());
    let t4 = exp_acc(12, t4.clone(), t4);
    let t5 = exp_acc(6, t4, t3);
    let t6 = exp_acc(31, t5.clone(), t5.clone());

    let a = (t6.square() * t5).exp_power_of_2(2);
    let b = t1 * t2 * val;
    a * b
}

#[cfg(test)]
mod tests {
    use core::iter::{Product, Sum};
    use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

    use super::*;

    /// A multiplicative "ring" which records the exponent of a formal generator `g`.
    ///
    /// Multiplication adds exponents, so running an exponentiation routine on `g^1` returns the
    /// exponent it actually computed. Additive operations are never used by the chains.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct Power(u128);

    impl Add for Power {
        type Output = Self;
        fn add(self, _rhs: Self) -> Self {
            unreachable!("exponentiation chains never add")
        }
    }

    impl AddAssign for Power {
        fn add_assign(&mut self, rhs: Self) {
            *self = self.clone() + rhs;
        }
    }

    impl Sub for Power {
        type Output = Self;
        fn sub(self, _rhs: Self) -> Self {
            unreachable!("exponentiation chains never subtract")
        }
    }

    impl SubAssign for Power {
        fn sub_assign(&mut self, rhs: Self) {
            *self = self.clone() - rhs;
        }
    }

    impl Neg for Power {
        type Output = Self;
        fn neg(self) -> Self {
            unreachable!("exponentiation chains never negate")
        }
    }

    impl Mul for Power {
        type Output = Self;
        fn mul(self, rhs: Self) -> Self {
            Self(self.0 + rhs.0)
        }
    }

    impl MulAssign for Power {
        fn mul_assign(&mut self, rhs: Self) {
            self.0 += rhs.0;
        }
    }

    impl Sum for Power {
        fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
            iter.reduce(|x, y| x + y).unwrap_or(Self::ZERO)
        }
    }

    impl Product for Power {
        fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
            iter.reduce(|x, y| x * y).unwrap_or(Self::ONE)
        }
    }

    impl PrimeCharacteristicRing for Power {
        const ZERO: Self = Self(u128::MAX);
        const ONE: Self = Self(0);
        const TWO: Self = Self(u128::MAX);
        const NEG_ONE: Self = Self(u128::MAX);

        fn from_u64(_int: u64) -> Self {
            unreachable!("exponentiation chains never embed integers")
        }
    }

    const G: Power = Power(1);

    #[test]
    fn test_inverse_sbox_chain_exponent() {
        assert_eq!(exp_10540996611094048183(G), Power(10540996611094048183));
    }

    #[test]
    fn test_inverse_sbox_chain_inverts_seven() {
        let d: u128 = 10540996611094048183;
        let p_minus_one: u128 = 0xFFFF_FFFF_0000_0000;
        assert_eq!((7 * d) % p_minus_one, 1);
    }

    #[test]
    fn test_exp_u64_by_squaring_exponent() {
        for power in [0, 1, 2, 7, 255, 1 << 40, u64::MAX] {
            assert_eq!(exp_u64_by_squaring(G, power), Power(power as u128));
        }
    }

    #[test]
    fn test_exp_const_small_powers() {
        assert_eq!(G.exp_const_u64::<0>(), Power(0));
        assert_eq!(G.exp_const_u64::<3>(), Power(3));
        assert_eq!(G.exp_const_u64::<5>(), Power(5));
        assert_eq!(G.exp_const_u64::<7>(), Power(7));
        assert_eq!(G.exp_const_u64::<11>(), Power(11));
        assert_eq!(G.exp_power_of_2(31), Power(1 << 31));
    }

    #[test]
    fn test_exp_acc() {
        assert_eq!(exp_acc(3, Power(4), Power(4)), Power(36));
    }
}
