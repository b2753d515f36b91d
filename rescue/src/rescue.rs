use alloc::vec::Vec;

use rpo_field::{PermutationMonomial, PrimeCharacteristicRing};
use rpo_symmetric::{CryptographicPermutation, MdsPermutation, Permutation};

use crate::WidthError;

/// A Rescue permutation with the round structure of Rescue Prime Optimized.
///
/// Each round applies, in order:
/// 1. the MDS layer,
/// 2. the first half-round constants `ark1[round]`,
/// 3. the S-box `x -> x^ALPHA` on every element,
/// 4. the MDS layer again,
/// 5. the second half-round constants `ark2[round]`,
/// 6. the inverse S-box `x -> x^{1/ALPHA}` on every element.
///
/// The number of rounds is the number of rows of round constants.
#[derive(Clone, Debug)]
pub struct Rescue<F, Mds, const WIDTH: usize, const ALPHA: u64> {
    mds: Mds,
    ark1: Vec<[F; WIDTH]>,
    ark2: Vec<[F; WIDTH]>,
}

impl<F, Mds, const WIDTH: usize, const ALPHA: u64> Rescue<F, Mds, WIDTH, ALPHA>
where
    F: PrimeCharacteristicRing + PermutationMonomial<ALPHA> + Copy + Sync,
    Mds: MdsPermutation<F, WIDTH>,
{
    /// # Panics
    /// Panics if `ark1` and `ark2` do not have the same number of rounds.
    pub fn new(mds: Mds, ark1: Vec<[F; WIDTH]>, ark2: Vec<[F; WIDTH]>) -> Self {
        assert_eq!(
            ark1.len(),
            ark2.len(),
            "both half-rounds need a row of constants for every round"
        );
        Self { mds, ark1, ark2 }
    }

    pub fn num_rounds(&self) -> usize {
        self.ark1.len()
    }

    pub const fn mds(&self) -> &Mds {
        &self.mds
    }

    /// Apply round number `round` to `state`.
    ///
    /// # Panics
    /// Panics if `round >= self.num_rounds()`.
    pub fn apply_round(&self, state: &mut [F; WIDTH], round: usize) {
        self.mds.permute_mut(state);
        Self::add_round_constants(state, &self.ark1[round]);
        Self::sbox_layer(state);

        self.mds.permute_mut(state);
        Self::add_round_constants(state, &self.ark2[round]);
        Self::inverse_sbox_layer(state);
    }

    #[inline]
    pub fn add_round_constants(state: &mut [F; WIDTH], constants: &[F; WIDTH]) {
        for (x, &c) in state.iter_mut().zip(constants) {
            *x += c;
        }
    }

    #[inline]
    pub fn sbox_layer(state: &mut [F; WIDTH]) {
        state.iter_mut().for_each(|x| *x = x.injective_exp_n());
    }

    #[inline]
    pub fn inverse_sbox_layer(state: &mut [F; WIDTH]) {
        state.iter_mut().for_each(|x| *x = x.injective_exp_root_n());
    }

    /// Permute a state given as a slice, rejecting slices whose length is not `WIDTH`.
    pub fn permute_slice(&self, state: &mut [F]) -> Result<(), WidthError> {
        let actual = state.len();
        let state: &mut [F; WIDTH] = state.try_into().map_err(|_| WidthError {
            expected: WIDTH,
            actual,
        })?;
        self.permute_mut(state);
        Ok(())
    }
}

impl<F, Mds, const WIDTH: usize, const ALPHA: u64> Permutation<[F; WIDTH]>
    for Rescue<F, Mds, WIDTH, ALPHA>
where
    F: PrimeCharacteristicRing + PermutationMonomial<ALPHA> + Copy + Sync,
    Mds: MdsPermutation<F, WIDTH>,
{
    fn permute_mut(&self, state: &mut [F; WIDTH]) {
        for round in 0..self.num_rounds() {
            self.apply_round(state, round);
        }
    }
}

impl<F, Mds, const WIDTH: usize, const ALPHA: u64> CryptographicPermutation<[F; WIDTH]>
    for Rescue<F, Mds, WIDTH, ALPHA>
where
    F: PrimeCharacteristicRing + PermutationMonomial<ALPHA> + Copy + Sync,
    Mds: MdsPermutation<F, WIDTH>,
{
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use core::array;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rpo_goldilocks::Goldilocks;
    use rpo_symmetric::DenseMdsMatrix;

    use super::*;

    type F = Goldilocks;
    type Toy = Rescue<F, DenseMdsMatrix<F, 3>, 3, 7>;

    fn toy(num_rounds: usize) -> Toy {
        let mut rng = SmallRng::seed_from_u64(1);
        let mds = DenseMdsMatrix::new([
            [F::TWO, F::ONE, F::ONE],
            [F::ONE, F::TWO, F::ONE],
            [F::ONE, F::ONE, F::TWO],
        ]);
        let ark1 = (0..num_rounds).map(|_| rng.random()).collect();
        let ark2 = (0..num_rounds).map(|_| rng.random()).collect();
        Rescue::new(mds, ark1, ark2)
    }

    #[test]
    fn test_zero_rounds_is_identity() {
        let rescue = toy(0);
        let input = [F::ONE, F::TWO, F::NEG_ONE];
        assert_eq!(rescue.permute(input), input);
    }

    #[test]
    fn test_sbox_layers_invert_each_other() {
        let mut rng = SmallRng::seed_from_u64(1);
        let input: [F; 3] = rng.random();
        let mut state = input;
        Toy::sbox_layer(&mut state);
        assert_eq!(state, input.map(|x| x.exp_u64(7)));
        Toy::inverse_sbox_layer(&mut state);
        assert_eq!(state, input);

        Toy::inverse_sbox_layer(&mut state);
        Toy::sbox_layer(&mut state);
        assert_eq!(state, input);
    }

    #[test]
    fn test_round_matches_spelled_out_layers() {
        let rescue = toy(2);
        let mut rng = SmallRng::seed_from_u64(2);
        let input: [F; 3] = rng.random();

        let mut expected = input;
        for round in 0..2 {
            expected = rescue.mds().permute(expected);
            expected = array::from_fn(|i| (expected[i] + rescue.ark1[round][i]).exp_u64(7));
            expected = rescue.mds().permute(expected);
            expected = array::from_fn(|i| {
                (expected[i] + rescue.ark2[round][i]).exp_u64(10540996611094048183)
            });
        }
        assert_eq!(rescue.permute(input), expected);
    }

    #[test]
    fn test_permute_slice_checks_width() {
        let rescue = toy(1);
        let mut short = vec![F::ZERO; 2];
        assert_eq!(
            rescue.permute_slice(&mut short),
            Err(WidthError {
                expected: 3,
                actual: 2
            })
        );
        // The rejected slice is left untouched.
        assert_eq!(short, vec![F::ZERO; 2]);

        let mut exact = vec![F::ONE; 3];
        assert_eq!(rescue.permute_slice(&mut exact), Ok(()));
        assert_eq!(exact[..], rescue.permute([F::ONE; 3])[..]);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_round_constants_panic() {
        let mds = DenseMdsMatrix::new([[F::ONE]]);
        let _ = Rescue::<F, _, 1, 7>::new(mds, vec![[F::ONE]], vec![]);
    }
}
