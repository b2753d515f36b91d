use rpo_field::PrimeCharacteristicRing;

use crate::permutation::Permutation;

/// A linear layer whose matrix is maximum distance separable: every output word depends on every
/// input word.
pub trait MdsPermutation<T: Clone, const WIDTH: usize>: Permutation<[T; WIDTH]> {}

/// An MDS layer given by an explicit `WIDTH x WIDTH` matrix, applied as a matrix-vector product.
///
/// This costs `WIDTH^2` multiplications. No structure of the matrix (e.g. circulance) is assumed.
#[derive(Clone, Debug)]
pub struct DenseMdsMatrix<F, const WIDTH: usize> {
    matrix: [[F; WIDTH]; WIDTH],
}

impl<F, const WIDTH: usize> DenseMdsMatrix<F, WIDTH> {
    /// Wrap `matrix`. The caller is responsible for it actually being MDS.
    pub const fn new(matrix: [[F; WIDTH]; WIDTH]) -> Self {
        Self { matrix }
    }

    pub const fn matrix(&self) -> &[[F; WIDTH]; WIDTH] {
        &self.matrix
    }
}

impl<F, const WIDTH: usize> Permutation<[F; WIDTH]> for DenseMdsMatrix<F, WIDTH>
where
    F: PrimeCharacteristicRing + Copy + Sync,
{
    fn permute(&self, input: [F; WIDTH]) -> [F; WIDTH] {
        self.matrix.map(|row| {
            row.iter()
                .zip(&input)
                .map(|(&m, &x)| m * x)
                .sum()
        })
    }

    fn permute_mut(&self, input: &mut [F; WIDTH]) {
        *input = self.permute(*input);
    }
}

impl<F, const WIDTH: usize> MdsPermutation<F, WIDTH> for DenseMdsMatrix<F, WIDTH> where
    F: PrimeCharacteristicRing + Copy + Sync
{
}

#[cfg(test)]
mod tests {
    use core::array;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rpo_field::PrimeCharacteristicRing;
    use rpo_goldilocks::Goldilocks;

    use super::*;

    type F = Goldilocks;

    #[test]
    fn test_identity_matrix() {
        let identity: [[F; 4]; 4] =
            array::from_fn(|i| array::from_fn(|j| F::from_bool(i == j)));
        let mds = DenseMdsMatrix::new(identity);
        let mut rng = SmallRng::seed_from_u64(1);
        let input: [F; 4] = rng.random();
        assert_eq!(mds.permute(input), input);
    }

    #[test]
    fn test_small_product() {
        let mds = DenseMdsMatrix::new([[F::ONE, F::TWO], [F::from_u8(3), F::from_u8(4)]]);
        let out = mds.permute([F::from_u8(5), F::from_u8(6)]);
        assert_eq!(out, [F::from_u8(17), F::from_u8(39)]);
    }

    #[test]
    fn test_linearity() {
        let mut rng = SmallRng::seed_from_u64(1);
        let matrix: [[F; 6]; 6] = rng.random();
        let mds = DenseMdsMatrix::new(matrix);
        let x: [F; 6] = rng.random();
        let y: [F; 6] = rng.random();
        let sum: [F; 6] = array::from_fn(|i| x[i] + y[i]);
        let (mx, my) = (mds.permute(x), mds.permute(y));
        assert_eq!(mds.permute(sum), array::from_fn(|i| mx[i] + my[i]));

        let mut z = x;
        mds.permute_mut(&mut z);
        assert_eq!(z, mx);
    }
}
