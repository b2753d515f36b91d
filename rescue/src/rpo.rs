use rpo_goldilocks::Goldilocks;
use rpo_symmetric::DenseMdsMatrix;

use crate::{RPO_ALPHA, RPO_ARK1, RPO_ARK2, RPO_MDS, RPO_WIDTH, Rescue};

/// The MDS layer of RPO: a dense product with the fixed 12 x 12 matrix.
pub type RpoMds = DenseMdsMatrix<Goldilocks, RPO_WIDTH>;

/// The RPO permutation: 7 rounds over 12 Goldilocks elements with S-box degree 7.
pub type Rpo = Rescue<Goldilocks, RpoMds, RPO_WIDTH, RPO_ALPHA>;

impl Default for Rpo {
    fn default() -> Self {
        Self::new(
            DenseMdsMatrix::new(RPO_MDS),
            RPO_ARK1.to_vec(),
            RPO_ARK2.to_vec(),
        )
    }
}
