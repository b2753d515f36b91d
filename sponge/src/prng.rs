use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng, TryRngCore};
use tracing::debug;

use crate::{Rpo128, SpongeError};

/// Number of bytes drawn from the operating system by [`RpoPrng::from_system`].
pub const SYSTEM_SEED_BYTES: usize = 32;

/// A deterministic random generator built on the RPO-128 sponge.
///
/// The seed is absorbed, the sponge is flipped, and every output is the next chunk of the sponge's
/// output stream. The stream does not depend on how requests are split: eight calls to
/// [`RngCore::next_u64`] return the same bytes as one 64-byte [`RngCore::fill_bytes`].
#[derive(Clone, Debug)]
pub struct RpoPrng {
    sponge: Rpo128,
}

impl RpoPrng {
    /// A generator whose output stream is determined by `seed`.
    ///
    /// Seeds are not framed, so a seed and the same seed followed by zero bytes within its first
    /// 64-byte block produce the same stream.
    pub fn from_seed_bytes(seed: &[u8]) -> Self {
        let mut sponge = Rpo128::new();
        sponge.absorb(seed);
        sponge.finalize();
        Self { sponge }
    }

    /// A generator seeded with fresh randomness from the operating system.
    pub fn from_system() -> Result<Self, SpongeError> {
        let mut seed = [0u8; SYSTEM_SEED_BYTES];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|_| SpongeError::EntropyUnavailable)?;
        debug!(bytes = SYSTEM_SEED_BYTES, "seeded prng from the operating system");
        Ok(Self::from_seed_bytes(&seed))
    }
}

impl RngCore for RpoPrng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.sponge.squeeze(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.sponge.squeeze(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.sponge.squeeze(dst);
    }
}

impl SeedableRng for RpoPrng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_seed_bytes(&seed)
    }
}
