use alloc::vec;
use alloc::vec::Vec;

use rpo_goldilocks::Goldilocks;
use rpo_rescue::{RPO_WIDTH, Rpo};
use rpo_symmetric::CryptographicPermutation;
use tracing::{instrument, trace};

use crate::{CAPACITY_BYTES, STATE_BYTES, SpongeError, state_to_words, words_to_state};

/// Where a sponge is in its lifecycle. The only transition is `Absorbing -> Squeezing`, made by
/// [`Rpo128::flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Absorbing,
    Squeezing,
}

/// The RPO-128 duplex sponge.
///
/// Usage is `inject*`, then exactly one `flip`, then `extract*`. Calls out of that order are
/// reported as [`SpongeError`]s and leave the sponge unchanged.
///
/// Absorption overwrites the rate region rather than adding into it, and `flip` applies no
/// padding. Two messages which differ only by trailing bytes equal to what the state already
/// holds (for a fresh sponge: trailing zero bytes within the first block) produce the same output.
/// Callers must make message lengths unambiguous themselves, e.g. by hashing fixed-length inputs
/// or by framing them.
///
/// The permutation is a type parameter so that the byte plumbing can be exercised on its own; all
/// real uses go through the default, [`Rpo`].
#[derive(Clone, Debug)]
pub struct Rpo128<P = Rpo> {
    state: [u8; STATE_BYTES],
    /// Offset of the next byte to write or read. Always in `[CAPACITY_BYTES, STATE_BYTES]`.
    dptr: usize,
    phase: Phase,
    permutation: P,
    permutations: u64,
}

impl Rpo128 {
    pub fn new() -> Self {
        Self::with_permutation(Rpo::default())
    }
}

impl Default for Rpo128 {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Rpo128<P>
where
    P: CryptographicPermutation<[Goldilocks; RPO_WIDTH]>,
{
    /// A fresh sponge: zero state, cursor at the start of the rate region.
    pub const fn with_permutation(permutation: P) -> Self {
        Self {
            state: [0; STATE_BYTES],
            dptr: CAPACITY_BYTES,
            phase: Phase::Absorbing,
            permutation,
            permutations: 0,
        }
    }

    /// Reset to a fresh sponge, discarding everything absorbed so far.
    pub fn init(&mut self) {
        self.state = [0; STATE_BYTES];
        self.dptr = CAPACITY_BYTES;
        self.phase = Phase::Absorbing;
        self.permutations = 0;
    }

    /// Absorb `input`. May be called any number of times before [`Self::flip`].
    #[instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn inject(&mut self, input: &[u8]) -> Result<(), SpongeError> {
        if self.phase != Phase::Absorbing {
            return Err(SpongeError::InjectAfterFlip);
        }
        self.absorb(input);
        Ok(())
    }

    /// End absorption. The next [`Self::extract`] starts by running the permutation.
    pub fn flip(&mut self) -> Result<(), SpongeError> {
        if self.phase != Phase::Absorbing {
            return Err(SpongeError::AlreadyFlipped);
        }
        self.finalize();
        Ok(())
    }

    /// Fill `out` with the next `out.len()` output bytes. May be called any number of times after
    /// [`Self::flip`]; the concatenation of all outputs does not depend on how they were split.
    #[instrument(level = "debug", skip_all, fields(len = out.len()))]
    pub fn extract(&mut self, out: &mut [u8]) -> Result<(), SpongeError> {
        if self.phase != Phase::Squeezing {
            return Err(SpongeError::ExtractBeforeFlip);
        }
        self.squeeze(out);
        Ok(())
    }

    /// Like [`Self::extract`], returning the next `len` bytes as a new vector.
    pub fn extract_vec(&mut self, len: usize) -> Result<Vec<u8>, SpongeError> {
        let mut out = vec![0; len];
        self.extract(&mut out)?;
        Ok(out)
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Byte offset of the next byte to be written or read.
    pub const fn cursor(&self) -> usize {
        self.dptr
    }

    /// Number of times the permutation has run since the sponge was created or last reset.
    pub const fn permutation_count(&self) -> u64 {
        self.permutations
    }

    pub(crate) fn absorb(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let clen = (STATE_BYTES - self.dptr).min(input.len());
            let (chunk, rest) = input.split_at(clen);
            self.state[self.dptr..self.dptr + clen].copy_from_slice(chunk);
            self.dptr += clen;
            input = rest;
            if self.dptr == STATE_BYTES {
                self.permute();
                self.dptr = CAPACITY_BYTES;
            }
        }
    }

    pub(crate) fn finalize(&mut self) {
        self.phase = Phase::Squeezing;
        self.dptr = STATE_BYTES;
        trace!(permutations = self.permutations, "sponge flipped");
    }

    pub(crate) fn squeeze(&mut self, mut out: &mut [u8]) {
        while !out.is_empty() {
            if self.dptr == STATE_BYTES {
                self.permute();
                self.dptr = CAPACITY_BYTES;
            }
            let clen = (STATE_BYTES - self.dptr).min(out.len());
            let (chunk, rest) = core::mem::take(&mut out).split_at_mut(clen);
            chunk.copy_from_slice(&self.state[self.dptr..self.dptr + clen]);
            self.dptr += clen;
            out = rest;
        }
    }

    fn permute(&mut self) {
        let mut words = state_to_words(&self.state);
        self.permutation.permute_mut(&mut words);
        self.state = words_to_state(&words);
        self.permutations += 1;
        trace!(permutations = self.permutations, "sponge state permuted");
    }
}

/// Hash `data` into `out` with a fresh [`Rpo128`].
///
/// No length framing is added; see the caveat on [`Rpo128`].
pub fn hash(data: &[u8], out: &mut [u8]) {
    let mut sponge = Rpo128::new();
    sponge.absorb(data);
    sponge.finalize();
    sponge.squeeze(out);
}
