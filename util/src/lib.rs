//! Various simple utilities.

#![no_std]

/// Number of bytes in the little-endian encoding of a `u64`.
pub const BYTES_PER_U64: usize = 8;

/// Try to force Rust to emit a branch. Example:
///
/// ```no_run
/// let x = 100;
/// if x > 20 {
///     println!("x is big!");
///     rpo_util::branch_hint();
/// } else {
///     println!("x is small!");
/// }
/// ```
///
/// This function has no semantics. It is a hint only.
#[inline(always)]
pub fn branch_hint() {
    // NOTE: These are the currently supported assembly architectures. See the
    // [nightly reference](https://doc.rust-lang.org/nightly/reference/inline-assembly.html) for
    // the most up-to-date list.
    #[cfg(any(
        target_arch = "aarch64",
        target_arch = "arm",
        target_arch = "riscv32",
        target_arch = "riscv64",
        target_arch = "x86",
        target_arch = "x86_64",
    ))]
    unsafe {
        core::arch::asm!("", options(nomem, nostack, preserves_flags));
    }
}

/// Write `words` into `out` as consecutive little-endian 8-byte chunks.
///
/// # Panics
/// Panics if `out.len() != 8 * words.len()`.
#[inline]
pub fn u64s_to_le_bytes(words: &[u64], out: &mut [u8]) {
    assert_eq!(
        out.len(),
        words.len() * BYTES_PER_U64,
        "output buffer does not match the word count"
    );
    for (chunk, word) in out.chunks_exact_mut(BYTES_PER_U64).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Read consecutive little-endian 8-byte chunks of `bytes` into `out`.
///
/// # Panics
/// Panics if `bytes.len() != 8 * out.len()`.
#[inline]
pub fn le_bytes_to_u64s(bytes: &[u8], out: &mut [u64]) {
    assert_eq!(
        bytes.len(),
        out.len() * BYTES_PER_U64,
        "input buffer does not match the word count"
    );
    for (word, chunk) in out.iter_mut().zip(bytes.chunks_exact(BYTES_PER_U64)) {
        let mut buf = [0u8; BYTES_PER_U64];
        buf.copy_from_slice(chunk);
        *word = u64::from_le_bytes(buf);
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn test_le_layout() {
        let mut out = [0u8; 16];
        u64s_to_le_bytes(&[0x0102_0304_0506_0708, u64::MAX], &mut out);
        assert_eq!(out[..8], [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(out[8..], [0xff; 8]);
    }

    #[test]
    fn test_words_survive_packing() {
        let mut rng = SmallRng::seed_from_u64(1);
        let words: [u64; 12] = rng.random();
        let mut bytes = [0u8; 96];
        u64s_to_le_bytes(&words, &mut bytes);
        let mut back = [0u64; 12];
        le_bytes_to_u64s(&bytes, &mut back);
        assert_eq!(back, words);
    }

    #[test]
    #[should_panic]
    fn test_length_mismatch_panics() {
        let mut out = [0u8; 15];
        u64s_to_le_bytes(&[1, 2], &mut out);
    }
}
