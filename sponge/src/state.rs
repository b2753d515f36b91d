use rpo_field::PrimeField64;
use rpo_goldilocks::Goldilocks;
use rpo_rescue::RPO_WIDTH;
use rpo_util::{BYTES_PER_U64, le_bytes_to_u64s, u64s_to_le_bytes};

/// Size of the sponge state in bytes.
pub const STATE_BYTES: usize = RPO_WIDTH * BYTES_PER_U64;

/// The capacity region is the first `CAPACITY_BYTES` bytes of the state.
pub const CAPACITY_BYTES: usize = 32;

/// The rate region is the last `RATE_BYTES` bytes of the state.
pub const RATE_BYTES: usize = STATE_BYTES - CAPACITY_BYTES;

/// View the byte state as field elements.
///
/// Element `i` is the little-endian `u64` stored in bytes `8 * i .. 8 * i + 8`, on every platform.
/// Absorbed bytes may form a word which is not below `p`; such a word is reduced modulo `p`.
pub fn state_to_words(bytes: &[u8; STATE_BYTES]) -> [Goldilocks; RPO_WIDTH] {
    let mut words = [0u64; RPO_WIDTH];
    le_bytes_to_u64s(bytes, &mut words);
    words.map(Goldilocks::new)
}

/// Inverse of [`state_to_words`] on canonical elements.
pub fn words_to_state(words: &[Goldilocks; RPO_WIDTH]) -> [u8; STATE_BYTES] {
    let mut bytes = [0u8; STATE_BYTES];
    u64s_to_le_bytes(&words.map(|w| w.as_canonical_u64()), &mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use rpo_field::PrimeCharacteristicRing;

    use super::*;

    #[test]
    fn test_region_sizes() {
        assert_eq!(STATE_BYTES, 96);
        assert_eq!(CAPACITY_BYTES, 4 * BYTES_PER_U64);
        assert_eq!(RATE_BYTES, 64);
    }

    #[test]
    fn test_little_endian_overlay() {
        let mut bytes = [0u8; STATE_BYTES];
        bytes[8] = 1;
        bytes[95] = 0x01;
        let words = state_to_words(&bytes);
        assert_eq!(words[0], Goldilocks::ZERO);
        assert_eq!(words[1], Goldilocks::ONE);
        assert_eq!(words[11], Goldilocks::new(1 << 56));
        assert_eq!(words_to_state(&words), bytes);
    }

    #[test]
    fn test_non_canonical_words_are_reduced() {
        let bytes = [0xffu8; STATE_BYTES];
        let words = state_to_words(&bytes);
        assert!(words.iter().all(|&w| w == Goldilocks::new(u32::MAX as u64 - 1)));

        let round_trip = words_to_state(&words);
        assert_eq!(round_trip[..8], [0xfe, 0xff, 0xff, 0xff, 0, 0, 0, 0]);
    }
}
