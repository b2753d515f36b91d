//! Helpers behind the `rpo-hash` command line tool.

pub mod parsers;

use rand::RngCore;
use rpo_sponge::{Rpo128, RpoPrng, SpongeError};
use tracing::info;

/// Where the bytes to hash come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Bytes(Vec<u8>),
    Text(String),
}

impl Message {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bytes(bytes) => bytes,
            Self::Text(text) => text.as_bytes(),
        }
    }
}

/// Hash `message` and return the first `out_len` output bytes.
pub fn digest(message: &Message, out_len: usize) -> Result<Vec<u8>, SpongeError> {
    let input = message.as_bytes();
    info!(input_len = input.len(), out_len, "hashing");

    let mut sponge = Rpo128::new();
    sponge.inject(input)?;
    sponge.flip()?;
    let out = sponge.extract_vec(out_len)?;
    info!(permutations = sponge.permutation_count(), "hashed");
    Ok(out)
}

/// Draw `out_len` bytes from a PRNG seeded with `seed`, or with system entropy when `seed` is
/// `None`.
pub fn prng_bytes(seed: Option<&[u8]>, out_len: usize) -> Result<Vec<u8>, SpongeError> {
    let mut prng = match seed {
        Some(seed) => RpoPrng::from_seed_bytes(seed),
        None => RpoPrng::from_system()?,
    };
    info!(seeded = seed.is_some(), out_len, "streaming prng output");
    let mut out = vec![0; out_len];
    prng.fill_bytes(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_digest_text_and_bytes_agree() {
        let text = digest(&Message::Text("hello".into()), 32).unwrap();
        let bytes = digest(&Message::Bytes(b"hello".to_vec()), 32).unwrap();
        assert_eq!(text, bytes);
        assert_eq!(
            text,
            hex!("8a82c68a4c4867d94b010a7a28599b6f852fac5aed828b699bb8b415012e6556")
        );
    }

    #[test]
    fn test_digest_length() {
        for len in [0, 1, 64, 65, 1000] {
            assert_eq!(digest(&Message::Bytes(vec![]), len).unwrap().len(), len);
        }
    }

    #[test]
    fn test_seeded_prng_bytes() {
        let seed: Vec<u8> = (1..=32).collect();
        let out = prng_bytes(Some(&seed), 16).unwrap();
        assert_eq!(out, hex!("68f59fbd8bf45c4ab6c3be7b14fe7d3f"));
    }

    #[test]
    fn test_system_prng_bytes() {
        assert_eq!(prng_bytes(None, 48).unwrap().len(), 48);
    }
}
