//! Value parsers for the command line interface.

use core::str::FromStr;

/// Bytes given on the command line as hex, with an optional `0x` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

impl FromStr for HexBytes {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        hex::decode(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!("00ff10".parse(), Ok(HexBytes(vec![0x00, 0xff, 0x10])));
        assert_eq!(" 0xABcd ".parse(), Ok(HexBytes(vec![0xab, 0xcd])));
        assert_eq!("".parse(), Ok(HexBytes(vec![])));
        assert_eq!(
            "abc".parse::<HexBytes>(),
            Err(hex::FromHexError::OddLength)
        );
        assert!("zz".parse::<HexBytes>().is_err());
    }
}
