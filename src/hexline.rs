use crate::error::{HexflipError, Result};
use std::fmt;

/// Width of a hash value in bits
/// Always a positive multiple of 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitWidth(u32);

impl BitWidth {
    pub fn new(bits: u32) -> Result<Self> {
        if bits == 0 || bits % 8 != 0 {
            return Err(HexflipError::InvalidArgument(format!(
                "bit width {} must be a positive multiple of 8",
                bits
            )));
        }
        Ok(Self(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of bytes in one hash value
    pub fn bytes(self) -> usize {
        (self.0 / 8) as usize
    }

    /// Number of hex characters in one encoded value
    pub fn hex_len(self) -> usize {
        self.bytes() * 2
    }
}

impl std::str::FromStr for BitWidth {
    type Err = HexflipError;
    fn from_str(s: &str) -> Result<Self> {
        let bits: u32 = s.trim().parse().map_err(|_| {
            HexflipError::InvalidArgument(format!("bit width: {:?} is not a positive integer", s))
        })?;
        Self::new(bits)
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

/// Parse a non-negative count (number of hashes, number of flips)
pub fn parse_count(what: &str, s: &str) -> Result<u64> {
    s.trim().parse().map_err(|_| {
        HexflipError::InvalidArgument(format!("{}: {:?} is not a non-negative integer", what, s))
    })
}

/// Decode one hex line into a hash value
/// Accepts either case and ignores surrounding whitespace
/// `line` is the 1-based position used in error reports
pub fn decode_line(text: &str, line: u64) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HexflipError::EmptyHash { line });
    }
    hex::decode(trimmed).map_err(|source| HexflipError::Decode { line, source })
}

/// Encode a hash value as uppercase hex
pub fn encode_line(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bit_width_validation() {
        assert_eq!(BitWidth::new(256).unwrap().bytes(), 32);
        assert_eq!(BitWidth::new(8).unwrap().hex_len(), 2);
        assert!(BitWidth::new(0).is_err());
        assert!(BitWidth::new(12).is_err());
    }

    #[test]
    fn test_bit_width_parsing() {
        assert_eq!("64".parse::<BitWidth>().unwrap().bits(), 64);
        assert!("-8".parse::<BitWidth>().is_err());
        assert!("abc".parse::<BitWidth>().is_err());
        assert!("".parse::<BitWidth>().is_err());
        assert!(matches!(
            "7".parse::<BitWidth>(),
            Err(HexflipError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("count", "0").unwrap(), 0);
        assert_eq!(parse_count("count", "42").unwrap(), 42);
        assert!(parse_count("count", "-1").is_err());
        assert!(parse_count("count", "1.5").is_err());
    }

    #[test]
    fn test_decode_accepts_both_cases() {
        assert_eq!(decode_line("deadBEEF", 1).unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(decode_line("  00ff\r", 1).unwrap(), vec![0x00, 0xFF]);
    }

    #[test]
    fn test_decode_errors_carry_line_number() {
        match decode_line("ABC", 7) {
            Err(HexflipError::Decode { line, source }) => {
                assert_eq!(line, 7);
                assert_eq!(source, hex::FromHexError::OddLength);
            }
            other => panic!("expected decode error, got {:?}", other),
        }
        assert!(matches!(
            decode_line("0G", 3),
            Err(HexflipError::Decode { line: 3, .. })
        ));
        assert!(matches!(
            decode_line("", 9),
            Err(HexflipError::EmptyHash { line: 9 })
        ));
    }

    #[test]
    fn test_encode_is_uppercase() {
        assert_eq!(encode_line(&[0xab, 0x01, 0xff]), "AB01FF");
    }

    proptest! {
        #[test]
        fn prop_encode_decode_roundtrip(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
            let encoded = encode_line(&bytes);
            prop_assert_eq!(encoded.len(), bytes.len() * 2);
            prop_assert!(encoded.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
            prop_assert_eq!(decode_line(&encoded, 1).unwrap(), bytes.clone());
            prop_assert_eq!(decode_line(&encoded.to_lowercase(), 1).unwrap(), bytes);
        }
    }
}
