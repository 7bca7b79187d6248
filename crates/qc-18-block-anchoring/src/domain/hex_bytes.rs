//! `0x`-prefixed lowercase hex encoding for fixed-size byte arrays.
//!
//! Used with `#[serde(with = "hex_bytes")]` for hashes and addresses on
//! the anchoring wire format.

use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

/// Render bytes as `0x` + lowercase hex.
pub fn encode<const N: usize>(bytes: &[u8; N]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse an optionally `0x`-prefixed hex string into exactly `N` bytes.
pub fn decode<const N: usize>(s: &str) -> Result<[u8; N], String> {
    let raw = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let bytes = hex::decode(raw).map_err(|e| e.to_string())?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| format!("expected {} bytes, got {}", N, len))
}

/// Serde serializer.
pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encode(bytes))
}

/// Serde deserializer.
pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    decode(&s).map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_prefixed_lowercase() {
        assert_eq!(encode(&[0xAB, 0x01]), "0xab01");
    }

    #[test]
    fn test_decode_accepts_with_and_without_prefix() {
        assert_eq!(decode::<2>("0xab01").unwrap(), [0xAB, 0x01]);
        assert_eq!(decode::<2>("AB01").unwrap(), [0xAB, 0x01]);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let err = decode::<20>("0x1552").unwrap_err();
        assert!(err.contains("expected 20 bytes"));
    }

    #[test]
    fn test_decode_rejects_non_hex() {
        assert!(decode::<1>("0xzz").is_err());
    }
}
