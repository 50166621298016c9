//! Standard base64 encoding function.

use crate::alphabet::STANDARD;
use crate::create_to_base64::encode;

/// Encodes a byte slice to a standard base64 string.
///
/// The output is always `4 * ceil(len / 3)` characters long. Inputs whose
/// length is one more than a multiple of three end in `==`, two more end
/// in a single `=`.
///
/// # Example
///
/// ```
/// use dsa_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(bytes: &[u8]) -> String {
    encode(bytes, &STANDARD, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64(b""), "");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(to_base64(b"f"), "Zg==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(to_base64(b"fo"), "Zm8=");
    }

    #[test]
    fn test_hello() {
        assert_eq!(to_base64(b"hello"), "aGVsbG8=");
    }

    #[test]
    fn test_rfc4648_vectors() {
        assert_eq!(to_base64(b"foo"), "Zm9v");
        assert_eq!(to_base64(b"foob"), "Zm9vYg==");
        assert_eq!(to_base64(b"fooba"), "Zm9vYmE=");
        assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_high_bits() {
        assert_eq!(to_base64(&[0xFF, 0xFF, 0xFF]), "////");
        assert_eq!(to_base64(&[0xFB, 0xEF]), "++8=");
        assert_eq!(to_base64(&[0x00]), "AA==");
    }

    #[test]
    fn test_padding_shape() {
        let data: Vec<u8> = (0..=255).collect();
        for len in 0..data.len() {
            let encoded = to_base64(&data[..len]);
            assert_eq!(encoded.len() % 4, 0);
            assert_eq!(encoded.len(), len.div_ceil(3) * 4);
            let padding = encoded.chars().rev().take_while(|&c| c == '=').count();
            assert_eq!(padding, (3 - len % 3) % 3, "length {}", len);
        }
    }
}
