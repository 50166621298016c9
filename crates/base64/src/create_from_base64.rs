//! Factory function for creating base64 decoders with custom alphabets.

use crate::alphabet::Alphabet;
use crate::constants::{ALPHABET, PAD_BYTE};
use crate::Base64Error;

/// Decodes `encoded` with the given alphabet.
///
/// With `no_padding` unset the input must be a whole number of quartets and
/// may end in one or two `=`. With `no_padding` set the input must carry no
/// `=` at all and its final quartet may be two or three symbols long.
pub(crate) fn decode(
    encoded: &str,
    alphabet: &Alphabet,
    no_padding: bool,
) -> Result<Vec<u8>, Base64Error> {
    let encoded = encoded.as_bytes();
    let length = encoded.len();

    let data_length = if no_padding {
        if length % 4 == 1 {
            return Err(Base64Error::InvalidLength(length));
        }
        if let Some(index) = encoded.iter().position(|&c| c == PAD_BYTE) {
            return Err(Base64Error::InvalidPadding(index));
        }
        length
    } else {
        if length % 4 != 0 {
            return Err(Base64Error::InvalidLength(length));
        }
        let padding = encoded.iter().rev().take_while(|&&c| c == PAD_BYTE).count();
        if padding > 2 {
            return Err(Base64Error::InvalidPadding(length - padding));
        }
        length - padding
    };

    // Padding may only trail the input.
    if let Some(index) = encoded[..data_length].iter().position(|&c| c == PAD_BYTE) {
        return Err(Base64Error::InvalidPadding(index));
    }

    let sextet = |index: usize| -> Result<u8, Base64Error> {
        let byte = encoded[index];
        alphabet
            .sextet(byte)
            .ok_or(Base64Error::InvalidByte { index, byte })
    };

    let tail = data_length % 4;
    let main_length = data_length - tail;
    let mut buf = Vec::with_capacity(main_length / 4 * 3 + tail.saturating_sub(1));

    let mut i = 0;
    while i < main_length {
        let sextet0 = sextet(i)?;
        let sextet1 = sextet(i + 1)?;
        let sextet2 = sextet(i + 2)?;
        let sextet3 = sextet(i + 3)?;

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push((sextet1 << 4) | (sextet2 >> 2));
        buf.push((sextet2 << 6) | sextet3);
        i += 4;
    }

    match tail {
        2 => {
            let sextet0 = sextet(main_length)?;
            let sextet1 = sextet(main_length + 1)?;
            buf.push((sextet0 << 2) | (sextet1 >> 4));
        }
        3 => {
            let sextet0 = sextet(main_length)?;
            let sextet1 = sextet(main_length + 1)?;
            let sextet2 = sextet(main_length + 2)?;
            buf.push((sextet0 << 2) | (sextet1 >> 4));
            buf.push((sextet1 << 4) | (sextet2 >> 2));
        }
        _ => {}
    }

    Ok(buf)
}

/// Creates a base64 decoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to standard base64.
/// * `no_padding` - If true, the decoder expects unpadded input and rejects `=`.
///
/// # Returns
///
/// A function that decodes a base64 `&str` to a `Vec<u8>`.
///
/// # Errors
///
/// Returns an error if `chars` is not 64 distinct ASCII characters, or contains `=`.
///
/// # Example
///
/// ```
/// use dsa_base64::create_from_base64;
///
/// let decode = create_from_base64(None, false).unwrap();
/// let result = decode("aGVsbG8=").unwrap();
/// assert_eq!(result, b"hello");
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
    no_padding: bool,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base64Error>, Base64Error> {
    let alphabet = Alphabet::new(chars.unwrap_or(ALPHABET))?;
    Ok(move |encoded: &str| decode(encoded, &alphabet, no_padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::STANDARD;

    #[test]
    fn test_misplaced_padding() {
        assert_eq!(
            decode("A=AA", &STANDARD, false),
            Err(Base64Error::InvalidPadding(1))
        );
        assert_eq!(
            decode("Zg==Zg==", &STANDARD, false),
            Err(Base64Error::InvalidPadding(2))
        );
    }

    #[test]
    fn test_too_much_padding() {
        assert_eq!(
            decode("A===", &STANDARD, false),
            Err(Base64Error::InvalidPadding(1))
        );
        assert_eq!(
            decode("====", &STANDARD, false),
            Err(Base64Error::InvalidPadding(0))
        );
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            decode("A", &STANDARD, false),
            Err(Base64Error::InvalidLength(1))
        );
        assert_eq!(
            decode("Zm9vY", &STANDARD, true),
            Err(Base64Error::InvalidLength(5))
        );
    }

    #[test]
    fn test_invalid_byte_position() {
        assert_eq!(
            decode("Zm9v!A==", &STANDARD, false),
            Err(Base64Error::InvalidByte {
                index: 4,
                byte: b'!'
            })
        );
    }

    #[test]
    fn test_no_padding_rejects_pad() {
        assert_eq!(
            decode("Zg==", &STANDARD, true),
            Err(Base64Error::InvalidPadding(2))
        );
        assert_eq!(decode("Zg", &STANDARD, true), Ok(b"f".to_vec()));
        assert_eq!(decode("Zm8", &STANDARD, true), Ok(b"fo".to_vec()));
    }

    #[test]
    fn test_non_canonical_trailing_bits_accepted() {
        // "Zh==" carries non-zero bits past the last full byte.
        assert_eq!(decode("Zh==", &STANDARD, false), Ok(b"f".to_vec()));
    }

    #[test]
    fn test_factory_with_custom_alphabet() {
        let reversed: String = ALPHABET.chars().rev().collect();
        let decode = create_from_base64(Some(&reversed), false).unwrap();
        assert_eq!(decode("mf==").unwrap(), b"f");
        // 'Z' and 'g' sit at 38 and 31 in the reversed alphabet.
        assert_eq!(decode("Zg==").unwrap(), vec![153]);
    }
}
