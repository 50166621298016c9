//! Factory function for creating base64 encoders with custom alphabets.

use crate::alphabet::Alphabet;
use crate::constants::{ALPHABET, PAD};
use crate::Base64Error;

/// Number of output characters for `length` input bytes.
#[inline]
pub(crate) fn encoded_len(length: usize, pad: bool) -> usize {
    let full = length / 3 * 4;
    match length % 3 {
        0 => full,
        _ if pad => full + 4,
        rem => full + rem + 1,
    }
}

/// Encodes `bytes` with the given alphabet.
///
/// Each 3-byte group `b0 b1 b2` becomes four symbols indexed by
/// `b0 >> 2`, `(b0 << 4 | b1 >> 4) & 0x3F`, `(b1 << 2 | b2 >> 6) & 0x3F`
/// and `b2 & 0x3F`. A trailing group of one or two bytes is zero-extended;
/// the symbols that only carry the zero bytes are replaced by `=` when
/// `pad` is set and omitted otherwise.
pub(crate) fn encode(bytes: &[u8], alphabet: &Alphabet, pad: bool) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len(), pad));

    let mut chunks = bytes.chunks_exact(3);
    for chunk in &mut chunks {
        let (b0, b1, b2) = (chunk[0], chunk[1], chunk[2]);
        out.push(alphabet.symbol(b0 >> 2));
        out.push(alphabet.symbol((b0 << 4) | (b1 >> 4)));
        out.push(alphabet.symbol((b1 << 2) | (b2 >> 6)));
        out.push(alphabet.symbol(b2));
    }

    match *chunks.remainder() {
        [b0] => {
            out.push(alphabet.symbol(b0 >> 2));
            out.push(alphabet.symbol(b0 << 4));
            if pad {
                out.push(PAD);
                out.push(PAD);
            }
        }
        [b0, b1] => {
            out.push(alphabet.symbol(b0 >> 2));
            out.push(alphabet.symbol((b0 << 4) | (b1 >> 4)));
            out.push(alphabet.symbol(b1 << 2));
            if pad {
                out.push(PAD);
            }
        }
        _ => {}
    }

    out
}

/// Creates a base64 encoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to standard base64.
/// * `pad` - Whether to pad the output with `=` to a multiple of 4 characters.
///
/// # Errors
///
/// Returns an error if `chars` is not 64 distinct ASCII characters, or contains `=`.
///
/// # Example
///
/// ```
/// use dsa_base64::create_to_base64;
///
/// let encode = create_to_base64(None, true).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8=");
///
/// let encode_unpadded = create_to_base64(None, false).unwrap();
/// assert_eq!(encode_unpadded(b"hello"), "aGVsbG8");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: bool,
) -> Result<impl Fn(&[u8]) -> String, Base64Error> {
    let alphabet = Alphabet::new(chars.unwrap_or(ALPHABET))?;
    Ok(move |bytes: &[u8]| encode(bytes, &alphabet, pad))
}
