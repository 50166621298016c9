//! Standard base64 decoding function.

use crate::alphabet::STANDARD;
use crate::create_from_base64::decode;
use crate::Base64Error;

/// Decodes a standard, padded base64 string.
///
/// # Errors
///
/// Fails when the length is not a multiple of 4, when a character is not in
/// the standard alphabet, or when `=` appears anywhere but the last one or
/// two positions.
///
/// # Example
///
/// ```
/// use dsa_base64::{from_base64, Base64Error};
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// assert_eq!(from_base64("A"), Err(Base64Error::InvalidLength(1)));
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode(encoded, &STANDARD, false)
}
