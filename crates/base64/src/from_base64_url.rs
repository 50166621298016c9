//! URL-safe base64 decoding function.

use crate::alphabet::URL_SAFE;
use crate::create_from_base64::decode;
use crate::Base64Error;

/// Decodes an unpadded URL-safe base64 string.
///
/// # Errors
///
/// Fails on `=`, on characters outside the URL-safe alphabet, and on
/// lengths of the form `4k + 1`, which cannot come from any byte sequence.
///
/// # Example
///
/// ```
/// use dsa_base64::from_base64_url;
///
/// assert_eq!(from_base64_url("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// ```
pub fn from_base64_url(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode(encoded, &URL_SAFE, true)
}
