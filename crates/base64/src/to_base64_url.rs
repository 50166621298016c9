//! URL-safe base64 encoding function.

use crate::alphabet::URL_SAFE;
use crate::create_to_base64::encode;

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and does not add padding.
///
/// # Example
///
/// ```
/// use dsa_base64::to_base64_url;
///
/// let encoded = to_base64_url(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ");
/// ```
pub fn to_base64_url(bytes: &[u8]) -> String {
    encode(bytes, &URL_SAFE, false)
}
