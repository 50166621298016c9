//! Base64 encoding and decoding utilities.
//!
//! This crate provides base64 encoding/decoding (RFC 4648) with support for:
//! - Standard base64 with padding
//! - URL-safe base64 without padding
//! - Custom 64-symbol alphabets via encoder/decoder factories
//!
//! Decoding is strict: malformed input is reported as a [`Base64Error`]
//! instead of producing garbage.
//!
//! # Example
//!
//! ```
//! use dsa_base64::{to_base64, from_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod from_base64_url;
mod to_base64;
mod to_base64_url;

use thiserror::Error;

pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::from_base64;
pub use from_base64_url::from_base64_url;
pub use to_base64::to_base64;
pub use to_base64_url::to_base64_url;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The encoded length cannot come from any byte sequence.
    #[error("invalid base64 string length: {0}")]
    InvalidLength(usize),
    /// A character outside the alphabet.
    #[error("invalid base64 byte 0x{byte:02x} at index {index}")]
    InvalidByte { index: usize, byte: u8 },
    /// `=` found somewhere other than the end of the input.
    #[error("misplaced base64 padding at index {0}")]
    InvalidPadding(usize),
    /// The character set must be exactly 64 characters.
    #[error("chars must be 64 characters long, got {0}")]
    InvalidCharSetLength(usize),
    #[error("duplicate symbol {0:?} in base64 alphabet")]
    DuplicateSymbol(char),
    #[error("non-ASCII symbol {0:?} in base64 alphabet")]
    NonAsciiSymbol(char),
    /// The padding character cannot double as an alphabet symbol.
    #[error("reserved symbol {0:?} in base64 alphabet")]
    ReservedSymbol(char),
}
