//! Validated 64-symbol alphabets with reverse lookup.

use crate::constants::{ALPHABET, ALPHABET_URL, PAD};
use crate::Base64Error;

const INVALID: u8 = 0xFF;

/// A 64-symbol alphabet and its reverse lookup table.
#[derive(Clone)]
pub(crate) struct Alphabet {
    symbols: [u8; 64],
    lookup: [u8; 256],
}

pub(crate) static STANDARD: Alphabet = Alphabet::from_ascii(ALPHABET.as_bytes());
pub(crate) static URL_SAFE: Alphabet = Alphabet::from_ascii(ALPHABET_URL.as_bytes());

impl Alphabet {
    /// Builds tables for a known-good alphabet. Only used for the built-in constants.
    const fn from_ascii(chars: &[u8]) -> Self {
        let mut symbols = [0u8; 64];
        let mut lookup = [INVALID; 256];
        let mut i = 0;
        while i < 64 {
            symbols[i] = chars[i];
            lookup[chars[i] as usize] = i as u8;
            i += 1;
        }
        Self { symbols, lookup }
    }

    /// Validates a caller-supplied alphabet.
    pub(crate) fn new(chars: &str) -> Result<Self, Base64Error> {
        let count = chars.chars().count();
        if count != 64 {
            return Err(Base64Error::InvalidCharSetLength(count));
        }

        let mut symbols = [0u8; 64];
        let mut lookup = [INVALID; 256];
        for (i, c) in chars.chars().enumerate() {
            if !c.is_ascii() {
                return Err(Base64Error::NonAsciiSymbol(c));
            }
            if c == PAD {
                return Err(Base64Error::ReservedSymbol(c));
            }
            let byte = c as u8;
            if lookup[byte as usize] != INVALID {
                return Err(Base64Error::DuplicateSymbol(c));
            }
            symbols[i] = byte;
            lookup[byte as usize] = i as u8;
        }

        Ok(Self { symbols, lookup })
    }

    /// Symbol for a 6-bit value. Bits above the low six are ignored.
    #[inline]
    pub(crate) fn symbol(&self, sextet: u8) -> char {
        self.symbols[(sextet & 0x3F) as usize] as char
    }

    /// 6-bit value of an encoded byte, or `None` if it is not in the alphabet.
    #[inline]
    pub(crate) fn sextet(&self, byte: u8) -> Option<u8> {
        match self.lookup[byte as usize] {
            INVALID => None,
            v => Some(v),
        }
    }
}
