//! Binary-coded decimal decoding
//!
//! Each byte carries two decimal digits, high nibble first. A nibble of
//! `0xF` ends the field: nothing after it is decoded, including the other
//! nibble of the same byte. Nibbles `0xA` to `0xE` are not digits and end the
//! field the same way.

use std::iter::FusedIterator;

use tracing::trace;

/// Nibble value that terminates a BCD field
pub const TERMINATOR: u8 = 0x0F;

/// Decode BCD bytes into decimal digit characters
///
/// Only `'0'..='9'` are ever yielded.
///
/// The iterator borrows `bytes` and is `Clone`, so it can be restarted.
///
/// # Examples
///
/// ```
/// use guaritaip_core::bcd;
///
/// let digits: String = bcd::decode_bcd(&[0x12, 0x34, 0xFF]).collect();
/// assert_eq!(digits, "1234");
/// ```
pub fn decode_bcd(bytes: &[u8]) -> BcdDigits<'_> {
    BcdDigits {
        bytes,
        nibble: 0,
        done: false,
    }
}

/// Iterator returned by [`decode_bcd`]
#[derive(Debug, Clone)]
pub struct BcdDigits<'a> {
    bytes: &'a [u8],
    /// Index of the next nibble (two per byte)
    nibble: usize,
    done: bool,
}

impl Iterator for BcdDigits<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.done {
            return None;
        }

        let Some(byte) = self.bytes.get(self.nibble / 2) else {
            self.done = true;
            return None;
        };

        let value = if self.nibble % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0F
        };

        let Some(digit) = char::from_digit(u32::from(value), 10) else {
            if value != TERMINATOR {
                trace!(nibble = value, "Non-decimal nibble ends BCD field");
            }
            self.done = true;
            return None;
        };

        self.nibble += 1;

        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            let remaining = (self.bytes.len() * 2).saturating_sub(self.nibble);
            (0, Some(remaining))
        }
    }
}

impl FusedIterator for BcdDigits<'_> {}
