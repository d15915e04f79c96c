//! Guarita IP checksum algorithm
//!
//! Every command frame ends with a single checksum byte:
//! 1. Sum the byte values of the command code and payload
//! 2. Keep the least-significant byte of the sum (sum mod 256)

use tracing::trace;

/// Calculate the checksum of a frame body
///
/// # Algorithm
///
/// ```text
/// 1. Sum every byte: [code_hi, code_lo, ...payload]
/// 2. Return sum & 0xFF
/// ```
///
/// # Examples
///
/// ```
/// use guaritaip_core::checksum;
///
/// assert_eq!(checksum::calculate(&[0x00, 0x0C]), 0x0C);
/// assert_eq!(checksum::calculate(&[0xFF, 0x02]), 0x01);
/// ```
pub fn calculate(body: &[u8]) -> u8 {
    let checksum = body.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte));

    trace!(
        body_len = body.len(),
        checksum = format!("0x{:02X}", checksum),
        "Calculated checksum"
    );

    checksum
}

/// Verify the trailing checksum byte of a complete frame
///
/// Returns `false` for an empty frame.
pub fn verify(frame: &[u8]) -> bool {
    match frame.split_last() {
        Some((last, body)) => calculate(body) == *last,
        None => false,
    }
}
