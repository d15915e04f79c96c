//! Access-code handshake
//!
//! A device configured with an access code expects the code, UTF-8 encoded,
//! as the first bytes on every connection. It answers with an acknowledgment
//! of up to [`ACCESS_ACK_LEN`](crate::constants::ACCESS_ACK_LEN) bytes before
//! accepting a command. No acknowledgment means the code was refused.

use bytes::Bytes;

/// Bytes to send for an access code
///
/// Returns `None` for an empty code: the handshake is skipped.
///
/// # Examples
///
/// ```
/// use guaritaip_core::auth;
///
/// assert_eq!(auth::access_code_payload("1234").unwrap().as_ref(), b"1234");
/// assert!(auth::access_code_payload("").is_none());
/// ```
pub fn access_code_payload(access_code: &str) -> Option<Bytes> {
    if access_code.is_empty() {
        None
    } else {
        Some(Bytes::copy_from_slice(access_code.as_bytes()))
    }
}

/// Check an acknowledgment read after sending the access code
///
/// The device sends nothing when it refuses the code; any bytes count as
/// acceptance.
pub fn is_acknowledged(ack: &[u8]) -> bool {
    !ack.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_code_payload_utf8() {
        let payload = access_code_payload("código").unwrap();
        assert_eq!(payload.as_ref(), "código".as_bytes());
        assert_eq!(payload.len(), 7);
    }

    #[test]
    fn test_empty_access_code_skips_handshake() {
        assert!(access_code_payload("").is_none());
    }

    #[test]
    fn test_is_acknowledged() {
        assert!(is_acknowledged(b"OK"));
        assert!(!is_acknowledged(&[]));
    }
}
