//! Guarita IP frame structure and encoding/decoding

use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::{
    checksum,
    command::Command,
    error::{Error, Result},
};

/// Build a checksummed frame from a hex payload
///
/// The checksum of the decoded bytes is appended as one lowercase hex byte,
/// then the whole string is converted to raw bytes.
///
/// # Errors
///
/// Returns [`Error::OddLength`] or [`Error::InvalidHex`] for malformed input.
///
/// # Examples
///
/// ```
/// use guaritaip_core::frame::build_frame;
///
/// let frame = build_frame("003d0100").unwrap();
/// assert_eq!(frame.as_ref(), &[0x00, 0x3D, 0x01, 0x00, 0x3E]);
/// ```
pub fn build_frame(hex_payload: &str) -> Result<Bytes> {
    let body = decode_hex(hex_payload)?;
    let checksum = checksum::calculate(&body);

    let framed = format!("{}{:02x}", hex_payload, checksum);
    let frame = decode_hex(&framed)?;

    trace!(payload = hex_payload, frame = %framed, "Built frame");

    Ok(Bytes::from(frame))
}

/// Drop the duplicate leading `0x00` byte some firmware revisions prepend
///
/// The input is left unchanged unless it begins with exactly two `0x00`
/// bytes. A run of three or more zero bytes is ambiguous and kept as is,
/// which makes the operation idempotent.
///
/// # Examples
///
/// ```
/// use guaritaip_core::frame::strip_leading_zero_byte;
///
/// assert_eq!(strip_leading_zero_byte("00000c0c"), "000c0c");
/// assert_eq!(strip_leading_zero_byte("000c0c"), "000c0c");
/// ```
pub fn strip_leading_zero_byte(hex_payload: &str) -> &str {
    let starts_doubled = hex_payload.get(..2) == Some("00") && hex_payload.get(2..4) == Some("00");
    let third_is_zero = hex_payload.get(4..6) == Some("00");

    if starts_doubled && !third_is_zero {
        &hex_payload[2..]
    } else {
        hex_payload
    }
}

/// Byte-level counterpart of [`strip_leading_zero_byte`] for raw replies
pub fn normalize_reply(reply: &[u8]) -> Bytes {
    let hex_reply = hex::encode(reply);
    let stripped = strip_leading_zero_byte(&hex_reply);

    if stripped.len() == hex_reply.len() {
        Bytes::copy_from_slice(reply)
    } else {
        trace!("Dropped duplicate leading zero byte from reply");
        Bytes::copy_from_slice(&reply[1..])
    }
}

fn decode_hex(hex_payload: &str) -> Result<Vec<u8>> {
    if hex_payload.len() % 2 != 0 {
        return Err(Error::OddLength {
            len: hex_payload.len(),
        });
    }

    hex::decode(hex_payload).map_err(|err| match err {
        hex::FromHexError::InvalidHexCharacter { c, index } => Error::InvalidHex {
            character: c,
            index,
        },
        _ => Error::OddLength {
            len: hex_payload.len(),
        },
    })
}

/// Guarita IP command frame
///
/// # Frame Structure
///
/// ```text
/// ┌─────────────┬─────────────┬─────────────┐
/// │   Command   │   Payload   │  Checksum   │
/// │   2 bytes   │   N bytes   │   1 byte    │
/// │  (BE u16)   │   (bytes)   │ (sum & 0xFF)│
/// └─────────────┴─────────────┴─────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use guaritaip_core::{Command, Frame};
///
/// let frame = Frame::new(Command::ReadDateTime);
/// assert_eq!(frame.encode().as_ref(), &[0x00, 0x0C, 0x0C]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command code
    pub command: Command,

    /// Frame payload (command-specific data)
    pub payload: Bytes,
}

impl Frame {
    /// Command code size in bytes
    pub const CODE_SIZE: usize = 2;

    /// Smallest valid frame: code plus checksum
    pub const MIN_SIZE: usize = Self::CODE_SIZE + 1;

    /// Create a frame with empty payload
    pub fn new(command: Command) -> Self {
        Self {
            command,
            payload: Bytes::new(),
        }
    }

    /// Create a frame with payload
    ///
    /// # Examples
    ///
    /// ```
    /// use guaritaip_core::{Command, Frame};
    ///
    /// let frame = Frame::with_payload(Command::ReadReceptorFirmware, vec![0x01, 0x00]);
    /// assert_eq!(frame.size(), 5);
    /// ```
    pub fn with_payload(command: Command, payload: impl Into<Bytes>) -> Self {
        Self {
            command,
            payload: payload.into(),
        }
    }

    /// Checksum byte for this frame
    pub fn checksum(&self) -> u8 {
        let code = u16::from(self.command).to_be_bytes();
        checksum::calculate(&code).wrapping_add(checksum::calculate(&self.payload))
    }

    /// Encode frame to bytes
    pub fn encode(&self) -> BytesMut {
        let mut buf = BytesMut::with_capacity(self.size());

        buf.put_u16(self.command.into());
        buf.put_slice(&self.payload);
        buf.put_u8(self.checksum());

        buf
    }

    /// Decode a command frame
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Buffer is too short (< 3 bytes)
    /// - Command code is unknown
    /// - Checksum verification fails
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < Self::MIN_SIZE {
            return Err(Error::FrameTooShort {
                expected: Self::MIN_SIZE,
                actual: buf.len(),
            });
        }

        let command = Command::try_from(BigEndian::read_u16(&buf[..Self::CODE_SIZE]))?;
        let payload = Bytes::copy_from_slice(&buf[Self::CODE_SIZE..buf.len() - 1]);
        let received = buf[buf.len() - 1];

        let frame = Self { command, payload };

        let expected = frame.checksum();
        if expected != received {
            return Err(Error::ChecksumMismatch { expected, received });
        }

        Ok(frame)
    }

    /// Get total frame size
    pub fn size(&self) -> usize {
        Self::MIN_SIZE + self.payload.len()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("command", &self.command)
            .field("checksum", &format!("0x{:02X}", self.checksum()))
            .field("payload", &hex::encode(&self.payload))
            .finish()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[{}](len={})", self.command, self.payload.len())
    }
}

/// Read the big-endian command echo at the start of a reply
pub fn reply_command(reply: &[u8]) -> Option<u16> {
    (reply.len() >= Frame::CODE_SIZE).then(|| BigEndian::read_u16(reply))
}
