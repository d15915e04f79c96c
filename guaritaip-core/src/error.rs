//! Error types for guaritaip-core

/// Result type alias for guaritaip-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Hex payload has an odd number of characters
    #[error("Hex payload has odd length: {len} characters")]
    OddLength {
        len: usize,
    },

    /// Hex payload contains a character outside [0-9a-fA-F]
    #[error("Invalid hex character {character:?} at index {index}")]
    InvalidHex {
        character: char,
        index: usize,
    },

    /// Frame is too short to be valid
    #[error("Frame too short: expected at least {expected} bytes, got {actual} bytes")]
    FrameTooShort {
        expected: usize,
        actual: usize,
    },

    /// Checksum verification failed
    #[error("Checksum mismatch: expected 0x{expected:02X}, received 0x{received:02X}")]
    ChecksumMismatch {
        expected: u8,
        received: u8,
    },

    /// Unknown command code
    #[error("Unknown command code: 0x{0:04X}")]
    UnknownCommand(u16),

    /// Unknown receptor type code
    #[error("Unknown receptor type: {0}")]
    UnknownReceptorType(u8),
}

impl Error {
    /// Check if this error came from a malformed hex payload
    pub fn is_encoding(&self) -> bool {
        matches!(self, Self::OddLength { .. } | Self::InvalidHex { .. })
    }
}

