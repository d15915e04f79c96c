//! High-level error types

use guaritaip_core::Command;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] guaritaip_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] guaritaip_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] guaritaip_types::Error),

    /// Device closed the connection instead of acknowledging the access code
    #[error("Access code not acknowledged by device")]
    AccessDenied,

    /// Fewer bytes arrived than the command's reply length
    #[error("Short reply to {command}: expected {expected} bytes, got {actual}")]
    ShortReply {
        command: Command,
        expected: usize,
        actual: usize,
    },

    /// Reply of the right size with the wrong content
    #[error("Unexpected reply to {command}: expected [{expected}], got [{actual}]")]
    UnexpectedReply {
        command: Command,
        expected: String,
        actual: String,
    },

    #[error("Row {row} is {len} characters long (max: {max})")]
    RowTooLong {
        row: u8,
        len: usize,
        max: usize,
    },

    /// Row is not an even-length hex payload
    #[error("Row {row} is not a hex payload")]
    InvalidRowText {
        row: u8,
    },

    #[error("Invalid receptor address {0} (expected 1-8)")]
    InvalidReceptorAddress(u8),

    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

impl Error {
    pub(crate) fn unexpected_reply(command: Command, expected: &[u8], actual: &[u8]) -> Self {
        Self::UnexpectedReply {
            command,
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        }
    }

    /// Device could not be reached or refused the session
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::AccessDenied)
    }

    /// Device answered, but not with the expected reply
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::UnexpectedReply { .. } | Self::Types(_))
    }

    /// Reply was cut short; a slow device and a malformed reply look alike
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::ShortReply { .. })
    }
}
