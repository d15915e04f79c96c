//! Transport errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not connected")]
    NotConnected,

    #[error("Already connected")]
    AlreadyConnected,

    #[error("Connection timeout after {0:?}")]
    ConnectionTimeout(std::time::Duration),

    #[error("Read timeout after {0:?}")]
    ReadTimeout(std::time::Duration),

    #[error("Connection closed by remote")]
    ConnectionClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Check if the error is a timeout (connect or read)
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ConnectionTimeout(_) | Self::ReadTimeout(_))
    }
}
