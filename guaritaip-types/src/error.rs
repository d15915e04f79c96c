//! Errors raised while building typed values from device replies

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Well-formed field with an impossible value (e.g. 31 February)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field bytes that do not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}
