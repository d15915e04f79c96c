//! Receptor firmware version

use std::fmt;

use crate::error::{Error, Result};

/// Firmware version reported for a receptor
///
/// Five ASCII characters with no separators:
/// `version-major`, `version-minor`, `release`, `build-major`, `build-minor`.
///
/// [`FirmwareVersion::default`] is empty, the value callers get from
/// `result.unwrap_or_default()` when the version could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FirmwareVersion {
    raw: String,
}

impl FirmwareVersion {
    /// Number of ASCII characters in an encoded version
    pub const LEN: usize = 5;

    /// Decode the 5-byte ASCII version field
    ///
    /// # Examples
    ///
    /// ```
    /// use guaritaip_types::FirmwareVersion;
    ///
    /// let version = FirmwareVersion::from_ascii(b"21A03").unwrap();
    /// assert_eq!(version.as_str(), "21A03");
    /// assert_eq!(version.release(), Some('A'));
    /// ```
    pub fn from_ascii(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LEN {
            return Err(Error::Parse(format!(
                "firmware version must be {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }

        if !bytes.iter().all(|b| b.is_ascii() && !b.is_ascii_control()) {
            return Err(Error::Parse(format!(
                "firmware version is not printable ASCII: {:02X?}",
                bytes
            )));
        }

        let raw = bytes.iter().map(|&b| char::from(b)).collect();

        Ok(Self { raw })
    }

    /// Version exactly as sent by the device
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check for the empty "unavailable" value
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn part(&self, index: usize) -> Option<char> {
        self.raw.chars().nth(index)
    }

    pub fn version_major(&self) -> Option<char> {
        self.part(0)
    }

    pub fn version_minor(&self) -> Option<char> {
        self.part(1)
    }

    pub fn release(&self) -> Option<char> {
        self.part(2)
    }

    pub fn build_major(&self) -> Option<char> {
        self.part(3)
    }

    pub fn build_minor(&self) -> Option<char> {
        self.part(4)
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for FirmwareVersion {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
