//! Session parameters

use std::fmt;
use std::time::Duration;

use guaritaip_core::constants::DEFAULT_TIMEOUT;

/// Connection parameters for one device
///
/// Immutable once handed to a [`Device`](crate::Device); every call may
/// override the timeout for that call only.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use guaritaip::DeviceConfig;
///
/// let config = DeviceConfig::new("192.168.1.50", 9000)
///     .with_access_code("1234")
///     .with_default_timeout(Duration::from_secs(2));
///
/// assert!(config.requires_handshake());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Device host name or IP address
    pub address: String,

    /// Device TCP port
    pub port: u16,

    /// Access code sent before every command (empty: no handshake)
    pub access_code: String,

    /// Timeout used when a call does not override it
    pub default_timeout: Duration,

    /// Drop the duplicate leading zero byte some firmware revisions send
    pub strip_duplicate_zero: bool,
}

impl DeviceConfig {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
            access_code: String::new(),
            default_timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            strip_duplicate_zero: false,
        }
    }

    /// Set access code (default: empty, no handshake)
    pub fn with_access_code(mut self, access_code: impl Into<String>) -> Self {
        self.access_code = access_code.into();
        self
    }

    /// Set default timeout (default: 1 second)
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Enable the duplicate leading zero byte workaround
    pub fn with_duplicate_zero_workaround(mut self, enabled: bool) -> Self {
        self.strip_duplicate_zero = enabled;
        self
    }

    /// Check if an access-code handshake precedes each command
    pub fn requires_handshake(&self) -> bool {
        !self.access_code.is_empty()
    }

    /// Resolve a per-call timeout; `None` and zero mean "use the default"
    pub fn effective_timeout(&self, timeout: Option<Duration>) -> Duration {
        timeout_or(timeout, self.default_timeout)
    }
}

pub(crate) fn timeout_or(timeout: Option<Duration>, fallback: Duration) -> Duration {
    timeout.filter(|t| !t.is_zero()).unwrap_or(fallback)
}

impl fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("address", &self.address)
            .field("port", &self.port)
            .field("access_code", &if self.requires_handshake() { "<set>" } else { "<none>" })
            .field("default_timeout", &self.default_timeout)
            .field("strip_duplicate_zero", &self.strip_duplicate_zero)
            .finish()
    }
}
