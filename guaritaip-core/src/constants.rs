//! Protocol constants

use std::fmt;
use std::ops::Range;

use crate::error::{Error, Result};

/// Default timeout for connect and reads (seconds)
pub const DEFAULT_TIMEOUT: u64 = 1;

/// Reboot timeout (seconds); the device drops the link while restarting
pub const REBOOT_TIMEOUT: u64 = 3;

/// Refresh timeout (seconds); the device fans out to every receptor
pub const REFRESH_TIMEOUT: u64 = 15;

/// Maximum size of the access-code acknowledgment
pub const ACCESS_ACK_LEN: usize = 12;

/// Maximum characters in a display identification row
pub const MAX_ROW_LEN: usize = 20;

/// BCD timestamp bytes in a read date/time reply
pub const DATETIME_FIELD: Range<usize> = 2..8;

/// ASCII version bytes in a receptor firmware reply
pub const FIRMWARE_FIELD: Range<usize> = 4..9;

/// Receptor CAN addresses (1-based, as printed on the device)
pub const MIN_RECEPTOR_ADDRESS: u8 = 1;
pub const MAX_RECEPTOR_ADDRESS: u8 = 8;

/// Receptor types reachable through the main device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ReceptorType {
    /// Radio frequency remote control
    Rf = 1,
    /// Active tag
    Ta = 2,
    /// Card (proximity)
    Ct = 3,
    /// Biometric
    Bm = 5,
    /// Passive tag
    Tp = 6,
    /// Password keypad
    Sn = 7,
}

impl ReceptorType {
    /// Protocol type code
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rf => "RF",
            Self::Ta => "TA",
            Self::Ct => "CT",
            Self::Bm => "BM",
            Self::Tp => "TP",
            Self::Sn => "SN",
        }
    }
}

impl TryFrom<u8> for ReceptorType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Rf),
            2 => Ok(Self::Ta),
            3 => Ok(Self::Ct),
            5 => Ok(Self::Bm),
            6 => Ok(Self::Tp),
            7 => Ok(Self::Sn),
            _ => Err(Error::UnknownReceptorType(value)),
        }
    }
}

impl fmt::Display for ReceptorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
