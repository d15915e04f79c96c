//! Guarita IP protocol command definitions

use std::fmt;

use crate::error::{Error, Result};

/// Protocol command codes
///
/// The numeric code is the vendor's "PC" number (PC 12 = `0x0C`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Command {
    // Display identification
    WriteIdentificationRow2 = 0x01,
    WriteIdentificationRow3 = 0x02,
    ReadIdentification = 0x03,

    // Clock
    WriteDateTime = 0x0B,
    ReadDateTime = 0x0C,

    // Device control
    Reboot = 0x12,
    Reset = 0x18,
    RefreshReceptors = 0x1D,

    // Receptors
    ReadReceptorFirmware = 0x3D,
}

impl Command {
    /// Vendor "PC" number of this command
    pub fn pc_number(self) -> u16 {
        self as u16
    }

    /// Number of bytes requested from the transport for the reply
    pub fn reply_len(self) -> usize {
        match self {
            Self::WriteIdentificationRow2
            | Self::WriteIdentificationRow3
            | Self::WriteDateTime
            | Self::Reset => 3,
            Self::ReadIdentification => 44,
            Self::ReadDateTime => 10,
            Self::Reboot => 2,
            Self::RefreshReceptors => 4,
            Self::ReadReceptorFirmware => 11,
        }
    }

    /// Exact reply that signals success, for commands acknowledged by echo
    ///
    /// `None` for commands whose reply carries data.
    pub fn success_reply(self) -> Option<&'static [u8]> {
        match self {
            Self::WriteIdentificationRow2 => Some(&[0x00, 0x01, 0x01]),
            Self::WriteIdentificationRow3 => Some(&[0x00, 0x02, 0x02]),
            Self::WriteDateTime => Some(&[0x00, 0x0B, 0x0B]),
            Self::Reset => Some(&[0x00, 0x18, 0x18]),
            Self::RefreshReceptors => Some(&[0x00, 0x1D, 0x00, 0x1D]),
            Self::ReadIdentification
            | Self::ReadDateTime
            | Self::Reboot
            | Self::ReadReceptorFirmware => None,
        }
    }

    /// Check whether a reply is the success acknowledgment for this command
    ///
    /// Always `false` for data-carrying commands.
    pub fn is_success_reply(self, reply: &[u8]) -> bool {
        self.success_reply().is_some_and(|expected| expected == reply)
    }

    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::WriteIdentificationRow2 => "PC_WRITE_ID_ROW2",
            Self::WriteIdentificationRow3 => "PC_WRITE_ID_ROW3",
            Self::ReadIdentification => "PC_READ_ID",
            Self::WriteDateTime => "PC_WRITE_DATETIME",
            Self::ReadDateTime => "PC_READ_DATETIME",
            Self::Reboot => "PC_REBOOT",
            Self::Reset => "PC_RESET",
            Self::RefreshReceptors => "PC_REFRESH_RX",
            Self::ReadReceptorFirmware => "PC_READ_RX_FIRMWARE",
        }
    }
}

impl From<Command> for u16 {
    fn from(cmd: Command) -> u16 {
        cmd as u16
    }
}

impl TryFrom<u16> for Command {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x01 => Ok(Self::WriteIdentificationRow2),
            0x02 => Ok(Self::WriteIdentificationRow3),
            0x03 => Ok(Self::ReadIdentification),
            0x0B => Ok(Self::WriteDateTime),
            0x0C => Ok(Self::ReadDateTime),
            0x12 => Ok(Self::Reboot),
            0x18 => Ok(Self::Reset),
            0x1D => Ok(Self::RefreshReceptors),
            0x3D => Ok(Self::ReadReceptorFirmware),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.pc_number())
    }
}
