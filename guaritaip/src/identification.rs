//! Display identification rows
//!
//! Rows 2 and 3 of the device display are written with their own command.
//! A row is given as the hex payload that follows the command code, at most
//! 20 hex characters long.

use bytes::Bytes;

use guaritaip_core::{build_frame, constants::MAX_ROW_LEN, Command};

use crate::error::{Error, Result};

/// Which display rows to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRows<'a> {
    Row2(&'a str),
    Row3(&'a str),
    Both { row2: &'a str, row3: &'a str },
}

impl<'a> DisplayRows<'a> {
    /// Rows in transmission order, with their row numbers
    pub fn rows(&self) -> Vec<(u8, &'a str)> {
        match *self {
            Self::Row2(text) => vec![(2, text)],
            Self::Row3(text) => vec![(3, text)],
            Self::Both { row2, row3 } => vec![(2, row2), (3, row3)],
        }
    }

    /// Check every row before anything is sent
    pub fn validate(&self) -> Result<()> {
        for (row, text) in self.rows() {
            validate_row(row, text)?;
        }
        Ok(())
    }
}

/// Command that writes a given display row
pub fn row_command(row: u8) -> Command {
    if row == 3 {
        Command::WriteIdentificationRow3
    } else {
        Command::WriteIdentificationRow2
    }
}

fn validate_row(row: u8, text: &str) -> Result<()> {
    let len = text.chars().count();
    if len > MAX_ROW_LEN {
        return Err(Error::RowTooLong {
            row,
            len,
            max: MAX_ROW_LEN,
        });
    }

    if text.len() % 2 != 0 || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidRowText { row });
    }

    Ok(())
}

/// Build the checksummed frame that writes `text` to `row`
///
/// # Examples
///
/// ```
/// use guaritaip::identification::encode_row;
///
/// let frame = encode_row(2, "ab").unwrap();
/// assert_eq!(frame.as_ref(), &[0x00, 0x01, 0xAB, 0xAC]);
/// ```
pub fn encode_row(row: u8, text: &str) -> Result<Bytes> {
    validate_row(row, text)?;

    let command = row_command(row);
    let hex_payload = format!("{:04x}{}", u16::from(command), text);

    Ok(build_frame(&hex_payload)?)
}
