//! Type definitions for guaritaip

pub mod error;
pub mod firmware;
pub mod timestamp;

pub use error::{Error, Result};
pub use firmware::FirmwareVersion;
pub use timestamp::DeviceTimestamp;
