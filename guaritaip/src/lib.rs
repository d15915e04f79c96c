//! # guaritaip
//!
//! Client for the Guarita IP access-control module protocol.
//!
//! ## Features
//!
//! - Checksummed frame encoding with typed commands
//! - Async/await API using Tokio
//! - Access-code handshake
//! - Typed errors for unreachable devices, short replies and rejections
//!
//! ## Quick Start
//!
//! ```no_run
//! use guaritaip::{Device, ReceptorType};
//!
//! #[tokio::main]
//! async fn main() -> guaritaip::Result<()> {
//!     let device = Device::new("192.168.1.50", 9000);
//!
//!     // Device clock
//!     let now = device.read_datetime(None).await?;
//!     println!("{}", now);
//!
//!     // Firmware of the biometric receptor at CAN address 1
//!     let version = device
//!         .read_receptor_firmware(ReceptorType::Bm, 1, None)
//!         .await
//!         .unwrap_or_default();
//!     println!("{}", version);
//!
//!     Ok(())
//! }
//! ```
//!
//! Each call opens and closes its own connection.

pub mod config;
pub mod device;
pub mod error;
pub mod identification;

// Re-exports
pub use config::DeviceConfig;
pub use device::{Device, TransportFactory};
pub use error::{Error, Result};
pub use identification::DisplayRows;

// Re-export protocol and transport types
pub use guaritaip_core::{build_frame, decode_bcd, Command, Frame, ReceptorType};
pub use guaritaip_transport::{TcpTransport, Transport};
pub use guaritaip_types::{DeviceTimestamp, FirmwareVersion};
