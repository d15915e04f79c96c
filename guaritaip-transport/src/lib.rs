//! Transport layer for the Guarita IP protocol
//!
//! Provides TCP communication with devices.

pub mod error;
pub mod tcp;

pub use error::{Error, Result};
pub use tcp::TcpTransport;

use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;

/// Transport trait for different communication methods
///
/// A transport carries a single connection. Devices expect one short-lived
/// connection per command, so callers connect, exchange one request and
/// reply, and disconnect.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Connect to device, giving up after `timeout`
    async fn connect(&mut self, timeout: Duration) -> Result<()>;

    /// Disconnect from device
    async fn disconnect(&mut self) -> Result<()>;

    /// Check if connected
    fn is_connected(&self) -> bool;

    /// Send raw bytes
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Perform one read of at most `max_len` bytes (with timeout)
    ///
    /// Fewer bytes than requested are returned as they arrived; the read is
    /// never repeated to fill the buffer.
    async fn receive(&mut self, max_len: usize, timeout: Duration) -> Result<BytesMut>;

    /// Get remote address
    fn remote_addr(&self) -> String;
}
