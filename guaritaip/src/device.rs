//! High-level device interface

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, info, trace, warn};

use guaritaip_core::{
    auth,
    constants::{
        ACCESS_ACK_LEN, DATETIME_FIELD, FIRMWARE_FIELD, MAX_RECEPTOR_ADDRESS,
        MIN_RECEPTOR_ADDRESS, REBOOT_TIMEOUT, REFRESH_TIMEOUT,
    },
    decode_bcd, frame, normalize_reply, Command, Frame, ReceptorType,
};
use guaritaip_transport::{TcpTransport, Transport};
use guaritaip_types::{DeviceTimestamp, FirmwareVersion};

use crate::config::{timeout_or, DeviceConfig};
use crate::error::{Error, Result};
use crate::identification::{encode_row, row_command, DisplayRows};

/// Builds a fresh, unconnected transport for each call
pub type TransportFactory = Arc<dyn Fn(&DeviceConfig) -> Box<dyn Transport> + Send + Sync>;

/// Guarita IP device
///
/// High-level interface for communicating with Guarita IP modules. Every
/// operation opens its own connection, performs the access-code handshake
/// if one is configured, exchanges one command and closes the connection.
/// A `Device` holds no connection state, so it can be cloned and shared
/// between tasks.
///
/// Operations return typed errors. Callers that want the plain defaults
/// (`false`, empty version, `0001-01-01` timestamp) use `is_ok()` or
/// `unwrap_or_default()`.
///
/// # Examples
///
/// ```no_run
/// use guaritaip::Device;
///
/// #[tokio::main]
/// async fn main() -> guaritaip::Result<()> {
///     let device = Device::new("192.168.1.50", 9000).with_access_code("1234");
///
///     let now = device.read_datetime(None).await?;
///     println!("Device clock: {}", now);
///
///     device.refresh_receptors(None).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Device {
    config: DeviceConfig,
    factory: TransportFactory,
}

impl Device {
    /// Create a new device instance (TCP transport)
    pub fn new(ip: impl Into<String>, port: u16) -> Self {
        Self::with_config(DeviceConfig::new(ip, port))
    }

    /// Create a device from full session parameters (TCP transport)
    pub fn with_config(config: DeviceConfig) -> Self {
        Self::with_transport_factory(config, |config: &DeviceConfig| {
            Box::new(TcpTransport::new(config.address.clone(), config.port)) as Box<dyn Transport>
        })
    }

    /// Create a device that obtains its transports from `factory`
    pub fn with_transport_factory<F>(config: DeviceConfig, factory: F) -> Self
    where
        F: Fn(&DeviceConfig) -> Box<dyn Transport> + Send + Sync + 'static,
    {
        Self {
            config,
            factory: Arc::new(factory),
        }
    }

    /// Set default timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout = timeout;
        self
    }

    /// Set access code (default: empty, no handshake)
    pub fn with_access_code(mut self, access_code: impl Into<String>) -> Self {
        self.config.access_code = access_code.into();
        self
    }

    /// Session parameters
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Send a raw frame and return the raw reply
    ///
    /// Opens a connection, performs the access-code handshake if configured,
    /// sends `message`, performs one read of at most `response_size` bytes
    /// and closes the connection. A short reply is returned as is; callers
    /// validate length and content.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Connection fails or times out
    /// - Device does not acknowledge the access code
    /// - Device sends nothing or the read times out
    pub async fn send_to_device(
        &self,
        message: &[u8],
        response_size: usize,
        timeout: Duration,
    ) -> Result<Bytes> {
        let mut transport = (self.factory)(&self.config);

        debug!("Connecting to {}...", transport.remote_addr());
        transport.connect(timeout).await?;

        let result = self
            .exchange(transport.as_mut(), message, response_size, timeout)
            .await;

        if let Err(e) = transport.disconnect().await {
            warn!("Failed to close connection: {}", e);
        }

        result
    }

    /// Write display identification rows (PC 1 / PC 2)
    ///
    /// Every row is checked before anything is sent. With
    /// [`DisplayRows::Both`], row 3 is only written once row 2 is
    /// acknowledged.
    pub async fn write_identification(
        &self,
        rows: DisplayRows<'_>,
        timeout: Option<Duration>,
    ) -> Result<()> {
        rows.validate()?;

        let timeout = self.config.effective_timeout(timeout);

        for (row, text) in rows.rows() {
            debug!(row, text, "Writing identification row...");

            let frame = encode_row(row, text)?;
            self.request_ack(row_command(row), &frame, timeout).await?;
        }

        Ok(())
    }

    /// Read display identification (PC 3)
    ///
    /// Returns the reply as sent by the device, up to 44 bytes.
    pub async fn read_identification(&self, timeout: Option<Duration>) -> Result<Bytes> {
        let timeout = self.config.effective_timeout(timeout);

        debug!("Reading identification...");

        self.request(Command::ReadIdentification, timeout).await
    }

    /// Write the device clock (PC 11)
    ///
    /// The request layout for this command is not documented by the vendor,
    /// so it is rejected without contacting the device.
    pub async fn write_datetime(
        &self,
        datetime: DeviceTimestamp,
        _timeout: Option<Duration>,
    ) -> Result<()> {
        warn!(%datetime, "Refusing to write device clock: request layout unknown");

        Err(Error::NotSupported(format!(
            "{}: request encoding is not documented",
            Command::WriteDateTime
        )))
    }

    /// Read the device clock (PC 12)
    pub async fn read_datetime(&self, timeout: Option<Duration>) -> Result<DeviceTimestamp> {
        let timeout = self.config.effective_timeout(timeout);

        debug!("Reading date/time...");

        let reply = self.request(Command::ReadDateTime, timeout).await?;
        ensure_reply_len(Command::ReadDateTime, &reply)?;

        let digits: String = decode_bcd(&reply[DATETIME_FIELD]).collect();
        trace!(digits = %digits, "Decoded BCD date/time");

        let timestamp = DeviceTimestamp::from_digits(&digits)?;

        debug!("Device clock: {}", timestamp);

        Ok(timestamp)
    }

    /// Reboot device, applying Ethernet configuration (PC 18)
    ///
    /// Uses a fixed 3 second timeout and returns the raw reply.
    pub async fn reboot(&self) -> Result<Bytes> {
        warn!("Rebooting device...");

        self.request(Command::Reboot, Duration::from_secs(REBOOT_TIMEOUT))
            .await
    }

    /// Remote reset, same as pressing the RESET button (PC 24)
    pub async fn reset(&self, timeout: Option<Duration>) -> Result<()> {
        let timeout = self.config.effective_timeout(timeout);

        warn!("Resetting device...");

        let frame = Frame::new(Command::Reset).encode();
        self.request_ack(Command::Reset, &frame, timeout).await
    }

    /// Send current data to every receptor (PC 29)
    ///
    /// Defaults to a 15 second timeout: the device waits on each receptor.
    pub async fn refresh_receptors(&self, timeout: Option<Duration>) -> Result<()> {
        let timeout = timeout_or(timeout, Duration::from_secs(REFRESH_TIMEOUT));

        info!("Refreshing receptors...");

        let frame = Frame::new(Command::RefreshReceptors).encode();
        self.request_ack(Command::RefreshReceptors, &frame, timeout)
            .await
    }

    /// Read a receptor's firmware version (PC 61)
    ///
    /// `address` is the receptor's CAN address as shown on the device,
    /// from 1 to 8.
    pub async fn read_receptor_firmware(
        &self,
        receptor_type: ReceptorType,
        address: u8,
        timeout: Option<Duration>,
    ) -> Result<FirmwareVersion> {
        if !(MIN_RECEPTOR_ADDRESS..=MAX_RECEPTOR_ADDRESS).contains(&address) {
            return Err(Error::InvalidReceptorAddress(address));
        }

        let timeout = self.config.effective_timeout(timeout);

        debug!(%receptor_type, address, "Reading receptor firmware...");

        // Receptor addresses are 0-based on the wire
        let hex_payload = format!(
            "{:04x}{:02}{:02}",
            u16::from(Command::ReadReceptorFirmware),
            receptor_type.code(),
            address - 1
        );
        let frame = guaritaip_core::build_frame(&hex_payload)?;

        let reply = self
            .send_command(Command::ReadReceptorFirmware, &frame, timeout)
            .await?;
        ensure_reply_len(Command::ReadReceptorFirmware, &reply)?;

        let version = FirmwareVersion::from_ascii(&reply[FIRMWARE_FIELD])?;

        debug!("Receptor {} #{} firmware: {}", receptor_type, address, version);

        Ok(version)
    }

    // Helper methods

    async fn exchange(
        &self,
        transport: &mut dyn Transport,
        message: &[u8],
        response_size: usize,
        timeout: Duration,
    ) -> Result<Bytes> {
        if let Some(code) = auth::access_code_payload(&self.config.access_code) {
            debug!("Sending access code...");

            transport.send(&code).await?;

            let ack = match transport.receive(ACCESS_ACK_LEN, timeout).await {
                Ok(ack) => ack,
                Err(guaritaip_transport::Error::ConnectionClosed) => {
                    return Err(Error::AccessDenied);
                }
                Err(e) => return Err(e.into()),
            };

            if !auth::is_acknowledged(&ack) {
                return Err(Error::AccessDenied);
            }

            trace!("Access code acknowledged: {:02X?}", &ack[..]);
        }

        transport.send(message).await?;

        if self.config.strip_duplicate_zero {
            // Leave room for the duplicate byte
            let reply = transport.receive(response_size + 1, timeout).await?;
            Ok(normalize_reply(&reply))
        } else {
            let reply = transport.receive(response_size, timeout).await?;
            Ok(reply.freeze())
        }
    }

    async fn request(&self, command: Command, timeout: Duration) -> Result<Bytes> {
        let frame = Frame::new(command).encode();
        self.send_command(command, &frame, timeout).await
    }

    async fn send_command(&self, command: Command, frame: &[u8], timeout: Duration) -> Result<Bytes> {
        trace!("Sending {}: {:02X?}", command, frame);

        let reply = self
            .send_to_device(frame, command.reply_len(), timeout)
            .await?;

        trace!("Received reply to {}: {:02X?}", command, &reply[..]);

        if let Some(echo) = frame::reply_command(&reply) {
            if echo != u16::from(command) {
                warn!("Reply to {} echoes command 0x{:04X}", command, echo);
            }
        }

        Ok(reply)
    }

    async fn request_ack(&self, command: Command, frame: &[u8], timeout: Duration) -> Result<()> {
        let reply = self.send_command(command, frame, timeout).await?;

        if command.is_success_reply(&reply) {
            debug!("{} acknowledged", command);
            return Ok(());
        }

        let expected = command.success_reply().unwrap_or_default();
        if reply.len() < expected.len() {
            Err(Error::ShortReply {
                command,
                expected: expected.len(),
                actual: reply.len(),
            })
        } else {
            Err(Error::unexpected_reply(command, expected, &reply))
        }
    }
}

fn ensure_reply_len(command: Command, reply: &[u8]) -> Result<()> {
    let expected = command.reply_len();

    if reply.len() < expected {
        return Err(Error::ShortReply {
            command,
            expected,
            actual: reply.len(),
        });
    }

    Ok(())
}
