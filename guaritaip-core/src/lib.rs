//! # guaritaip-core
//!
//! Core protocol implementation for Guarita IP access-control modules.
//!
//! This crate provides the low-level protocol primitives:
//! - Frame structure and encoding/decoding
//! - Checksum calculation
//! - BCD decoding
//! - Command definitions and reply contracts
//! - Access-code handshake helpers
//! - Protocol constants

pub mod auth;
pub mod bcd;
pub mod checksum;
pub mod command;
pub mod constants;
pub mod error;
pub mod frame;

pub use bcd::decode_bcd;
pub use command::Command;
pub use constants::ReceptorType;
pub use error::{Error, Result};
pub use frame::{build_frame, normalize_reply, strip_leading_zero_byte, Frame};

/// Protocol version information
pub const PROTOCOL_VERSION: &str = "1.0";
