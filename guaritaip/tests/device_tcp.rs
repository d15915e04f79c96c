//! End-to-end tests against a loopback device

use std::net::SocketAddr;
use std::time::Duration;

use chrono::{Datelike, Timelike};
use guaritaip::{Command, Device, DeviceConfig, Error, Frame, ReceptorType};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Fake device answering one command per connection
async fn spawn_device(access_code: Option<&'static str>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            tokio::spawn(serve(stream, access_code));
        }
    });

    addr
}

async fn serve(mut stream: TcpStream, access_code: Option<&'static str>) {
    let mut buf = [0u8; 64];

    if let Some(code) = access_code {
        let n = stream.read(&mut buf).await.unwrap_or(0);
        if &buf[..n] != code.as_bytes() {
            // Refused: close without acknowledging
            return;
        }
        stream.write_all(b"OK").await.unwrap();
    }

    let n = stream.read(&mut buf).await.unwrap_or(0);
    let frame = match Frame::decode(&buf[..n]) {
        Ok(frame) => frame,
        Err(_) => return,
    };

    let reply: Vec<u8> = match frame.command {
        Command::ReadDateTime => vec![0x00, 0x0C, 0x31, 0x12, 0x24, 0x23, 0x59, 0x58, 0x00, 0x00],
        Command::Reset => vec![0x00, 0x18, 0x18],
        Command::RefreshReceptors => vec![0x00, 0x1D, 0x00, 0x1D],
        Command::ReadReceptorFirmware => {
            let mut reply = vec![0x00, 0x3D];
            reply.extend_from_slice(&frame.payload);
            reply.extend_from_slice(b"10B07");
            reply.extend_from_slice(&[0x00, 0x00]);
            reply
        }
        Command::WriteIdentificationRow2 if frame.payload.as_ref() == b"PORTARIA" => {
            vec![0x00, 0x01, 0x01]
        }
        Command::WriteIdentificationRow3 if frame.payload.as_ref() == b"BLOCO A" => {
            vec![0x00, 0x02, 0x02]
        }
        _ => return,
    };

    let _ = stream.write_all(&reply).await;
}

fn device(addr: SocketAddr) -> Device {
    Device::new(addr.ip().to_string(), addr.port())
}

#[tokio::test]
async fn test_read_datetime() {
    let addr = spawn_device(None).await;

    let ts = device(addr).read_datetime(None).await.unwrap();
    let dt = ts.datetime();

    assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 12, 31));
    assert_eq!((dt.hour(), dt.minute(), dt.second()), (23, 59, 58));
}

#[tokio::test]
async fn test_reset_and_refresh() {
    let addr = spawn_device(None).await;
    let device = device(addr);

    device.reset(None).await.unwrap();
    device.refresh_receptors(Some(Duration::from_secs(2))).await.unwrap();
}

#[tokio::test]
async fn test_read_receptor_firmware() {
    let addr = spawn_device(None).await;

    let version = device(addr)
        .read_receptor_firmware(ReceptorType::Ct, 8, None)
        .await
        .unwrap();

    assert_eq!(version.as_str(), "10B07");
}

#[tokio::test]
async fn test_write_identification() {
    let addr = spawn_device(None).await;

    device(addr)
        .write_identification(
            guaritaip::DisplayRows::Both {
                row2: "504f525441524941",
                row3: "424c4f434f2041",
            },
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_access_code_accepted() {
    let addr = spawn_device(Some("4321")).await;

    let config = DeviceConfig::new(addr.ip().to_string(), addr.port()).with_access_code("4321");

    Device::with_config(config).reset(None).await.unwrap();
}

#[tokio::test]
async fn test_access_code_refused() {
    let addr = spawn_device(Some("4321")).await;

    let err = device(addr)
        .with_access_code("0000")
        .reset(None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::AccessDenied));
}

#[tokio::test]
async fn test_unreachable_device() {
    // Bind then release a port so nothing listens on it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let device = device(addr);

    let err = device.reset(None).await.unwrap_err();
    assert!(err.is_unreachable());

    let ts = device.read_datetime(None).await.unwrap_or_default();
    assert!(!ts.is_available());
}

#[tokio::test]
async fn test_concurrent_calls_from_clones() {
    let addr = spawn_device(None).await;
    let device = device(addr);

    let tasks: Vec<_> = (1..=4)
        .map(|address| {
            let device = device.clone();
            tokio::spawn(async move {
                device
                    .read_receptor_firmware(ReceptorType::Rf, address, None)
                    .await
            })
        })
        .collect();

    for task in tasks {
        let version = task.await.unwrap().unwrap();
        assert_eq!(version.as_str(), "10B07");
    }
}
