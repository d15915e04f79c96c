//! Device control example

use std::time::Duration;

use guaritaip::{Device, DeviceConfig, DisplayRows};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> guaritaip::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let ip = std::env::var("DEVICE_IP").unwrap_or_else(|_| "192.168.1.50".to_string());
    let port = std::env::var("DEVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(9000);
    let access_code = std::env::var("DEVICE_ACCESS_CODE").unwrap_or_default();

    let config = DeviceConfig::new(ip, port)
        .with_access_code(access_code)
        .with_default_timeout(Duration::from_secs(2));
    let device = Device::with_config(config);

    // Update the display
    println!("Writing identification...");
    device
        .write_identification(
            DisplayRows::Both {
                row2: "504f525441524941",
                row3: "424c4f434f2041",
            },
            None,
        )
        .await?;

    let identification = device.read_identification(None).await?;
    println!("Identification reply: {:02X?}", &identification[..]);

    // Push current data to every receptor
    println!("Refreshing receptors...");
    match device.refresh_receptors(None).await {
        Ok(()) => println!("Receptors refreshed"),
        Err(e) if e.is_truncated() => println!("Refresh still running: {}", e),
        Err(e) => return Err(e),
    }

    println!("Done!");

    Ok(())
}
