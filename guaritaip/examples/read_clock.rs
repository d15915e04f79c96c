//! Read device clock and receptor firmware

use guaritaip::{Device, ReceptorType};
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

    let device = Device::new(ip, port).with_access_code(access_code);

    let now = device.read_datetime(None).await?;
    println!("Device clock: {}", now);

    for receptor_type in [ReceptorType::Rf, ReceptorType::Ct, ReceptorType::Bm] {
        for address in 1..=2 {
            let version = device
                .read_receptor_firmware(receptor_type, address, None)
                .await
                .unwrap_or_default();

            if version.is_empty() {
                println!("{} #{}: not responding", receptor_type, address);
            } else {
                println!("{} #{}: {}", receptor_type, address, version);
            }
        }
    }

    Ok(())
}
