use std::time::Duration;

use tracing_subscriber::EnvFilter;

// Usage: cargo run --example read_state -- <model> <address> [pin]
#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let model = args.next().unwrap_or_else(|| "Calima".to_string());
    let address = args.next().ok_or(anyhow::anyhow!("Missing device address"))?;
    let pin = args.next().map(|pin| pin.parse()).transpose()?;

    let transport = paxfan::BluestTransport::new()
        .await?
        .with_scan_timeout(Duration::from_secs(10));
    let mut fan = paxfan::FanClient::new(transport, &model, address, pin)?;
    loop {
        if fan.connect().await {
            fan.authorize().await?;
            let state = fan.get_state().await?;
            println!("{state:?}");
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}
