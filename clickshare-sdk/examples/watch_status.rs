//! Watch a ClickShare unit's occupancy state from the command line.
//!
//! Usage: cargo run --example watch_status -- <host> <username> <password>

use std::time::Duration;

use clickshare_sdk::logging::{init_logging, LoggingMode};
use clickshare_sdk::{ClickShare, DeviceConfig, FeedbackKey};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingMode::Development)?;

    let mut args = std::env::args().skip(1);
    let usage = "usage: watch_status <host> <username> <password>";
    let host = args.next().ok_or(usage)?.parse()?;
    let username = args.next().ok_or(usage)?;
    let password = args.next().ok_or(usage)?;

    let clickshare = ClickShare::new(DeviceConfig::new(host, username, password))?;

    // Holding the guards keeps the polling loop alive.
    let _subscriptions: Vec<_> = FeedbackKey::ALL
        .into_iter()
        .map(|key| clickshare.subscribe_feedback(key))
        .collect();

    loop {
        tokio::time::sleep(Duration::from_secs(2)).await;

        match clickshare.connection_health() {
            Some(health) if health.is_ok() => {
                let values: Vec<String> = FeedbackKey::ALL
                    .into_iter()
                    .map(|key| format!("{key}={}", clickshare.feedback_value(key)))
                    .collect();
                println!("{}", values.join("  "));
            }
            Some(health) => println!("connection: {health:?}"),
            None => println!("waiting for first poll..."),
        }
    }
}
