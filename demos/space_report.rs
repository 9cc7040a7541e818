// SPDX-License-Identifier: MPL-2.0

//! Space report example.
//!
//! Prints the door status, visitor count, power draw and radiator
//! temperatures of the space.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example space_report -- [can-host]
//! ```
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=flipdot_lib=debug cargo run --example space_report
//! cargo run --example space_report -- 10.23.42.5
//! ```

use std::env;

use flipdot_lib::{Gateway, GatewayConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut config = GatewayConfig::default();
    if let Some(host) = env::args().nth(1) {
        config = config.with_can_host(host);
    }

    let gateway = Gateway::new(config)?;

    match gateway.space_status().await {
        Ok(status) => {
            println!("Open?: {}", status.open);
            println!("Visitor count: {}", status.visitor_count());
            for user in &status.known_users {
                println!("  - {}", user.nick);
            }
        }
        Err(e) => eprintln!("Space status unavailable: {e}"),
    }

    match gateway.power_consumption().await {
        Ok(power) => println!("Watts: {} (at {})", power.consumption, power.timestamp),
        Err(e) => eprintln!("Power meter unavailable: {e}"),
    }

    match gateway.current_temperature().await {
        Ok(temp) => println!("It is currently {temp}"),
        Err(e) => eprintln!("Radiator unavailable: {e}"),
    }

    match gateway.target_temperature().await {
        Ok(temp) => println!("The radiator is set to {temp}"),
        Err(e) => eprintln!("Radiator unavailable: {e}"),
    }

    Ok(())
}
