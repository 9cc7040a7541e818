// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `flipdot` Lib - A Rust library for the flipdot hackerspace services.
//!
//! This library provides async APIs to read the remote status of the space
//! and drive the few devices reachable from outside.
//!
//! # Supported Features
//!
//! - **Space status**: Door open/closed, listed and anonymous visitors
//! - **Power meter**: Current consumption in Watts
//! - **Radiator**: Measured and target temperature via the CAN-bus gateway
//! - **Lamp**: RGB color over UDP
//! - **Signal light**: The (removed) orange light switch
//!
//! Every operation performs exactly one request and resolves to exactly one
//! [`Result`]. Nothing is retried or cached.
//!
//! # Quick Start
//!
//! ```no_run
//! use flipdot_lib::{Gateway, GatewayConfig};
//! use flipdot_lib::types::Color;
//!
//! #[tokio::main]
//! async fn main() -> flipdot_lib::Result<()> {
//!     let gateway = Gateway::new(GatewayConfig::default())?;
//!
//!     let status = gateway.space_status().await?;
//!     println!("Open: {}", status.open);
//!     println!("Visitors: {}", status.visitor_count());
//!
//!     let power = gateway.power_consumption().await?;
//!     println!("Watts: {}", power.consumption);
//!
//!     gateway.set_color(Color::new(255, 64, 0)).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom Endpoints
//!
//! All service locations come from [`GatewayConfig`]:
//!
//! ```no_run
//! use flipdot_lib::{Gateway, GatewayConfig};
//! use flipdot_lib::response::TemperatureScale;
//!
//! # fn example() -> flipdot_lib::Result<()> {
//! let config = GatewayConfig::default()
//!     .with_can_host("10.23.42.5")
//!     .with_temperature_scale(TemperatureScale::Centidegrees);
//! let gateway = Gateway::new(config)?;
//! # Ok(())
//! # }
//! ```

mod config;
pub mod dispatch;
pub mod error;
mod gateway;
pub mod protocol;
pub mod response;
pub mod types;

pub use config::{GatewayConfig, HUTSCHIENE_CLIENT, RADIATOR_CLIENT};
pub use dispatch::Dispatcher;
pub use error::{Error, ParseError, Result, TransportError};
pub use gateway::Gateway;
#[cfg(feature = "http")]
pub use gateway::HttpGateway;
pub use protocol::{DatagramTransport, HttpTransport, Method, Responder};
pub use response::{PowerConsumption, SpaceStatus, Temperature, TemperatureScale};
pub use types::{Color, LightStatus};
