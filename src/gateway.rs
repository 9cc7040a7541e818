// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level access to the space services.

use crate::config::{GatewayConfig, HUTSCHIENE_CLIENT, RADIATOR_CLIENT};
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::protocol::{DatagramTransport, HttpTransport, Method, UdpTransport};
use crate::response::{
    PowerConsumption, SpaceStatus, Temperature, parse_power_consumption, parse_space_status,
    parse_temperature,
};
use crate::types::{Color, LightStatus};

#[cfg(feature = "http")]
use crate::protocol::ReqwestTransport;

/// Gateway over the default `reqwest` and UDP transports.
#[cfg(feature = "http")]
pub type HttpGateway = Gateway<ReqwestTransport, UdpTransport>;

/// Entry point to the space status, power meter, radiator and lamp.
///
/// Every operation performs exactly one outbound call and resolves to
/// exactly one [`Result`]. Nothing is retried or cached.
///
/// # Type Parameters
///
/// - `H`: the [`HttpTransport`] used for HTTP services
/// - `D`: the [`DatagramTransport`] used for the lamp
///
/// # Examples
///
/// ```no_run
/// use flipdot_lib::{Gateway, GatewayConfig};
///
/// # async fn example() -> flipdot_lib::Result<()> {
/// let gateway = Gateway::new(GatewayConfig::default())?;
///
/// let status = gateway.space_status().await?;
/// if status.open {
///     println!("{} people in the space", status.visitor_count());
/// }
///
/// let temp = gateway.current_temperature().await?;
/// println!("It is {temp}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Gateway<H, D = UdpTransport> {
    config: GatewayConfig,
    dispatcher: Dispatcher<H>,
    datagrams: D,
}

#[cfg(feature = "http")]
impl Gateway<ReqwestTransport, UdpTransport> {
    /// Creates a gateway using `reqwest` for HTTP and a UDP socket for the
    /// lamp.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let http = ReqwestTransport::from_config(&config)?;
        Ok(Self::with_transports(config, http, UdpTransport::new()))
    }
}

impl<H: HttpTransport, D: DatagramTransport> Gateway<H, D> {
    /// Creates a gateway over the given transports.
    #[must_use]
    pub fn with_transports(config: GatewayConfig, http: H, datagrams: D) -> Self {
        Self {
            config,
            dispatcher: Dispatcher::new(http),
            datagrams,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Returns the HTTP transport.
    #[must_use]
    pub fn http_transport(&self) -> &H {
        self.dispatcher.transport()
    }

    /// Returns the datagram transport.
    #[must_use]
    pub fn datagram_transport(&self) -> &D {
        &self.datagrams
    }

    // ========== Space Status ==========

    /// Retrieves the current status of the space.
    ///
    /// Fields missing from the upstream payload are filled with defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not valid JSON.
    pub async fn space_status(&self) -> Result<SpaceStatus> {
        self.dispatcher
            .dispatch(
                Method::Get,
                self.config.space_status_url(),
                parse_space_status,
            )
            .await
    }

    // ========== Power Meter ==========

    /// Retrieves the current power consumption in Watts.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the meter line is malformed.
    pub async fn power_consumption(&self) -> Result<PowerConsumption> {
        self.dispatcher
            .dispatch(
                Method::Get,
                self.config.power_consumption_url(),
                parse_power_consumption,
            )
            .await
    }

    // ========== Radiator ==========

    /// Retrieves the temperature measured by the radiator control.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not an integer.
    pub async fn current_temperature(&self) -> Result<Temperature> {
        self.radiator_temperature("GetActTemp").await
    }

    /// Retrieves the temperature the radiator is set to.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the body is not an integer.
    pub async fn target_temperature(&self) -> Result<Temperature> {
        self.radiator_temperature("GetTargetTemp").await
    }

    /// Sets the radiator target temperature in degrees Celsius.
    ///
    /// The value is sent as given, regardless of the configured
    /// [`TemperatureScale`](crate::response::TemperatureScale).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_target_temperature(&self, celsius: f64) -> Result<()> {
        let url = format!(
            "{}?temp={celsius}",
            self.config.can_url(RADIATOR_CLIENT, Some("SetTargetTemp"))
        );
        self.dispatcher.dispatch_unit(Method::Post, &url).await
    }

    async fn radiator_temperature(&self, operation: &str) -> Result<Temperature> {
        let url = self.config.can_url(RADIATOR_CLIENT, Some(operation));
        let scale = self.config.temperature_scale();
        self.dispatcher
            .dispatch(Method::Get, &url, |body| parse_temperature(body, scale))
            .await
    }

    // ========== Lights ==========

    /// Switches the orange signal light on or off.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    #[deprecated(note = "the orange light has been removed from the space")]
    pub async fn set_orange_light_status(&self, status: LightStatus) -> Result<()> {
        let url = format!(
            "{}?state={}",
            self.config.can_url(HUTSCHIENE_CLIENT, Some("OrangeLight")),
            status.as_query_value()
        );
        self.dispatcher.dispatch_unit(Method::Post, &url).await
    }

    /// Sends a color to the auxiliary lamp.
    ///
    /// Channels are clamped into `0..=255`. The call returns once the
    /// datagram is handed to the socket; delivery is not confirmed.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp address cannot be resolved or the datagram
    /// cannot be sent.
    pub async fn set_color(&self, color: Color) -> Result<()> {
        let addr = self.config.lamp_addr();
        let payload = color.payload();

        tracing::debug!(addr = %addr, payload = %payload, "Sending lamp color");

        self.datagrams.send_to(&addr, payload.as_bytes()).await?;
        Ok(())
    }
}
