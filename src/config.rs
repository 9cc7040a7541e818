// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Gateway configuration.
//!
//! All service locations live here instead of in process-wide constants so
//! that tests and alternative deployments can point the gateway elsewhere.

use std::time::Duration;

use crate::response::TemperatureScale;

/// Logical CAN-bus client driving the signal light.
pub const HUTSCHIENE_CLIENT: &str = "Hutschiene";
/// Logical CAN-bus client driving the radiator.
pub const RADIATOR_CLIENT: &str = "theemin";

/// Configuration for a [`Gateway`](crate::Gateway).
///
/// # Examples
///
/// ```
/// use flipdot_lib::GatewayConfig;
/// use std::time::Duration;
///
/// let config = GatewayConfig::default()
///     .with_can_host("127.0.0.1")
///     .with_can_port(18080)
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.can_base_url(), "http://127.0.0.1:18080");
/// assert_eq!(
///     config.can_url("theemin", Some("GetActTemp")),
///     "http://127.0.0.1:18080/theemin/GetActTemp"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    space_status_url: String,
    power_consumption_url: String,
    can_host: String,
    can_port: u16,
    lamp_host: String,
    lamp_port: u16,
    timeout: Duration,
    temperature_scale: TemperatureScale,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            space_status_url: Self::DEFAULT_SPACE_STATUS_URL.to_string(),
            power_consumption_url: Self::DEFAULT_POWER_CONSUMPTION_URL.to_string(),
            can_host: Self::DEFAULT_CAN_HOST.to_string(),
            can_port: Self::DEFAULT_CAN_PORT,
            lamp_host: Self::DEFAULT_LAMP_HOST.to_string(),
            lamp_port: Self::DEFAULT_LAMP_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
            temperature_scale: TemperatureScale::default(),
        }
    }
}

impl GatewayConfig {
    /// Default space status JSON endpoint.
    pub const DEFAULT_SPACE_STATUS_URL: &'static str = "http://flipdot.org/spacestatus/status.json";
    /// Default power meter endpoint.
    pub const DEFAULT_POWER_CONSUMPTION_URL: &'static str = "http://infragelb.de/flipdot-power/";
    /// Default CAN-bus gateway host.
    pub const DEFAULT_CAN_HOST: &'static str = "hutschienenpi.fd";
    /// Default CAN-bus gateway port.
    pub const DEFAULT_CAN_PORT: u16 = 8080;
    /// Default lamp controller host.
    pub const DEFAULT_LAMP_HOST: &'static str = "ampel.fd";
    /// Default lamp controller UDP port.
    pub const DEFAULT_LAMP_PORT: u16 = 2323;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Sets the space status JSON endpoint.
    #[must_use]
    pub fn with_space_status_url(mut self, url: impl Into<String>) -> Self {
        self.space_status_url = url.into();
        self
    }

    /// Sets the power meter endpoint.
    #[must_use]
    pub fn with_power_consumption_url(mut self, url: impl Into<String>) -> Self {
        self.power_consumption_url = url.into();
        self
    }

    /// Sets the CAN-bus gateway host.
    #[must_use]
    pub fn with_can_host(mut self, host: impl Into<String>) -> Self {
        self.can_host = host.into();
        self
    }

    /// Sets the CAN-bus gateway port.
    #[must_use]
    pub fn with_can_port(mut self, port: u16) -> Self {
        self.can_port = port;
        self
    }

    /// Sets the lamp controller host.
    #[must_use]
    pub fn with_lamp_host(mut self, host: impl Into<String>) -> Self {
        self.lamp_host = host.into();
        self
    }

    /// Sets the lamp controller UDP port.
    #[must_use]
    pub fn with_lamp_port(mut self, port: u16) -> Self {
        self.lamp_port = port;
        self
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how radiator temperature readings are scaled.
    #[must_use]
    pub fn with_temperature_scale(mut self, scale: TemperatureScale) -> Self {
        self.temperature_scale = scale;
        self
    }

    /// Returns the space status endpoint.
    #[must_use]
    pub fn space_status_url(&self) -> &str {
        &self.space_status_url
    }

    /// Returns the power meter endpoint.
    #[must_use]
    pub fn power_consumption_url(&self) -> &str {
        &self.power_consumption_url
    }

    /// Returns the lamp controller address as `host:port`.
    #[must_use]
    pub fn lamp_addr(&self) -> String {
        format!("{}:{}", self.lamp_host, self.lamp_port)
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the temperature scale.
    #[must_use]
    pub fn temperature_scale(&self) -> TemperatureScale {
        self.temperature_scale
    }

    /// Builds the CAN-bus gateway base URL.
    #[must_use]
    pub fn can_base_url(&self) -> String {
        format!("http://{}:{}", self.can_host, self.can_port)
    }

    /// Builds `base/client[/operation]` for a CAN-bus client.
    ///
    /// Inputs are used as-is; nothing is escaped.
    #[must_use]
    pub fn can_url(&self, client: &str, operation: Option<&str>) -> String {
        match operation {
            Some(op) if !op.is_empty() => format!("{}/{client}/{op}", self.can_base_url()),
            _ => format!("{}/{client}", self.can_base_url()),
        }
    }
}
