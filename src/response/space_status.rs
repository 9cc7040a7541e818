// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Space status payload and its normalization.
//!
//! The status endpoint may omit any field. The payload is first decoded into
//! [`RawSpaceStatus`], where every field is optional, and then normalized
//! into [`SpaceStatus`], where every field is present.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A user present in the space who chose to be listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct User {
    /// Nickname shown on the status page.
    #[serde(default)]
    pub nick: String,
}

impl User {
    /// Creates a user with the given nickname.
    #[must_use]
    pub fn new(nick: impl Into<String>) -> Self {
        Self { nick: nick.into() }
    }
}

/// Space status exactly as decoded from the endpoint.
///
/// # Examples
///
/// ```
/// use flipdot_lib::response::RawSpaceStatus;
///
/// let raw: RawSpaceStatus = serde_json::from_str(r#"{"open": true}"#).unwrap();
/// assert_eq!(raw.open, Some(true));
/// assert!(raw.known_users.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSpaceStatus {
    /// Whether the door is open.
    pub open: Option<bool>,
    /// Users who chose to be listed.
    pub known_users: Option<Vec<User>>,
    /// Number of anonymous visitors.
    pub unknown_users: Option<u32>,
    /// Radiator setpoint in °C.
    pub temperature_setpoint: Option<f64>,
    /// Measured room temperature in °C.
    pub temperature_realvalue: Option<f64>,
    /// Radiator valve opening.
    pub heater_valve: Option<f64>,
}

/// Fully populated space status.
///
/// # Examples
///
/// ```
/// use flipdot_lib::response::parse_space_status;
///
/// let status = parse_space_status(r#"{
///     "open": true,
///     "known_users": [{"nick": "alice"}, {"nick": "bob"}],
///     "unknown_users": 3
/// }"#).unwrap();
///
/// assert!(status.open);
/// assert_eq!(status.visitor_count(), 5);
/// assert_eq!(status.heater_valve, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpaceStatus {
    /// Whether the door is open.
    pub open: bool,
    /// Users who chose to be listed.
    pub known_users: Vec<User>,
    /// Number of anonymous visitors.
    pub unknown_users: u32,
    /// Radiator setpoint in °C.
    pub temperature_setpoint: f64,
    /// Measured room temperature in °C.
    pub temperature_realvalue: f64,
    /// Radiator valve opening.
    pub heater_valve: f64,
}

impl SpaceStatus {
    /// Total number of people in the space, listed or not.
    #[must_use]
    pub fn visitor_count(&self) -> u64 {
        u64::from(self.unknown_users) + self.known_users.len() as u64
    }
}

impl From<RawSpaceStatus> for SpaceStatus {
    fn from(raw: RawSpaceStatus) -> Self {
        normalize(raw)
    }
}

impl From<SpaceStatus> for RawSpaceStatus {
    fn from(status: SpaceStatus) -> Self {
        Self {
            open: Some(status.open),
            known_users: Some(status.known_users),
            unknown_users: Some(status.unknown_users),
            temperature_setpoint: Some(status.temperature_setpoint),
            temperature_realvalue: Some(status.temperature_realvalue),
            heater_valve: Some(status.heater_valve),
        }
    }
}

/// Fills in defaults for every absent field.
///
/// `open` defaults to `false`, `known_users` to an empty list and all
/// numbers to `0`. A `NaN` reading counts as absent.
#[must_use]
pub fn normalize(raw: RawSpaceStatus) -> SpaceStatus {
    SpaceStatus {
        open: raw.open.unwrap_or(false),
        known_users: raw.known_users.unwrap_or_default(),
        unknown_users: raw.unknown_users.unwrap_or(0),
        temperature_setpoint: reading_or_zero(raw.temperature_setpoint),
        temperature_realvalue: reading_or_zero(raw.temperature_realvalue),
        heater_valve: reading_or_zero(raw.heater_valve),
    }
}

fn reading_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Decodes and normalizes a space status body.
///
/// # Errors
///
/// Returns `ParseError::Json` if the body is not a JSON object of the
/// expected shape.
pub fn parse_space_status(body: &str) -> Result<SpaceStatus, ParseError> {
    let raw: RawSpaceStatus = serde_json::from_str(body)?;
    Ok(normalize(raw))
}
