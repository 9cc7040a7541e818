// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Radiator temperature response parsing.
//!
//! The radiator client answers `GetActTemp` and `GetTargetTemp` with a bare
//! integer. Older firmware reported hundredths of a degree, newer firmware
//! whole degrees, so the interpretation is selected with [`TemperatureScale`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Unit attached to every [`Temperature`].
pub const CELSIUS: &str = "°C";

/// How the integer reported by the radiator client is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureScale {
    /// The integer is a temperature in whole degrees Celsius.
    #[default]
    WholeDegrees,
    /// The integer is a temperature in hundredths of a degree Celsius.
    Centidegrees,
}

impl TemperatureScale {
    /// Converts a raw reading to degrees Celsius.
    #[must_use]
    pub fn to_celsius(self, raw: i32) -> f64 {
        match self {
            Self::WholeDegrees => f64::from(raw),
            Self::Centidegrees => f64::from(raw) / 100.0,
        }
    }
}

/// A temperature reading in degrees Celsius.
///
/// # Examples
///
/// ```
/// use flipdot_lib::response::{parse_temperature, TemperatureScale};
///
/// let temp = parse_temperature("21\n", TemperatureScale::WholeDegrees).unwrap();
/// assert_eq!(temp.value, 21.0);
/// assert_eq!(temp.unit, "°C");
///
/// let temp = parse_temperature("2150", TemperatureScale::Centidegrees).unwrap();
/// assert_eq!(temp.value, 21.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    /// Temperature value.
    pub value: f64,
    /// Always [`CELSIUS`].
    pub unit: &'static str,
}

impl Temperature {
    /// Creates a reading in degrees Celsius.
    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self {
            value,
            unit: CELSIUS,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Parses a radiator temperature body.
///
/// Only the leading, optionally signed, integer is read; anything after it
/// is ignored.
///
/// # Errors
///
/// - `ParseError::EmptyResponse` if the body is blank
/// - `ParseError::InvalidValue` if the body does not start with an integer
pub fn parse_temperature(body: &str, scale: TemperatureScale) -> Result<Temperature, ParseError> {
    let text = body.trim().to_lowercase();
    if text.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let raw: i32 = leading_integer(&text)
        .parse()
        .map_err(|e| ParseError::invalid_value("temperature", format!("'{text}': {e}")))?;

    Ok(Temperature::celsius(scale.to_celsius(raw)))
}

fn leading_integer(text: &str) -> &str {
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let end = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| i + sign_len);
    &text[..end]
}
