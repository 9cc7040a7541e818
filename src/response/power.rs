// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power meter response parsing.
//!
//! The power meter publishes a single comma-separated line:
//!
//! ```text
//! 27.01.2015,21:47:48,00438
//! ```
//!
//! holding the reading date (`DD.MM.YYYY`), time (`HH:MM:SS`) and the
//! current draw in Watts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::error::ParseError;

/// A power meter reading.
///
/// # Examples
///
/// ```
/// use flipdot_lib::response::PowerConsumption;
///
/// let reading: PowerConsumption = "27.01.2015,21:47:48,00438".parse().unwrap();
/// assert_eq!(reading.consumption, 438);
/// assert_eq!(
///     reading.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
///     "2015-01-27 21:47:48"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PowerConsumption {
    /// Current draw in Watts.
    pub consumption: u32,
    /// Wall-clock time of the reading, as printed by the meter.
    pub timestamp: NaiveDateTime,
}

impl PowerConsumption {
    /// Resolves the reading time against the local time zone.
    ///
    /// Returns `None` for wall-clock times skipped by a DST transition. For
    /// repeated times the earlier instant is used.
    #[must_use]
    pub fn local_timestamp(&self) -> Option<DateTime<Local>> {
        Local.from_local_datetime(&self.timestamp).earliest()
    }
}

impl fmt::Display for PowerConsumption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} W at {}",
            self.consumption,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

impl FromStr for PowerConsumption {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_power_consumption(s)
    }
}

/// Parses a power meter line.
///
/// # Errors
///
/// - `ParseError::EmptyResponse` if the body is blank
/// - `ParseError::MalformedCsv` unless there are exactly three fields
/// - `ParseError::MalformedDateTime` unless date and time have three parts
/// - `ParseError::InvalidValue` for non-numeric parts or impossible dates
pub fn parse_power_consumption(body: &str) -> Result<PowerConsumption, ParseError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let [date, time, consumption] = fields.as_slice() else {
        return Err(ParseError::MalformedCsv);
    };

    let date_parts: Vec<&str> = date.split('.').collect();
    let time_parts: Vec<&str> = time.split(':').collect();
    let ([day, month, year], [hour, minute, second]) =
        (date_parts.as_slice(), time_parts.as_slice())
    else {
        return Err(ParseError::MalformedDateTime);
    };

    let day: u32 = component("day", day)?;
    let month: u32 = component("month", month)?;
    let year: i32 = component("year", year)?;
    let hour: u32 = component("hour", hour)?;
    let minute: u32 = component("minute", minute)?;
    let second: u32 = component("second", second)?;

    // Out-of-range values are rejected rather than rolled over.
    let timestamp = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            ParseError::invalid_value(
                "timestamp",
                format!("'{date},{time}' is not a valid date/time"),
            )
        })?;

    Ok(PowerConsumption {
        consumption: component("consumption", consumption)?,
        timestamp,
    })
}

fn component<T>(field: &str, value: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ParseError::invalid_value(field, format!("'{value}': {e}")))
}
