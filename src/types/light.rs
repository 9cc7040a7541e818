// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State of the orange signal light.
//!
//! The light has been removed from the space; the switch is kept so the
//! CAN-bus endpoint stays reachable.

use std::fmt;

/// On/off state of the orange signal light.
///
/// # Examples
///
/// ```
/// use flipdot_lib::types::LightStatus;
///
/// assert_eq!(LightStatus::On.as_query_value(), "true");
/// assert_eq!(LightStatus::from(false), LightStatus::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightStatus {
    /// Light is off.
    #[default]
    Off,
    /// Light is on.
    On,
}

impl LightStatus {
    /// Returns the value of the `state` query parameter.
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::Off => "false",
            Self::On => "true",
        }
    }
}

impl fmt::Display for LightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::On => f.write_str("on"),
        }
    }
}

impl From<bool> for LightStatus {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
