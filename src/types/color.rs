// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color for the auxiliary lamp.
//!
//! The lamp controller accepts a UDP datagram of the form `r:g:b`, one
//! decimal value per channel in `0..=255`.
//!
//! # Gateway Methods
//!
//! Use [`Color`] with [`set_color()`](crate::Gateway::set_color).

use std::fmt;

use serde::{Deserialize, Serialize};

/// RGB color whose channels may lie outside `0..=255` until clamped.
///
/// Channels are accepted as plain integers so callers can pass computed
/// values directly; [`clamped`](Self::clamped) and [`payload`](Self::payload)
/// bring them into range.
///
/// # Examples
///
/// ```
/// use flipdot_lib::types::Color;
///
/// let color = Color::new(-10, 300, 128);
/// assert_eq!(color.clamped(), Color::new(0, 255, 128));
/// assert_eq!(color.payload(), "0:255:128");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: i32,
    /// Green channel.
    pub green: i32,
    /// Blue channel.
    pub blue: i32,
}

impl Color {
    /// Lowest channel value sent to the lamp.
    pub const MIN: i32 = 0;
    /// Highest channel value sent to the lamp.
    pub const MAX: i32 = 255;

    /// Lamp off.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Full white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new color.
    #[must_use]
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Returns a copy with every channel clamped into `0..=255`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            red: self.red.clamp(Self::MIN, Self::MAX),
            green: self.green.clamp(Self::MIN, Self::MAX),
            blue: self.blue.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Whether every channel already lies in `0..=255`.
    #[must_use]
    pub fn is_in_range(&self) -> bool {
        *self == self.clamped()
    }

    /// Serializes the clamped color as the `r:g:b` lamp payload.
    #[must_use]
    pub fn payload(&self) -> String {
        self.clamped().to_string()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(i32::from(red), i32::from(green), i32::from(blue))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.red, self.green, self.blue)
    }
}
