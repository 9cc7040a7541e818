// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types sent to the space devices.
//!
//! # Types
//!
//! - [`Color`] - RGB color for the auxiliary lamp, clamped to `0..=255`
//! - [`LightStatus`] - On/Off state of the orange signal light

mod color;
mod light;

pub use color::Color;
pub use light::LightStatus;
