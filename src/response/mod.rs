// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for the space services.
//!
//! Each upstream service has its own wire format:
//!
//! | Service | Format | Parser |
//! |---------|--------|--------|
//! | Space status | JSON object, any field optional | [`parse_space_status`] |
//! | Power meter | `DD.MM.YYYY,HH:MM:SS,WATTS` | [`parse_power_consumption`] |
//! | Radiator | bare integer | [`parse_temperature`] |

mod power;
mod space_status;
mod temperature;

pub use power::{PowerConsumption, parse_power_consumption};
pub use space_status::{RawSpaceStatus, SpaceStatus, User, normalize, parse_space_status};
pub use temperature::{CELSIUS, Temperature, TemperatureScale, parse_temperature};
