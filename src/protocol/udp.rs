// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Datagram transport backed by a `tokio` UDP socket.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::{UdpSocket, lookup_host};

use crate::error::TransportError;
use crate::protocol::DatagramTransport;

/// Sends each datagram from a fresh ephemeral socket.
///
/// Nothing is awaited from the receiver; a successful send only means the
/// datagram was handed to the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct UdpTransport;

impl UdpTransport {
    /// Creates a new UDP transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DatagramTransport for UdpTransport {
    async fn send_to(&self, addr: &str, payload: &[u8]) -> Result<(), TransportError> {
        let target = lookup_host(addr)
            .await?
            .next()
            .ok_or_else(|| TransportError::InvalidAddress(addr.to_string()))?;

        let local: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(local).await?;
        let sent = socket.send_to(payload, target).await?;

        tracing::debug!(target = %target, bytes = sent, "Sent UDP datagram");
        Ok(())
    }
}
