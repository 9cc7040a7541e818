// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport seams used by the gateway.
//!
//! The library never talks to the network directly. HTTP calls go through an
//! [`HttpTransport`] and lamp datagrams through a [`DatagramTransport`], so
//! both can be replaced in tests.
//!
//! # Transports
//!
//! - [`ReqwestTransport`]: HTTP over `reqwest` (feature `http`)
//! - [`UdpTransport`]: datagrams over a `tokio` UDP socket

#[cfg(feature = "http")]
mod http;
mod udp;

#[cfg(feature = "http")]
pub use http::ReqwestTransport;
pub use udp::UdpTransport;

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::TransportError;

/// HTTP method of an outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl Method {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-formed outbound HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Request method.
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: String,
}

impl HttpRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
        }
    }
}

/// Status line and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    reason: String,
    body: String,
}

impl RawResponse {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the reason phrase.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the status lies in `200..300`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What a transport reports for one request.
pub type TransportOutcome = std::result::Result<RawResponse, TransportError>;

/// Single-shot completion handle handed to an [`HttpTransport`].
///
/// The first call to [`complete`](Self::complete) delivers its outcome to the
/// waiting caller. Every later call is ignored, so a transport that reports
/// both an error and a response for the same request still yields exactly
/// one result. Dropping every clone without completing surfaces as
/// [`TransportError::Dropped`].
#[derive(Clone)]
pub struct Responder {
    slot: Arc<Mutex<Option<oneshot::Sender<TransportOutcome>>>>,
}

impl Responder {
    /// Creates a responder and the receiver its outcome is delivered to.
    #[must_use]
    pub fn channel() -> (Self, oneshot::Receiver<TransportOutcome>) {
        let (tx, rx) = oneshot::channel();
        let responder = Self {
            slot: Arc::new(Mutex::new(Some(tx))),
        };
        (responder, rx)
    }

    /// Delivers `outcome` unless an outcome was already delivered.
    ///
    /// Returns `true` if this call was the one that delivered.
    pub fn complete(&self, outcome: TransportOutcome) -> bool {
        let Some(tx) = self.slot.lock().take() else {
            tracing::debug!(
                ok = outcome.is_ok(),
                "Ignoring duplicate transport completion"
            );
            return false;
        };
        tx.send(outcome).is_ok()
    }

    /// Whether an outcome has already been delivered.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.slot.lock().is_none()
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("completed", &self.is_completed())
            .finish()
    }
}

/// Trait for transports that perform HTTP requests.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Performs `request` and reports the outcome through `responder`.
    ///
    /// Implementations may return before completing, for example after
    /// handing the request to a spawned task, as long as the responder is
    /// eventually completed or dropped.
    async fn execute(&self, request: HttpRequest, responder: Responder);
}

/// Trait for transports that send fire-and-forget datagrams.
#[allow(async_fn_in_trait)]
pub trait DatagramTransport {
    /// Sends `payload` to `addr` (`host:port`).
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the address cannot be resolved or the
    /// datagram cannot be handed to the socket.
    async fn send_to(&self, addr: &str, payload: &[u8]) -> Result<(), TransportError>;
}
