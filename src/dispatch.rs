// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request dispatching.
//!
//! A [`Dispatcher`] performs exactly one transport call per operation and
//! resolves exactly once:
//!
//! 1. the transport failed → [`Error::Transport`]
//! 2. the status is outside `200..300` → [`Error::HttpStatus`], the parser is
//!    not run
//! 3. the parser rejected the body → [`Error::Parse`]
//! 4. otherwise the parsed value

use crate::error::{Error, ParseError, Result, TransportError};
use crate::protocol::{HttpRequest, HttpTransport, Method, RawResponse, Responder};

/// Issues requests through an [`HttpTransport`] and turns the outcome into a
/// single [`Result`].
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: HttpTransport> Dispatcher<T> {
    /// Creates a dispatcher over `transport`.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a request and parses a successful body with `parser`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport`, `Error::HttpStatus` or `Error::Parse`
    /// as described in the module documentation.
    pub async fn dispatch<V, F>(&self, method: Method, url: &str, parser: F) -> Result<V>
    where
        F: FnOnce(&str) -> std::result::Result<V, ParseError>,
    {
        let response = self.execute(method, url).await?;
        parser(response.body()).map_err(|e| {
            tracing::debug!(url = %url, error = %e, "Failed to parse response body");
            Error::Parse(e)
        })
    }

    /// Sends a request whose success is signalled by the status alone.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` or `Error::HttpStatus`.
    pub async fn dispatch_unit(&self, method: Method, url: &str) -> Result<()> {
        self.execute(method, url).await.map(|_| ())
    }

    async fn execute(&self, method: Method, url: &str) -> Result<RawResponse> {
        let (responder, outcome) = Responder::channel();

        self.transport
            .execute(HttpRequest::new(method, url), responder)
            .await;

        let response = outcome.await.map_err(|_| TransportError::Dropped)??;

        if !response.is_success() {
            tracing::debug!(
                url = %url,
                status = response.status(),
                "Request rejected by remote service"
            );
            return Err(Error::HttpStatus {
                code: response.status(),
                reason: response.reason().to_string(),
            });
        }

        Ok(response)
    }
}
