// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport backed by `reqwest`.

use std::time::Duration;

use reqwest::Client;

use crate::config::GatewayConfig;
use crate::error::TransportError;
use crate::protocol::{HttpRequest, HttpTransport, Method, RawResponse, Responder};

/// HTTP transport using a shared `reqwest` client.
///
/// The client's timeout is the only timeout applied to gateway calls.
///
/// # Examples
///
/// ```
/// use flipdot_lib::protocol::ReqwestTransport;
/// use std::time::Duration;
///
/// let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(Self { client })
    }

    /// Creates a transport using the timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, TransportError> {
        Self::new(config.timeout())
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn perform(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        let response = builder.send().await.map_err(TransportError::Http)?;
        let status = response.status();
        let body = response.text().await.map_err(TransportError::Http)?;

        Ok(RawResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            body,
        ))
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest, responder: Responder) {
        tracing::debug!(method = %request.method, url = %request.url, "Sending HTTP request");

        let outcome = self.perform(&request).await;

        match &outcome {
            Ok(response) => {
                tracing::debug!(
                    status = response.status(),
                    body = %response.body(),
                    "Received HTTP response"
                );
            }
            Err(e) => tracing::debug!(url = %request.url, error = %e, "HTTP request failed"),
        }

        responder.complete(outcome);
    }
}
