// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `flipdot` library.
//!
//! Every gateway operation resolves to exactly one [`Result`]. Failures fall
//! into three groups: the transport could not complete the call, the upstream
//! service answered with a non-2xx status, or the body could not be parsed.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The service answered with a status outside `200..300`.
    #[error("HTTP {code} - {reason}")]
    HttpStatus {
        /// The HTTP status code.
        code: u16,
        /// The canonical reason phrase, or `"Unknown"`.
        reason: String,
    },

    /// The response body could not be turned into a value.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors raised while sending a request or datagram.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (DNS, connection refused, timeout, body read).
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Socket level failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport gave up on the request without completing it.
    #[error("transport dropped the request without completing it")]
    Dropped,

    /// Connection to the service failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing service responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body was empty or whitespace only.
    #[error("empty response")]
    EmptyResponse,

    /// The power meter line did not have exactly three fields.
    #[error("malformed CSV")]
    MalformedCsv,

    /// The date or time field did not have exactly three components.
    #[error("malformed date/time")]
    MalformedDateTime,

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

impl ParseError {
    pub(crate) fn invalid_value(field: &str, message: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
