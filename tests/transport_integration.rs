// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for custom transports and the UDP lamp path.

use flipdot_lib::protocol::{HttpRequest, RawResponse, UdpTransport};
use flipdot_lib::{
    Color, Error, Gateway, GatewayConfig, HttpTransport, Responder, TransportError,
};
use tokio::net::UdpSocket;

// ============================================================================
// Misbehaving HTTP transports
// ============================================================================

/// Reports both a response and an error for every request.
struct DoubleCompletion {
    error_first: bool,
}

impl HttpTransport for DoubleCompletion {
    async fn execute(&self, _request: HttpRequest, responder: Responder) {
        let response = || Ok(RawResponse::new(200, "OK", r#"{"open": true}"#));
        let failure = || Err(TransportError::ConnectionFailed("socket hang up".to_string()));

        if self.error_first {
            responder.complete(failure());
            responder.complete(response());
        } else {
            responder.complete(response());
            responder.complete(failure());
        }
    }
}

/// Completes from a background task, twice.
struct Detached;

impl HttpTransport for Detached {
    async fn execute(&self, _request: HttpRequest, responder: Responder) {
        tokio::spawn(async move {
            responder.complete(Ok(RawResponse::new(200, "OK", "21")));
            responder.complete(Ok(RawResponse::new(200, "OK", "99")));
        });
    }
}

/// Never completes and drops the responder.
struct Silent;

impl HttpTransport for Silent {
    async fn execute(&self, _request: HttpRequest, _responder: Responder) {}
}

#[tokio::test]
async fn response_then_error_delivers_response() {
    let gateway = Gateway::with_transports(
        GatewayConfig::default(),
        DoubleCompletion { error_first: false },
        UdpTransport::new(),
    );

    let status = gateway.space_status().await.unwrap();
    assert!(status.open);
}

#[tokio::test]
async fn error_then_response_delivers_error() {
    let gateway = Gateway::with_transports(
        GatewayConfig::default(),
        DoubleCompletion { error_first: true },
        UdpTransport::new(),
    );

    let result = gateway.space_status().await;
    assert!(matches!(
        result,
        Err(Error::Transport(TransportError::ConnectionFailed(_)))
    ));
}

#[tokio::test]
async fn detached_completion_delivers_first() {
    let gateway = Gateway::with_transports(GatewayConfig::default(), Detached, UdpTransport::new());

    let temp = gateway.current_temperature().await.unwrap();
    assert_eq!(temp.value, 21.0);
}

#[tokio::test]
async fn silent_transport_is_an_error() {
    let gateway = Gateway::with_transports(GatewayConfig::default(), Silent, UdpTransport::new());

    let result = gateway.set_target_temperature(19.0).await;
    assert!(matches!(
        result,
        Err(Error::Transport(TransportError::Dropped))
    ));
}

// ============================================================================
// Lamp over UDP
// ============================================================================

#[tokio::test]
async fn set_color_sends_one_datagram() {
    let lamp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let lamp_port = lamp.local_addr().unwrap().port();

    let config = GatewayConfig::default()
        .with_lamp_host("127.0.0.1")
        .with_lamp_port(lamp_port);
    let gateway = Gateway::with_transports(config, Silent, UdpTransport::new());

    gateway.set_color(Color::new(-10, 300, 128)).await.unwrap();

    let mut buf = [0u8; 64];
    let (len, _) = lamp.recv_from(&mut buf).await.unwrap();
    assert_eq!(&buf[..len], b"0:255:128");
}

#[tokio::test]
async fn set_color_unresolvable_host() {
    let config = GatewayConfig::default().with_lamp_host("lamp.invalid");
    let gateway = Gateway::with_transports(config, Silent, UdpTransport::new());

    let result = gateway.set_color(Color::WHITE).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
