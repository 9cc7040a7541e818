// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP services using wiremock.

use std::time::Duration;

use flipdot_lib::response::User;
use flipdot_lib::{
    Error, Gateway, GatewayConfig, HttpGateway, LightStatus, ParseError, TemperatureScale,
    TransportError,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Points every HTTP service of the gateway at `server`.
fn config_for(server: &MockServer) -> GatewayConfig {
    GatewayConfig::default()
        .with_space_status_url(format!("{}/spacestatus/status.json", server.uri()))
        .with_power_consumption_url(format!("{}/flipdot-power/", server.uri()))
        .with_can_host(server.address().ip().to_string())
        .with_can_port(server.address().port())
        .with_timeout(Duration::from_secs(2))
}

fn gateway_for(server: &MockServer) -> HttpGateway {
    Gateway::new(config_for(server)).unwrap()
}

// ============================================================================
// Space Status
// ============================================================================

mod space_status {
    use super::*;

    #[tokio::test]
    async fn full_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/spacestatus/status.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "open": true,
                "known_users": [{"nick": "alice"}, {"nick": "bob"}],
                "unknown_users": 3,
                "temperature_setpoint": 21,
                "temperature_realvalue": 19.5,
                "heater_valve": 0.4
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let status = gateway_for(&mock_server).space_status().await.unwrap();

        assert!(status.open);
        assert_eq!(
            status.known_users,
            vec![User::new("alice"), User::new("bob")]
        );
        assert_eq!(status.unknown_users, 3);
        assert_eq!(status.visitor_count(), 5);
        assert_eq!(status.temperature_setpoint, 21.0);
        assert_eq!(status.temperature_realvalue, 19.5);
        assert_eq!(status.heater_valve, 0.4);
    }

    #[tokio::test]
    async fn empty_object_is_normalized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/spacestatus/status.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let status = gateway_for(&mock_server).space_status().await.unwrap();

        assert!(!status.open);
        assert!(status.known_users.is_empty());
        assert_eq!(status.unknown_users, 0);
        assert_eq!(status.heater_valve, 0.0);
    }

    #[tokio::test]
    async fn invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/spacestatus/status.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>down</html>"))
            .mount(&mock_server)
            .await;

        let result = gateway_for(&mock_server).space_status().await;
        assert!(matches!(result, Err(Error::Parse(ParseError::Json(_)))));
    }

    #[tokio::test]
    async fn not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        match gateway_for(&mock_server).space_status().await {
            Err(Error::HttpStatus { code, reason }) => {
                assert_eq!(code, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }
}

// ============================================================================
// Power Meter
// ============================================================================

mod power_consumption {
    use super::*;

    #[tokio::test]
    async fn reading() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/flipdot-power/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("27.01.2015,21:47:48,00438\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reading = gateway_for(&mock_server).power_consumption().await.unwrap();

        assert_eq!(reading.consumption, 438);
        assert_eq!(
            reading.timestamp.format("%d.%m.%Y %H:%M:%S").to_string(),
            "27.01.2015 21:47:48"
        );
    }

    #[tokio::test]
    async fn malformed_csv() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/flipdot-power/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("27.01.2015;21:47:48;00438"))
            .mount(&mock_server)
            .await;

        let result = gateway_for(&mock_server).power_consumption().await;
        assert!(matches!(result, Err(Error::Parse(ParseError::MalformedCsv))));
    }

    #[tokio::test]
    async fn empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/flipdot-power/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let result = gateway_for(&mock_server).power_consumption().await;
        assert!(matches!(result, Err(Error::Parse(ParseError::EmptyResponse))));
    }
}

// ============================================================================
// Radiator and Signal Light
// ============================================================================

mod can_gateway {
    use super::*;

    #[tokio::test]
    async fn current_temperature() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/theemin/GetActTemp"))
            .respond_with(ResponseTemplate::new(200).set_body_string("19\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let temp = gateway_for(&mock_server)
            .current_temperature()
            .await
            .unwrap();

        assert_eq!(temp.value, 19.0);
        assert_eq!(temp.unit, "°C");
    }

    #[tokio::test]
    async fn target_temperature_in_centidegrees() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/theemin/GetTargetTemp"))
            .respond_with(ResponseTemplate::new(200).set_body_string("2100"))
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server).with_temperature_scale(TemperatureScale::Centidegrees);
        let temp = Gateway::new(config)
            .unwrap()
            .target_temperature()
            .await
            .unwrap();

        assert_eq!(temp.value, 21.0);
    }

    #[tokio::test]
    async fn blank_temperature_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/theemin/GetActTemp"))
            .respond_with(ResponseTemplate::new(200).set_body_string("   "))
            .mount(&mock_server)
            .await;

        let result = gateway_for(&mock_server).current_temperature().await;
        assert!(matches!(result, Err(Error::Parse(ParseError::EmptyResponse))));
    }

    #[tokio::test]
    async fn set_target_temperature() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/theemin/SetTargetTemp"))
            .and(query_param("temp", "20"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        gateway_for(&mock_server)
            .set_target_temperature(20.0)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn set_target_temperature_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/theemin/SetTargetTemp"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = gateway_for(&mock_server).set_target_temperature(20.0).await;
        assert!(matches!(result, Err(Error::HttpStatus { code: 500, .. })));
    }

    #[tokio::test]
    #[allow(deprecated)]
    async fn orange_light() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/Hutschiene/OrangeLight"))
            .and(query_param("state", "false"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        gateway_for(&mock_server)
            .set_orange_light_status(LightStatus::Off)
            .await
            .unwrap();
    }
}

// ============================================================================
// Transport Failures
// ============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = GatewayConfig::default()
            .with_space_status_url(format!("http://127.0.0.1:{port}/status.json"))
            .with_timeout(Duration::from_secs(2));
        let result = Gateway::new(config).unwrap().space_status().await;

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::Http(_)))
        ));
    }

    #[tokio::test]
    async fn timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let config = config_for(&mock_server).with_timeout(Duration::from_millis(100));
        let result = Gateway::new(config).unwrap().space_status().await;

        match result {
            Err(Error::Transport(TransportError::Http(e))) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
