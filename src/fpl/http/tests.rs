//! Unit tests for the FPL HTTP client

use super::*;
use crate::{fpl::types::tests::sample_history_json, FplError};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn client_for(server: &MockServer) -> FplClient {
        FplClient::new(Some(server.uri())).unwrap()
    }

    #[test]
    fn test_endpoint_urls() {
        let client = FplClient::new(Some("https://example.test/api/".to_string())).unwrap();

        assert_eq!(client.base_url(), "https://example.test/api");
        assert_eq!(
            client.bootstrap_url(),
            "https://example.test/api/bootstrap-static/"
        );
        assert_eq!(
            client.element_summary_url(PlayerId::new(328)),
            "https://example.test/api/element-summary/328/"
        );
    }

    #[tokio::test]
    async fn test_get_all_players_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "elements": [
                    {"id": 1, "first_name": "David", "second_name": "Raya Martin", "team": 1, "element_type": 1},
                    {"id": 2, "first_name": "Bukayo", "second_name": "Saka", "team": 1, "element_type": 3}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let players = client_for(&mock_server).get_all_players().await.unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[1].second_name, "Saka");
        assert_eq!(players[1].element_type, 3);
    }

    #[tokio::test]
    async fn test_element_summary_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/element-summary/328/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fixtures": [],
                "history": [sample_history_json()],
                "history_past": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let summary = client_for(&mock_server)
            .element_summary(PlayerId::new(328))
            .await
            .unwrap();

        assert_eq!(summary.history.len(), 1);
        assert_eq!(summary.history[0].total_points, 13);
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/element-summary/9/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .element_summary(PlayerId::new(9))
            .await;

        match result {
            Err(FplError::Http(e)) => assert_eq!(e.status().map(|s| s.as_u16()), Some(503)),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bootstrap-static/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).bootstrap_static().await;
        assert!(matches!(result, Err(FplError::Json(_))));
    }

    #[tokio::test]
    async fn test_missing_history_field_is_json_error() {
        let mock_server = MockServer::start().await;

        let mut history = sample_history_json();
        history.as_object_mut().unwrap().remove("bps");

        Mock::given(method("GET"))
            .and(path("/element-summary/5/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "history": [history] })))
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .element_summary(PlayerId::new(5))
            .await;
        assert!(matches!(result, Err(FplError::Json(_))));
    }
}
