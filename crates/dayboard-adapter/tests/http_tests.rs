/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - HTTP endpoints and status classification
[UPDATE]: When HTTP endpoints change
*/

mod common;

use common::{client_for, mock_credentials, setup_mock_server};
use dayboard_adapter::{ClientConfig, DashboardClient, DashboardError, Snapshot};
use rstest::rstest;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(DashboardClient::new());
    assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    assert!(client.credentials().is_none());
}

#[test]
fn test_client_with_timeouts() {
    let config = ClientConfig {
        timeout: Some(Duration::from_secs(5)),
        connect_timeout: Some(Duration::from_secs(1)),
    };
    let _client = assert_ok!(DashboardClient::with_config(config));
}

#[test]
fn test_client_credentials_roundtrip() {
    let mut client = assert_ok!(DashboardClient::new());
    let credentials = mock_credentials();

    client.set_credentials(credentials.clone());
    assert_eq!(client.credentials(), Some(&credentials));

    assert_eq!(client.clear_credentials(), Some(credentials));
    assert!(client.credentials().is_none());
}

#[tokio::test]
async fn test_credentials_sent_as_cookies() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/secret-manager"))
        .and(header(
            "cookie",
            "idToken=eyJhbGciOiJSUzI1NiJ9.test-id.signature; accessToken=ya29.test-access",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("key"))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.set_credentials(mock_credentials());
    assert_eq!(assert_ok!(client.api_key().await), "key");
}

#[rstest]
#[case("/gmail")]
#[case("/tasks")]
#[case("/calendar")]
#[tokio::test]
async fn test_empty_panel_payload_is_no_data(#[case] endpoint: &str) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let empty = match endpoint {
        "/gmail" => assert_ok!(client.gmail(7, 3).await).is_empty(),
        "/tasks" => assert_ok!(client.tasks().await).is_empty(),
        _ => assert_ok!(client.calendar().await).is_empty(),
    };
    assert!(empty);
}

#[tokio::test]
async fn test_forbidden_is_authentication_failure_without_parsing() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/gmail"))
        .respond_with(ResponseTemplate::new(403).set_body_raw("<html>denied</html>", "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).gmail(7, 3).await.expect_err("403 must fail");
    assert!(matches!(err, DashboardError::Authentication));
}

#[rstest]
#[case(404, "Not Found")]
#[case(500, "Internal Server Error")]
#[case(204, "No Content")]
#[tokio::test]
async fn test_other_status_is_request_failure(#[case] code: u16, #[case] text: &str) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/calendar"))
        .respond_with(ResponseTemplate::new(code))
        .mount(&server)
        .await;

    match client_for(&server).calendar().await {
        Err(DashboardError::Request { status, status_text }) => {
            assert_eq!(status, code);
            assert_eq!(status_text, text);
        }
        other => panic!("expected request failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"tasksOverdue": "many"}"#, "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server).tasks().await.expect_err("bad body must fail");
    assert!(matches!(err, DashboardError::Serialization(_)));
}

#[tokio::test]
async fn test_snapshot_round_trip_through_client() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/gmail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unreadEmailsDays": 0,
            "unreadEmailsHours": 0,
            "unreadImportantEmails": 0,
            "sender": ""
        })))
        .mount(&server)
        .await;

    let snapshot = assert_ok!(client_for(&server).gmail(7, 3).await);
    match snapshot {
        Snapshot::Data(summary) => assert_eq!(summary.unread_emails_days, 0),
        Snapshot::NoData => panic!("expected data"),
    }
}
