/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for dayboard-adapter tests

use dayboard_adapter::{ClientConfig, Credentials, DashboardClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> DashboardClient {
    DashboardClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Session tokens for testing
pub fn mock_credentials() -> Credentials {
    Credentials {
        id_token: "eyJhbGciOiJSUzI1NiJ9.test-id.signature".to_string(),
        access_token: "ya29.test-access".to_string(),
    }
}
