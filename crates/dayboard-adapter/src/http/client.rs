/*
[INPUT]:  HTTP configuration (base URL, optional timeouts, session credentials)
[OUTPUT]: Configured reqwest client and status-classified responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::COOKIE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{DashboardError, Result};

/// Origin the dashboard backend is served from during local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client configuration
///
/// Both timeouts are off by default: a request waits for the backend as long
/// as it takes.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Google session tokens forwarded to the backend
///
/// The backend reads them from the `idToken` and `accessToken` cookies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub id_token: String,
    pub access_token: String,
}

impl Credentials {
    fn cookie_header(&self) -> String {
        format!(
            "idToken={}; accessToken={}",
            self.id_token, self.access_token
        )
    }
}

/// HTTP client for the dashboard backend
#[derive(Debug)]
pub struct DashboardClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl DashboardClient {
    /// Create a new client against [`DEFAULT_BASE_URL`]
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client with custom configuration and backend origin
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Drop the session tokens; later requests go out unauthenticated
    pub fn clear_credentials(&mut self) -> Option<Credentials> {
        self.credentials.take()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint
    fn url(&self, endpoint: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(endpoint)
    }

    /// Build request builder for an endpoint, carrying the session cookies
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        let mut builder = self.http_client.request(method, url);
        if let Some(credentials) = &self.credentials {
            builder = builder.header(COOKIE, credentials.cookie_header());
        }
        Ok(builder)
    }

    /// Send a request and parse the 200 body as JSON
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send_checked(builder).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request and return the 200 body as trimmed text
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        let response = self.send_checked(builder).await?;
        let body = response.text().await?;
        Ok(body.trim().to_string())
    }

    async fn send_checked(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "backend response");
        classify_status(status)?;
        Ok(response)
    }
}

/// Map a response status onto the three outcomes the dashboard distinguishes
pub fn classify_status(status: StatusCode) -> Result<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::FORBIDDEN => Err(DashboardError::Authentication),
        other => Err(DashboardError::request_failure(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert!(classify_status(StatusCode::OK).is_ok());
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN),
            Err(DashboardError::Authentication)
        ));
        assert!(matches!(
            classify_status(StatusCode::CREATED),
            Err(DashboardError::Request { status: 201, .. })
        ));
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED),
            Err(DashboardError::Request { status: 401, .. })
        ));
    }

    #[test]
    fn test_cookie_header() {
        let credentials = Credentials {
            id_token: "id".to_string(),
            access_token: "access".to_string(),
        };
        assert_eq!(credentials.cookie_header(), "idToken=id; accessToken=access");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = DashboardClient::with_config_and_base_url(ClientConfig::default(), "not a url");
        assert!(matches!(result, Err(DashboardError::UrlParse(_))));
    }
}
