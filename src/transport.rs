//! Request/response channel to the GetAlts API.

use crate::errors::{GetAltsError, Result};
use crate::response::{ApiResponse, Payload};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use secrecy::{ExposeSecret, SecretString};
use std::fmt::{self, Display, Formatter};
use std::future::Future;
use std::time::Duration;
use url::Url;

#[cfg(feature = "tracing")]
use opentelemetry::trace::Status;
#[cfg(feature = "tracing")]
use tracing::{Span, debug};
#[cfg(feature = "tracing")]
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Default GetAlts API URL.
pub const DEFAULT_API_URL: &str = "http://getalts.club/api";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations exposed by the GetAlts API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetBalance,
    GetAmount,
    GetPricesByCountry,
    GetPricesByService,
    BuyNumber,
    GetActivationStatus,
    SetActivationStatus,
}

impl Endpoint {
    /// Path segment appended to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::GetBalance => "get_balance",
            Endpoint::GetAmount => "get_amount",
            Endpoint::GetPricesByCountry => "get_prices_by_country",
            Endpoint::GetPricesByService => "get_prices_by_service",
            Endpoint::BuyNumber => "buy_number",
            Endpoint::GetActivationStatus => "get_activation_status",
            Endpoint::SetActivationStatus => "set_activation_status",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Channel that performs one authenticated API call per invocation.
///
/// Implementations attach the credentials, send the request, and normalize
/// the outcome:
/// - network failure, timeout, or non-success status ⇒ [`GetAltsError::Transport`]
/// - a body with a top-level `error` key ⇒ [`GetAltsError::Api`]
/// - a body that is not a JSON object ⇒ [`GetAltsError::MalformedResponse`]
///
/// [`HttpTransport`] is the production implementation. Tests and callers with
/// special needs can plug in their own.
pub trait Transport: Send + Sync + Clone {
    /// Call `endpoint` with the given query parameters.
    fn call(
        &self,
        endpoint: Endpoint,
        params: Vec<(&'static str, String)>,
    ) -> impl Future<Output = Result<Payload>> + Send;
}

/// HTTP transport for the GetAlts API.
///
/// # Example
///
/// ```rust,ignore
/// use getalts_client::{Endpoint, HttpTransport, Transport};
///
/// let transport = HttpTransport::with_token("your_token")?;
/// let payload = transport.call(Endpoint::GetBalance, Vec::new()).await?;
/// println!("{:?}", payload.get("balance"));
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    http_client: ClientWithMiddleware,
    token: SecretString,
    endpoint: Url,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Builder for configuring a [`HttpTransport`].
pub struct HttpTransportBuilder {
    token: String,
    endpoint: Option<Url>,
    timeout: Duration,
    http_client: Option<ClientWithMiddleware>,
}

impl HttpTransportBuilder {
    /// Create a new builder with the given API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            endpoint: None,
            timeout: DEFAULT_REQUEST_TIMEOUT,
            http_client: None,
        }
    }

    /// Set a custom API endpoint.
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the per-request timeout.
    ///
    /// Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom HTTP client with middleware.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`HttpTransport`].
    pub fn build(self) -> Result<HttpTransport> {
        let endpoint = match self.endpoint {
            Some(url) => url,
            None => parse_endpoint(DEFAULT_API_URL)?,
        };

        if endpoint.cannot_be_a_base() {
            return Err(GetAltsError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
            });
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let client = reqwest::Client::builder()
                    .timeout(self.timeout)
                    .build()
                    .map_err(GetAltsError::BuildHttpClient)?;
                ClientBuilder::new(client).build()
            }
        };

        Ok(HttpTransport {
            http_client,
            token: SecretString::from(self.token),
            endpoint,
        })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|_| GetAltsError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
    })
}

impl HttpTransport {
    /// Create a new transport for a custom API base URL.
    pub fn new(endpoint: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        let url = parse_endpoint(endpoint.as_ref())?;
        Self::builder(token).endpoint(url).build()
    }

    /// Create a new transport with the default API URL.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Create a builder for configuring the transport.
    pub fn builder(token: impl Into<String>) -> HttpTransportBuilder {
        HttpTransportBuilder::new(token)
    }

    /// The API base URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build request URL for an operation, with the token appended.
    fn build_request_url(
        &self,
        endpoint: Endpoint,
        mut params: Vec<(&'static str, String)>,
    ) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| GetAltsError::InvalidEndpoint {
                endpoint: self.endpoint.to_string(),
            })?
            .pop_if_empty()
            .push(endpoint.path());

        params.push(("token", self.token.expose_secret().to_string()));
        url.set_query(Some(
            &serde_urlencoded::to_string(&params).map_err(GetAltsError::BuildRequestUrl)?,
        ));

        Ok(url)
    }

    /// Send a GET request and return the response text.
    async fn send_request(&self, url: Url) -> Result<String> {
        let response = self.http_client.get(url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }
}

impl Transport for HttpTransport {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "HttpTransport::call",
            skip_all,
            fields(endpoint = %endpoint)
        )
    )]
    async fn call(
        &self,
        endpoint: Endpoint,
        params: Vec<(&'static str, String)>,
    ) -> Result<Payload> {
        #[cfg(feature = "tracing")]
        debug!(params = ?params, "Sending GetAlts request");

        let url = self.build_request_url(endpoint, params)?;
        let text = self.send_request(url).await?;

        let response = ApiResponse::from_text(&text).map_err(GetAltsError::MalformedResponse)?;
        let payload = response.into_result().map_err(GetAltsError::Api)?;

        #[cfg(feature = "tracing")]
        {
            debug!(response = %text, "Received GetAlts response");
            Span::current().set_status(Status::Ok);
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_call_appends_token_and_path() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/get_amount"))
            .and(query_param("country", "ru"))
            .and(query_param("token", "test_token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"tg": 5})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport =
            HttpTransport::new(format!("{}/api", mock_server.uri()), "test_token").unwrap();
        let payload = transport
            .call(Endpoint::GetAmount, vec![("country", "ru".to_string())])
            .await
            .unwrap();

        assert_eq!(payload.get("tg"), Some(&serde_json::json!(5)));
    }

    #[tokio::test]
    async fn test_call_with_trailing_slash_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/get_balance"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"balance": 1.5})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport =
            HttpTransport::new(format!("{}/api/", mock_server.uri()), "test_token").unwrap();
        let payload = transport.call(Endpoint::GetBalance, Vec::new()).await.unwrap();
        assert_eq!(payload.get("balance"), Some(&serde_json::json!(1.5)));
    }

    #[tokio::test]
    async fn test_call_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "BAD_TOKEN"})),
            )
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri(), "test_token").unwrap();
        let result = transport.call(Endpoint::GetBalance, Vec::new()).await;

        match result {
            Err(GetAltsError::Api(error)) => assert_eq!(error.message, "BAD_TOKEN"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_http_status_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri(), "test_token").unwrap();
        let result = transport.call(Endpoint::GetBalance, Vec::new()).await;

        assert!(matches!(result, Err(GetAltsError::Transport(_))));
    }

    #[tokio::test]
    async fn test_call_timeout_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"balance": 1.0}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::builder("test_token")
            .endpoint(Url::parse(&mock_server.uri()).unwrap())
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let result = transport.call(Endpoint::GetBalance, Vec::new()).await;

        assert!(matches!(result, Err(GetAltsError::Transport(_))));
    }

    #[tokio::test]
    async fn test_call_non_json_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(mock_server.uri(), "test_token").unwrap();
        let result = transport.call(Endpoint::GetBalance, Vec::new()).await;

        assert!(matches!(result, Err(GetAltsError::MalformedResponse(_))));
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let result = HttpTransport::new("mailto:someone@example.com", "test_token");
        assert!(matches!(result, Err(GetAltsError::InvalidEndpoint { .. })));

        let result = HttpTransport::new("not a url", "test_token");
        assert!(matches!(result, Err(GetAltsError::InvalidEndpoint { .. })));
    }

    #[test]
    fn test_debug_redacts_token() {
        let transport = HttpTransport::with_token("super_secret").unwrap();
        let debug = format!("{:?}", transport);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super_secret"));
        assert_eq!(transport.endpoint().as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::GetBalance.path(), "get_balance");
        assert_eq!(Endpoint::SetActivationStatus.to_string(), "set_activation_status");
    }
}
