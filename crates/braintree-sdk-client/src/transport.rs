//! reqwest-backed [`Transport`] speaking to the live service.

use base64::Engine;
use braintree::{
    ApiRequest, ApiResponse, BraintreeError, BraintreeGateway, Config, Method, Transport,
    API_VERSION,
};
use serde_json::Value;

const USER_AGENT: &str = concat!("braintree-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Sends each [`ApiRequest`] below `<base>/merchants/<merchant_id>` with
/// HTTP basic credentials and the API version header.
pub struct HttpTransport {
    http: reqwest::Client,
    merchant_url: String,
    authorization: String,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("merchant_url", &self.merchant_url)
            .field("authorization", &"[REDACTED]")
            .finish()
    }
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, BraintreeError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| BraintreeError::Unexpected(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(config, http))
    }

    /// Use a preconfigured reqwest client. The config is not re-validated.
    pub fn with_http_client(config: &Config, http: reqwest::Client) -> Self {
        let credentials = format!("{}:{}", config.public_key, config.private_key);
        Self {
            http,
            merchant_url: config.merchant_url(),
            authorization: format!(
                "Basic {}",
                base64::engine::general_purpose::STANDARD.encode(credentials)
            ),
        }
    }

    pub fn merchant_url(&self) -> &str {
        &self.merchant_url
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BraintreeError> {
        let url = format!("{}{}", self.merchant_url, request.path);
        let mut builder = self
            .http
            .request(Self::method(request.method), &url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-ApiVersion", API_VERSION);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::warn!(method = %request.method, path = %request.path, error = %e, "request failed");
            BraintreeError::Unexpected(format!("request failed: {e}"))
        })?;

        let status = resp.status().as_u16();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| BraintreeError::Unexpected(format!("failed to read response body: {e}")))?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status,
            bytes = bytes.len(),
            "response received"
        );

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiResponse::new(status, None));
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => Ok(ApiResponse::new(status, Some(body))),
            // Fault pages are often HTML; the status alone decides those.
            Err(_) if !(200..300).contains(&status) => Ok(ApiResponse::new(status, None)),
            Err(e) => Err(BraintreeError::Unexpected(format!(
                "response body is not JSON: {e}"
            ))),
        }
    }
}

/// Build a root client over HTTP from `config`.
pub fn connect(config: &Config) -> Result<BraintreeGateway<HttpTransport>, BraintreeError> {
    Ok(BraintreeGateway::new(HttpTransport::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use braintree::Environment;

    fn config() -> Config {
        Config::new(Environment::Sandbox, "merchant123", "pub", "secret")
    }

    #[test]
    fn test_authorization_is_basic_credentials() {
        let transport = HttpTransport::new(&config()).unwrap();
        // "pub:secret"
        assert_eq!(transport.authorization, "Basic cHViOnNlY3JldA==");
        assert_eq!(
            transport.merchant_url(),
            "https://api.sandbox.braintreegateway.com:443/merchants/merchant123"
        );
    }

    #[test]
    fn test_debug_hides_credentials() {
        let transport = HttpTransport::new(&config()).unwrap();
        let rendered = format!("{transport:?}");
        assert!(!rendered.contains("cHViOnNlY3JldA=="));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_rejects_incomplete_config() {
        let config = Config::new(Environment::Sandbox, "merchant123", "pub", " ");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(BraintreeError::Config(_))
        ));
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("braintree-sdk-rust/"));
    }
}
