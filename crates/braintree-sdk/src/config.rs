use std::env;
use std::time::Duration;

use url::Url;

/// Production API host.
pub const PRODUCTION_URL: &str = "https://api.braintreegateway.com:443";

/// Sandbox API host.
pub const SANDBOX_URL: &str = "https://api.sandbox.braintreegateway.com:443";

/// API version sent with every request.
pub const API_VERSION: &str = "6";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Target environment of the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

/// Environment and credentials for a root client.
#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub merchant_id: String,
    pub public_key: String,
    pub private_key: String,
    /// Overrides the environment's host (local mocks, proxies).
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("merchant_id", &self.merchant_id)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    pub fn new(
        environment: Environment,
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            merchant_id: merchant_id.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from `BRAINTREE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::MissingRequired(key))
        };

        let environment = match lookup("BRAINTREE_ENVIRONMENT") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Environment::default(),
        };

        let merchant_id = required("BRAINTREE_MERCHANT_ID")?;
        let public_key = required("BRAINTREE_PUBLIC_KEY")?;
        let private_key = required("BRAINTREE_PRIVATE_KEY")?;

        let base_url = lookup("BRAINTREE_BASE_URL").filter(|s| !s.is_empty());

        let timeout = match lookup("BRAINTREE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let config = Self {
            environment,
            merchant_id,
            public_key,
            private_key,
            base_url,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.merchant_id.trim().is_empty() {
            return Err(ConfigError::MissingRequired("merchant_id"));
        }
        if self.public_key.trim().is_empty() {
            return Err(ConfigError::MissingRequired("public_key"));
        }
        if self.private_key.trim().is_empty() {
            return Err(ConfigError::MissingRequired("private_key"));
        }
        if let Some(ref base) = self.base_url {
            let parsed = Url::parse(base).map_err(|_| ConfigError::InvalidUrl(base.clone()))?;
            if parsed.scheme() != "https" {
                tracing::warn!(
                    base_url = %base,
                    "BRAINTREE_BASE_URL is not https; credentials will be sent in clear text"
                );
            }
        }
        Ok(())
    }

    /// Host serving this config's requests, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }

    /// Root every gateway path is appended to.
    pub fn merchant_url(&self) -> String {
        format!("{}/merchants/{}", self.base_url(), self.merchant_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    MissingRequired(&'static str),

    #[error("invalid environment: {0} (expected production or sandbox)")]
    InvalidEnvironment(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}
