//! HTTP client for the Braintree typed SDK.
//!
//! Provides [`HttpTransport`], the reqwest implementation of
//! [`braintree::Transport`], and helpers for working with client tokens.
//!
//! # Quick Example
//!
//! ```no_run
//! use braintree::types::ClientTokenRequest;
//! use braintree::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), braintree::BraintreeError> {
//! let config = Config::from_env()?;
//! let gateway = braintree_client::connect(&config)?;
//!
//! let token = gateway
//!     .client_token()
//!     .generate(&ClientTokenRequest::default())
//!     .await?;
//! let payload = braintree_client::decode_client_token(&token)?;
//! println!("client token v{}", payload.version);
//! # Ok(())
//! # }
//! ```

mod token;
mod transport;

pub use token::decode_client_token;
pub use transport::{connect, HttpTransport};

// Re-export commonly needed types from core
pub use braintree::{
    BraintreeError, BraintreeGateway, Config, ConfigError, Environment, FaultKind,
    ValidatedResponse,
};
