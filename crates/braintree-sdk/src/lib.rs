//! Typed contracts and gateways for the Braintree payment API.
//!
//! The crate is split in two layers:
//!
//! - [`types`]: the request and response records of every resource family,
//!   with their closed enums, exchanged as camelCase JSON;
//! - [`gateway`]: one handle per resource family, issuing requests through a
//!   [`Transport`] and interpreting the reply as an entity, a list, a
//!   [`ValidatedResponse`] or a [`BraintreeError`] fault.
//!
//! No network code lives here. `braintree-sdk-client` provides the HTTP
//! transport; [`testing::StubTransport`] replays scripted replies.
//!
//! # Quick Example
//!
//! ```no_run
//! use braintree::testing::{fixtures, StubTransport};
//! use braintree::types::CustomerCreateRequest;
//! use braintree::BraintreeGateway;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), braintree::BraintreeError> {
//! let transport = StubTransport::new()
//!     .respond(201, serde_json::json!({ "customer": fixtures::customer() }));
//! let gateway = BraintreeGateway::new(transport);
//!
//! match gateway.customer().create(&CustomerCreateRequest::default()).await? {
//!     braintree::ValidatedResponse::Success(customer) => println!("created {}", customer.id()),
//!     braintree::ValidatedResponse::Failure(failure) => {
//!         for error in failure.errors() {
//!             println!("{}: {}", error.attribute, error.message);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod gateway;
pub mod shape;
pub mod testing;
pub mod transport;
pub mod types;
pub mod validation;

// Re-exports
pub use config::{Config, ConfigError, Environment, API_VERSION, PRODUCTION_URL, SANDBOX_URL};
pub use error::{BraintreeError, FaultKind};
pub use gateway::{
    AddOnGateway, AddressGateway, BraintreeGateway, ClientTokenGateway, CreditCardGateway,
    CreditCardVerificationGateway, CustomerGateway, DiscountGateway, DisputeGateway,
    MerchantAccountGateway, PaymentMethodGateway, PaymentMethodNonceGateway, PlanGateway,
    SettlementBatchSummaryGateway, SubscriptionGateway, TransactionGateway,
    TransactionLineItemGateway,
};
pub use shape::{requires_subset_of, RequestShape};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use types::{Timestamp, Timestamped};
pub use validation::{Entity, ValidatedResponse, ValidationError, ValidationFailure};
