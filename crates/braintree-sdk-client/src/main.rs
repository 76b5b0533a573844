//! Smoke-test a set of API credentials.
//!
//! Reads `BRAINTREE_*` variables (a `.env` file is honoured), generates a
//! client token and, when `BRAINTREE_CUSTOMER_ID` is set, looks that
//! customer up.

use std::process::ExitCode;

use braintree::types::ClientTokenRequest;
use braintree::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,braintree=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        environment = config.environment.as_str(),
        merchant_url = %config.merchant_url(),
        "probing gateway"
    );

    let gateway = match braintree_client::connect(&config) {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!(error = %e, "failed to build client");
            return ExitCode::FAILURE;
        }
    };

    let customer_id = std::env::var("BRAINTREE_CUSTOMER_ID")
        .ok()
        .filter(|id| !id.trim().is_empty());

    let request = ClientTokenRequest {
        customer_id: customer_id.clone(),
        ..Default::default()
    };
    match gateway.client_token().generate(&request).await {
        Ok(token) => match braintree_client::decode_client_token(&token) {
            Ok(payload) => tracing::info!(
                version = payload.version,
                environment = payload.environment.as_deref().unwrap_or("unknown"),
                "client token issued"
            ),
            Err(e) => tracing::warn!(error = %e, "client token issued but not decodable"),
        },
        Err(e) => {
            tracing::error!(error = %e, fault = ?e.kind(), "client token generation failed");
            return ExitCode::FAILURE;
        }
    }

    if let Some(id) = customer_id {
        match gateway.customer().find(&id).await {
            Ok(customer) => tracing::info!(
                customer_id = customer.id(),
                payment_methods = customer.payment_methods.len(),
                "customer found"
            ),
            Err(e) => {
                tracing::error!(customer_id = %id, error = %e, "customer lookup failed");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
