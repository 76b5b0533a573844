use serde::Deserialize;

use super::{wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::ClientTokenRequest;

const KEY: &str = "clientToken";

#[derive(Deserialize)]
struct GeneratedToken {
    value: String,
}

/// Issues client tokens for front-end SDK initialisation.
pub struct ClientTokenGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> ClientTokenGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    /// Generate an opaque, base64-encoded client token.
    ///
    /// Card options need a customer to apply to; asking for them without a
    /// `customer_id` fails before any request is sent.
    pub async fn generate(&self, request: &ClientTokenRequest) -> Result<String, BraintreeError> {
        if request.options_without_customer() {
            return Err(BraintreeError::Unexpected(
                "client token options require a customer_id".to_string(),
            ));
        }
        let body = wrap(KEY, request)?;
        let token: GeneratedToken = self
            .api
            .entity(ApiRequest::post("/client_token", body), KEY)
            .await?;
        Ok(token.value)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BraintreeError;
    use crate::testing::StubTransport;
    use crate::types::{ClientTokenOptions, ClientTokenRequest};
    use crate::BraintreeGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_generate_returns_value() {
        let transport =
            StubTransport::new().respond(201, json!({"clientToken": {"value": "eyJ2ZXJzaW9uIjoyfQ=="}}));
        let gateway = BraintreeGateway::new(transport);

        let request = ClientTokenRequest {
            customer_id: Some("cust_1".into()),
            ..Default::default()
        };
        let token = gateway.client_token().generate(&request).await.unwrap();
        assert_eq!(token, "eyJ2ZXJzaW9uIjoyfQ==");

        let sent = gateway.transport().last_request().unwrap();
        assert_eq!(sent.path, "/client_token");
        assert_eq!(sent.body.unwrap(), json!({"clientToken": {"customerId": "cust_1"}}));
    }

    #[tokio::test]
    async fn test_options_without_customer_fail_locally() {
        let gateway = BraintreeGateway::new(StubTransport::new());
        let request = ClientTokenRequest {
            options: Some(ClientTokenOptions {
                verify_card: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let err = gateway.client_token().generate(&request).await.unwrap_err();
        assert!(matches!(err, BraintreeError::Unexpected(_)));
        assert!(gateway.transport().requests().is_empty());
    }
}
