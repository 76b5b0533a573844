use serde::Serialize;

use super::{segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{
    GrantOptions, PaymentMethodCreateRequest, PaymentMethodNonce, PaymentMethodResponse,
    PaymentMethodUpdateRequest,
};
use crate::validation::{Entity, ValidatedResponse};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SharedMethod<'a> {
    shared_payment_method_token: &'a str,
    #[serde(flatten)]
    options: Option<&'a GrantOptions>,
}

/// Vaulted instruments of any kind, addressed by token.
pub struct PaymentMethodGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> PaymentMethodGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        request: &PaymentMethodCreateRequest,
    ) -> Result<ValidatedResponse<PaymentMethodResponse>, BraintreeError> {
        let body = wrap(PaymentMethodResponse::KEY, request)?;
        self.api
            .validated(ApiRequest::post("/payment_methods", body))
            .await
    }

    pub async fn delete(&self, token: &str) -> Result<(), BraintreeError> {
        let path = Self::path(token)?;
        self.api.void(ApiRequest::delete(path)).await
    }

    pub async fn find(&self, token: &str) -> Result<PaymentMethodResponse, BraintreeError> {
        let path = Self::path(token)?;
        self.api
            .entity(ApiRequest::get(path), PaymentMethodResponse::KEY)
            .await
    }

    /// Share a vaulted method with another merchant. Returns a nonce the
    /// grantee can transact with.
    pub async fn grant(
        &self,
        shared_payment_method_token: &str,
        options: &GrantOptions,
    ) -> Result<String, BraintreeError> {
        segment(shared_payment_method_token)?;
        let body = wrap(
            PaymentMethodResponse::KEY,
            &SharedMethod {
                shared_payment_method_token,
                options: Some(options),
            },
        )?;
        let nonce: PaymentMethodNonce = self
            .api
            .entity(
                ApiRequest::post("/payment_methods/grant", body),
                PaymentMethodNonce::KEY,
            )
            .await?;
        Ok(nonce.nonce)
    }

    pub async fn revoke(&self, shared_payment_method_token: &str) -> Result<(), BraintreeError> {
        segment(shared_payment_method_token)?;
        let body = wrap(
            PaymentMethodResponse::KEY,
            &SharedMethod {
                shared_payment_method_token,
                options: None,
            },
        )?;
        self.api
            .void(ApiRequest::post("/payment_methods/revoke", body))
            .await
    }

    pub async fn update(
        &self,
        token: &str,
        updates: &PaymentMethodUpdateRequest,
    ) -> Result<ValidatedResponse<PaymentMethodResponse>, BraintreeError> {
        let path = Self::path(token)?;
        let body = wrap(PaymentMethodResponse::KEY, updates)?;
        self.api.validated(ApiRequest::put(path, Some(body))).await
    }

    fn path(token: &str) -> Result<String, BraintreeError> {
        Ok(format!("/payment_methods/any/{}", segment(token)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BraintreeError;
    use crate::testing::{fixtures, StubTransport};
    use crate::transport::Method;
    use crate::types::{GrantOptions, PaymentMethodResponse, PaymentMethodUpdateRequest};
    use crate::BraintreeGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_decodes_tagged_variant() {
        let transport = StubTransport::new()
            .respond(200, json!({"paymentMethod": fixtures::paypal_account()}));
        let gateway = BraintreeGateway::new(transport);

        let method = gateway.payment_method().find("pp_tok").await.unwrap();
        assert!(matches!(method, PaymentMethodResponse::PayPalAccount(ref a) if a.email == "alice@example.com"));
        assert_eq!(
            gateway.transport().last_request().unwrap().path,
            "/payment_methods/any/pp_tok"
        );
    }

    #[tokio::test]
    async fn test_find_rejects_unknown_instrument() {
        let mut unknown = fixtures::paypal_account();
        unknown["paymentInstrumentType"] = json!("us_bank_account");
        let transport = StubTransport::new().respond(200, json!({"paymentMethod": unknown}));
        let gateway = BraintreeGateway::new(transport);

        let err = gateway.payment_method().find("pp_tok").await.unwrap_err();
        assert!(matches!(err, BraintreeError::Serde(_)));
    }

    #[tokio::test]
    async fn test_grant_and_revoke() {
        let transport = StubTransport::new()
            .respond(201, json!({"paymentMethodNonce": {"nonce": "granted_nonce"}}))
            .respond_empty(200);
        let gateway = BraintreeGateway::new(transport);

        let options = GrantOptions {
            allow_vaulting: Some(false),
            ..Default::default()
        };
        let nonce = gateway.payment_method().grant("card_tok", &options).await.unwrap();
        assert_eq!(nonce, "granted_nonce");
        gateway.payment_method().revoke("card_tok").await.unwrap();

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].path, "/payment_methods/grant");
        assert_eq!(
            requests[0].body.clone().unwrap(),
            json!({"paymentMethod": {"sharedPaymentMethodToken": "card_tok", "allowVaulting": false}})
        );
        assert_eq!(requests[1].path, "/payment_methods/revoke");
        assert_eq!(
            requests[1].body.clone().unwrap(),
            json!({"paymentMethod": {"sharedPaymentMethodToken": "card_tok"}})
        );
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let transport = StubTransport::new()
            .respond(200, json!({"paymentMethod": fixtures::credit_card_payment_method()}))
            .respond_empty(200);
        let gateway = BraintreeGateway::new(transport);

        let updates = PaymentMethodUpdateRequest::default();
        let response = gateway
            .payment_method()
            .update("card_tok", &updates)
            .await
            .unwrap();
        assert_eq!(response.entity().unwrap().token(), "card_tok");
        gateway.payment_method().delete("card_tok").await.unwrap();

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].path, "/payment_methods/any/card_tok");
    }
}
