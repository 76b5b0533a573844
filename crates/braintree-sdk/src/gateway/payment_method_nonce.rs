use serde_json::json;

use super::{segment, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::PaymentMethodNonceResponse;
use crate::validation::{Entity, ValidatedResponse};

/// One-time nonces minted from vaulted methods.
pub struct PaymentMethodNonceGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> PaymentMethodNonceGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        payment_method_token: &str,
    ) -> Result<ValidatedResponse<PaymentMethodNonceResponse>, BraintreeError> {
        let path = format!("/payment_methods/{}/nonces", segment(payment_method_token)?);
        self.api.validated(ApiRequest::post(path, json!({}))).await
    }

    pub async fn find(&self, nonce: &str) -> Result<PaymentMethodNonceResponse, BraintreeError> {
        let path = format!("/payment_method_nonces/{}", segment(nonce)?);
        self.api
            .entity(ApiRequest::get(path), PaymentMethodNonceResponse::KEY)
            .await
    }
}
