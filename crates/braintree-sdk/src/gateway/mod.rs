//! Gateways: one handle per resource family, all borrowing a single
//! [`Transport`] held by [`BraintreeGateway`].
//!
//! Every operation is one request. Statuses are interpreted here:
//!
//! - 2xx: the entity (or list) is read from the body under its key;
//! - 422: a [`ValidationFailure`] for operations returning a
//!   [`ValidatedResponse`], [`BraintreeError::Unexpected`] otherwise;
//! - anything else: the matching [`BraintreeError`] fault.

mod add_on;
mod address;
mod client_token;
mod credit_card;
mod customer;
mod discount;
mod dispute;
mod merchant_account;
mod payment_method;
mod payment_method_nonce;
mod plan;
mod settlement_batch_summary;
mod subscription;
mod transaction;
mod transaction_line_item;
mod verification;

pub use add_on::AddOnGateway;
pub use address::AddressGateway;
pub use client_token::ClientTokenGateway;
pub use credit_card::CreditCardGateway;
pub use customer::CustomerGateway;
pub use discount::DiscountGateway;
pub use dispute::DisputeGateway;
pub use merchant_account::MerchantAccountGateway;
pub use payment_method::PaymentMethodGateway;
pub use payment_method_nonce::PaymentMethodNonceGateway;
pub use plan::PlanGateway;
pub use settlement_batch_summary::SettlementBatchSummaryGateway;
pub use subscription::SubscriptionGateway;
pub use transaction::TransactionGateway;
pub use transaction_line_item::TransactionLineItemGateway;
pub use verification::CreditCardVerificationGateway;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::BraintreeError;
use crate::transport::{ApiRequest, ApiResponse, Transport};
use crate::validation::{Entity, ValidatedResponse, ValidationFailure};

/// Root client. Owns the transport and hands out gateway handles.
///
/// ```
/// use braintree::testing::StubTransport;
/// use braintree::BraintreeGateway;
///
/// let gateway = BraintreeGateway::new(StubTransport::new());
/// let _customers = gateway.customer();
/// ```
#[derive(Debug)]
pub struct BraintreeGateway<T> {
    transport: T,
}

impl<T: Transport> BraintreeGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn api(&self) -> Api<'_, T> {
        Api {
            transport: &self.transport,
        }
    }

    pub fn add_on(&self) -> AddOnGateway<'_, T> {
        AddOnGateway::new(self.api())
    }

    pub fn address(&self) -> AddressGateway<'_, T> {
        AddressGateway::new(self.api())
    }

    pub fn client_token(&self) -> ClientTokenGateway<'_, T> {
        ClientTokenGateway::new(self.api())
    }

    pub fn credit_card(&self) -> CreditCardGateway<'_, T> {
        CreditCardGateway::new(self.api())
    }

    pub fn credit_card_verification(&self) -> CreditCardVerificationGateway<'_, T> {
        CreditCardVerificationGateway::new(self.api())
    }

    pub fn customer(&self) -> CustomerGateway<'_, T> {
        CustomerGateway::new(self.api())
    }

    pub fn discount(&self) -> DiscountGateway<'_, T> {
        DiscountGateway::new(self.api())
    }

    pub fn dispute(&self) -> DisputeGateway<'_, T> {
        DisputeGateway::new(self.api())
    }

    pub fn merchant_account(&self) -> MerchantAccountGateway<'_, T> {
        MerchantAccountGateway::new(self.api())
    }

    pub fn payment_method(&self) -> PaymentMethodGateway<'_, T> {
        PaymentMethodGateway::new(self.api())
    }

    pub fn payment_method_nonce(&self) -> PaymentMethodNonceGateway<'_, T> {
        PaymentMethodNonceGateway::new(self.api())
    }

    pub fn plan(&self) -> PlanGateway<'_, T> {
        PlanGateway::new(self.api())
    }

    pub fn settlement_batch_summary(&self) -> SettlementBatchSummaryGateway<'_, T> {
        SettlementBatchSummaryGateway::new(self.api())
    }

    pub fn subscription(&self) -> SubscriptionGateway<'_, T> {
        SubscriptionGateway::new(self.api())
    }

    pub fn transaction(&self) -> TransactionGateway<'_, T> {
        TransactionGateway::new(self.api())
    }

    pub fn transaction_line_item(&self) -> TransactionLineItemGateway<'_, T> {
        TransactionLineItemGateway::new(self.api())
    }
}

/// Request plumbing shared by the gateways.
pub(crate) struct Api<'a, T> {
    transport: &'a T,
}

impl<T> Clone for Api<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Api<'_, T> {}

impl<T: Transport> Api<'_, T> {
    async fn call(&self, request: ApiRequest) -> Result<ApiResponse, BraintreeError> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(%method, %path, "braintree request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(%method, %path, status = response.status, "braintree response");
        Ok(response)
    }

    /// Issue `request` and accept only a 2xx; every other status is a fault.
    async fn call_ok(&self, request: ApiRequest) -> Result<Option<Value>, BraintreeError> {
        let response = self.call(request).await?;
        if response.status == 422 {
            return Err(BraintreeError::Unexpected(failure_message(response.body)));
        }
        if let Some(fault) = BraintreeError::from_status(response.status) {
            tracing::warn!(status = response.status, error = %fault, "braintree fault");
            return Err(fault);
        }
        Ok(response.body)
    }

    /// Fetch a single record stored under `key`.
    pub(crate) async fn entity<E: DeserializeOwned>(
        &self,
        request: ApiRequest,
        key: &str,
    ) -> Result<E, BraintreeError> {
        let body = self.call_ok(request).await?;
        extract(body, key)?
            .ok_or_else(|| BraintreeError::Unexpected(format!("response has no `{key}`")))
    }

    /// Fetch a list stored under `key`; an absent key is an empty list.
    pub(crate) async fn list<E: DeserializeOwned>(
        &self,
        request: ApiRequest,
        key: &str,
    ) -> Result<Vec<E>, BraintreeError> {
        let body = self.call_ok(request).await?;
        Ok(extract(body, key)?.unwrap_or_default())
    }

    pub(crate) async fn void(&self, request: ApiRequest) -> Result<(), BraintreeError> {
        self.call_ok(request).await.map(|_| ())
    }

    /// Issue a mutating request. On success the raw body is returned for the
    /// caller to pick apart; a 422 becomes the failure side of the envelope.
    pub(crate) async fn submit(
        &self,
        request: ApiRequest,
    ) -> Result<ValidatedResponse<Option<Value>>, BraintreeError> {
        let response = self.call(request).await?;
        if response.status == 422 {
            let failure = response
                .body
                .map(serde_json::from_value::<ValidationFailure>)
                .transpose()
                .map_err(|e| BraintreeError::Unexpected(format!("malformed validation failure: {e}")))?
                .ok_or_else(|| {
                    BraintreeError::Unexpected("validation failure without body".to_string())
                })?;
            tracing::debug!(errors = failure.errors().len(), "braintree validation failure");
            return Ok(ValidatedResponse::Failure(failure));
        }
        if let Some(fault) = BraintreeError::from_status(response.status) {
            tracing::warn!(status = response.status, error = %fault, "braintree fault");
            return Err(fault);
        }
        Ok(ValidatedResponse::Success(response.body))
    }

    /// Issue a mutating request whose success body carries an `E`.
    pub(crate) async fn validated<E: Entity>(
        &self,
        request: ApiRequest,
    ) -> Result<ValidatedResponse<E>, BraintreeError> {
        match self.submit(request).await? {
            ValidatedResponse::Failure(failure) => Ok(ValidatedResponse::Failure(failure)),
            ValidatedResponse::Success(body) => extract::<E>(body, E::KEY)?
                .map(ValidatedResponse::Success)
                .ok_or_else(|| BraintreeError::Unexpected(format!("response has no `{}`", E::KEY))),
        }
    }
}

/// Decode `body[key]`, if present and non-null.
pub(crate) fn extract<E: DeserializeOwned>(
    body: Option<Value>,
    key: &str,
) -> Result<Option<E>, BraintreeError> {
    let Some(Value::Object(mut map)) = body else {
        return Ok(None);
    };
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}

/// `{key: body}` as a JSON document.
pub(crate) fn wrap<B: Serialize + ?Sized>(key: &str, body: &B) -> Result<Value, BraintreeError> {
    let mut map = Map::new();
    map.insert(key.to_string(), serde_json::to_value(body)?);
    Ok(Value::Object(map))
}

/// Search criteria body: `{"search": criteria}`.
pub(crate) fn search_body<P: Serialize + ?Sized>(criteria: &P) -> Result<Value, BraintreeError> {
    wrap("search", criteria)
}

/// Validate and percent-encode a path identifier. Blank ids never reach the
/// network: they fail with [`BraintreeError::NotFound`].
pub(crate) fn segment(id: &str) -> Result<String, BraintreeError> {
    if id.trim().is_empty() {
        return Err(BraintreeError::NotFound);
    }
    let mut url = url::Url::parse("http://localhost/")
        .map_err(|e| BraintreeError::Unexpected(format!("path encoding failed: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| BraintreeError::Unexpected("path encoding failed".to_string()))?
        .pop_if_empty()
        .push(id);
    // `.` and `..` are dropped by the encoder and address no record.
    let encoded = url.path().trim_start_matches('/');
    if encoded.is_empty() {
        return Err(BraintreeError::NotFound);
    }
    Ok(encoded.to_string())
}

fn failure_message(body: Option<Value>) -> String {
    body.as_ref()
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| "unexpected validation failure".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;
    use crate::types::AddressResponse;
    use crate::FaultKind;
    use serde_json::json;

    #[test]
    fn test_segment_rejects_blank_and_encodes() {
        assert!(matches!(segment(""), Err(BraintreeError::NotFound)));
        assert!(matches!(segment("   "), Err(BraintreeError::NotFound)));
        assert_eq!(segment("abc_123").unwrap(), "abc_123");
        assert_eq!(segment("a/b").unwrap(), "a%2Fb");
        assert_eq!(segment("a b").unwrap(), "a%20b");
        assert_eq!(segment("a+b").unwrap(), "a+b");
        assert_eq!(segment("50%?#").unwrap(), "50%25%3F%23");
        assert!(matches!(segment(".."), Err(BraintreeError::NotFound)));
    }

    #[test]
    fn test_extract_missing_and_null() {
        assert!(extract::<String>(None, "k").unwrap().is_none());
        assert!(extract::<String>(Some(json!({"k": null})), "k").unwrap().is_none());
        assert_eq!(
            extract::<String>(Some(json!({"k": "v"})), "k").unwrap(),
            Some("v".to_string())
        );
    }

    #[tokio::test]
    async fn test_fault_statuses() {
        for (status, kind) in [
            (401, FaultKind::Authentication),
            (403, FaultKind::Authorization),
            (404, FaultKind::NotFound),
            (426, FaultKind::UpgradeRequired),
            (429, FaultKind::TooManyRequests),
            (500, FaultKind::Server),
            (503, FaultKind::DownForMaintenance),
            (302, FaultKind::Unexpected),
        ] {
            let gateway = BraintreeGateway::new(StubTransport::new().respond_empty(status));
            let err = gateway.address().find("c1", "a1").await.unwrap_err();
            assert_eq!(err.kind(), Some(kind), "status {status}");
        }
    }

    #[tokio::test]
    async fn test_validation_failure_on_envelope_operation() {
        let transport = StubTransport::new().respond(
            422,
            json!({
                "message": "Postal code is invalid.",
                "errors": [{"attribute": "postalCode", "code": "81813", "message": "Postal code can only contain letters, numbers, spaces, and hyphens."}],
                "params": {"address": {"postalCode": "!!"}}
            }),
        );
        let gateway = BraintreeGateway::new(transport);
        let api = gateway.api();
        let result: ValidatedResponse<AddressResponse> = api
            .validated(ApiRequest::post("/customers/c1/addresses", json!({})))
            .await
            .unwrap();
        assert!(!result.success());
        assert_eq!(result.errors()[0].code, "81813");
        assert_eq!(result.message(), "Postal code is invalid.");
    }

    #[tokio::test]
    async fn test_unprocessable_on_plain_operation_is_unexpected() {
        let transport = StubTransport::new().respond(422, json!({"message": "nope"}));
        let gateway = BraintreeGateway::new(transport);
        let err = gateway.address().find("c1", "a1").await.unwrap_err();
        assert!(matches!(err, BraintreeError::Unexpected(ref m) if m == "nope"));
    }
}
