use serde::Serialize;

use super::{extract, search_body, segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{
    RetryChargeOptions, RetryChargeRequest, SubscriptionRequest, SubscriptionResponse,
};
use crate::validation::{Entity, ValidatedResponse};

#[derive(Serialize)]
struct RetryCharge<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    request: &'a RetryChargeRequest,
}

/// Recurring billing subscriptions.
pub struct SubscriptionGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> SubscriptionGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn cancel(&self, subscription_id: &str) -> Result<(), BraintreeError> {
        let path = format!("{}/cancel", Self::path(subscription_id)?);
        self.api.void(ApiRequest::put(path, None)).await
    }

    pub async fn create(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<ValidatedResponse<SubscriptionResponse>, BraintreeError> {
        let body = wrap(SubscriptionResponse::KEY, request)?;
        self.api
            .validated(ApiRequest::post("/subscriptions", body))
            .await
    }

    pub async fn find(&self, subscription_id: &str) -> Result<SubscriptionResponse, BraintreeError> {
        let path = Self::path(subscription_id)?;
        self.api
            .entity(ApiRequest::get(path), SubscriptionResponse::KEY)
            .await
    }

    /// Charge a past-due subscription again, optionally for a different
    /// amount. The charge is a sale against the subscription; on success
    /// the refreshed subscription is returned.
    pub async fn retry_charge(
        &self,
        subscription_id: &str,
        amount: Option<&str>,
        submit_for_settlement: Option<bool>,
    ) -> Result<ValidatedResponse<SubscriptionResponse>, BraintreeError> {
        segment(subscription_id)?;
        let request = RetryChargeRequest {
            subscription_id: subscription_id.to_string(),
            amount: amount.map(str::to_string),
            options: submit_for_settlement
                .map(|submit_for_settlement| RetryChargeOptions { submit_for_settlement }),
        };
        let body = wrap(
            "transaction",
            &RetryCharge {
                kind: "sale",
                request: &request,
            },
        )?;
        match self.api.submit(ApiRequest::post("/transactions", body)).await? {
            ValidatedResponse::Failure(failure) => Ok(ValidatedResponse::Failure(failure)),
            ValidatedResponse::Success(body) => {
                match extract::<SubscriptionResponse>(body, SubscriptionResponse::KEY)? {
                    Some(subscription) => Ok(ValidatedResponse::Success(subscription)),
                    None => self
                        .find(subscription_id)
                        .await
                        .map(ValidatedResponse::Success),
                }
            }
        }
    }

    pub async fn search<P: Serialize + ?Sized>(
        &self,
        criteria: &P,
    ) -> Result<Vec<SubscriptionResponse>, BraintreeError> {
        let body = search_body(criteria)?;
        self.api
            .list(
                ApiRequest::post("/subscriptions/advanced_search", body),
                "subscriptions",
            )
            .await
    }

    pub async fn update(
        &self,
        subscription_id: &str,
        updates: &SubscriptionRequest,
    ) -> Result<ValidatedResponse<SubscriptionResponse>, BraintreeError> {
        let path = Self::path(subscription_id)?;
        let body = wrap(SubscriptionResponse::KEY, updates)?;
        self.api.validated(ApiRequest::put(path, Some(body))).await
    }

    fn path(subscription_id: &str) -> Result<String, BraintreeError> {
        Ok(format!("/subscriptions/{}", segment(subscription_id)?))
    }
}
