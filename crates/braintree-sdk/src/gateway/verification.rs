use serde::Serialize;

use super::{search_body, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::CreditCardVerificationResponse;

pub struct CreditCardVerificationGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> CreditCardVerificationGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    /// Verifications matching `criteria`. The criteria document is passed
    /// through untouched.
    pub async fn search<P: Serialize + ?Sized>(
        &self,
        criteria: &P,
    ) -> Result<Vec<CreditCardVerificationResponse>, BraintreeError> {
        let body = search_body(criteria)?;
        self.api
            .list(
                ApiRequest::post("/verifications/advanced_search", body),
                "creditCardVerifications",
            )
            .await
    }
}
