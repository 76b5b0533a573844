use super::Api;
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::DiscountResponse;

/// Catalog discounts configured for the merchant.
pub struct DiscountGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> DiscountGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn all(&self) -> Result<Vec<DiscountResponse>, BraintreeError> {
        self.api.list(ApiRequest::get("/discounts"), "discounts").await
    }
}
