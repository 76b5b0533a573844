use super::Api;
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::AddOnResponse;

/// Catalog add-ons configured for the merchant.
pub struct AddOnGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> AddOnGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn all(&self) -> Result<Vec<AddOnResponse>, BraintreeError> {
        self.api.list(ApiRequest::get("/add_ons"), "addOns").await
    }
}
