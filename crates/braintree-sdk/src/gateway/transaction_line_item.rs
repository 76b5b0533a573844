use super::{segment, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::TransactionLineItemResponse;

pub struct TransactionLineItemGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> TransactionLineItemGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn find_all(
        &self,
        transaction_id: &str,
    ) -> Result<Vec<TransactionLineItemResponse>, BraintreeError> {
        let path = format!("/transactions/{}/line_items", segment(transaction_id)?);
        self.api.list(ApiRequest::get(path), "lineItems").await
    }
}
