use super::{wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{SettlementBatchSummaryRequest, SettlementBatchSummaryResponse};
use crate::validation::Entity;

pub struct SettlementBatchSummaryGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> SettlementBatchSummaryGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    /// Totals of everything settled on `request.settlement_date`.
    pub async fn generate(
        &self,
        request: &SettlementBatchSummaryRequest,
    ) -> Result<SettlementBatchSummaryResponse, BraintreeError> {
        let body = wrap(SettlementBatchSummaryResponse::KEY, request)?;
        self.api
            .entity(
                ApiRequest::post("/settlement_batch_summary", body),
                SettlementBatchSummaryResponse::KEY,
            )
            .await
    }
}
