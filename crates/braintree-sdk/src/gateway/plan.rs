use super::Api;
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::PlanResponse;

pub struct PlanGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> PlanGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn all(&self) -> Result<Vec<PlanResponse>, BraintreeError> {
        self.api.list(ApiRequest::get("/plans"), "plans").await
    }
}
