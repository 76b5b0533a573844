use super::{segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{
    CreateForCurrencyRequest, MerchantAccountCreateRequest, MerchantAccountRequest,
    MerchantAccountResponse,
};
use crate::validation::{Entity, ValidatedResponse};

/// Sub-merchant and per-currency merchant accounts.
pub struct MerchantAccountGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> MerchantAccountGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn all(&self) -> Result<Vec<MerchantAccountResponse>, BraintreeError> {
        self.api
            .list(ApiRequest::get("/merchant_accounts"), "merchantAccounts")
            .await
    }

    pub async fn create(
        &self,
        request: &MerchantAccountCreateRequest,
    ) -> Result<ValidatedResponse<MerchantAccountResponse>, BraintreeError> {
        let body = wrap(MerchantAccountResponse::KEY, request)?;
        self.api
            .validated(ApiRequest::post("/merchant_accounts/create_via_api", body))
            .await
    }

    /// Open an account settling in `currency`, optionally with a chosen id.
    pub async fn create_for_currency(
        &self,
        currency: &str,
        id: Option<&str>,
    ) -> Result<ValidatedResponse<MerchantAccountResponse>, BraintreeError> {
        let request = CreateForCurrencyRequest {
            currency: currency.to_string(),
            id: id.map(str::to_string),
        };
        let body = wrap(MerchantAccountResponse::KEY, &request)?;
        self.api
            .validated(ApiRequest::post("/merchant_accounts/create_for_currency", body))
            .await
    }

    pub async fn update(
        &self,
        merchant_account_id: &str,
        updates: &MerchantAccountRequest,
    ) -> Result<ValidatedResponse<MerchantAccountResponse>, BraintreeError> {
        let path = format!("{}/update_via_api", Self::path(merchant_account_id)?);
        let body = wrap(MerchantAccountResponse::KEY, updates)?;
        self.api.validated(ApiRequest::put(path, Some(body))).await
    }

    pub async fn find(
        &self,
        merchant_account_id: &str,
    ) -> Result<MerchantAccountResponse, BraintreeError> {
        let path = Self::path(merchant_account_id)?;
        self.api
            .entity(ApiRequest::get(path), MerchantAccountResponse::KEY)
            .await
    }

    fn path(merchant_account_id: &str) -> Result<String, BraintreeError> {
        Ok(format!("/merchant_accounts/{}", segment(merchant_account_id)?))
    }
}
