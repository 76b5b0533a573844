use super::{segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{Address, AddressRequest, AddressResponse};
use crate::validation::{Entity, ValidatedResponse};

/// Addresses vaulted under a customer.
pub struct AddressGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> AddressGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        request: &AddressRequest,
    ) -> Result<ValidatedResponse<AddressResponse>, BraintreeError> {
        let path = format!("/customers/{}/addresses", segment(&request.customer_id)?);
        let body = wrap(AddressResponse::KEY, request)?;
        self.api.validated(ApiRequest::post(path, body)).await
    }

    pub async fn delete(&self, customer_id: &str, address_id: &str) -> Result<(), BraintreeError> {
        let path = Self::path(customer_id, address_id)?;
        self.api.void(ApiRequest::delete(path)).await
    }

    pub async fn find(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<AddressResponse, BraintreeError> {
        let path = Self::path(customer_id, address_id)?;
        self.api
            .entity(ApiRequest::get(path), AddressResponse::KEY)
            .await
    }

    pub async fn update(
        &self,
        customer_id: &str,
        address_id: &str,
        updates: &Address,
    ) -> Result<ValidatedResponse<AddressResponse>, BraintreeError> {
        let path = Self::path(customer_id, address_id)?;
        let body = wrap(AddressResponse::KEY, updates)?;
        self.api.validated(ApiRequest::put(path, Some(body))).await
    }

    fn path(customer_id: &str, address_id: &str) -> Result<String, BraintreeError> {
        Ok(format!(
            "/customers/{}/addresses/{}",
            segment(customer_id)?,
            segment(address_id)?
        ))
    }
}
