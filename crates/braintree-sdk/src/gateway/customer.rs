use serde::Serialize;

use super::{search_body, segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{CustomerCreateRequest, CustomerResponse, CustomerUpdateRequest};
use crate::validation::{Entity, ValidatedResponse};

/// Customers and everything vaulted under them.
pub struct CustomerGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> CustomerGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        request: &CustomerCreateRequest,
    ) -> Result<ValidatedResponse<CustomerResponse>, BraintreeError> {
        let body = wrap(CustomerResponse::KEY, request)?;
        self.api.validated(ApiRequest::post("/customers", body)).await
    }

    pub async fn delete(&self, customer_id: &str) -> Result<(), BraintreeError> {
        let path = Self::path(customer_id)?;
        self.api.void(ApiRequest::delete(path)).await
    }

    pub async fn find(&self, customer_id: &str) -> Result<CustomerResponse, BraintreeError> {
        let path = Self::path(customer_id)?;
        self.api
            .entity(ApiRequest::get(path), CustomerResponse::KEY)
            .await
    }

    pub async fn search<P: Serialize + ?Sized>(
        &self,
        criteria: &P,
    ) -> Result<Vec<CustomerResponse>, BraintreeError> {
        let body = search_body(criteria)?;
        self.api
            .list(ApiRequest::post("/customers/advanced_search", body), "customers")
            .await
    }

    pub async fn update(
        &self,
        customer_id: &str,
        updates: &CustomerUpdateRequest,
    ) -> Result<ValidatedResponse<CustomerResponse>, BraintreeError> {
        let path = Self::path(customer_id)?;
        let body = wrap(CustomerResponse::KEY, updates)?;
        self.api.validated(ApiRequest::put(path, Some(body))).await
    }

    fn path(customer_id: &str) -> Result<String, BraintreeError> {
        Ok(format!("/customers/{}", segment(customer_id)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BraintreeError;
    use crate::testing::{fixtures, StubTransport};
    use crate::transport::Method;
    use crate::types::{CustomerCreateRequest, CustomerFields, CustomerRequest, PaymentInstrumentType};
    use crate::BraintreeGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_with_first_name_only() {
        let transport =
            StubTransport::new().respond(201, json!({"customer": {
                "id": "cust_9",
                "firstName": "Alice",
                "createdAt": fixtures::CREATED_AT,
                "updatedAt": fixtures::CREATED_AT
            }}));
        let gateway = BraintreeGateway::new(transport);
        let request = CustomerCreateRequest {
            customer: CustomerRequest {
                fields: CustomerFields {
                    first_name: Some("Alice".into()),
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };

        let response = gateway.customer().create(&request).await.unwrap();
        let customer = response.entity().unwrap();
        assert_eq!(customer.id(), "cust_9");
        assert!(customer.addresses.is_empty());
        assert!(customer.payment_methods.is_empty());

        let sent = gateway.transport().last_request().unwrap();
        assert_eq!(sent.path, "/customers");
        assert_eq!(sent.body.unwrap(), json!({"customer": {"firstName": "Alice"}}));
    }

    #[tokio::test]
    async fn test_find_decodes_mixed_payment_methods() {
        let transport =
            StubTransport::new().respond(200, json!({"customer": fixtures::customer()}));
        let gateway = BraintreeGateway::new(transport);

        let customer = gateway.customer().find("cust_1").await.unwrap();
        let kinds: Vec<_> = customer.payment_methods.iter().map(|m| m.kind()).collect();
        assert_eq!(
            kinds,
            vec![PaymentInstrumentType::CreditCard, PaymentInstrumentType::PaypalAccount]
        );
        assert_eq!(customer.default_payment_method().unwrap().token(), "card_tok");
    }

    #[tokio::test]
    async fn test_delete_and_search() {
        let transport = StubTransport::new()
            .respond_empty(200)
            .respond(200, json!({"customers": [fixtures::customer()]}));
        let gateway = BraintreeGateway::new(transport);

        gateway.customer().delete("cust_1").await.unwrap();
        let found = gateway
            .customer()
            .search(&json!({"email": {"is": "alice@example.com"}}))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].method, Method::Delete);
        assert_eq!(requests[0].path, "/customers/cust_1");
        assert_eq!(requests[1].path, "/customers/advanced_search");
    }

    #[tokio::test]
    async fn test_find_missing_customer() {
        let gateway = BraintreeGateway::new(StubTransport::new().respond_empty(404));
        let err = gateway.customer().find("nobody").await.unwrap_err();
        assert!(matches!(err, BraintreeError::NotFound));
    }
}
