use super::{segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{CreditCardCreateRequest, CreditCardResponse, CreditCardUpdateRequest, Timestamp};
use crate::validation::{Entity, ValidatedResponse};

/// Credit cards in the vault.
pub struct CreditCardGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> CreditCardGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    pub async fn create(
        &self,
        request: &CreditCardCreateRequest,
    ) -> Result<ValidatedResponse<CreditCardResponse>, BraintreeError> {
        let body = wrap(CreditCardResponse::KEY, request)?;
        self.api
            .validated(ApiRequest::post("/payment_methods", body))
            .await
    }

    pub async fn delete(&self, token: &str) -> Result<(), BraintreeError> {
        let path = Self::path(token)?;
        self.api.void(ApiRequest::delete(path)).await
    }

    /// Cards whose expiration month falls between `start` and `end`,
    /// inclusive. Only month and year are significant.
    pub async fn expiring_between(
        &self,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<CreditCardResponse>, BraintreeError> {
        let path = format!(
            "/payment_methods/all/expiring?start={}&end={}",
            start.format("%m%Y"),
            end.format("%m%Y")
        );
        self.api.list(ApiRequest::get(path), "creditCards").await
    }

    pub async fn find(&self, token: &str) -> Result<CreditCardResponse, BraintreeError> {
        let path = Self::path(token)?;
        self.api
            .entity(ApiRequest::get(path), CreditCardResponse::KEY)
            .await
    }

    pub async fn update(
        &self,
        token: &str,
        updates: &CreditCardUpdateRequest,
    ) -> Result<ValidatedResponse<CreditCardResponse>, BraintreeError> {
        let path = Self::path(token)?;
        let body = wrap(CreditCardResponse::KEY, updates)?;
        self.api.validated(ApiRequest::put(path, Some(body))).await
    }

    fn path(token: &str) -> Result<String, BraintreeError> {
        Ok(format!("/payment_methods/credit_card/{}", segment(token)?))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use crate::testing::{fixtures, StubTransport};
    use crate::transport::Method;
    use crate::types::{CreditCardCreateRequest, CreditCardRequest};
    use crate::BraintreeGateway;

    #[tokio::test]
    async fn test_create_reports_validation_failure() {
        let transport = StubTransport::new().respond(422, fixtures::validation_failure());
        let gateway = BraintreeGateway::new(transport);
        let request = CreditCardCreateRequest {
            customer_id: "cust_1".into(),
            card: CreditCardRequest {
                number: Some("4111".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let response = gateway.credit_card().create(&request).await.unwrap();
        assert!(!response.success());
        assert!(response.entity().is_none());
        assert_eq!(response.errors()[0].attribute, "number");

        let sent = gateway.transport().last_request().unwrap();
        assert_eq!(sent.path, "/payment_methods");
        assert_eq!(sent.body.unwrap()["creditCard"]["customerId"], json!("cust_1"));
    }

    #[tokio::test]
    async fn test_find_decodes_card() {
        let transport =
            StubTransport::new().respond(200, json!({"creditCard": fixtures::credit_card()}));
        let gateway = BraintreeGateway::new(transport);

        let card = gateway.credit_card().find("card_tok").await.unwrap();
        assert_eq!(card.token(), "card_tok");
        assert_eq!(card.masked_number, "411111******1111");
        assert_eq!(
            gateway.transport().last_request().unwrap().path,
            "/payment_methods/credit_card/card_tok"
        );
    }

    #[tokio::test]
    async fn test_expiring_between_formats_month_year() {
        let transport =
            StubTransport::new().respond(200, json!({"creditCards": [fixtures::credit_card()]}));
        let gateway = BraintreeGateway::new(transport);
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2030, 12, 31, 0, 0, 0).unwrap();

        let cards = gateway.credit_card().expiring_between(start, end).await.unwrap();
        assert_eq!(cards.len(), 1);

        let sent = gateway.transport().last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.path, "/payment_methods/all/expiring?start=012030&end=122030");
    }
}
