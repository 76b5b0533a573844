use serde::Serialize;

use super::{search_body, segment, wrap, Api};
use crate::error::BraintreeError;
use crate::transport::{ApiRequest, Transport};
use crate::types::{CloneTransactionRequest, TransactionRequest, TransactionResponse};
use crate::validation::{Entity, ValidatedResponse};

#[derive(Serialize)]
struct Sale<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    request: &'a TransactionRequest,
}

#[derive(Serialize)]
struct Amount<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<&'a str>,
}

/// Sales and everything done to a transaction afterwards.
pub struct TransactionGateway<'a, T> {
    api: Api<'a, T>,
}

impl<'a, T: Transport> TransactionGateway<'a, T> {
    pub(crate) fn new(api: Api<'a, T>) -> Self {
        Self { api }
    }

    /// Withdraw a pending escrow release.
    pub async fn cancel_release(&self, transaction_id: &str) -> Result<(), BraintreeError> {
        let path = Self::action(transaction_id, "cancel_release")?;
        self.api.void(ApiRequest::put(path, None)).await
    }

    pub async fn clone_transaction(
        &self,
        transaction_id: &str,
        request: &CloneTransactionRequest,
    ) -> Result<(), BraintreeError> {
        let path = Self::action(transaction_id, "clone")?;
        let body = wrap("transactionClone", request)?;
        self.api.void(ApiRequest::post(path, body)).await
    }

    pub async fn find(&self, transaction_id: &str) -> Result<TransactionResponse, BraintreeError> {
        let path = format!("/transactions/{}", segment(transaction_id)?);
        self.api
            .entity(ApiRequest::get(path), TransactionResponse::KEY)
            .await
    }

    pub async fn hold_in_escrow(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionResponse, BraintreeError> {
        let path = Self::action(transaction_id, "hold_in_escrow")?;
        self.api
            .entity(ApiRequest::put(path, None), TransactionResponse::KEY)
            .await
    }

    /// Refund a settled transaction, in full when `amount` is `None`.
    pub async fn refund(
        &self,
        transaction_id: &str,
        amount: Option<&str>,
    ) -> Result<ValidatedResponse<TransactionResponse>, BraintreeError> {
        let path = Self::action(transaction_id, "refund")?;
        let body = wrap(TransactionResponse::KEY, &Amount { amount })?;
        self.api.validated(ApiRequest::post(path, body)).await
    }

    pub async fn release_from_escrow(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionResponse, BraintreeError> {
        let path = Self::action(transaction_id, "release_from_escrow")?;
        self.api
            .entity(ApiRequest::put(path, None), TransactionResponse::KEY)
            .await
    }

    pub async fn sale(
        &self,
        request: &TransactionRequest,
    ) -> Result<ValidatedResponse<TransactionResponse>, BraintreeError> {
        let body = wrap(
            TransactionResponse::KEY,
            &Sale {
                kind: "sale",
                request,
            },
        )?;
        self.api
            .validated(ApiRequest::post("/transactions", body))
            .await
    }

    pub async fn search<P: Serialize + ?Sized>(
        &self,
        criteria: &P,
    ) -> Result<Vec<TransactionResponse>, BraintreeError> {
        let body = search_body(criteria)?;
        self.api
            .list(
                ApiRequest::post("/transactions/advanced_search", body),
                "transactions",
            )
            .await
    }

    /// Settle part of an authorization. May be called more than once.
    pub async fn submit_for_partial_settlement(
        &self,
        authorized_transaction_id: &str,
        amount: &str,
    ) -> Result<ValidatedResponse<TransactionResponse>, BraintreeError> {
        let path = Self::action(authorized_transaction_id, "submit_for_partial_settlement")?;
        let body = wrap(TransactionResponse::KEY, &Amount { amount: Some(amount) })?;
        self.api.validated(ApiRequest::post(path, body)).await
    }

    pub async fn submit_for_settlement(
        &self,
        transaction_id: &str,
        amount: Option<&str>,
    ) -> Result<ValidatedResponse<TransactionResponse>, BraintreeError> {
        let path = Self::action(transaction_id, "submit_for_settlement")?;
        let body = wrap(TransactionResponse::KEY, &Amount { amount })?;
        self.api.validated(ApiRequest::put(path, Some(body))).await
    }

    pub async fn void(
        &self,
        transaction_id: &str,
    ) -> Result<ValidatedResponse<TransactionResponse>, BraintreeError> {
        let path = Self::action(transaction_id, "void")?;
        self.api.validated(ApiRequest::put(path, None)).await
    }

    fn action(transaction_id: &str, action: &str) -> Result<String, BraintreeError> {
        Ok(format!("/transactions/{}/{action}", segment(transaction_id)?))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BraintreeError;
    use crate::testing::{fixtures, StubTransport};
    use crate::transport::Method;
    use crate::types::{
        CloneTransactionOptions, CloneTransactionRequest, Transaction, TransactionInstrument,
        TransactionOptions, TransactionRequest, TransactionStatus,
    };
    use crate::BraintreeGateway;
    use serde_json::json;

    #[tokio::test]
    async fn test_sale_adds_type() {
        let transport =
            StubTransport::new().respond(201, json!({"transaction": fixtures::transaction()}));
        let gateway = BraintreeGateway::new(transport);
        let request = TransactionRequest {
            transaction: Transaction {
                amount: "10.00".into(),
                ..Default::default()
            },
            payment_method_nonce: Some("fake-valid-nonce".into()),
            options: Some(TransactionOptions {
                submit_for_settlement: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let response = gateway.transaction().sale(&request).await.unwrap();
        let transaction = response.entity().unwrap();
        assert_eq!(transaction.status, TransactionStatus::SubmittedForSettlement);
        assert!(matches!(
            transaction.instrument(),
            Some(TransactionInstrument::CreditCard(card)) if card.card.last4 == "1111"
        ));

        let sent = gateway.transport().last_request().unwrap();
        assert_eq!(sent.path, "/transactions");
        assert_eq!(
            sent.body.unwrap(),
            json!({"transaction": {
                "type": "sale",
                "amount": "10.00",
                "lineItems": [],
                "paymentMethodNonce": "fake-valid-nonce",
                "options": {"submitForSettlement": true}
            }})
        );
    }

    #[tokio::test]
    async fn test_sale_declined_by_validation() {
        let transport = StubTransport::new().respond(422, fixtures::validation_failure());
        let gateway = BraintreeGateway::new(transport);

        let response = gateway
            .transaction()
            .sale(&TransactionRequest::default())
            .await
            .unwrap();
        assert!(!response.success());
        assert!(!response.errors().is_empty());
        assert!(response.params().unwrap().contains_key("creditCard"));
    }

    #[tokio::test]
    async fn test_settlement_actions() {
        let transport = StubTransport::new()
            .respond(200, json!({"transaction": fixtures::transaction()}))
            .respond(200, json!({"transaction": fixtures::transaction()}))
            .respond(200, json!({"transaction": fixtures::transaction()}))
            .respond(200, json!({"transaction": fixtures::transaction()}));
        let gateway = BraintreeGateway::new(transport);
        let transactions = gateway.transaction();

        transactions.submit_for_settlement("txn_1", None).await.unwrap();
        transactions
            .submit_for_partial_settlement("txn_1", "4.00")
            .await
            .unwrap();
        transactions.refund("txn_1", Some("2.00")).await.unwrap();
        transactions.void("txn_1").await.unwrap();

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].method, Method::Put);
        assert_eq!(requests[0].path, "/transactions/txn_1/submit_for_settlement");
        assert_eq!(requests[0].body.clone().unwrap(), json!({"transaction": {}}));
        assert_eq!(requests[1].method, Method::Post);
        assert_eq!(
            requests[1].body.clone().unwrap(),
            json!({"transaction": {"amount": "4.00"}})
        );
        assert_eq!(requests[2].path, "/transactions/txn_1/refund");
        assert_eq!(requests[3].path, "/transactions/txn_1/void");
    }

    #[tokio::test]
    async fn test_escrow_actions() {
        let transport = StubTransport::new()
            .respond(200, json!({"transaction": fixtures::transaction()}))
            .respond(200, json!({"transaction": fixtures::transaction()}))
            .respond_empty(200);
        let gateway = BraintreeGateway::new(transport);

        gateway.transaction().hold_in_escrow("txn_1").await.unwrap();
        gateway.transaction().release_from_escrow("txn_1").await.unwrap();
        gateway.transaction().cancel_release("txn_1").await.unwrap();

        let paths: Vec<_> = gateway
            .transport()
            .requests()
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "/transactions/txn_1/hold_in_escrow",
                "/transactions/txn_1/release_from_escrow",
                "/transactions/txn_1/cancel_release",
            ]
        );
    }

    #[tokio::test]
    async fn test_hold_in_escrow_rejection_is_unexpected() {
        let transport = StubTransport::new().respond(422, fixtures::validation_failure());
        let gateway = BraintreeGateway::new(transport);
        let err = gateway.transaction().hold_in_escrow("txn_1").await.unwrap_err();
        assert!(matches!(err, BraintreeError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_clone_find_and_search() {
        let transport = StubTransport::new()
            .respond(201, json!({"transaction": fixtures::transaction()}))
            .respond(200, json!({"transaction": fixtures::transaction()}))
            .respond(200, json!({"transactions": [fixtures::transaction()]}));
        let gateway = BraintreeGateway::new(transport);

        let clone = CloneTransactionRequest {
            amount: "5.00".into(),
            options: CloneTransactionOptions {
                submit_for_settlement: false,
            },
        };
        gateway.transaction().clone_transaction("txn_1", &clone).await.unwrap();
        let found = gateway.transaction().find("txn_1").await.unwrap();
        assert_eq!(found.status_history.len(), 2);
        let results = gateway
            .transaction()
            .search(&json!({"amount": {"min": "1.00"}}))
            .await
            .unwrap();
        assert_eq!(results.len(), 1);

        let requests = gateway.transport().requests();
        assert_eq!(requests[0].path, "/transactions/txn_1/clone");
        assert_eq!(
            requests[0].body.clone().unwrap(),
            json!({"transactionClone": {"amount": "5.00", "options": {"submitForSettlement": false}}})
        );
        assert_eq!(requests[1].path, "/transactions/txn_1");
        assert_eq!(requests[2].path, "/transactions/advanced_search");
    }
}
