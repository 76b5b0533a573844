//! In-memory transport for exercising gateways without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::BraintreeError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Replays scripted responses in order and records every request.
///
/// When the script runs out, `execute` fails with
/// [`BraintreeError::Unexpected`].
#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body.
    pub fn respond(self, status: u16, body: Value) -> Self {
        self.push(ApiResponse::new(status, Some(body)));
        self
    }

    /// Queue a response without a body.
    pub fn respond_empty(self, status: u16) -> Self {
        self.push(ApiResponse::new(status, None));
        self
    }

    pub fn push(&self, response: ApiResponse) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests
            .lock()
            .ok()
            .and_then(|requests| requests.last().cloned())
    }
}

impl Transport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, BraintreeError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(request);
        }
        self.responses
            .lock()
            .map_err(|_| BraintreeError::Unexpected("stub transport poisoned".to_string()))?
            .pop_front()
            .ok_or_else(|| BraintreeError::Unexpected("no scripted response left".to_string()))
    }
}

/// Sample response documents, shaped the way the service returns them.
pub mod fixtures {
    use serde_json::{json, Value};

    pub const CREATED_AT: &str = "2024-03-01T12:00:00Z";
    pub const UPDATED_AT: &str = "2024-03-02T08:30:00Z";

    pub fn address() -> Value {
        json!({
            "id": "addr_1",
            "customerId": "cust_1",
            "firstName": "Alice",
            "lastName": "Smith",
            "streetAddress": "1 E Main St",
            "locality": "Chicago",
            "region": "IL",
            "postalCode": "60622",
            "countryCodeAlpha2": "US",
            "createdAt": CREATED_AT,
            "updatedAt": UPDATED_AT
        })
    }

    fn risk_data() -> Value {
        json!({
            "decision": "Approve",
            "deviceDataCaptured": true,
            "fraudServiceProvider": "kount",
            "id": "risk_1"
        })
    }

    /// Issuer attributes of a vaulted Visa.
    pub fn card_core() -> Value {
        json!({
            "bin": "411111",
            "cardType": "Visa",
            "cardholderName": "Alice Smith",
            "commercial": "Unknown",
            "countryOfIssuance": "USA",
            "customerLocation": "us",
            "debit": "No",
            "durbinRegulated": "No",
            "expirationMonth": "12",
            "expirationYear": "2030",
            "healthcare": "No",
            "issuingBank": "Chase",
            "last4": "1111",
            "payroll": "No",
            "prepaid": "No",
            "productId": "A",
            "token": "card_tok",
            "uniqueNumberIdentifier": "8d1a6b0c"
        })
    }

    pub fn verification() -> Value {
        json!({
            "amount": "1.00",
            "avsScreetAddressResponseCode": "M",
            "createdAt": CREATED_AT,
            "currencyIsoCode": "USD",
            "cvvResponseCode": "M",
            "id": "ver_1",
            "merchantAccountId": "acme_usd",
            "processorResponseCode": "1000",
            "processorResponseText": "Approved",
            "processorResponseType": "approved",
            "riskData": risk_data(),
            "status": "verified"
        })
    }

    pub fn credit_card() -> Value {
        let mut card = card_core();
        let extra = json!({
            "billingAddress": address(),
            "createdAt": CREATED_AT,
            "customerId": "cust_1",
            "default": true,
            "expired": false,
            "imageUrl": "https://assets.braintreegateway.com/payment_method_logo/visa.png",
            "maskedNumber": "411111******1111",
            "subscriptions": [],
            "updatedAt": UPDATED_AT,
            "verification": verification()
        });
        merge(&mut card, extra);
        card
    }

    /// A credit card as it appears in a payment-method list.
    pub fn credit_card_payment_method() -> Value {
        let mut card = credit_card();
        merge(&mut card, json!({"paymentInstrumentType": "credit_card"}));
        card
    }

    pub fn paypal_account() -> Value {
        json!({
            "paymentInstrumentType": "paypal_account",
            "billingAgreementId": "B-123",
            "createdAt": CREATED_AT,
            "customerId": "cust_1",
            "default": false,
            "email": "alice@example.com",
            "imageUrl": "https://assets.braintreegateway.com/payment_method_logo/paypal.png",
            "payerId": "PAYER1",
            "revokedAt": "",
            "subscriptions": [],
            "token": "pp_tok",
            "updatedAt": UPDATED_AT
        })
    }

    pub fn android_pay_card() -> Value {
        json!({
            "paymentInstrumentType": "android_pay_card",
            "bin": "401288",
            "createdAt": CREATED_AT,
            "customerId": "cust_1",
            "default": false,
            "expirationMonth": "12",
            "expirationYear": "2030",
            "googleTransactionId": "gtx_1",
            "imageUrl": "https://assets.braintreegateway.com/payment_method_logo/android_pay_card.png",
            "sourceCardLast4": "1881",
            "sourceCardType": "Visa",
            "sourceDescription": "Visa 1881",
            "subscriptions": [],
            "token": "gp_tok",
            "updatedAt": UPDATED_AT,
            "virtualCardLast4": "1111",
            "virtualCardType": "Visa"
        })
    }

    pub fn apple_pay_card() -> Value {
        json!({
            "paymentInstrumentType": "apple_pay_card",
            "bin": "401288",
            "cardType": "Apple Pay - Visa",
            "cardholderName": "Alice Smith",
            "createdAt": CREATED_AT,
            "customerId": "cust_1",
            "default": false,
            "expirationMonth": "12",
            "expirationYear": "2030",
            "expired": false,
            "imageUrl": "https://assets.braintreegateway.com/payment_method_logo/apple_pay.png",
            "last4": "1881",
            "paymentInsuranceName": "",
            "sourceDescription": "Visa 1881",
            "subscriptions": [],
            "token": "ap_tok",
            "updatedAt": UPDATED_AT
        })
    }

    /// Issuer attributes shared by the tokenized wallet cards.
    fn wallet_card(kind: &str, token: &str) -> Value {
        json!({
            "paymentInstrumentType": kind,
            "bin": "411111",
            "billingAddress": address(),
            "cardType": "Visa",
            "cardholderName": "Alice Smith",
            "commercial": "Unknown",
            "countryOfIssuance": "USA",
            "createdAt": CREATED_AT,
            "customerLocation": "us",
            "debit": "No",
            "durbinRegulated": "No",
            "expirationDate": "12/2030",
            "expirationMonth": "12",
            "expirationYear": "2030",
            "expired": false,
            "healthcare": "Unknown",
            "imageUrl": "https://assets.braintreegateway.com/payment_method_logo/visa.png",
            "issuingBank": "Chase",
            "last4": "1111",
            "maskedNumber": "411111******1111",
            "payroll": "No",
            "prepaid": "No",
            "productId": "A",
            "subscriptions": [],
            "token": token,
            "uniqueNumberIdentifier": "9e2b7c1d",
            "updatedAt": UPDATED_AT
        })
    }

    pub fn masterpass_card() -> Value {
        wallet_card("masterpass_card", "mp_tok")
    }

    pub fn samsung_pay_card() -> Value {
        let mut card = wallet_card("samsung_pay_card", "sp_tok");
        merge(
            &mut card,
            json!({"customerId": "cust_1", "sourceCardLast4": "1881"}),
        );
        card
    }

    pub fn venmo_account() -> Value {
        json!({
            "paymentInstrumentType": "venmo_account",
            "createdAt": CREATED_AT,
            "customerId": "cust_1",
            "default": false,
            "imageUrl": "https://assets.braintreegateway.com/payment_method_logo/venmo.png",
            "sourceDescription": "Venmo Account: alice",
            "subscriptions": [],
            "token": "vm_tok",
            "updatedAt": UPDATED_AT,
            "username": "alice",
            "venmoUserId": "venmo_1"
        })
    }

    pub fn visa_checkout_card() -> Value {
        let mut card = wallet_card("visa_checkout_card", "vc_tok");
        merge(
            &mut card,
            json!({"callId": "call_1", "customerId": "cust_1", "default": false}),
        );
        card
    }

    pub fn customer() -> Value {
        json!({
            "id": "cust_1",
            "firstName": "Alice",
            "lastName": "Smith",
            "email": "alice@example.com",
            "addresses": [address()],
            "creditCards": [credit_card()],
            "paymentMethods": [credit_card_payment_method(), paypal_account()],
            "createdAt": CREATED_AT,
            "updatedAt": UPDATED_AT
        })
    }

    pub fn transaction() -> Value {
        let mut details = card_core();
        merge(&mut details, json!({"maskedNumber": "411111******1111"}));
        json!({
            "id": "txn_1",
            "type": "sale",
            "amount": "10.00",
            "additionalProccessorResponse": "",
            "avsErrorResponseCode": "",
            "avsPostalCodeResponseCode": "M",
            "avsStreetAddressResponseCode": "M",
            "billing": {"id": "addr_1", "postalCode": "60622"},
            "creditCard": details,
            "currencyIsoCode": "USD",
            "customer": {"id": "cust_1", "firstName": "Alice"},
            "cvvResponseCode": "M",
            "discountAmount": "0.00",
            "lineItems": [],
            "merchantAccountId": "acme_usd",
            "networkTransactionId": "020240301120000",
            "paymentInstrumentType": "credit_card",
            "processorAuthorizationCode": "A1B2C3",
            "processorResponseCode": "1000",
            "processorResponseText": "Approved",
            "processorResponseType": "approved",
            "processorSettlementResponseCode": "",
            "processorSettlementResponseText": "",
            "riskData": risk_data(),
            "shipping": {},
            "status": "submitted_for_settlement",
            "statusHistory": [
                {
                    "amount": "10.00",
                    "status": "authorized",
                    "timestamp": CREATED_AT,
                    "transactionsource": "api",
                    "user": "api_user"
                },
                {
                    "amount": "10.00",
                    "status": "submitted_for_settlement",
                    "timestamp": CREATED_AT,
                    "transactionsource": "api",
                    "user": "api_user"
                }
            ],
            "createdAt": CREATED_AT,
            "updatedAt": UPDATED_AT
        })
    }

    pub fn subscription() -> Value {
        json!({
            "id": "sub_1",
            "merchantAccountId": "acme_usd",
            "paymentMethodToken": "card_tok",
            "planId": "gold",
            "price": "9.99",
            "balance": "0.00",
            "billingPeriodStartDate": CREATED_AT,
            "billingPeriodEndDate": "2024-03-31T12:00:00Z",
            "currentBillingCycle": 1,
            "daysPastDue": 0,
            "failureCount": 0,
            "nextBillAmount": "9.99",
            "nextBillingDate": "2024-04-01T12:00:00Z",
            "nextBillingPeriodAmount": "9.99",
            "paidThroughDate": "2024-03-31T12:00:00Z",
            "status": "Active",
            "statusHistory": [
                {"balance": "0.00", "price": "9.99", "status": "Active", "subscriptionSource": "api"}
            ],
            "transactions": [{"amount": "9.99", "orderId": "ord_1"}],
            "createdAt": CREATED_AT,
            "updatedAt": UPDATED_AT
        })
    }

    pub fn evidence() -> Value {
        json!({
            "comment": "tracking 1Z999",
            "createdAt": CREATED_AT,
            "id": "ev_1",
            "sendToProcessorAt": UPDATED_AT,
            "url": ""
        })
    }

    pub fn dispute() -> Value {
        json!({
            "amountDisputed": "10.00",
            "amountWon": "0.00",
            "caseNumber": "CB123456",
            "createdAt": CREATED_AT,
            "currencyIsoCode": "USD",
            "evidence": [evidence()],
            "id": "dsp_1",
            "kind": "chargeback",
            "merchantAccountId": "acme_usd",
            "originalDisputeId": "",
            "processorComments": "",
            "reason": "fraud",
            "reasonCode": "83",
            "reasonDescription": "Fraud - card absent environment",
            "receivedDate": CREATED_AT,
            "referenceNumber": "ref_1",
            "replyByDate": "2024-03-15T00:00:00Z",
            "status": "open",
            "statusHistory": [
                {
                    "disbursementDate": CREATED_AT,
                    "effectiveDate": CREATED_AT,
                    "status": "open",
                    "timestamp": CREATED_AT
                }
            ],
            "transaction": {
                "amount": "10.00",
                "createdAt": CREATED_AT,
                "id": "txn_1",
                "orderId": "ord_1",
                "paymentInstrumentSubtype": "Visa",
                "purchaseOrderNumber": ""
            },
            "updatedAt": UPDATED_AT
        })
    }

    pub fn merchant_account() -> Value {
        json!({
            "id": "acme_usd",
            "currencyIsoCode": "USD",
            "default": true,
            "status": "active",
            "funding": {"destination": "bank", "accountNumberLast4": "1234"},
            "individual": {
                "addressDetails": {
                    "locality": "Chicago",
                    "postalCode": "60622",
                    "region": "IL",
                    "streetAddress": "1 E Main St"
                },
                "dateOfBirth": "1981-11-19",
                "email": "owner@example.com",
                "firstName": "Olive",
                "lastName": "Owner"
            }
        })
    }

    pub fn payment_method_nonce() -> Value {
        json!({
            "nonce": "nonce_1",
            "default": true,
            "type": "CreditCard",
            "details": {"bin": "411111", "cardType": "Visa", "lastTwo": "11"}
        })
    }

    pub fn add_on() -> Value {
        json!({"id": "extra_seat", "name": "Extra seat", "amount": "2.00", "neverExpires": true})
    }

    pub fn discount() -> Value {
        json!({"id": "loyal", "name": "Loyalty", "amount": "1.00", "numberOfBillingCycles": 3})
    }

    pub fn plan() -> Value {
        json!({
            "addOns": [add_on()],
            "billingDayOfMonth": 1,
            "billingFrequency": 1,
            "createdAt": CREATED_AT,
            "currenyIsoCode": "USD",
            "discounts": [discount()],
            "id": "gold",
            "name": "Gold",
            "numberOfBillingCycles": 12,
            "price": "9.99",
            "trialDuration": 14,
            "trialDurationUnit": "day",
            "trialPeriod": true,
            "updatedAt": UPDATED_AT
        })
    }

    /// A 422 body rejecting a card number.
    pub fn validation_failure() -> Value {
        json!({
            "message": "Credit card number is invalid.",
            "errors": [
                {"attribute": "number", "code": "81715", "message": "Credit card number is invalid."}
            ],
            "params": {"creditCard": {"expirationMonth": "12"}}
        })
    }

    fn merge(target: &mut Value, extra: Value) {
        if let (Value::Object(target), Value::Object(extra)) = (target, extra) {
            target.extend(extra);
        }
    }
}
