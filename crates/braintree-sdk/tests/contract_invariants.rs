//! Structural properties of the request/response contracts.
//!
//! These run against the public API only, with the sample documents from
//! `braintree::testing::fixtures` standing in for live service replies.

use braintree::testing::fixtures;
use braintree::types::{
    AddOnAddRequest, AddOnUpdateRequest, AddressRequest, CreditCardCreateRequest,
    CreditCardUpdateRequest, CustomerCreateRequest, CustomerFields, CustomerLocation,
    CustomerRequest, CustomerResponse, CustomerUpdateRequest, DiscountAddRequest,
    DiscountUpdateRequest, Dispute, DisputeStatus, EscrowStatus, FileEvidenceRequest,
    MerchantAccountCreateRequest, MerchantAccountRequest, MerchantAccountStatus,
    PaymentInstrumentType, PaymentMethodCreateRequest, PaymentMethodResponse,
    PaymentMethodUpdateRequest, SubscriptionRequest, SubscriptionResponse, SubscriptionStatus,
    TextEvidenceRequest, TransactionRequest, TransactionResponse, TransactionStatus,
};
use braintree::{
    requires_subset_of, RequestShape, Timestamped, ValidatedResponse, ValidationFailure,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

fn roundtrip<T>(sample: Value)
where
    T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let decoded: T = serde_json::from_value(sample).unwrap();
    let encoded = serde_json::to_value(&decoded).unwrap();
    let again: T = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, again);
}

#[test]
fn update_shapes_never_require_more_than_create() {
    assert!(requires_subset_of::<CreditCardUpdateRequest, CreditCardCreateRequest>());
    assert!(requires_subset_of::<PaymentMethodUpdateRequest, PaymentMethodCreateRequest>());
    assert!(requires_subset_of::<CustomerUpdateRequest, CustomerCreateRequest>());
    assert!(requires_subset_of::<MerchantAccountRequest, MerchantAccountCreateRequest>());

    // Modifier updates are keyed by the attached id, adds by the catalog id.
    assert!(!requires_subset_of::<AddOnUpdateRequest, AddOnAddRequest>());
    assert!(!requires_subset_of::<DiscountUpdateRequest, DiscountAddRequest>());

    assert!(!requires_subset_of::<MerchantAccountCreateRequest, MerchantAccountRequest>());
    assert!(
        CreditCardUpdateRequest::REQUIRED_FIELDS.len()
            < CreditCardCreateRequest::REQUIRED_FIELDS.len()
    );
}

#[test]
fn payment_method_union_picks_exactly_one_variant() {
    let samples = [
        (fixtures::android_pay_card(), PaymentInstrumentType::AndroidPayCard),
        (fixtures::apple_pay_card(), PaymentInstrumentType::ApplePayCard),
        (fixtures::credit_card_payment_method(), PaymentInstrumentType::CreditCard),
        (fixtures::masterpass_card(), PaymentInstrumentType::MasterpassCard),
        (fixtures::paypal_account(), PaymentInstrumentType::PaypalAccount),
        (fixtures::samsung_pay_card(), PaymentInstrumentType::SamsungPayCard),
        (fixtures::venmo_account(), PaymentInstrumentType::VenmoAccount),
        (fixtures::visa_checkout_card(), PaymentInstrumentType::VisaCheckoutCard),
    ];
    for (sample, expected) in samples {
        let method: PaymentMethodResponse = serde_json::from_value(sample.clone())
            .unwrap_or_else(|e| panic!("{expected:?} sample failed to decode: {e}"));
        assert_eq!(method.kind(), expected);
        assert_eq!(json!(method.token()), sample["token"]);
        assert_eq!(serde_json::to_value(expected).unwrap(), sample["paymentInstrumentType"]);

        let encoded = serde_json::to_value(&method).unwrap();
        assert_eq!(encoded["paymentInstrumentType"], sample["paymentInstrumentType"]);
        let again: PaymentMethodResponse = serde_json::from_value(encoded).unwrap();
        assert_eq!(again, method);
    }

    // Wallet card details are flattened into the instrument body.
    let visa: PaymentMethodResponse =
        serde_json::from_value(fixtures::visa_checkout_card()).unwrap();
    match visa {
        PaymentMethodResponse::VisaCheckoutCard(card) => {
            assert_eq!(card.card.call_id, "call_1");
            assert_eq!(card.card.details.last4, "1111");
            assert_eq!(card.card.details.customer_location, CustomerLocation::US);
            assert!(!card.default);
        }
        other => panic!("decoded as {:?}", other.kind()),
    }
    let masterpass: PaymentMethodResponse =
        serde_json::from_value(fixtures::masterpass_card()).unwrap();
    assert!(!masterpass.is_default());

    // The tag decides; a card body tagged as PayPal does not decode.
    let mut mislabeled = fixtures::credit_card_payment_method();
    mislabeled["paymentInstrumentType"] = json!("paypal_account");
    assert!(serde_json::from_value::<PaymentMethodResponse>(mislabeled).is_err());

    let mut no_call_id = fixtures::masterpass_card();
    no_call_id["paymentInstrumentType"] = json!("visa_checkout_card");
    assert!(serde_json::from_value::<PaymentMethodResponse>(no_call_id).is_err());

    let mut unknown = fixtures::credit_card_payment_method();
    unknown["paymentInstrumentType"] = json!("us_bank_account");
    assert!(serde_json::from_value::<PaymentMethodResponse>(unknown).is_err());

    let mut untagged = fixtures::credit_card_payment_method();
    untagged.as_object_mut().unwrap().remove("paymentInstrumentType");
    assert!(serde_json::from_value::<PaymentMethodResponse>(untagged).is_err());
}

#[test]
fn envelope_errors_follow_success_flag() {
    let success: ValidatedResponse<CustomerResponse> =
        serde_json::from_value(json!({"success": true, "customer": fixtures::customer()}))
            .unwrap();
    assert!(success.success());
    assert!(success.errors().is_empty());

    let mut failure_body = fixtures::validation_failure();
    failure_body["success"] = json!(false);
    let failure: ValidatedResponse<CustomerResponse> =
        serde_json::from_value(failure_body).unwrap();
    assert!(!failure.success());
    assert!(!failure.errors().is_empty());
    assert!(failure.entity().is_none());

    assert!(ValidationFailure::new("empty", vec![], Default::default()).is_none());
}

#[test]
fn representative_responses_roundtrip() {
    roundtrip::<TransactionResponse>(fixtures::transaction());
    roundtrip::<SubscriptionResponse>(fixtures::subscription());
    roundtrip::<CustomerResponse>(fixtures::customer());
    roundtrip::<Dispute>(fixtures::dispute());
}

#[test]
fn status_enums_are_closed() {
    for literal in [
        "authorization_expired",
        "authorized",
        "authorizing",
        "settlement_pending",
        "settlement_declined",
        "failed",
        "gateway_rejected",
        "processor_declined",
        "settled",
        "settling",
        "submitted_for_settlement",
        "voided",
    ] {
        let status: TransactionStatus = serde_json::from_value(json!(literal)).unwrap();
        assert_eq!(serde_json::to_value(status).unwrap(), json!(literal));
    }
    assert!(serde_json::from_value::<TransactionStatus>(json!("refunded")).is_err());

    for literal in ["hold_pending", "held", "release_pending", "released", "refunded"] {
        assert!(serde_json::from_value::<EscrowStatus>(json!(literal)).is_ok());
    }
    assert!(serde_json::from_value::<EscrowStatus>(json!("Held")).is_err());

    for literal in ["accepted", "disputed", "expired", "open", "lost", "won"] {
        assert!(serde_json::from_value::<DisputeStatus>(json!(literal)).is_ok());
    }
    assert!(serde_json::from_value::<DisputeStatus>(json!("closed")).is_err());

    for literal in ["Active", "Canceled", "Expired", "Past Due", "Pending"] {
        assert!(serde_json::from_value::<SubscriptionStatus>(json!(literal)).is_ok());
    }
    assert!(serde_json::from_value::<SubscriptionStatus>(json!("PastDue")).is_err());

    for literal in ["pending", "active", "suspended"] {
        assert!(serde_json::from_value::<MerchantAccountStatus>(json!(literal)).is_ok());
    }
    assert!(serde_json::from_value::<MerchantAccountStatus>(json!("closed")).is_err());
}

#[test]
fn alice_needs_only_a_first_name() {
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
    let payload = serde_json::to_value(&request).unwrap();
    assert_eq!(payload, json!({"firstName": "Alice"}));
    assert!(CustomerCreateRequest::missing_fields(&payload).is_empty());

    let response: CustomerResponse = serde_json::from_value(json!({
        "id": "cust_2",
        "firstName": "Alice",
        "createdAt": fixtures::CREATED_AT,
        "updatedAt": fixtures::CREATED_AT
    }))
    .unwrap();
    assert_eq!(response.id(), "cust_2");
    assert!(response.created_at() <= response.updated_at());

    let encoded = serde_json::to_value(&response).unwrap();
    for list in [
        "addresses",
        "androidPayCards",
        "applePayCards",
        "creditCards",
        "masterpassCards",
        "paymentMethods",
        "paypalAccounts",
        "samsungPayCards",
        "venmoAccounts",
        "visaCheckoutCards",
    ] {
        assert_eq!(encoded[list], json!([]), "{list} should be an empty list");
    }
    assert!(encoded.get("createdAt").is_some());
    assert!(encoded.get("updatedAt").is_some());
}

#[test]
fn responses_carry_ordered_timestamps() {
    let customer: CustomerResponse = serde_json::from_value(fixtures::customer()).unwrap();
    assert!(customer.created_at() < customer.updated_at());

    let transaction: TransactionResponse =
        serde_json::from_value(fixtures::transaction()).unwrap();
    assert!(transaction.created_at() < transaction.updated_at());

    for method in &customer.payment_methods {
        assert!(Timestamped::created_at(method) <= Timestamped::updated_at(method));
    }
}

#[test]
fn request_shapes_report_missing_required_fields() {
    let payload = json!({"planId": "gold", "paymentMethodToken": null});
    let mut missing = SubscriptionRequest::missing_fields(&payload);
    missing.sort_unstable();
    assert_eq!(missing, vec!["id", "merchantAccountId", "paymentMethodToken"]);

    assert_eq!(
        PaymentMethodCreateRequest::missing_fields(&json!({"paymentMethodNonce": "n"})),
        vec!["customerId"]
    );
}

/// `payload` carries exactly the declared required keys. It must decode, and
/// dropping any one of them must not.
fn required_fields_decide_decoding<T>(payload: Value)
where
    T: RequestShape + DeserializeOwned,
{
    let name = std::any::type_name::<T>();
    let keys = payload.as_object().unwrap();
    assert_eq!(keys.len(), T::REQUIRED_FIELDS.len(), "{name}");
    assert!(T::missing_fields(&payload).is_empty(), "{name}");
    if let Err(e) = serde_json::from_value::<T>(payload.clone()) {
        panic!("{name} rejected its required fields: {e}");
    }

    for field in T::REQUIRED_FIELDS {
        let mut partial = payload.clone();
        assert!(partial.as_object_mut().unwrap().remove(*field).is_some());
        assert!(
            serde_json::from_value::<T>(partial).is_err(),
            "{name} decoded without {field}"
        );
    }
}

#[test]
fn required_fields_match_what_decoding_enforces() {
    let account = fixtures::merchant_account();
    let merchant = json!({
        "funding": {"destination": "bank"},
        "id": "acme_usd",
        "individual": account["individual"],
        "status": "active",
        "masterMerchantAccountId": "acme_master"
    });
    let mut merchant_create = merchant.clone();
    merchant_create["tosAccepted"] = json!(true);

    required_fields_decide_decoding::<AddressRequest>(json!({"customerId": "cust_1"}));
    required_fields_decide_decoding::<CreditCardCreateRequest>(json!({"customerId": "cust_1"}));
    required_fields_decide_decoding::<CreditCardUpdateRequest>(json!({}));
    required_fields_decide_decoding::<CustomerCreateRequest>(json!({}));
    required_fields_decide_decoding::<CustomerUpdateRequest>(json!({}));
    required_fields_decide_decoding::<FileEvidenceRequest>(json!({"documentId": "doc_1"}));
    required_fields_decide_decoding::<TextEvidenceRequest>(json!({"content": "Shipped"}));
    required_fields_decide_decoding::<MerchantAccountRequest>(merchant);
    required_fields_decide_decoding::<MerchantAccountCreateRequest>(merchant_create);
    required_fields_decide_decoding::<AddOnAddRequest>(json!({"inheritedFromId": "extra_seat"}));
    required_fields_decide_decoding::<AddOnUpdateRequest>(json!({"existingId": "extra_seat"}));
    required_fields_decide_decoding::<DiscountAddRequest>(json!({"inheritedFromId": "loyal"}));
    required_fields_decide_decoding::<DiscountUpdateRequest>(json!({"existingId": "loyal"}));
    required_fields_decide_decoding::<PaymentMethodCreateRequest>(json!({
        "paymentMethodNonce": "nonce_1",
        "customerId": "cust_1"
    }));
    required_fields_decide_decoding::<PaymentMethodUpdateRequest>(json!({
        "paymentMethodNonce": "nonce_1"
    }));
    required_fields_decide_decoding::<SubscriptionRequest>(json!({
        "id": "sub_1",
        "merchantAccountId": "acme_usd",
        "paymentMethodToken": "card_tok",
        "planId": "gold"
    }));
    required_fields_decide_decoding::<TransactionRequest>(json!({"amount": "10.00"}));
}
