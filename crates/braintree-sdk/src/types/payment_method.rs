use serde::{Deserialize, Serialize};

use super::address::{Address, AddressUpdate};
use super::credit_card::CreditCardResponse;
use super::transaction::PaymentInstrumentType;
use super::wallet::{
    AndroidPayCardResponse, ApplePayCardResponse, MasterpassCardResponse, PayPalAccountResponse,
    SamsungPayCardResponse, VenmoAccountResponse, VisaCheckoutCardResponse,
};
use super::Timestamp;
use crate::shape::RequestShape;
use crate::validation::Entity;

/// Fields shared by payment-method create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub payment_method_nonce: String,
}

/// Options for vaulting a payment method.
///
/// `verification_acmount` serializes as `verificationAcmount`, the key the
/// published contract declares for this shape (credit cards use
/// `verificationAmount`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodCreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_duplicate_payment_method: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_acmount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_merchant_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_card: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodCreateRequest {
    #[serde(flatten)]
    pub method: PaymentMethodRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PaymentMethodCreateOptions>,
}

impl RequestShape for PaymentMethodCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["paymentMethodNonce", "customerId"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_acmount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_merchant_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_card: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodUpdateRequest {
    #[serde(flatten)]
    pub method: PaymentMethodRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PaymentMethodUpdateOptions>,
}

impl RequestShape for PaymentMethodUpdateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["paymentMethodNonce"];
}

/// A vaulted instrument of one of the eight supported kinds.
///
/// Tagged on the wire by `paymentInstrumentType`, using the same values as
/// [`PaymentInstrumentType`]. Any other tag fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "paymentInstrumentType", rename_all = "snake_case")]
pub enum PaymentMethodResponse {
    AndroidPayCard(AndroidPayCardResponse),
    ApplePayCard(ApplePayCardResponse),
    CreditCard(CreditCardResponse),
    MasterpassCard(MasterpassCardResponse),
    #[serde(rename = "paypal_account")]
    PayPalAccount(PayPalAccountResponse),
    SamsungPayCard(SamsungPayCardResponse),
    VenmoAccount(VenmoAccountResponse),
    VisaCheckoutCard(VisaCheckoutCardResponse),
}

impl PaymentMethodResponse {
    pub fn kind(&self) -> PaymentInstrumentType {
        match self {
            PaymentMethodResponse::AndroidPayCard(_) => PaymentInstrumentType::AndroidPayCard,
            PaymentMethodResponse::ApplePayCard(_) => PaymentInstrumentType::ApplePayCard,
            PaymentMethodResponse::CreditCard(_) => PaymentInstrumentType::CreditCard,
            PaymentMethodResponse::MasterpassCard(_) => PaymentInstrumentType::MasterpassCard,
            PaymentMethodResponse::PayPalAccount(_) => PaymentInstrumentType::PaypalAccount,
            PaymentMethodResponse::SamsungPayCard(_) => PaymentInstrumentType::SamsungPayCard,
            PaymentMethodResponse::VenmoAccount(_) => PaymentInstrumentType::VenmoAccount,
            PaymentMethodResponse::VisaCheckoutCard(_) => PaymentInstrumentType::VisaCheckoutCard,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            PaymentMethodResponse::AndroidPayCard(m) => &m.card.token,
            PaymentMethodResponse::ApplePayCard(m) => &m.card.token,
            PaymentMethodResponse::CreditCard(m) => m.token(),
            PaymentMethodResponse::MasterpassCard(m) => &m.card.details.token,
            PaymentMethodResponse::PayPalAccount(m) => &m.account.token,
            PaymentMethodResponse::SamsungPayCard(m) => &m.card.details.token,
            PaymentMethodResponse::VenmoAccount(m) => &m.account.token,
            PaymentMethodResponse::VisaCheckoutCard(m) => &m.card.details.token,
        }
    }

    /// Whether this is the customer's default instrument. Masterpass and
    /// Samsung Pay responses never report one.
    pub fn is_default(&self) -> bool {
        match self {
            PaymentMethodResponse::AndroidPayCard(m) => m.default,
            PaymentMethodResponse::ApplePayCard(m) => m.default,
            PaymentMethodResponse::CreditCard(m) => m.default,
            PaymentMethodResponse::MasterpassCard(_) => false,
            PaymentMethodResponse::PayPalAccount(m) => m.default,
            PaymentMethodResponse::SamsungPayCard(_) => false,
            PaymentMethodResponse::VenmoAccount(m) => m.default,
            PaymentMethodResponse::VisaCheckoutCard(m) => m.default,
        }
    }

    pub fn created_at(&self) -> Timestamp {
        match self {
            PaymentMethodResponse::AndroidPayCard(m) => m.created_at,
            PaymentMethodResponse::ApplePayCard(m) => m.created_at,
            PaymentMethodResponse::CreditCard(m) => m.created_at,
            PaymentMethodResponse::MasterpassCard(m) => m.created_at,
            PaymentMethodResponse::PayPalAccount(m) => m.created_at,
            PaymentMethodResponse::SamsungPayCard(m) => m.created_at,
            PaymentMethodResponse::VenmoAccount(m) => m.created_at,
            PaymentMethodResponse::VisaCheckoutCard(m) => m.created_at,
        }
    }

    pub fn updated_at(&self) -> Timestamp {
        match self {
            PaymentMethodResponse::AndroidPayCard(m) => m.updated_at,
            PaymentMethodResponse::ApplePayCard(m) => m.updated_at,
            PaymentMethodResponse::CreditCard(m) => m.updated_at,
            PaymentMethodResponse::MasterpassCard(m) => m.updated_at,
            PaymentMethodResponse::PayPalAccount(m) => m.updated_at,
            PaymentMethodResponse::SamsungPayCard(m) => m.updated_at,
            PaymentMethodResponse::VenmoAccount(m) => m.updated_at,
            PaymentMethodResponse::VisaCheckoutCard(m) => m.updated_at,
        }
    }
}

impl Entity for PaymentMethodResponse {
    const KEY: &'static str = "paymentMethod";
}

/// Options for sharing a vaulted method with another merchant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_vaulting: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_billing_postal_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_after: Option<Timestamp>,
}
