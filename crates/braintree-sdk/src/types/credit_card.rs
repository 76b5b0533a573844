use serde::{Deserialize, Serialize};

use super::address::{Address, AddressResponse, AddressUpdate};
use super::card::{
    Commercial, CustomerLocation, DurbinRegulated, HealthCare, Payroll, Prepaid,
};
use super::subscription::SubscriptionResponse;
use super::verification::CreditCardVerificationResponse;
use super::Timestamp;
use crate::shape::RequestShape;
use crate::validation::Entity;

/// Cardholder-visible card fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardRequest {
    #[serde(flatten)]
    pub card: CreditCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardCreateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_duplicate_payment_method: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_merchant_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_card: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardCreateRequest {
    #[serde(flatten)]
    pub card: CreditCardRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_id: Option<String>,
    pub customer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<CreditCardCreateOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl RequestShape for CreditCardCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["customerId"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardUpdateRequest {
    #[serde(flatten)]
    pub card: CreditCardRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressUpdate>,
}

impl RequestShape for CreditCardUpdateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
}

/// Card details as reported by the issuer lookup.
///
/// `debit` is a plain string here, unlike every other card attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardCoreResponse {
    #[serde(flatten)]
    pub card: CreditCard,
    pub bin: String,
    pub card_type: String,
    pub commercial: Commercial,
    pub country_of_issuance: String,
    pub customer_location: CustomerLocation,
    pub debit: String,
    pub durbin_regulated: DurbinRegulated,
    pub healthcare: HealthCare,
    pub issuing_bank: String,
    pub last4: String,
    pub payroll: Payroll,
    pub prepaid: Prepaid,
    pub product_id: String,
    pub token: String,
    pub unique_number_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardResponse {
    #[serde(flatten)]
    pub core: CreditCardCoreResponse,
    pub billing_address: AddressResponse,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub default: bool,
    pub expired: bool,
    pub image_url: String,
    pub masked_number: String,
    #[serde(default)]
    pub subscriptions: Vec<SubscriptionResponse>,
    pub updated_at: Timestamp,
    pub verification: CreditCardVerificationResponse,
}

impl CreditCardResponse {
    pub fn token(&self) -> &str {
        &self.core.token
    }
}

impl Entity for CreditCardResponse {
    const KEY: &'static str = "creditCard";
}
