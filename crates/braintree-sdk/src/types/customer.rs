use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::address::AddressResponse;
use super::credit_card::{CreditCardCreateRequest, CreditCardResponse, CreditCardUpdateRequest};
use super::payment_method::PaymentMethodResponse;
use super::wallet::{
    AndroidPayCardResponse, ApplePayCardResponse, MasterpassCardResponse, PayPalAccountResponse,
    SamsungPayCardResponse, VenmoAccountResponse, VisaCheckoutCardResponse,
};
use super::Timestamp;
use crate::shape::RequestShape;
use crate::validation::Entity;

/// Contact details shared by every customer record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A vaulted customer as embedded in other records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(flatten)]
    pub fields: CustomerFields,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRiskData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_browser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
}

/// Fields common to customer create and update bodies.
///
/// `id` is optional here: on create the service assigns one when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[serde(flatten)]
    pub fields: CustomerFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_data: Option<CustomerRiskData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreateRequest {
    #[serde(flatten)]
    pub customer: CustomerRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCardCreateRequest>,
}

impl RequestShape for CustomerCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateRequest {
    #[serde(flatten)]
    pub customer: CustomerRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCardUpdateRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_payment_method_token: Option<String>,
}

impl RequestShape for CustomerUpdateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
}

/// A customer with every vaulted instrument attached.
///
/// The instrument lists are always present on the wire; a customer with
/// nothing vaulted decodes with empty lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(default)]
    pub addresses: Vec<AddressResponse>,
    #[serde(default)]
    pub android_pay_cards: Vec<AndroidPayCardResponse>,
    #[serde(default)]
    pub apple_pay_cards: Vec<ApplePayCardResponse>,
    #[serde(default)]
    pub credit_cards: Vec<CreditCardResponse>,
    #[serde(default)]
    pub masterpass_cards: Vec<MasterpassCardResponse>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodResponse>,
    #[serde(default)]
    pub paypal_accounts: Vec<PayPalAccountResponse>,
    #[serde(default)]
    pub samsung_pay_cards: Vec<SamsungPayCardResponse>,
    #[serde(default)]
    pub venmo_accounts: Vec<VenmoAccountResponse>,
    #[serde(default)]
    pub visa_checkout_cards: Vec<VisaCheckoutCardResponse>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomerResponse {
    pub fn id(&self) -> &str {
        &self.customer.id
    }

    /// The instrument flagged as default, if any.
    pub fn default_payment_method(&self) -> Option<&PaymentMethodResponse> {
        self.payment_methods.iter().find(|m| m.is_default())
    }
}

impl Entity for CustomerResponse {
    const KEY: &'static str = "customer";
}
