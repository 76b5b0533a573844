use serde::{Deserialize, Serialize};

use super::card::{Commercial, Debit, DurbinRegulated, HealthCare, Payroll, Prepaid};
use super::transaction::TransactionThreeDSecureInfo;
use crate::validation::Entity;

/// Instrument kind a nonce stands in for. Travels in PascalCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethodType {
    AndroidPayCard,
    ApplePayCard,
    CreditCard,
    MasterpassCard,
    PayPalAccount,
    UsBankAccount,
    VenmoAccount,
    VisaCheckoutCard,
    SamsungPayCard,
}

/// Issuer attributes looked up from the card's BIN.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commercial: Option<Commercial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_issuance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit: Option<Debit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durbin_regulated: Option<DurbinRegulated>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcare: Option<HealthCare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll: Option<Payroll>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prepaid: Option<Prepaid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_two: Option<String>,
}

/// A one-time reference to payment information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodNonce {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_data: Option<BinData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<NonceDetails>,
    pub nonce: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_d_secure_info: Option<TransactionThreeDSecureInfo>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PaymentMethodType>,
}

pub type PaymentMethodNonceResponse = PaymentMethodNonce;

impl Entity for PaymentMethodNonce {
    const KEY: &'static str = "paymentMethodNonce";
}
