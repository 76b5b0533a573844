//! Wallet and alternative instruments stored in the vault.

use serde::{Deserialize, Serialize};

use super::address::AddressResponse;
use super::card::{
    Commercial, CustomerLocation, Debit, DurbinRegulated, HealthCare, Payroll, Prepaid,
};
use super::subscription::Subscription;
use super::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidPayCard {
    pub bin: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub google_transaction_id: String,
    pub image_url: String,
    pub source_card_last4: String,
    pub source_card_type: String,
    pub source_description: String,
    pub token: String,
    pub virtual_card_last4: String,
    pub virtual_card_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidPayCardResponse {
    #[serde(flatten)]
    pub card: AndroidPayCard,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub default: bool,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayCard {
    pub bin: String,
    pub card_type: String,
    pub cardholder_name: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub image_url: String,
    pub last4: String,
    pub payment_insurance_name: String,
    pub source_description: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayCardResponse {
    #[serde(flatten)]
    pub card: ApplePayCard,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub default: bool,
    pub expired: bool,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub updated_at: Timestamp,
}

/// Issuer attributes shared by the network-tokenized wallet cards
/// (Masterpass, Samsung Pay, Visa Checkout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletCardDetails {
    pub bin: String,
    pub card_type: String,
    pub cardholder_name: String,
    pub commercial: Commercial,
    pub country_of_issuance: String,
    pub customer_location: CustomerLocation,
    pub debit: Debit,
    pub durbin_regulated: DurbinRegulated,
    pub expiration_date: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub healthcare: HealthCare,
    pub image_url: String,
    pub issuing_bank: String,
    pub last4: String,
    pub masked_number: String,
    pub payroll: Payroll,
    pub prepaid: Prepaid,
    pub product_id: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterpassCard {
    #[serde(flatten)]
    pub details: WalletCardDetails,
}

/// Masterpass responses carry no `customerId` or `default` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterpassCardResponse {
    #[serde(flatten)]
    pub card: MasterpassCard,
    pub billing_address: AddressResponse,
    pub created_at: Timestamp,
    pub expired: bool,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub unique_number_identifier: String,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPalAccount {
    pub image_url: String,
    pub payer_id: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPalAccountResponse {
    #[serde(flatten)]
    pub account: PayPalAccount,
    pub billing_agreement_id: String,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub default: bool,
    pub email: String,
    pub revoked_at: String,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamsungPayCard {
    #[serde(flatten)]
    pub details: WalletCardDetails,
    pub source_card_last4: String,
}

/// Samsung Pay responses carry no `default` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamsungPayCardResponse {
    #[serde(flatten)]
    pub card: SamsungPayCard,
    pub billing_address: AddressResponse,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub expired: bool,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub unique_number_identifier: String,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenmoAccount {
    pub image_url: String,
    pub source_description: String,
    pub token: String,
    pub username: String,
    pub venmo_user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenmoAccountResponse {
    #[serde(flatten)]
    pub account: VenmoAccount,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub default: bool,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaCheckoutCard {
    #[serde(flatten)]
    pub details: WalletCardDetails,
    pub call_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaCheckoutCardResponse {
    #[serde(flatten)]
    pub card: VisaCheckoutCard,
    pub billing_address: AddressResponse,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub default: bool,
    pub expired: bool,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    pub unique_number_identifier: String,
    pub updated_at: Timestamp,
}
