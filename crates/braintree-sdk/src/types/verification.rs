use serde::{Deserialize, Serialize};

use super::address::BillingAddress;
use super::credit_card::CreditCardCoreResponse;
use super::transaction::TransactionRiskData;
use super::Timestamp;
use crate::validation::Entity;

/// Result of a card verification run at vault time.
///
/// `avs_screet_address_response_code` keeps the declared wire key
/// `avsScreetAddressResponseCode` as published by the vendor contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardVerification {
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_error_response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_postal_code_response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_screet_address_response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCardCoreResponse>,
    pub created_at: Timestamp,
    pub currency_iso_code: String,
    pub cvv_response_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_rejection_reason: Option<String>,
    pub id: String,
    pub merchant_account_id: String,
    pub processor_response_code: String,
    pub processor_response_text: String,
    pub processor_response_type: String,
    pub risk_data: TransactionRiskData,
    pub status: String,
}

pub type CreditCardVerificationResponse = CreditCardVerification;

impl Entity for CreditCardVerification {
    const KEY: &'static str = "verification";
}
