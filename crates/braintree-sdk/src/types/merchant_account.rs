use serde::{Deserialize, Serialize};

use crate::shape::RequestShape;
use crate::validation::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantAccountStatus {
    Pending,
    Active,
    Suspended,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAddressDetails {
    pub locality: String,
    pub postal_code: String,
    pub region: String,
    pub street_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantBusiness {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<MerchantAddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_details: Option<MerchantAddressDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dba_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

/// Where settled funds are paid out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantFunding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number_last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<String>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantIndividual {
    pub address_details: MerchantAddressDetails,
    pub date_of_birth: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn_last4: Option<String>,
}

impl std::fmt::Debug for MerchantIndividual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerchantIndividual")
            .field("address_details", &self.address_details)
            .field("date_of_birth", &self.date_of_birth)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .field("ssn", &self.ssn.as_ref().map(|_| "[REDACTED]"))
            .field("ssn_last4", &self.ssn_last4)
            .finish()
    }
}

/// A sub-merchant account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<MerchantBusiness>,
    pub funding: MerchantFunding,
    pub id: String,
    pub individual: MerchantIndividual,
    pub status: MerchantAccountStatus,
}

/// Body of `MerchantAccountGateway::update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAccountRequest {
    #[serde(flatten)]
    pub account: MerchantAccount,
    pub master_merchant_account_id: String,
}

impl RequestShape for MerchantAccountRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "funding",
        "id",
        "individual",
        "status",
        "masterMerchantAccountId",
    ];
}

/// Body of `MerchantAccountGateway::create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAccountCreateRequest {
    #[serde(flatten)]
    pub request: MerchantAccountRequest,
    pub tos_accepted: bool,
}

impl RequestShape for MerchantAccountCreateRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "funding",
        "id",
        "individual",
        "status",
        "masterMerchantAccountId",
        "tosAccepted",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAccountResponse {
    #[serde(flatten)]
    pub account: MerchantAccount,
    pub currency_iso_code: String,
    pub default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_merchant_account: Option<MerchantAccount>,
}

impl Entity for MerchantAccountResponse {
    const KEY: &'static str = "merchantAccount";
}

/// Body of `MerchantAccountGateway::create_for_currency`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForCurrencyRequest {
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}
