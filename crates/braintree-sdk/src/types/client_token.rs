use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTokenOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_duplicate_payment_method: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_card: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ClientTokenOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ClientTokenRequest {
    /// Card options are only meaningful for a known customer.
    pub fn options_without_customer(&self) -> bool {
        self.options.is_some() && self.customer_id.is_none()
    }
}

/// Decoded contents of a generated client token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTokenPayload {
    pub version: u32,
    pub authorization_fingerprint: String,
    pub config_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_api_url: Option<String>,
}
