use serde::{Deserialize, Serialize};

use super::Timestamp;
use crate::shape::RequestShape;
use crate::validation::Entity;

/// Postal fields accepted wherever a billing address is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
}

/// A billing address plus ISO country codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(flatten)]
    pub billing: BillingAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_alpha2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_alpha3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code_numeric: Option<String>,
}

/// Body of `AddressGateway::create`. Addresses are always customer-scoped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[serde(flatten)]
    pub address: Address,
    pub customer_id: String,
}

impl RequestShape for AddressRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["customerId"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    #[serde(flatten)]
    pub address: Address,
    pub created_at: Timestamp,
    pub customer_id: String,
    pub id: String,
    pub updated_at: Timestamp,
}

impl Entity for AddressResponse {
    const KEY: &'static str = "address";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_existing: Option<bool>,
}

/// Billing address attached to card and payment-method updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    #[serde(flatten)]
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<AddressUpdateOptions>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_address_flattens_billing_fields() {
        let address = Address {
            billing: BillingAddress {
                street_address: Some("1 Main St".into()),
                postal_code: Some("60606".into()),
                ..Default::default()
            },
            country_code_alpha2: Some("US".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&address).unwrap();
        assert_eq!(
            value,
            json!({"streetAddress": "1 Main St", "postalCode": "60606", "countryCodeAlpha2": "US"})
        );
    }

    #[test]
    fn test_address_request_requires_customer_id() {
        let result: Result<AddressRequest, _> =
            serde_json::from_value(json!({"streetAddress": "1 Main St"}));
        assert!(result.is_err());

        let payload = json!({"customerId": "c1", "locality": "Chicago"});
        assert!(AddressRequest::missing_fields(&payload).is_empty());
        let request: AddressRequest = serde_json::from_value(payload).unwrap();
        assert_eq!(request.address.billing.locality.as_deref(), Some("Chicago"));
    }
}
