//! Add-ons and discounts: recurring price modifiers attached to plans and
//! subscriptions. The two families have identical shapes but are kept as
//! distinct types so one cannot be passed where the other is expected.

use serde::{Deserialize, Serialize};

use crate::shape::RequestShape;
use crate::validation::Entity;

macro_rules! modifier_family {
    (
        $base:ident, $add:ident, $update:ident, $response:ident, $key:literal
    ) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $base {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub amount: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub never_expires: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub number_of_billing_cycles: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub quantity: Option<u32>,
        }

        /// Attaches a catalog modifier, inheriting defaults from `inherited_from_id`.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $add {
            #[serde(flatten)]
            pub modifier: $base,
            pub inherited_from_id: String,
        }

        impl RequestShape for $add {
            const REQUIRED_FIELDS: &'static [&'static str] = &["inheritedFromId"];
        }

        /// Changes a modifier already attached to the subscription.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $update {
            #[serde(flatten)]
            pub modifier: $base,
            pub existing_id: String,
        }

        impl RequestShape for $update {
            const REQUIRED_FIELDS: &'static [&'static str] = &["existingId"];
        }

        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $response {
            #[serde(flatten)]
            pub modifier: $base,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub current_billing_cycle: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub description: Option<String>,
            pub id: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub kind: Option<String>,
            pub name: String,
        }

        impl Entity for $response {
            const KEY: &'static str = $key;
        }
    };
}

modifier_family!(AddOn, AddOnAddRequest, AddOnUpdateRequest, AddOnResponse, "addOn");
modifier_family!(
    Discount,
    DiscountAddRequest,
    DiscountUpdateRequest,
    DiscountResponse,
    "discount"
);

/// The add/update/remove diff applied to a subscription's modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationsRequest<A, U> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<A>,
    /// Ids of attached modifiers to detach.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub update: Vec<U>,
}

impl<A, U> Default for ModificationsRequest<A, U> {
    fn default() -> Self {
        Self {
            add: Vec::new(),
            remove: Vec::new(),
            update: Vec::new(),
        }
    }
}

impl<A, U> ModificationsRequest<A, U> {
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty() && self.update.is_empty()
    }
}

pub type AddOnModifications = ModificationsRequest<AddOnAddRequest, AddOnUpdateRequest>;
pub type DiscountModifications = ModificationsRequest<DiscountAddRequest, DiscountUpdateRequest>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_modifications_diff_serializes_only_present_lists() {
        let diff = AddOnModifications {
            add: vec![AddOnAddRequest {
                modifier: AddOn {
                    amount: Some("5.00".into()),
                    quantity: Some(2),
                    ..Default::default()
                },
                inherited_from_id: "extra_seat".into(),
            }],
            remove: vec!["legacy_support".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(&diff).unwrap();
        assert_eq!(
            value,
            json!({
                "add": [{"amount": "5.00", "quantity": 2, "inheritedFromId": "extra_seat"}],
                "remove": ["legacy_support"]
            })
        );
        assert!(!diff.is_empty());
        assert!(DiscountModifications::default().is_empty());
    }

    #[test]
    fn test_response_requires_id_and_name() {
        let ok: DiscountResponse =
            serde_json::from_value(json!({"id": "d1", "name": "Loyalty", "amount": "2.00"}))
                .unwrap();
        assert_eq!(ok.modifier.amount.as_deref(), Some("2.00"));

        let missing: Result<AddOnResponse, _> = serde_json::from_value(json!({"id": "a1"}));
        assert!(missing.is_err());
    }
}
