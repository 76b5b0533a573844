use serde::{Deserialize, Serialize};

use super::modifier::{AddOnResponse, DiscountResponse};
use super::Timestamp;

/// A recurring billing plan configured in the control panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default)]
    pub add_ons: Vec<AddOnResponse>,
    pub billing_day_of_month: u32,
    pub billing_frequency: u32,
    pub created_at: Timestamp,
    /// Wire key `currenyIsoCode`, spelled as declared.
    pub curreny_iso_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<DiscountResponse>>,
    pub id: String,
    pub name: String,
    pub number_of_billing_cycles: u32,
    pub price: String,
    pub trial_duration: u32,
    pub trial_duration_unit: String,
    pub trial_period: bool,
    pub updated_at: Timestamp,
}

pub type PlanResponse = Plan;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_misspelled_currency_key() {
        let plan: Plan = serde_json::from_value(json!({
            "addOns": [],
            "billingDayOfMonth": 1,
            "billingFrequency": 1,
            "createdAt": "2024-01-01T00:00:00Z",
            "currenyIsoCode": "USD",
            "id": "gold",
            "name": "Gold",
            "numberOfBillingCycles": 12,
            "price": "9.99",
            "trialDuration": 0,
            "trialDurationUnit": "day",
            "trialPeriod": false,
            "updatedAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(plan.curreny_iso_code, "USD");
        assert!(plan.discounts.is_none());
        assert!(serde_json::to_value(&plan).unwrap().get("currenyIsoCode").is_some());
    }
}
