use serde::{Deserialize, Serialize};

use super::modifier::{AddOnModifications, AddOnResponse, DiscountModifications, DiscountResponse};
use super::transaction::{Descriptor, Transaction};
use super::Timestamp;
use crate::shape::RequestShape;
use crate::validation::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Expired,
    #[serde(rename = "Past Due")]
    PastDue,
    Pending,
}

/// Who caused a subscription status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionSource {
    Api,
    ControlPanel,
    Recurring,
}

/// Schedule fields shared by subscription requests and responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_day_of_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<Descriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_billing_date: Option<Timestamp>,
    pub id: String,
    pub merchant_account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_expires: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_billing_cycles: Option<u32>,
    pub payment_method_token: String,
    pub plan_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_duration_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_period: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPaypalOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_not_inherit_add_ons_or_discounts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal: Option<SubscriptionPaypalOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_immediately: Option<bool>,
}

/// Body of subscription create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRequest {
    #[serde(flatten)]
    pub subscription: Subscription,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<AddOnModifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<DiscountModifications>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<SubscriptionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_nonce: Option<String>,
}

impl RequestShape for SubscriptionRequest {
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["id", "merchantAccountId", "paymentMethodToken", "planId"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionHistory {
    pub balance: String,
    pub price: String,
    pub status: SubscriptionStatus,
    pub subscription_source: SubscriptionSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    #[serde(flatten)]
    pub subscription: Subscription,
    #[serde(default)]
    pub add_ons: Vec<AddOnResponse>,
    pub balance: String,
    pub billing_period_end_date: Timestamp,
    pub billing_period_start_date: Timestamp,
    pub current_billing_cycle: u32,
    pub days_past_due: u32,
    #[serde(default)]
    pub discounts: Vec<DiscountResponse>,
    pub failure_count: u32,
    pub next_bill_amount: String,
    pub next_billing_date: Timestamp,
    pub next_billing_period_amount: String,
    pub paid_through_date: Timestamp,
    pub status: SubscriptionStatus,
    #[serde(default)]
    pub status_history: Vec<SubscriptionHistory>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for SubscriptionResponse {
    const KEY: &'static str = "subscription";
}

/// Body sent to charge a past-due subscription again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryChargeRequest {
    pub subscription_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RetryChargeOptions>,
}

/// Sent as `options` of the retried sale, like any other transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryChargeOptions {
    pub submit_for_settlement: bool,
}
