use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::validation::Entity;

/// Body of `SettlementBatchSummaryGateway::generate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementBatchSummaryRequest {
    /// Settlement day as `YYYY-MM-DD`.
    pub settlement_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by_custom_field: Option<String>,
}

/// One row per card type and merchant account (and custom field, when
/// grouped). Row shape is not fixed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementBatchSummary {
    #[serde(default)]
    pub records: Vec<Map<String, Value>>,
}

pub type SettlementBatchSummaryResponse = SettlementBatchSummary;

impl Entity for SettlementBatchSummary {
    const KEY: &'static str = "settlementBatchSummary";
}
