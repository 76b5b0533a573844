use serde::{Deserialize, Serialize};

use super::Timestamp;
use crate::shape::RequestShape;
use crate::validation::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisputeStatus {
    Accepted,
    Disputed,
    Expired,
    Open,
    Lost,
    Won,
}

impl DisputeStatus {
    /// Whether the dispute can still take evidence or be accepted.
    pub fn is_open(&self) -> bool {
        matches!(self, DisputeStatus::Open)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeStatusHistory {
    pub disbursement_date: Timestamp,
    pub effective_date: Timestamp,
    pub status: DisputeStatus,
    pub timestamp: Timestamp,
}

/// A piece of evidence attached to a dispute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub comment: String,
    pub created_at: Timestamp,
    pub id: String,
    pub send_to_processor_at: Timestamp,
    pub url: String,
}

impl Entity for Evidence {
    const KEY: &'static str = "evidence";
}

/// Summary of the disputed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeTransaction {
    pub amount: String,
    pub created_at: Timestamp,
    pub id: String,
    pub order_id: String,
    pub payment_instrument_subtype: String,
    pub purchase_order_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub amount_disputed: String,
    pub amount_won: String,
    pub case_number: String,
    pub created_at: Timestamp,
    pub currency_iso_code: String,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    pub id: String,
    pub kind: String,
    pub merchant_account_id: String,
    pub original_dispute_id: String,
    pub processor_comments: String,
    pub reason: String,
    pub reason_code: String,
    pub reason_description: String,
    pub received_date: Timestamp,
    pub reference_number: String,
    pub reply_by_date: Timestamp,
    pub status: DisputeStatus,
    #[serde(default)]
    pub status_history: Vec<DisputeStatusHistory>,
    pub transaction: DisputeTransaction,
    pub updated_at: Timestamp,
}

pub type DisputeResponse = Dispute;

impl Entity for Dispute {
    const KEY: &'static str = "dispute";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEvidenceRequest {
    pub document_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RequestShape for FileEvidenceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["documentId"];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEvidenceRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RequestShape for TextEvidenceRequest {
    const REQUIRED_FIELDS: &'static [&'static str] = &["content"];
}
