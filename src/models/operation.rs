use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deposit,
    Withdraw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    Pending,
    Completed,
    Failed,
}

/// Body sent to the info server for deposits and withdrawals.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub token_id: String,
    pub amount: BigDecimal,
}

/// What the info server answers to a deposit or withdrawal.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationReceipt {
    pub id: Uuid,
    pub kind: OperationKind,
    pub token_id: String,
    pub amount: BigDecimal,
    pub status: OperationStatus,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    pub submitted_at: DateTime<Utc>,
}
