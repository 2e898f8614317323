use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded income or expense entry.
///
/// Transactions are immutable after creation; corrections are made by
/// deleting and re-adding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(id: u64, description: impl Into<String>, amount: f64, kind: TransactionKind) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            kind,
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}
