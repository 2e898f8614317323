use serde::{Deserialize, Serialize};

/// A recurring monthly bill reminder.
///
/// Only the day of month is tracked; a bill on day 31 simply never matches
/// shorter months. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: u64,
    pub name: String,
    pub amount: f64,
    pub day: u32,
}

impl Bill {
    pub fn new(id: u64, name: impl Into<String>, amount: f64, day: u32) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            day,
        }
    }
}
