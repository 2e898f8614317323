pub mod bill;

pub use bill::Bill;

use crate::errors::ValidationError;
use crate::ids::IdGenerator;

pub const MIN_DAY_OF_MONTH: u32 = 1;
pub const MAX_DAY_OF_MONTH: u32 = 31;

/// Owned collection of recurring bill reminders plus the due-soon query.
///
/// Bills are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct BillRegistry {
    bills: Vec<Bill>,
}

impl BillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from a persisted snapshot, preserving stored order.
    pub fn from_bills(bills: Vec<Bill>) -> Self {
        Self { bills }
    }

    /// Validates and appends a new bill reminder.
    ///
    /// No id is drawn and nothing is mutated when validation fails.
    pub fn add(
        &mut self,
        ids: &mut IdGenerator,
        name: &str,
        amount: f64,
        day: u32,
    ) -> Result<&Bill, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        if !(MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).contains(&day) {
            return Err(ValidationError::DayOutOfRange);
        }
        let bill = Bill::new(ids.next_id(), name, amount, day);
        self.bills.push(bill);
        Ok(&self.bills[self.bills.len() - 1])
    }

    /// Removes the bill with the matching id; unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.bills.retain(|bill| bill.id != id);
    }

    /// Bills falling due within `within_days` of `today`.
    ///
    /// The comparison never wraps across a month boundary: a bill on day 2
    /// is not reported when today is day 30, even though only a few calendar
    /// days separate them. Bills due early next month therefore go
    /// unreported near month end; kept as-is until product intent says
    /// otherwise.
    pub fn upcoming(&self, today: u32, within_days: u32) -> Vec<&Bill> {
        self.bills
            .iter()
            .filter(|bill| {
                let days_until = i64::from(bill.day) - i64::from(today);
                days_until >= 0 && days_until <= i64::from(within_days)
            })
            .collect()
    }

    /// Bills ordered ascending by day of month; ties keep insertion order.
    pub fn sorted_by_day(&self) -> Vec<&Bill> {
        let mut sorted: Vec<&Bill> = self.bills.iter().collect();
        sorted.sort_by_key(|bill| bill.day);
        sorted
    }

    /// Insertion-order view of the registered bills.
    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn bill_count(&self) -> usize {
        self.bills.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.bills.iter().map(|bill| bill.id)
    }
}
