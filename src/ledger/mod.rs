pub mod transaction;

pub use transaction::{Transaction, TransactionKind};

use crate::errors::ValidationError;
use crate::ids::IdGenerator;

/// Owned collection of transactions plus the derived balance figures.
///
/// Entries are kept newest first. Aggregates are recomputed on demand; at
/// personal-scale entry counts a linear pass per call beats cache
/// invalidation bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from a persisted snapshot, preserving stored order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Validates and records a new transaction at the front of the ledger.
    ///
    /// No id is drawn and nothing is mutated when validation fails.
    pub fn add(
        &mut self,
        ids: &mut IdGenerator,
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<&Transaction, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::InvalidAmount);
        }
        let transaction = Transaction::new(ids.next_id(), description, amount, kind);
        self.transactions.insert(0, transaction);
        Ok(&self.transactions[0])
    }

    /// Removes the transaction with the matching id; unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) {
        self.transactions.retain(|transaction| transaction.id != id);
    }

    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    pub fn total_income(&self) -> f64 {
        self.sum_of(TransactionKind::Income)
    }

    pub fn total_expense(&self) -> f64 {
        self.sum_of(TransactionKind::Expense)
    }

    fn sum_of(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|transaction| transaction.kind == kind)
            .map(|transaction| transaction.amount)
            .sum()
    }

    /// Newest-first view of the recorded transactions.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.transactions.iter().map(|transaction| transaction.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_and_ids() -> (Ledger, IdGenerator) {
        (Ledger::new(), IdGenerator::new())
    }

    #[test]
    fn add_prepends_newest_entry() {
        let (mut ledger, mut ids) = ledger_and_ids();
        ledger
            .add(&mut ids, "Salary", 1000.0, TransactionKind::Income)
            .unwrap();
        ledger
            .add(&mut ids, "Rent", 400.0, TransactionKind::Expense)
            .unwrap();

        let descriptions: Vec<&str> = ledger
            .transactions()
            .iter()
            .map(|txn| txn.description.as_str())
            .collect();
        assert_eq!(descriptions, ["Rent", "Salary"]);
    }

    #[test]
    fn aggregates_track_each_kind() {
        let (mut ledger, mut ids) = ledger_and_ids();
        ledger
            .add(&mut ids, "Salary", 1000.0, TransactionKind::Income)
            .unwrap();
        assert_eq!(ledger.total_income(), 1000.0);
        assert_eq!(ledger.balance(), 1000.0);

        ledger
            .add(&mut ids, "Rent", 400.0, TransactionKind::Expense)
            .unwrap();
        assert_eq!(ledger.total_expense(), 400.0);
        assert_eq!(ledger.balance(), 600.0);
        assert_eq!(
            ledger.balance(),
            ledger.total_income() - ledger.total_expense()
        );
    }

    #[test]
    fn aggregates_are_stable_between_mutations() {
        let (mut ledger, mut ids) = ledger_and_ids();
        ledger
            .add(&mut ids, "Groceries", 82.5, TransactionKind::Expense)
            .unwrap();
        assert_eq!(ledger.balance(), ledger.balance());
    }

    #[test]
    fn rejects_blank_description() {
        let (mut ledger, mut ids) = ledger_and_ids();
        let err = ledger
            .add(&mut ids, "   ", 10.0, TransactionKind::Income)
            .expect_err("blank description must fail");
        assert_eq!(err, ValidationError::EmptyDescription);
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn rejects_non_positive_and_non_finite_amounts() {
        let (mut ledger, mut ids) = ledger_and_ids();
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = ledger
                .add(&mut ids, "Broken", amount, TransactionKind::Expense)
                .expect_err("invalid amount must fail");
            assert_eq!(err, ValidationError::InvalidAmount);
        }
        assert_eq!(ledger.transaction_count(), 0);
        // None of the failed attempts may have consumed an id.
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn add_trims_the_stored_description() {
        let (mut ledger, mut ids) = ledger_and_ids();
        let id = ledger
            .add(&mut ids, "  Coffee  ", 3.5, TransactionKind::Expense)
            .unwrap()
            .id;
        let stored = ledger
            .transactions()
            .iter()
            .find(|txn| txn.id == id)
            .unwrap();
        assert_eq!(stored.description, "Coffee");
    }

    #[test]
    fn remove_of_unknown_id_leaves_ledger_unchanged() {
        let (mut ledger, mut ids) = ledger_and_ids();
        ledger
            .add(&mut ids, "Salary", 1000.0, TransactionKind::Income)
            .unwrap();
        ledger.remove(999);
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn remove_drops_the_matching_entry() {
        let (mut ledger, mut ids) = ledger_and_ids();
        let id = ledger
            .add(&mut ids, "Salary", 1000.0, TransactionKind::Income)
            .unwrap()
            .id;
        ledger.remove(id);
        assert_eq!(ledger.transaction_count(), 0);
        assert_eq!(ledger.balance(), 0.0);
    }
}
