use chrono::{Datelike, Local};

use crate::bills::{Bill, BillRegistry};
use crate::config::TrackerConfig;
use crate::errors::ValidationError;
use crate::ids::IdGenerator;
use crate::ledger::{Ledger, Transaction, TransactionKind};
use crate::storage::Store;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const BILLS_KEY: &str = "bills";

/// One-time notification describing bills that fall due shortly after
/// startup. How and when it is shown (or dismissed) is the front end's
/// concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub bills: Vec<Bill>,
}

impl Reminder {
    pub fn message(&self) -> String {
        let names: Vec<&str> = self.bills.iter().map(|bill| bill.name.as_str()).collect();
        format!("Upcoming bills: {}", names.join(", "))
    }
}

/// Facade coordinating the ledger, the bill registry, and persistence.
///
/// Construct one per session and pass it by reference to whatever front end
/// drives it. Every mutation persists a full snapshot of the touched
/// collection; aggregates are recomputed on demand from in-memory state.
pub struct TrackerService {
    ledger: Ledger,
    bills: BillRegistry,
    ids: IdGenerator,
    store: Store,
    config: TrackerConfig,
    startup_reminder: Option<Reminder>,
}

impl TrackerService {
    /// Opens the tracker over `store`, loading the persisted config.
    pub fn new(store: Store) -> Self {
        let config = TrackerConfig::load(&store);
        Self::with_config(store, config)
    }

    /// Opens the tracker with an explicit config, rehydrating both
    /// collections and queueing a reminder for bills due soon.
    pub fn with_config(store: Store, config: TrackerConfig) -> Self {
        let ledger = Ledger::from_transactions(store.load(TRANSACTIONS_KEY));
        let bills = BillRegistry::from_bills(store.load(BILLS_KEY));
        let ids = IdGenerator::seeded_from(ledger.ids().chain(bills.ids()));
        let startup_reminder = reminder_for(
            &bills,
            current_day_of_month(),
            config.reminder_window_days,
        );
        if let Some(reminder) = &startup_reminder {
            tracing::info!(count = reminder.bills.len(), "bills due soon");
        }
        Self {
            ledger,
            bills,
            ids,
            store,
            config,
            startup_reminder,
        }
    }

    /// Yields the reminder computed at construction, at most once.
    pub fn take_startup_reminder(&mut self) -> Option<Reminder> {
        self.startup_reminder.take()
    }

    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<u64, ValidationError> {
        let id = self.ledger.add(&mut self.ids, description, amount, kind)?.id;
        self.persist_transactions();
        Ok(id)
    }

    pub fn delete_transaction(&mut self, id: u64) {
        self.ledger.remove(id);
        self.persist_transactions();
    }

    pub fn add_bill(&mut self, name: &str, amount: f64, day: u32) -> Result<u64, ValidationError> {
        let id = self.bills.add(&mut self.ids, name, amount, day)?.id;
        self.persist_bills();
        Ok(id)
    }

    pub fn delete_bill(&mut self, id: u64) {
        self.bills.remove(id);
        self.persist_bills();
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    pub fn total_income(&self) -> f64 {
        self.ledger.total_income()
    }

    pub fn total_expense(&self) -> f64 {
        self.ledger.total_expense()
    }

    /// Newest-first view of the recorded transactions.
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    /// Insertion-order view of the registered bills.
    pub fn bills(&self) -> &[Bill] {
        self.bills.bills()
    }

    pub fn sorted_bills(&self) -> Vec<&Bill> {
        self.bills.sorted_by_day()
    }

    /// Bills due within the configured lookahead window of `today`.
    pub fn upcoming_bills(&self, today: u32) -> Vec<&Bill> {
        self.bills.upcoming(today, self.config.reminder_window_days)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replaces and persists the active config.
    pub fn update_config(&mut self, config: TrackerConfig) {
        self.config = config;
        self.config.persist(&self.store);
    }

    fn persist_transactions(&self) {
        self.store.save(TRANSACTIONS_KEY, self.ledger.transactions());
    }

    fn persist_bills(&self) {
        self.store.save(BILLS_KEY, self.bills.bills());
    }
}

fn reminder_for(bills: &BillRegistry, today: u32, window: u32) -> Option<Reminder> {
    let due: Vec<Bill> = bills.upcoming(today, window).into_iter().cloned().collect();
    if due.is_empty() {
        None
    } else {
        Some(Reminder { bills: due })
    }
}

fn current_day_of_month() -> u32 {
    Local::now().day()
}
