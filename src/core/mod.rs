pub mod tracker_service;

pub use tracker_service::{Reminder, TrackerService, BILLS_KEY, TRANSACTIONS_KEY};
