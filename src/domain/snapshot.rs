use serde::{Deserialize, Serialize};

use crate::domain::budget::Budget;
use crate::domain::transaction::Transaction;

/// Everything the insight services need, as fetched at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub receipts_count: i64,
}
