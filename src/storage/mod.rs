//! Local JSON snapshots of the backend's transaction, budget and receipt
//! payloads.

pub mod json_snapshot;

pub use json_snapshot::{
    load_budgets, load_receipts_count, load_transactions, save_snapshot, JsonSnapshotSource,
    BUDGETS_FILE, RECEIPTS_FILE, TRANSACTIONS_FILE,
};
