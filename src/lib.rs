#![doc(test(attr(deny(warnings))))]

//! Ordino Core computes the derived values behind Ordino's finance screens:
//! per-category budget insights for a calendar month, month-level totals,
//! and receipt badge tiers. All computation is pure; [`core::refresh`] is the
//! only piece that decides when to recompute.
//!
//! ```
//! use chrono::NaiveDate;
//! use ordino_core::core::services::InsightService;
//! use ordino_core::domain::{Budget, Period, Transaction};
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
//! let transactions = vec![Transaction::expense(1, "Groceries", dec!(100), date)];
//! let budgets = vec![Budget::new("Groceries", dec!(200))];
//! let period = Period::new(9, 2025).unwrap();
//!
//! let insights = InsightService::compute_insights(&transactions, &budgets, period).unwrap();
//! assert_eq!(insights[0].percentage_used, dec!(50));
//! assert_eq!(insights[0].amount_under, dec!(100));
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod taxonomy;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ordino Core tracing initialized.");
    });
}
