#![allow(dead_code)]

use chrono::NaiveDate;
use ordino_core::domain::{Budget, Snapshot, Transaction};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A month of household activity spread across every group, plus noise in
/// the neighbouring months.
pub fn household_snapshot() -> Snapshot {
    Snapshot {
        transactions: vec![
            Transaction::income(1, "Salary", dec!(4200), date(2025, 10, 1)),
            Transaction::income(2, "Freelance", dec!(650), date(2025, 10, 17)),
            Transaction::expense(3, "Rent & Housing", dec!(1500), date(2025, 10, 1)),
            Transaction::expense(4, "Utilities", dec!(180.40), date(2025, 10, 3)),
            Transaction::expense(5, "Groceries", dec!(96.15), date(2025, 10, 4)),
            Transaction::expense(6, "Groceries", dec!(143.85), date(2025, 10, 4)),
            Transaction::expense(7, "Dining Out", dec!(260), date(2025, 10, 12)),
            Transaction::expense(8, "Transportation", dec!(75), date(2025, 10, 20)),
            Transaction::expense(9, "Emergency Fund", dec!(300), date(2025, 10, 2)),
            Transaction::income(10, "Emergency Fund", dec!(100), date(2025, 10, 25)),
            Transaction::expense(11, "Stocks", dec!(500), date(2025, 10, 28)),
            Transaction::expense(12, "Groceries", dec!(88), date(2025, 9, 30)),
            Transaction::expense(13, "Dining Out", dec!(40), date(2025, 11, 1)),
        ],
        budgets: vec![
            Budget::new("rent", dec!(1500)),
            Budget::new("utilities", dec!(200)),
            Budget::new("Groceries", dec!(400)),
            Budget::new("Dining Out", dec!(250)),
            Budget::new("Transportation", dec!(100)),
            Budget::new("Emergency Fund", dec!(500)),
            Budget::new("Stocks", dec!(1000)),
        ],
        receipts_count: 37,
    }
}

pub fn expense_total_in(snapshot: &Snapshot, year: i32, month: u32) -> Decimal {
    use chrono::Datelike;
    snapshot
        .transactions
        .iter()
        .filter(|txn| txn.is_expense() && txn.date.year() == year && txn.date.month() == month)
        .map(|txn| txn.amount)
        .sum()
}
