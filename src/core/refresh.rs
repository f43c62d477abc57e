//! Re-runs the pure services against freshly fetched data.
//!
//! The services hold no state; this driver is the only place that decides
//! when to recompute. Each tick fetches a new [`Snapshot`] and rebuilds the
//! dashboard from scratch.

use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::services::{Dashboard, DashboardService, InsightRules, ServiceResult};
use crate::domain::{Period, Snapshot};
use crate::taxonomy::Taxonomy;

/// Anything that can hand over the current transactions, budgets and
/// receipt count.
pub trait SnapshotSource {
    fn fetch(&self) -> ServiceResult<Snapshot>;
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for &S {
    fn fetch(&self) -> ServiceResult<Snapshot> {
        (**self).fetch()
    }
}

pub struct RefreshDriver<S> {
    source: S,
    taxonomy: Taxonomy,
    rules: InsightRules,
}

impl<S: SnapshotSource> RefreshDriver<S> {
    pub fn new(source: S, rules: InsightRules) -> Self {
        Self::with_taxonomy(source, Taxonomy::standard().clone(), rules)
    }

    pub fn with_taxonomy(source: S, taxonomy: Taxonomy, rules: InsightRules) -> Self {
        Self {
            source,
            taxonomy,
            rules,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches once and rebuilds the dashboard for `period`.
    pub fn refresh(&self, period: Period) -> ServiceResult<Dashboard> {
        let snapshot = self.source.fetch()?;
        debug!(
            transactions = snapshot.transactions.len(),
            budgets = snapshot.budgets.len(),
            "fetched snapshot"
        );
        DashboardService::build(&snapshot, period, &self.taxonomy, &self.rules)
    }

    /// Refreshes `ticks` times, sleeping `interval` between ticks, and hands
    /// each successful dashboard to `on_update`. Failed ticks are logged and
    /// skipped. Returns the number of successful refreshes.
    pub fn watch<F>(
        &self,
        period: Period,
        interval: Duration,
        ticks: usize,
        mut on_update: F,
    ) -> usize
    where
        F: FnMut(&Dashboard),
    {
        let mut delivered = 0;
        for tick in 0..ticks {
            if tick > 0 {
                thread::sleep(interval);
            }
            match self.refresh(period) {
                Ok(dashboard) => {
                    on_update(&dashboard);
                    delivered += 1;
                }
                Err(err) => warn!(tick, error = %err, "refresh failed; will retry next tick"),
            }
        }
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use crate::domain::{Budget, Transaction};
    use crate::errors::DataError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::cell::Cell;

    /// Returns a growing spend on every fetch and fails on the second one.
    struct ScriptedSource {
        calls: Cell<u32>,
    }

    impl SnapshotSource for ScriptedSource {
        fn fetch(&self) -> ServiceResult<Snapshot> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if call == 2 {
                return Err(ServiceError::Data(DataError::Malformed("flaky".into())));
            }
            let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            Ok(Snapshot {
                transactions: vec![Transaction::expense(
                    call as i64,
                    "Groceries",
                    dec!(10) * rust_decimal::Decimal::from(call),
                    date,
                )],
                budgets: vec![Budget::new("groceries", dec!(100))],
                receipts_count: call as i64,
            })
        }
    }

    #[test]
    fn watch_recomputes_each_tick_and_skips_failures() {
        let driver = RefreshDriver::new(
            ScriptedSource {
                calls: Cell::new(0),
            },
            InsightRules::default(),
        );
        let mut spent = Vec::new();
        let delivered = driver.watch(
            Period::new(5, 2025).unwrap(),
            Duration::from_millis(1),
            3,
            |dashboard| spent.push(dashboard.insights[0].spent),
        );
        assert_eq!(delivered, 2);
        assert_eq!(spent, vec![dec!(10), dec!(30)]);
        assert_eq!(driver.source().calls.get(), 3);
    }

    #[test]
    fn refresh_propagates_source_errors() {
        let source = ScriptedSource {
            calls: Cell::new(1),
        };
        let driver = RefreshDriver::new(&source, InsightRules::default());
        assert!(driver.refresh(Period::new(5, 2025).unwrap()).is_err());
    }
}
