pub mod badge;
pub mod budget;
pub mod common;
pub mod insight;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use badge::{BadgeProgress, BadgeTier, BADGE_TIERS};
pub use budget::Budget;
pub use common::{Displayable, ExternalId};
pub use insight::{BudgetInsight, InsightStatus, PeriodSummary, Trend};
pub use period::{filter_period, Dated, Period};
pub use snapshot::Snapshot;
pub use transaction::{Transaction, TransactionKind};
