use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::period::Period;
use crate::taxonomy::CategoryGroup;

/// Direction a category is heading relative to its budget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Overspending risk.
    Up,
    /// Good progress.
    Down,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InsightStatus {
    Unbudgeted,
    UnderBudget,
    AtRisk,
    OverBudget,
    GoalInProgress,
    GoalNearlyMet,
    GoalReached,
}

impl InsightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InsightStatus::Unbudgeted => "No budget set",
            InsightStatus::UnderBudget => "Under budget",
            InsightStatus::AtRisk => "At risk",
            InsightStatus::OverBudget => "Over budget",
            InsightStatus::GoalInProgress => "In progress",
            InsightStatus::GoalNearlyMet => "Goal nearly met",
            InsightStatus::GoalReached => "Goal reached",
        }
    }
}

impl fmt::Display for InsightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Spend vs. budget for one category over one period. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetInsight {
    pub category_id: String,
    pub category: String,
    pub group: CategoryGroup,
    pub color: String,
    pub spent: Decimal,
    pub budget: Decimal,
    /// `spent / budget * 100`, or zero when no budget is set.
    pub percentage_used: Decimal,
    /// `budget - spent`; negative when over budget.
    pub amount_under: Decimal,
    pub trend: Trend,
    pub status: InsightStatus,
    pub unbudgeted: bool,
    pub transaction_count: usize,
}

impl BudgetInsight {
    pub fn is_over_budget(&self) -> bool {
        self.status == InsightStatus::OverBudget
    }
}

/// Month-level totals across every category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub period: Period,
    pub income: Decimal,
    pub expenses: Decimal,
    pub saved: Decimal,
    /// `income - expenses - saved`.
    pub net: Decimal,
    /// Share of income moved into savings or investments, zero without income.
    pub savings_rate: Decimal,
    pub by_group: BTreeMap<CategoryGroup, Decimal>,
    pub transaction_count: usize,
    /// Entries whose category is not in the taxonomy. They still count toward
    /// `income`/`expenses` by kind but are absent from `by_group`.
    pub unclassified: usize,
}
