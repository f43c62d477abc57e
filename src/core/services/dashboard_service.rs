use serde::Serialize;
use tracing::info;

use crate::domain::{BadgeProgress, BudgetInsight, Period, PeriodSummary, Snapshot};
use crate::taxonomy::Taxonomy;

use super::{BadgeService, InsightRules, InsightService, ServiceResult};

/// Everything an overview screen renders for one month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dashboard {
    pub period: Period,
    pub insights: Vec<BudgetInsight>,
    pub summary: PeriodSummary,
    pub badge: BadgeProgress,
}

impl Dashboard {
    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetInsight> {
        self.insights.iter().filter(|insight| insight.is_over_budget())
    }
}

pub struct DashboardService;

impl DashboardService {
    pub fn build(
        snapshot: &Snapshot,
        period: Period,
        taxonomy: &Taxonomy,
        rules: &InsightRules,
    ) -> ServiceResult<Dashboard> {
        let badge = BadgeService::classify(snapshot.receipts_count)?;
        let insights = InsightService::compute_insights_with(
            taxonomy,
            rules,
            &snapshot.transactions,
            &snapshot.budgets,
            period,
        )?;
        let summary =
            InsightService::summarize_period_with(taxonomy, &snapshot.transactions, period)?;
        info!(
            period = %period,
            insights = insights.len(),
            tier = badge.tier.label,
            "dashboard rebuilt"
        );
        Ok(Dashboard {
            period,
            insights,
            summary,
            badge,
        })
    }
}
