use colored::{ColoredString, Colorize};
use rust_decimal::Decimal;

use crate::core::services::Dashboard;
use crate::domain::{BadgeProgress, BudgetInsight, InsightStatus, PeriodSummary, Trend};

pub fn format_amount(value: Decimal, currency: &str) -> String {
    format!("{} {:.2}", currency, value.round_dp(2))
}

pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

fn styled_status(status: InsightStatus) -> ColoredString {
    let label = status.label();
    match status {
        InsightStatus::OverBudget => label.red().bold(),
        InsightStatus::AtRisk => label.yellow(),
        InsightStatus::UnderBudget => label.green(),
        InsightStatus::GoalReached | InsightStatus::GoalNearlyMet => label.cyan(),
        InsightStatus::GoalInProgress => label.normal(),
        InsightStatus::Unbudgeted => label.dimmed(),
    }
}

fn trend_marker(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "^",
        Trend::Down => "v",
        Trend::Neutral => "-",
    }
}

pub fn insight_line(insight: &BudgetInsight, currency: &str) -> String {
    format!(
        "{:<20} {:>14} / {:>14} {:>7} {} {}",
        insight.category,
        format_amount(insight.spent, currency),
        format_amount(insight.budget, currency),
        format_percent(insight.percentage_used),
        trend_marker(insight.trend),
        styled_status(insight.status),
    )
}

pub fn summary_lines(summary: &PeriodSummary, currency: &str) -> Vec<String> {
    let mut lines = vec![
        format!("=== {} ===", summary.period),
        format!("Income:       {}", format_amount(summary.income, currency)),
        format!("Expenses:     {}", format_amount(summary.expenses, currency)),
        format!("Saved:        {}", format_amount(summary.saved, currency)),
        format!("Net:          {}", format_amount(summary.net, currency)),
        format!("Savings rate: {}", format_percent(summary.savings_rate)),
    ];
    for (group, total) in &summary.by_group {
        lines.push(format!("  {:<18} {}", group.label(), format_amount(*total, currency)));
    }
    if summary.unclassified > 0 {
        lines.push(format!(
            "{} transaction(s) with unknown categories",
            summary.unclassified
        ));
    }
    lines
}

pub fn badge_line(progress: &BadgeProgress) -> String {
    match progress.next_tier {
        Some(next) => format!(
            "{} ({} receipts) - {} more to reach {}",
            progress.tier.label, progress.receipts_count, progress.count_to_next, next.label
        ),
        None => format!(
            "{} ({} receipts) - top tier reached",
            progress.tier.label, progress.receipts_count
        ),
    }
}

pub fn dashboard_lines(dashboard: &Dashboard, currency: &str) -> Vec<String> {
    let mut lines = summary_lines(&dashboard.summary, currency);
    lines.extend(
        dashboard
            .insights
            .iter()
            .map(|insight| insight_line(insight, currency)),
    );
    lines.push(badge_line(&dashboard.badge));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::BadgeService;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(dec!(12.5), "EUR"), "EUR 12.50");
        assert_eq!(format_amount(dec!(-3.456), "USD"), "USD -3.46");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(dec!(33.3333)), "33.3%");
        assert_eq!(format_percent(Decimal::ZERO), "0.0%");
    }

    #[test]
    fn badge_line_mentions_next_tier() {
        let progress = BadgeService::classify_count(0);
        assert_eq!(
            badge_line(&progress),
            "Budget Beginner (0 receipts) - 11 more to reach Smart Saver"
        );
        let top = BadgeService::classify_count(401);
        assert!(badge_line(&top).ends_with("top tier reached"));
    }
}
