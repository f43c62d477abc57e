//! Budget insight aggregation: spent vs. budget per category for one month.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::core::utils::{percent_of, saturating_sum};
use crate::domain::{
    filter_period, Budget, BudgetInsight, Displayable, InsightStatus, Period, PeriodSummary,
    Transaction, TransactionKind, Trend,
};
use crate::errors::ValidationError;
use crate::taxonomy::{CategoryDefinition, CategoryGroup, Flow, Framing, Taxonomy};

use super::ServiceResult;

/// Thresholds that turn a percentage into a trend and status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InsightRules {
    /// Spending above this share of the budget is flagged as a risk.
    pub overspend_risk_percent: Decimal,
    /// Savings and investment goals at or above this share count as nearly met.
    pub goal_nearly_met_percent: Decimal,
}

impl Default for InsightRules {
    fn default() -> Self {
        Self {
            overspend_risk_percent: dec!(85),
            goal_nearly_met_percent: dec!(75),
        }
    }
}

pub struct InsightService;

impl InsightService {
    /// Computes one insight per budget using the standard taxonomy and rules.
    pub fn compute_insights(
        transactions: &[Transaction],
        budgets: &[Budget],
        period: Period,
    ) -> ServiceResult<Vec<BudgetInsight>> {
        Self::compute_insights_with(
            Taxonomy::standard(),
            &InsightRules::default(),
            transactions,
            budgets,
            period,
        )
    }

    /// Output order follows `budgets`. Inputs are fully validated before any
    /// totals are computed.
    #[instrument(
        skip_all,
        fields(period = %period, transactions = transactions.len(), budgets = budgets.len())
    )]
    pub fn compute_insights_with(
        taxonomy: &Taxonomy,
        rules: &InsightRules,
        transactions: &[Transaction],
        budgets: &[Budget],
        period: Period,
    ) -> ServiceResult<Vec<BudgetInsight>> {
        validate_amounts(transactions)?;
        let budgeted = resolve_budgets(taxonomy, budgets)?;

        let in_period = filter_period(transactions, period);
        let mut by_category: HashMap<&str, Vec<&Transaction>> = HashMap::new();
        let mut unresolved = 0usize;
        for txn in in_period {
            match taxonomy.resolve(&txn.category) {
                Some(definition) => {
                    check_declared_group(txn, definition);
                    by_category
                        .entry(definition.id.as_str())
                        .or_default()
                        .push(txn);
                }
                None => unresolved += 1,
            }
        }
        if unresolved > 0 {
            warn!(unresolved, "transactions with unknown categories were skipped");
        }

        let insights: Vec<BudgetInsight> = budgeted
            .into_iter()
            .map(|(budget, definition)| {
                let entries = by_category
                    .get(definition.id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                build_insight(definition, budget.limit, entries, rules)
            })
            .collect();
        debug!(count = insights.len(), "computed budget insights");
        Ok(insights)
    }

    pub fn summarize_period(
        transactions: &[Transaction],
        period: Period,
    ) -> ServiceResult<PeriodSummary> {
        Self::summarize_period_with(Taxonomy::standard(), transactions, period)
    }

    #[instrument(skip_all, fields(period = %period, transactions = transactions.len()))]
    pub fn summarize_period_with(
        taxonomy: &Taxonomy,
        transactions: &[Transaction],
        period: Period,
    ) -> ServiceResult<PeriodSummary> {
        validate_amounts(transactions)?;
        let in_period = filter_period(transactions, period);

        let mut income = Vec::new();
        let mut expenses = Vec::new();
        let mut saved = Vec::new();
        let mut by_group: BTreeMap<CategoryGroup, Decimal> = BTreeMap::new();
        let mut unclassified = 0usize;

        for txn in &in_period {
            let group = taxonomy.group_of(&txn.category);
            match group {
                Some(group) => {
                    let total = by_group.entry(group).or_insert(Decimal::ZERO);
                    *total = total.saturating_add(txn.amount);
                }
                None => unclassified += 1,
            }
            match (group.map(|group| group.flow()), txn.kind) {
                (Some(Flow::Saving), _) => saved.push(txn.amount),
                (_, TransactionKind::Income) => income.push(txn.amount),
                (_, TransactionKind::Expense) => expenses.push(txn.amount),
            }
        }

        let income = saturating_sum(income);
        let expenses = saturating_sum(expenses);
        let saved = saturating_sum(saved);
        Ok(PeriodSummary {
            period,
            income,
            expenses,
            saved,
            net: income.saturating_sub(expenses).saturating_sub(saved),
            savings_rate: percent_of(saved, income),
            by_group,
            transaction_count: in_period.len(),
            unclassified,
        })
    }
}

fn validate_amounts(transactions: &[Transaction]) -> Result<(), ValidationError> {
    match transactions.iter().find(|txn| txn.amount < Decimal::ZERO) {
        Some(txn) => Err(ValidationError::NegativeAmount {
            id: txn.id.to_string(),
            amount: txn.amount.to_string(),
        }),
        None => Ok(()),
    }
}

fn resolve_budgets<'a>(
    taxonomy: &'a Taxonomy,
    budgets: &'a [Budget],
) -> Result<Vec<(&'a Budget, &'a CategoryDefinition)>, ValidationError> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(budgets.len());
    for budget in budgets {
        if budget.limit < Decimal::ZERO {
            return Err(ValidationError::NegativeBudget {
                category: budget.category_id.clone(),
                limit: budget.limit.to_string(),
            });
        }
        let definition = taxonomy.require(&budget.category_id)?;
        if !seen.insert(definition.id.as_str()) {
            return Err(ValidationError::DuplicateBudget(definition.name.clone()));
        }
        if let Some(declared) = budget.group_name.as_deref() {
            if CategoryGroup::parse(declared) != Some(definition.group) {
                warn!(
                    category = %definition.name,
                    declared,
                    actual = %definition.group,
                    "budget group disagrees with taxonomy; using taxonomy"
                );
            }
        }
        resolved.push((budget, definition));
    }
    Ok(resolved)
}

fn check_declared_group(txn: &Transaction, definition: &CategoryDefinition) {
    if let Some(declared) = txn.category_group.as_deref() {
        if CategoryGroup::parse(declared) != Some(definition.group) {
            warn!(
                transaction = %txn.display_label(),
                category = %definition.name,
                declared,
                actual = %definition.group,
                "transaction group disagrees with taxonomy; using taxonomy"
            );
        }
    }
}

fn build_insight(
    definition: &CategoryDefinition,
    budget: Decimal,
    entries: &[&Transaction],
    rules: &InsightRules,
) -> BudgetInsight {
    let framing = definition.group.framing();
    // savings transfers count toward the goal whatever their type
    let contributing: Vec<&Transaction> = entries
        .iter()
        .copied()
        .filter(|txn| framing == Framing::Goal || txn.is_expense())
        .collect();
    let spent = saturating_sum(contributing.iter().map(|txn| txn.amount));
    let percentage_used = percent_of(spent, budget);
    let unbudgeted = budget.is_zero();
    let (trend, status) = classify(framing, spent, budget, percentage_used, rules);

    BudgetInsight {
        category_id: definition.id.clone(),
        category: definition.name.clone(),
        group: definition.group,
        color: definition.color.clone(),
        spent,
        budget,
        percentage_used,
        amount_under: budget.saturating_sub(spent),
        trend,
        status,
        unbudgeted,
        transaction_count: contributing.len(),
    }
}

fn classify(
    framing: Framing,
    spent: Decimal,
    budget: Decimal,
    percentage_used: Decimal,
    rules: &InsightRules,
) -> (Trend, InsightStatus) {
    if budget.is_zero() {
        return (Trend::Neutral, InsightStatus::Unbudgeted);
    }
    match framing {
        Framing::Spending => {
            if spent > budget {
                (Trend::Up, InsightStatus::OverBudget)
            } else if percentage_used > rules.overspend_risk_percent {
                (Trend::Up, InsightStatus::AtRisk)
            } else if spent.is_zero() {
                (Trend::Neutral, InsightStatus::UnderBudget)
            } else {
                (Trend::Down, InsightStatus::UnderBudget)
            }
        }
        Framing::Goal => {
            if percentage_used >= Decimal::ONE_HUNDRED {
                (Trend::Down, InsightStatus::GoalReached)
            } else if percentage_used >= rules.goal_nearly_met_percent {
                (Trend::Down, InsightStatus::GoalNearlyMet)
            } else {
                (Trend::Neutral, InsightStatus::GoalInProgress)
            }
        }
    }
}
