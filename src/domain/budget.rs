//! Per-category monthly budget limits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::ExternalId;

/// A user-set monthly ceiling (or goal, for savings groups) for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "BudgetRecord")]
pub struct Budget {
    /// Taxonomy id or name of the budgeted category.
    pub category_id: String,
    /// Zero means no budget has been set.
    pub limit: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

impl Budget {
    pub fn new(category_id: impl Into<String>, limit: Decimal) -> Self {
        Self {
            category_id: category_id.into(),
            limit,
            group_name: None,
        }
    }

    pub fn is_set(&self) -> bool {
        !self.limit.is_zero()
    }
}

/// Budget entry as the backend sends it. `categoryId` may be missing when the
/// entry is keyed by category in a map, and the limit is called `budget`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BudgetRecord {
    #[serde(default)]
    pub category_id: Option<ExternalId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub budget: Option<Decimal>,
    #[serde(default)]
    pub limit: Option<Decimal>,
    #[serde(default)]
    pub group_name: Option<String>,
}

impl BudgetRecord {
    pub(crate) fn into_budget(self, fallback_key: Option<&str>) -> Result<Budget, String> {
        let category_id = self
            .category_id
            .map(|id| id.to_string())
            .or(self.name)
            .or_else(|| fallback_key.map(str::to_string))
            .ok_or_else(|| "budget entry has neither `categoryId` nor `name`".to_string())?;
        Ok(Budget {
            category_id,
            limit: self.budget.or(self.limit).unwrap_or(Decimal::ZERO),
            group_name: self.group_name,
        })
    }
}

impl TryFrom<BudgetRecord> for Budget {
    type Error = String;

    fn try_from(record: BudgetRecord) -> Result<Self, Self::Error> {
        record.into_budget(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_backend_budget_shape() {
        let json = r#"{"categoryId": "groceries", "name": "Groceries", "icon": "cart",
                       "groupName": "Flexible Expenses", "budget": 400, "spent": 123.45}"#;
        let budget: Budget = serde_json::from_str(json).expect("parse budget");
        assert_eq!(budget.category_id, "groceries");
        assert_eq!(budget.limit, dec!(400));
        assert_eq!(budget.group_name.as_deref(), Some("Flexible Expenses"));
        assert!(budget.is_set());
    }

    #[test]
    fn falls_back_to_name_and_zero_limit() {
        let budget: Budget = serde_json::from_str(r#"{"name": "Travel"}"#).expect("parse");
        assert_eq!(budget.category_id, "Travel");
        assert_eq!(budget.limit, Decimal::ZERO);
        assert!(!budget.is_set());
    }

    #[test]
    fn numeric_category_ids_become_strings() {
        let budget: Budget =
            serde_json::from_str(r#"{"categoryId": 7, "limit": "15.50"}"#).expect("parse");
        assert_eq!(budget.category_id, "7");
        assert_eq!(budget.limit, dec!(15.50));
    }

    #[test]
    fn entries_without_a_key_are_rejected() {
        assert!(serde_json::from_str::<Budget>(r#"{"budget": 10}"#).is_err());
    }
}
