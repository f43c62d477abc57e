use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Higher-level bucket every category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CategoryGroup {
    FixedIncome,
    FlexibleIncome,
    FixedExpenses,
    FlexibleExpenses,
    Savings,
    Investments,
}

/// Direction money moves for entries in a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Flow {
    Income,
    Expense,
    Saving,
}

/// How spend against a budget is judged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Framing {
    /// Budget is a ceiling; high usage is a risk.
    Spending,
    /// Budget is a target; high usage is progress.
    Goal,
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 6] = [
        CategoryGroup::FixedIncome,
        CategoryGroup::FlexibleIncome,
        CategoryGroup::FixedExpenses,
        CategoryGroup::FlexibleExpenses,
        CategoryGroup::Savings,
        CategoryGroup::Investments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CategoryGroup::FixedIncome => "Fixed Income",
            CategoryGroup::FlexibleIncome => "Flexible Income",
            CategoryGroup::FixedExpenses => "Fixed Expenses",
            CategoryGroup::FlexibleExpenses => "Flexible Expenses",
            CategoryGroup::Savings => "Savings",
            CategoryGroup::Investments => "Investments",
        }
    }

    pub fn flow(&self) -> Flow {
        match self {
            CategoryGroup::FixedIncome | CategoryGroup::FlexibleIncome => Flow::Income,
            CategoryGroup::FixedExpenses | CategoryGroup::FlexibleExpenses => Flow::Expense,
            CategoryGroup::Savings | CategoryGroup::Investments => Flow::Saving,
        }
    }

    pub fn framing(&self) -> Framing {
        match self.flow() {
            Flow::Saving => Framing::Goal,
            Flow::Income | Flow::Expense => Framing::Spending,
        }
    }

    /// Parses a group label, tolerating case and the singular spellings used
    /// by older screens.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        let group = match normalized.as_str() {
            "fixed income" => CategoryGroup::FixedIncome,
            "flexible income" => CategoryGroup::FlexibleIncome,
            "fixed expenses" | "fixed expense" => CategoryGroup::FixedExpenses,
            "flexible expenses" | "flexible expense" => CategoryGroup::FlexibleExpenses,
            "savings" | "saving" => CategoryGroup::Savings,
            "investments" | "investment" => CategoryGroup::Investments,
            _ => return None,
        };
        Some(group)
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown category group `{s}`"))
    }
}

impl Serialize for CategoryGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CategoryGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
