//! Built-in Ordino category table.

use super::{CategoryDefinition, CategoryGroup};

const STANDARD: &[(&str, &str, CategoryGroup, &str)] = &[
    ("salary", "Salary", CategoryGroup::FixedIncome, "#2E7D32"),
    ("pension", "Pension", CategoryGroup::FixedIncome, "#388E3C"),
    ("rental-income", "Rental Income", CategoryGroup::FixedIncome, "#43A047"),
    ("freelance", "Freelance", CategoryGroup::FlexibleIncome, "#66BB6A"),
    ("bonus", "Bonus", CategoryGroup::FlexibleIncome, "#81C784"),
    ("side-hustle", "Side Hustle", CategoryGroup::FlexibleIncome, "#9CCC65"),
    ("refunds", "Refunds", CategoryGroup::FlexibleIncome, "#AED581"),
    ("rent", "Rent & Housing", CategoryGroup::FixedExpenses, "#C62828"),
    ("utilities", "Utilities", CategoryGroup::FixedExpenses, "#D84315"),
    ("insurance", "Insurance", CategoryGroup::FixedExpenses, "#EF6C00"),
    ("subscriptions", "Subscriptions", CategoryGroup::FixedExpenses, "#F9A825"),
    ("loan-payments", "Loan Payments", CategoryGroup::FixedExpenses, "#AD1457"),
    ("phone-internet", "Phone & Internet", CategoryGroup::FixedExpenses, "#8E24AA"),
    ("groceries", "Groceries", CategoryGroup::FlexibleExpenses, "#1565C0"),
    ("dining-out", "Dining Out", CategoryGroup::FlexibleExpenses, "#1E88E5"),
    ("transportation", "Transportation", CategoryGroup::FlexibleExpenses, "#039BE5"),
    ("shopping", "Shopping", CategoryGroup::FlexibleExpenses, "#00ACC1"),
    ("entertainment", "Entertainment", CategoryGroup::FlexibleExpenses, "#00897B"),
    ("health", "Health & Wellness", CategoryGroup::FlexibleExpenses, "#5E35B1"),
    ("personal-care", "Personal Care", CategoryGroup::FlexibleExpenses, "#7E57C2"),
    ("travel", "Travel", CategoryGroup::FlexibleExpenses, "#3949AB"),
    ("gifts", "Gifts & Donations", CategoryGroup::FlexibleExpenses, "#EC407A"),
    ("emergency-fund", "Emergency Fund", CategoryGroup::Savings, "#FFB300"),
    ("vacation-fund", "Vacation Fund", CategoryGroup::Savings, "#FFCA28"),
    ("general-savings", "General Savings", CategoryGroup::Savings, "#FFD54F"),
    ("stocks", "Stocks", CategoryGroup::Investments, "#6D4C41"),
    ("retirement", "Retirement", CategoryGroup::Investments, "#8D6E63"),
    ("crypto", "Crypto", CategoryGroup::Investments, "#A1887F"),
];

pub(super) fn definitions() -> Vec<CategoryDefinition> {
    STANDARD
        .iter()
        .map(|(id, name, group, color)| CategoryDefinition::new(*id, *name, *group, *color))
        .collect()
}
