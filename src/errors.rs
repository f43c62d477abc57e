use thiserror::Error;

/// Error type for loading and validating Ordino data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid taxonomy: {0}")]
    InvalidTaxonomy(String),
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Rejected inputs. Raised at the operation boundary before any computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid period: month {month} is outside 0-11")]
    InvalidPeriod { month: u32 },
    #[error("Invalid period: year {year} is outside the supported range")]
    InvalidYear { year: i32 },
    #[error("Transaction {id} has negative amount {amount}")]
    NegativeAmount { id: String, amount: String },
    #[error("Budget for `{category}` has negative limit {limit}")]
    NegativeBudget { category: String, limit: String },
    #[error("Receipt count cannot be negative: {0}")]
    NegativeCount(i64),
    #[error("Unknown category `{key}`{}", suggestion_suffix(.suggestion))]
    UnknownCategory {
        key: String,
        suggestion: Option<String>,
    },
    #[error("Category `{0}` has more than one budget")]
    DuplicateBudget(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean `{name}`?)"),
        None => String::new(),
    }
}
