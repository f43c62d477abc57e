use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier handed out by the backend. Older endpoints use numeric
/// keys, newer ones use strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ExternalId {
    Number(i64),
    Text(String),
}

impl From<i64> for ExternalId {
    fn from(value: i64) -> Self {
        ExternalId::Number(value)
    }
}

impl From<&str> for ExternalId {
    fn from(value: &str) -> Self {
        ExternalId::Text(value.to_string())
    }
}

impl From<String> for ExternalId {
    fn from(value: String) -> Self {
        ExternalId::Text(value)
    }
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalId::Number(value) => write!(f, "{value}"),
            ExternalId::Text(value) => f.write_str(value),
        }
    }
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use rust_decimal;
pub use serde;
