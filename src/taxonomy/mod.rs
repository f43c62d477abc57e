//! Category taxonomy: the fixed lookup from category to group and color.
//!
//! Classification always goes through this table. Group membership is never
//! inferred from label text.

mod group;
mod standard;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::{DataError, ValidationError};

pub use group::{CategoryGroup, Flow, Framing};

const SUGGESTION_THRESHOLD: f64 = 0.85;

static STANDARD_TAXONOMY: Lazy<Taxonomy> = Lazy::new(|| {
    let definitions = standard::definitions();
    if let Err(err) = validate(&definitions) {
        error!(error = %err, "built-in category table failed validation");
    }
    Taxonomy::indexed(definitions)
});

/// One row of the taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub id: String,
    pub name: String,
    pub group: CategoryGroup,
    pub color: String,
}

impl CategoryDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        group: CategoryGroup,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group,
            color: color.into(),
        }
    }
}

/// Validated category table with case-insensitive lookup by id or name.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    definitions: Vec<CategoryDefinition>,
    index: HashMap<String, usize>,
}

impl Taxonomy {
    /// The built-in table shared by every screen.
    pub fn standard() -> &'static Taxonomy {
        &STANDARD_TAXONOMY
    }

    /// Builds a custom taxonomy, rejecting empty or duplicate keys and
    /// malformed colors.
    pub fn from_definitions(definitions: Vec<CategoryDefinition>) -> Result<Self, DataError> {
        validate(&definitions)?;
        Ok(Self::indexed(definitions))
    }

    fn indexed(definitions: Vec<CategoryDefinition>) -> Self {
        let mut index = HashMap::with_capacity(definitions.len() * 2);
        for (position, definition) in definitions.iter().enumerate() {
            index.insert(normalize(&definition.id), position);
            index.insert(normalize(&definition.name), position);
        }
        Self { definitions, index }
    }

    pub fn definitions(&self) -> &[CategoryDefinition] {
        &self.definitions
    }

    pub fn resolve(&self, key: &str) -> Option<&CategoryDefinition> {
        self.index
            .get(&normalize(key))
            .and_then(|position| self.definitions.get(*position))
    }

    /// Like [`Taxonomy::resolve`], but reports a close match on failure.
    pub fn require(&self, key: &str) -> Result<&CategoryDefinition, ValidationError> {
        self.resolve(key)
            .ok_or_else(|| ValidationError::UnknownCategory {
                key: key.to_string(),
                suggestion: self.closest_name(key),
            })
    }

    pub fn group_of(&self, key: &str) -> Option<CategoryGroup> {
        self.resolve(key).map(|definition| definition.group)
    }

    pub fn categories_in(&self, group: CategoryGroup) -> Vec<&CategoryDefinition> {
        self.definitions
            .iter()
            .filter(|definition| definition.group == group)
            .collect()
    }

    fn closest_name(&self, key: &str) -> Option<String> {
        let needle = normalize(key);
        self.definitions
            .iter()
            .map(|definition| {
                let score = strsim::jaro_winkler(&needle, &normalize(&definition.name));
                (score, definition)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, definition)| definition.name.clone())
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

fn validate(definitions: &[CategoryDefinition]) -> Result<(), DataError> {
    for definition in definitions {
        if definition.id.trim().is_empty() || definition.name.trim().is_empty() {
            return Err(DataError::InvalidTaxonomy(
                "category id and name must not be empty".into(),
            ));
        }
        if !is_hex_color(&definition.color) {
            return Err(DataError::InvalidTaxonomy(format!(
                "category `{}` has invalid color `{}`",
                definition.name, definition.color
            )));
        }
    }
    // an id may equal its own name; only collisions across rows count
    let mut owners: HashMap<String, usize> = HashMap::new();
    for (row, definition) in definitions.iter().enumerate() {
        for key in [&definition.id, &definition.name] {
            let owner = *owners.entry(normalize(key)).or_insert(row);
            if owner != row {
                return Err(duplicate(key));
            }
        }
    }
    Ok(())
}

fn duplicate(key: &str) -> DataError {
    DataError::InvalidTaxonomy(format!("duplicate category key `{key}`"))
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|ch| ch.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_passes_validation() {
        validate(Taxonomy::standard().definitions()).expect("built-in table is valid");
    }

    #[test]
    fn every_group_has_categories() {
        let taxonomy = Taxonomy::standard();
        for group in CategoryGroup::ALL {
            assert!(
                !taxonomy.categories_in(group).is_empty(),
                "{group} has no categories"
            );
        }
    }

    #[test]
    fn resolves_by_id_or_name_ignoring_case() {
        let taxonomy = Taxonomy::standard();
        let by_name = taxonomy.resolve(" groceries ").expect("name lookup");
        let by_id = taxonomy.resolve("GROCERIES").expect("id lookup");
        assert_eq!(by_name, by_id);
        assert_eq!(by_name.group, CategoryGroup::FlexibleExpenses);
        assert_eq!(
            taxonomy.group_of("Emergency Fund"),
            Some(CategoryGroup::Savings)
        );
        assert!(taxonomy.resolve("Lottery").is_none());
    }

    #[test]
    fn require_suggests_close_names() {
        let err = Taxonomy::standard()
            .require("Grocerie")
            .expect_err("unknown category");
        assert_eq!(
            err,
            ValidationError::UnknownCategory {
                key: "Grocerie".into(),
                suggestion: Some("Groceries".into()),
            }
        );
        assert!(err.to_string().contains("did you mean `Groceries`"));
    }

    #[test]
    fn custom_taxonomy_rejects_duplicate_names() {
        let definitions = vec![
            CategoryDefinition::new("food", "Food", CategoryGroup::FlexibleExpenses, "#112233"),
            CategoryDefinition::new("food-2", "FOOD", CategoryGroup::FixedExpenses, "#445566"),
        ];
        let err = Taxonomy::from_definitions(definitions).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn custom_taxonomy_allows_id_equal_to_name() {
        let definitions = vec![CategoryDefinition::new(
            "Pets",
            "pets",
            CategoryGroup::FlexibleExpenses,
            "#ABCDEF",
        )];
        let taxonomy = Taxonomy::from_definitions(definitions).expect("valid");
        assert!(taxonomy.resolve("PETS").is_some());
    }

    #[test]
    fn custom_taxonomy_rejects_bad_colors() {
        let definitions = vec![CategoryDefinition::new(
            "pets",
            "Pets",
            CategoryGroup::FlexibleExpenses,
            "blue",
        )];
        assert!(Taxonomy::from_definitions(definitions).is_err());
    }
}
