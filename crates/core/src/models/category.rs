use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A user-defined category (custom asset type or custom liability type).
///
/// Assets and liabilities reference these by id; filters match on `display_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryType {
    #[serde(default)]
    pub id: Option<i64>,

    /// Internal name, e.g. `MUTUAL_FUND`.
    #[serde(default)]
    pub type_name: Option<String>,

    pub display_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

pub type CustomAssetType = CategoryType;
pub type CustomLiabilityType = CategoryType;

impl CategoryType {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: None,
            type_name: None,
            display_name: display_name.into(),
            description: None,
            is_active: true,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.display_name.trim().is_empty() {
            return Err(CoreError::Validation("Please enter a display name".into()));
        }
        Ok(())
    }
}

/// Active categories only, in the order the backend returned them.
pub fn active_categories(types: Vec<CategoryType>) -> Vec<CategoryType> {
    types.into_iter().filter(|t| t.is_active).collect()
}
