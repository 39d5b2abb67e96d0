use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Category dimension shared by asset and liability lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact match on the category display name.
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    /// `ALL` selects everything; any other text is a display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "ALL" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Named(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LiquidityFilter {
    #[default]
    All,
    Liquid,
    Illiquid,
}

impl LiquidityFilter {
    pub fn matches(&self, illiquid: bool) -> bool {
        match self {
            LiquidityFilter::All => true,
            LiquidityFilter::Liquid => !illiquid,
            LiquidityFilter::Illiquid => illiquid,
        }
    }
}

impl FromStr for LiquidityFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(LiquidityFilter::All),
            "LIQUID" => Ok(LiquidityFilter::Liquid),
            "ILLIQUID" => Ok(LiquidityFilter::Illiquid),
            other => Err(CoreError::Validation(format!("Unknown liquidity filter '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LiabilityStatusFilter {
    #[default]
    All,
    /// Balance above zero.
    Active,
    /// Balance exactly zero.
    Closed,
}

impl LiabilityStatusFilter {
    pub fn matches(&self, balance: f64) -> bool {
        match self {
            LiabilityStatusFilter::All => true,
            LiabilityStatusFilter::Active => balance > 0.0,
            LiabilityStatusFilter::Closed => balance == 0.0,
        }
    }
}

impl FromStr for LiabilityStatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(LiabilityStatusFilter::All),
            "ACTIVE" => Ok(LiabilityStatusFilter::Active),
            "CLOSED" => Ok(LiabilityStatusFilter::Closed),
            other => Err(CoreError::Validation(format!("Unknown liability status '{other}'"))),
        }
    }
}

/// Conjunctive asset list filter. The default selects every asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFilter {
    pub category: CategoryFilter,
    /// Case-insensitive substring of the asset name; empty matches all.
    pub search: String,
    pub liquidity: LiquidityFilter,
}

impl AssetFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Named(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_liquidity(mut self, liquidity: LiquidityFilter) -> Self {
        self.liquidity = liquidity;
        self
    }
}

/// Conjunctive liability list filter. The default selects every liability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiabilityFilter {
    pub category: CategoryFilter,
    pub search: String,
    pub status: LiabilityStatusFilter,
}

impl LiabilityFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = CategoryFilter::Named(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: LiabilityStatusFilter) -> Self {
        self.status = status;
        self
    }
}

/// Case-insensitive substring match used by both list filters.
pub(crate) fn name_matches(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}
