use serde::{Deserialize, Serialize};

/// Weekly snapshot history (`GET /api/portfolio-snapshots/history...`).
///
/// Parallel arrays: index `i` of every series belongs to `dates[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHistory {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub total_assets: Vec<Option<f64>>,
    #[serde(default)]
    pub total_liabilities: Vec<Option<f64>>,
    #[serde(default)]
    pub net_worth: Vec<Option<f64>>,
    #[serde(default)]
    pub total_gains: Vec<Option<f64>>,
}

/// Default number of weeks of history requested.
pub const DEFAULT_HISTORY_WEEKS: u32 = 12;

/// Which slice of the portfolio a history chart shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryScope {
    Overview,
    Asset(i64),
    AssetType(String),
    Liability(i64),
    LiabilityType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub scope: HistoryScope,
    pub weeks: u32,
}

impl HistoryFilter {
    pub fn overview() -> Self {
        Self::new(HistoryScope::Overview)
    }

    pub fn new(scope: HistoryScope) -> Self {
        Self {
            scope,
            weeks: DEFAULT_HISTORY_WEEKS,
        }
    }

    pub fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = weeks;
        self
    }

    /// Unencoded path segments below the API root, e.g.
    /// `["portfolio-snapshots", "history", "asset-type", "Mutual Funds"]`.
    pub fn path_segments(&self) -> Vec<String> {
        let mut segments = vec!["portfolio-snapshots".to_string(), "history".to_string()];
        match &self.scope {
            HistoryScope::Overview => {}
            HistoryScope::Asset(id) => {
                segments.push("asset".into());
                segments.push(id.to_string());
            }
            HistoryScope::AssetType(name) => {
                segments.push("asset-type".into());
                segments.push(name.clone());
            }
            HistoryScope::Liability(id) => {
                segments.push("liability".into());
                segments.push(id.to_string());
            }
            HistoryScope::LiabilityType(name) => {
                segments.push("liability-type".into());
                segments.push(name.clone());
            }
        }
        segments
    }
}

impl Default for HistoryFilter {
    fn default() -> Self {
        Self::overview()
    }
}
