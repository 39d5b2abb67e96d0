use serde::{Deserialize, Serialize};

/// One slice/bar of a category chart.
///
/// The core computes names, values and colours; the frontend only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub name: String,
    pub value: f64,
    /// Hex colour, e.g. `#FF8C00`.
    pub color: String,
}

/// A breakdown entry with its share of a total, for allocation progress bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    pub name: String,
    pub value: f64,
    /// `value / total * 100`, 0 when the total is 0.
    pub percentage: f64,
    pub color: String,
}

/// A single point of the net-worth history chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub total_gains: f64,
}
