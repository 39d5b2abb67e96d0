use log::warn;

use crate::models::amount::{finite_or_zero, percentage_of};
use crate::models::chart::{AllocationRow, HistoryPoint, SeriesEntry};
use crate::models::history::PortfolioHistory;
use crate::models::summary::Breakdown;

/// Asset category colours, assigned by rank. Changing the order changes
/// which category gets which colour, so append rather than reorder.
pub const ASSET_PALETTE: &[&str] = &[
    "#FF8C00", "#0099CC", "#99CC00", "#9900CC", "#00CC99", "#FF00FF", "#808080", "#00FF00",
    "#FF0000", "#00FFFF", "#FF6600", "#9900FF", "#0000FF", "#00FF99", "#CC00FF", "#CC9900",
    "#FF0099", "#99FF00", "#0099FF", "#CC0099",
];

/// Liability category colours, red through green.
pub const LIABILITY_PALETTE: &[&str] = &[
    "#EF4444", "#F97316", "#F59E0B", "#EAB308", "#84CC16", "#22C55E", "#10B981",
];

/// Budget income-source colours.
pub const BUDGET_PALETTE: &[&str] = &[
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
    "#f97316", "#6366f1",
];

/// Turns breakdowns and history payloads into chart-ready series.
///
/// The core computes all the numbers; the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build a ranked series using [`ASSET_PALETTE`].
    pub fn build_series(&self, breakdown: &Breakdown) -> Vec<SeriesEntry> {
        self.build_series_with_palette(breakdown, ASSET_PALETTE)
    }

    /// Drop non-positive buckets, sort by value descending (stable: ties keep
    /// breakdown order), then colour the i-th entry with `palette[i % len]`.
    pub fn build_series_with_palette(&self, breakdown: &Breakdown, palette: &[&str]) -> Vec<SeriesEntry> {
        let palette = if palette.is_empty() {
            warn!("Empty chart palette supplied; using the asset palette");
            ASSET_PALETTE
        } else {
            palette
        };

        let mut ranked: Vec<(&str, f64)> = breakdown.iter().filter(|(_, v)| *v > 0.0).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        ranked
            .into_iter()
            .enumerate()
            .map(|(i, (name, value))| SeriesEntry {
                name: name.to_string(),
                value,
                color: palette_color(palette, i).to_string(),
            })
            .collect()
    }

    /// Series plus each entry's share of `total` (usually the summary's total value).
    pub fn allocation_rows(&self, breakdown: &Breakdown, total: f64) -> Vec<AllocationRow> {
        let total = finite_or_zero(Some(total));
        self.build_series(breakdown)
            .into_iter()
            .map(|entry| AllocationRow {
                percentage: percentage_of(entry.value, total),
                name: entry.name,
                value: entry.value,
                color: entry.color,
            })
            .collect()
    }

    /// Zip the parallel history arrays into points, keeping index alignment.
    ///
    /// If the arrays disagree in length the extra tail is dropped, since a
    /// point with a missing series cannot be placed on every line.
    pub fn build_time_series(&self, history: &PortfolioHistory) -> Vec<HistoryPoint> {
        let len = [
            history.dates.len(),
            history.total_assets.len(),
            history.total_liabilities.len(),
            history.net_worth.len(),
            history.total_gains.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0);

        if len != history.dates.len()
            || len != history.total_assets.len()
            || len != history.total_liabilities.len()
            || len != history.net_worth.len()
            || len != history.total_gains.len()
        {
            warn!(
                "History arrays differ in length (dates={}, assets={}, liabilities={}, net_worth={}, gains={}); truncating to {len}",
                history.dates.len(),
                history.total_assets.len(),
                history.total_liabilities.len(),
                history.net_worth.len(),
                history.total_gains.len(),
            );
        }

        (0..len)
            .map(|i| HistoryPoint {
                date: history.dates[i].clone(),
                total_assets: finite_or_zero(history.total_assets[i]),
                total_liabilities: finite_or_zero(history.total_liabilities[i]),
                net_worth: finite_or_zero(history.net_worth[i]),
                total_gains: finite_or_zero(history.total_gains[i]),
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// Colour for rank `index`, wrapping around the palette.
/// An empty palette falls back to [`ASSET_PALETTE`].
pub fn palette_color<'a>(palette: &[&'a str], index: usize) -> &'a str {
    if palette.is_empty() {
        return ASSET_PALETTE[index % ASSET_PALETTE.len()];
    }
    palette[index % palette.len()]
}
