use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::amount::{finite_or_zero, lenient_f64};

/// Category name → aggregated value, in the order the backend produced it.
///
/// Kept as an association list rather than a hash map so that ties in a
/// value-sorted chart keep their original relative order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    entries: Vec<(String, f64)>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a bucket. Overwriting keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        let value = finite_or_zero(Some(value));
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| *v).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut breakdown = Breakdown::new();
        for (name, value) in iter {
            breakdown.insert(name, value);
        }
        breakdown
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = Breakdown;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of category name to number")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut breakdown = Breakdown::new();
                while let Some((name, value)) = access.next_entry::<String, Option<f64>>()? {
                    breakdown.insert(name, finite_or_zero(value));
                }
                Ok(breakdown)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Breakdown::new())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Breakdown::new())
            }
        }

        deserializer.deserialize_any(BreakdownVisitor)
    }
}

/// Wrapper matching the `{ typeBreakdown: {...} }` shape of the summary payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeBreakdown {
    #[serde(default)]
    pub type_breakdown: Breakdown,
}

/// Server-computed portfolio totals (`GET /api/assets/summary`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_value: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_gain_loss: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_gain_loss_percentage: f64,

    #[serde(default)]
    pub total_assets: u64,

    #[serde(default)]
    pub breakdown: TypeBreakdown,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_liabilities: f64,

    #[serde(default)]
    pub total_liability_count: u64,

    #[serde(default)]
    pub liability_breakdown: TypeBreakdown,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub net_worth: f64,
}

/// Client-side totals over a filtered asset list, in the base currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    /// Sum of `purchase_price * quantity`, normalised.
    pub total_purchase_price: f64,

    pub total_current_value: f64,

    /// `total_current_value - total_purchase_price`
    pub total_gains: f64,

    /// `total_gains / total_purchase_price * 100`, or 0 when nothing was paid.
    pub total_gains_percentage: f64,

    /// Number of assets that passed the filter.
    pub asset_count: usize,

    /// Currency codes with no configured rate; their amounts were summed at rate 1.
    pub unconverted_currencies: Vec<String>,
}

/// Client-side totals over a filtered liability list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiabilitySummary {
    pub total_current_balance: f64,
    pub total_original_amount: f64,
    /// `total_original_amount - total_current_balance`
    pub total_paid_amount: f64,
    pub overall_paid_off_percentage: f64,
    pub liability_count: usize,
}
