use serde::{Deserialize, Deserializer};

/// Coerce a possibly-missing or non-finite number to a usable value.
///
/// `None`, `NaN` and the infinities all become `0.0`. Every monetary input
/// passes through here before it reaches a sum.
#[inline]
pub fn finite_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// `a + b` clamped to `±f64::MAX`, so running totals never become infinite.
#[inline]
pub fn saturating_add(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum
    } else if sum.is_nan() {
        0.0
    } else {
        f64::MAX.copysign(sum)
    }
}

/// `(numerator / denominator) * 100`, or `0.0` when the denominator is not positive.
#[inline]
pub fn percentage_of(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 && denominator.is_finite() {
        let pct = (numerator / denominator) * 100.0;
        if pct.is_finite() { pct } else { 0.0 }
    } else {
        0.0
    }
}

/// Serde helper: a required number that the backend may still send as `null`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(finite_or_zero(value))
}

/// Serde helper: a flag the backend may send as `null`, read as `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
