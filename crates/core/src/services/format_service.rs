use crate::models::amount::finite_or_zero;
use crate::models::currency::DEFAULT_BASE_CURRENCY;
use crate::models::settings::validate_currency_code;

/// Renders amounts the way the web UI shows them: en-IN digit grouping
/// (`12,34,567.00`), a currency symbol, and zero instead of blanks.
pub struct FormatService {
    base_currency: String,
    display_currency: String,
}

impl FormatService {
    pub fn new(base_currency: &str, display_currency: &str) -> Self {
        Self {
            base_currency: base_currency.trim().to_uppercase(),
            display_currency: display_currency.trim().to_uppercase(),
        }
    }

    /// Two-decimal currency string. `currency` defaults to the display currency.
    /// A missing or non-finite value renders as zero in the base currency.
    pub fn format_currency(&self, value: Option<f64>, currency: Option<&str>) -> String {
        match value {
            Some(v) if v.is_finite() => render(v, self.resolve_code(currency), 2),
            _ => self.format_zero(),
        }
    }

    /// Currency string rounded to whole units, as used in list and budget tables.
    pub fn format_currency_rounded(&self, value: Option<f64>, currency: Option<&str>) -> String {
        match value {
            Some(v) if v.is_finite() => render(v, self.resolve_code(currency), 0),
            _ => self.format_zero(),
        }
    }

    /// Blank codes mean the display currency; malformed ones render in the base currency.
    fn resolve_code<'a>(&'a self, currency: Option<&'a str>) -> &'a str {
        match currency.map(str::trim).filter(|c| !c.is_empty()) {
            None => self.display_currency.as_str(),
            Some(code) if validate_currency_code(code).is_ok() => code,
            Some(_) => self.base_currency.as_str(),
        }
    }

    /// Zero in the base currency, e.g. `₹0.00`.
    pub fn format_zero(&self) -> String {
        render(0.0, &self.base_currency, 2)
    }

    /// `12.35%`; absent, zero and non-finite values all render as `0.00%`.
    pub fn format_percentage(&self, value: Option<f64>) -> String {
        let v = finite_or_zero(value);
        format!("{v:.2}%")
    }

    /// Axis-label style: `1.5 Cr`, `2.3 L`, `4.0 K`, or the plain number below a thousand.
    pub fn format_compact(&self, value: f64) -> String {
        let v = finite_or_zero(Some(value));
        if v >= 10_000_000.0 {
            format!("{:.1} Cr", v / 10_000_000.0)
        } else if v >= 100_000.0 {
            format!("{:.1} L", v / 100_000.0)
        } else if v >= 1_000.0 {
            format!("{:.1} K", v / 1_000.0)
        } else {
            v.to_string()
        }
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_CURRENCY, DEFAULT_BASE_CURRENCY)
    }
}

fn currency_prefix(code: &str) -> String {
    match code.trim().to_uppercase().as_str() {
        "INR" => "₹".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        other => format!("{other} "),
    }
}

fn render(value: f64, code: &str, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    // Rounding can turn a tiny negative into zero; never show "-₹0.00".
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&currency_prefix(code));
    out.push_str(&group_indian(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Indian grouping: the last three digits, then pairs (`1234567` → `12,34,567`).
pub fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
