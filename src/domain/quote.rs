//! Price quote result types.
//!
//! Represents the output of a single model prediction. Quotes are shown
//! once and never stored.

use serde::{Deserialize, Serialize};

use super::vehicle::VehicleSpec;

/// A predicted price for one vehicle configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Predicted price in US dollars
    pub price: f64,

    /// The configuration that was priced
    pub spec: VehicleSpec,

    /// When the prediction was made
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PriceQuote {
    /// Create a new quote stamped with the current time.
    #[must_use]
    pub fn new(price: f64, spec: VehicleSpec) -> Self {
        Self {
            price,
            spec,
            created_at: chrono::Utc::now(),
        }
    }

    /// Price formatted for display (`$55,000.00`).
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format_usd(self.price)
    }
}

impl std::fmt::Display for PriceQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted_price())
    }
}

/// Format a dollar amount with thousands separators and two decimals.
///
/// Negative amounts keep the sign after the dollar sign (`$-5.00`).
#[must_use]
pub fn format_usd(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (whole, cents) = match raw.split_once('.') {
        Some(parts) => parts,
        // NaN / inf have no fractional part
        None => return format!("${raw}"),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(55000.0), "$55,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(123.4), "$123.40");
        assert_eq!(format_usd(-5.0), "$-5.00");
    }

    #[test]
    fn test_quote_display() {
        let quote = PriceQuote::new(155_500.0, VehicleSpec::default());
        assert_eq!(quote.to_string(), "$155,500.00");
        assert_eq!(quote.spec, VehicleSpec::default());
    }
}
