//! Value formatting for documents

use crate::metrics::MetricValue;
use crate::models::Money;

/// Currency with grouped thousands and two decimals, e.g. `-$1,234.56`
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let num = amount.abs().as_f64();
    format!("{sign}{symbol}{}", format_num::format_num!(",.2", num))
}

/// Percentage with two decimals, e.g. `20.00%`
pub fn format_percent(pct: f64) -> String {
    format!("{:.2}%", pct)
}

pub fn format_metric(value: MetricValue, symbol: &str) -> String {
    match value {
        MetricValue::Currency(amount) => format_currency(amount, symbol),
        MetricValue::Percent(pct) => format_percent(pct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::from_cents(123456), "$"), "$1,234.56");
        assert_eq!(format_currency(Money::from_cents(-123456), "$"), "-$1,234.56");
        assert_eq!(format_currency(Money::zero(), "$"), "$0.00");
        assert_eq!(format_currency(Money::from_cents(5), "€"), "€0.05");
        assert_eq!(
            format_currency(Money::from_cents(100000000), "$"),
            "$1,000,000.00"
        );
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(20.0), "20.00%");
        assert_eq!(format_percent(33.333333), "33.33%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(-12.5), "-12.50%");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(
            format_metric(MetricValue::Currency(Money::from_cents(40000)), "$"),
            "$400.00"
        );
        assert_eq!(format_metric(MetricValue::Percent(20.0), "$"), "20.00%");
    }
}
