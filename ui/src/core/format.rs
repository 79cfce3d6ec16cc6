//! Formatting helpers for presenting money and audience metrics.

/// Format an INR amount like `₹12,345.67` (western thousand grouping, two
/// decimal places).
pub fn format_inr(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{grouped}.{frac:02}")
}

/// Compact audience counts: `950`, `12.5K`, `1.2M`.
pub fn format_count(value: u32) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", f64::from(value) / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", f64::from(value) / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Percentage with two decimals, e.g. `3.25%`.
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inr_groups_thousands() {
        assert_eq!(format_inr(500.0), "₹500.00");
        assert_eq!(format_inr(12345.67), "₹12,345.67");
        assert_eq!(format_inr(500_000.0), "₹500,000.00");
        assert_eq!(format_inr(1_234_567.89), "₹1,234,567.89");
    }

    #[test]
    fn inr_rounds_to_cents() {
        assert_eq!(format_inr(999.999), "₹1,000.00");
        assert_eq!(format_inr(-42.5), "-₹42.50");
    }

    #[test]
    fn counts_compact() {
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(12_500), "12.5K");
        assert_eq!(format_count(1_200_000), "1.2M");
    }

    #[test]
    fn pct_two_decimals() {
        assert_eq!(format_pct(3.254), "3.25%");
        assert_eq!(format_pct(0.0), "0.00%");
    }
}
