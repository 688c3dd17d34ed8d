//! Price relaxation.

/// Multiplier applied to the max price when the exact search finds nothing.
pub const PRICE_RELAXATION_FACTOR: f64 = 1.2;

/// The max price raised by [`PRICE_RELAXATION_FACTOR`]. `None` when no max price was given.
pub fn relaxed_max_price(max_price: Option<f64>) -> Option<f64> {
    max_price.map(|price| price * PRICE_RELAXATION_FACTOR)
}

/// Formats a price with thousands separators: `10800000.0` → `10,800,000`,
/// `1234.5` → `1,234.50`.
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{:02}", sign, grouped, fraction)
    }
}
