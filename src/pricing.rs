//! Pricing rules for inventory products
//!
//! The effective price is the price actually charged after any discount is
//! applied. Rounding happens at display time only (two decimal places); the
//! stored value is never rounded.

/// Computes the effective price for a base price and an optional discount.
///
/// With a discount of `d` percent the result is `base_price * (1 - d/100)`.
/// Without a discount the base price is returned unchanged.
///
/// The discount is not range-checked: values outside [0, 100] are applied
/// arithmetically and may produce a negative or inflated price.
pub fn effective_price(base_price: f64, discount_percentage: Option<i64>) -> f64 {
    match discount_percentage {
        Some(d) => base_price - base_price * (d as f64 / 100.0),
        None => base_price,
    }
}

/// Formats a price for display, rounded to two decimal places.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
