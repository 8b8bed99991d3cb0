//! Display formatting for list and detail views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Price as a currency string, two decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Optional text fields render as a dash when absent.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_owned(),
        _ => "—".to_owned(),
    }
}
