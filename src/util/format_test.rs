use super::*;

#[test]
fn price_renders_two_decimals() {
    assert_eq!(format_price(9.9), "$9.90");
    assert_eq!(format_price(0.0), "$0.00");
    assert_eq!(format_price(1234.5), "$1234.50");
}

#[test]
fn missing_optional_text_renders_a_dash() {
    assert_eq!(or_dash(None), "—");
    assert_eq!(or_dash(Some("  ")), "—");
    assert_eq!(or_dash(Some("Berlin")), "Berlin");
}
