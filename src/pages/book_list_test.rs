use super::parse_price_range;

// ==========================================================================
// Price range parsing
// ==========================================================================

#[test]
fn parses_plain_decimal_bounds() {
    assert_eq!(parse_price_range("1.50", "20"), Ok((1.50, 20.0)));
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(parse_price_range(" 5 ", " 10 "), Ok((5.0, 10.0)));
}

#[test]
fn rejects_non_numeric_input() {
    assert!(parse_price_range("abc", "10").is_err());
    assert!(parse_price_range("5", "").is_err());
}

#[test]
fn rejects_negative_prices() {
    let err = parse_price_range("-1", "10").unwrap_err();
    assert!(err.contains("negative"));
}

#[test]
fn rejects_inverted_range() {
    let err = parse_price_range("10", "5").unwrap_err();
    assert!(err.contains("exceed"));
}

#[test]
fn accepts_equal_bounds() {
    assert_eq!(parse_price_range("7", "7"), Ok((7.0, 7.0)));
}
