use super::{opt_field, validate_book};

// ==========================================================================
// Field validation
// ==========================================================================

#[test]
fn requires_title_then_isbn() {
    assert_eq!(
        validate_book("", "978-1", "9.99", Some(1)),
        Err("Title is required.".to_owned())
    );
    assert_eq!(
        validate_book("Dune", "", "9.99", Some(1)),
        Err("ISBN is required.".to_owned())
    );
}

#[test]
fn parses_price_and_rejects_garbage() {
    assert_eq!(validate_book("Dune", "978-1", "12.50", Some(1)), Ok(12.50));
    assert!(validate_book("Dune", "978-1", "cheap", Some(1)).is_err());
    assert!(validate_book("Dune", "978-1", "", Some(1)).is_err());
}

#[test]
fn rejects_negative_price() {
    let err = validate_book("Dune", "978-1", "-0.01", Some(1)).unwrap_err();
    assert!(err.contains("negative"));
}

#[test]
fn zero_price_is_allowed() {
    assert_eq!(validate_book("Dune", "978-1", "0", Some(1)), Ok(0.0));
}

#[test]
fn requires_an_author_selection() {
    let err = validate_book("Dune", "978-1", "9.99", None).unwrap_err();
    assert!(err.contains("author"));
}

// ==========================================================================
// Optional field normalization
// ==========================================================================

#[test]
fn blank_optional_fields_become_none() {
    assert_eq!(opt_field(""), None);
    assert_eq!(opt_field("   "), None);
    assert_eq!(opt_field(" desc "), Some("desc".to_owned()));
}
