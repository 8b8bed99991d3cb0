use super::{is_plausible_email, validate_login};
use crate::pages::register::validate_register;

// ==========================================================================
// Email plausibility
// ==========================================================================

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_plausible_email("ada@example.com"));
    assert!(is_plausible_email("a.b+tag@sub.example.co.uk"));
}

#[test]
fn rejects_structurally_broken_addresses() {
    assert!(!is_plausible_email(""));
    assert!(!is_plausible_email("no-at-sign.example.com"));
    assert!(!is_plausible_email("@example.com"));
    assert!(!is_plausible_email("ada@nodot"));
    assert!(!is_plausible_email("ada@.example.com"));
    assert!(!is_plausible_email("ada@example.com."));
}

// ==========================================================================
// Login validation
// ==========================================================================

#[test]
fn login_requires_valid_email_first() {
    let message = validate_login("bad", "secret1").expect("should reject");
    assert!(message.contains("email"));
}

#[test]
fn login_rejects_short_password() {
    let message = validate_login("ada@example.com", "12345").expect("should reject");
    assert!(message.contains("at least"));
}

#[test]
fn login_accepts_valid_input() {
    assert_eq!(validate_login("ada@example.com", "123456"), None);
}

// ==========================================================================
// Register validation
// ==========================================================================

#[test]
fn register_requires_name() {
    let message = validate_register("", "ada@example.com", "secret1").expect("should reject");
    assert!(message.contains("Name"));
}

#[test]
fn register_applies_same_email_and_password_rules() {
    assert!(validate_register("Ada", "bad", "secret1").is_some());
    assert!(validate_register("Ada", "ada@example.com", "12345").is_some());
    assert_eq!(validate_register("Ada", "ada@example.com", "secret1"), None);
}
