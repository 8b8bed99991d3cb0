use super::validate_user;

#[test]
fn creating_requires_all_fields() {
    assert!(validate_user("", "ada@example.com", "secret1", true).is_some());
    assert!(validate_user("Ada", "bad", "secret1", true).is_some());
    assert!(validate_user("Ada", "ada@example.com", "", true).is_some());
    assert_eq!(validate_user("Ada", "ada@example.com", "secret1", true), None);
}

#[test]
fn editing_allows_blank_password() {
    assert_eq!(validate_user("Ada", "ada@example.com", "", false), None);
}

#[test]
fn editing_still_checks_a_typed_password() {
    let message =
        validate_user("Ada", "ada@example.com", "123", false).expect("should reject");
    assert!(message.contains("at least"));
}
