use super::*;

#[test]
fn api_url_prefixes_base_path() {
    assert_eq!(api_url("/books/7"), "/api/books/7");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok1"), "Bearer tok1");
}

#[test]
fn extract_error_message_prefers_server_message() {
    let body = r#"{"message": "ISBN already exists"}"#;
    assert_eq!(extract_error_message(body, "Failed to save book"), "ISBN already exists");
}

#[test]
fn extract_error_message_falls_back_on_non_json() {
    assert_eq!(extract_error_message("<html>502</html>", "Failed to load"), "Failed to load");
}

#[test]
fn extract_error_message_falls_back_on_missing_field() {
    assert_eq!(extract_error_message(r#"{"error": "x"}"#, "Failed to load"), "Failed to load");
}

#[test]
fn extract_error_message_falls_back_on_empty_body() {
    assert_eq!(extract_error_message("", "Something went wrong"), "Something went wrong");
}
