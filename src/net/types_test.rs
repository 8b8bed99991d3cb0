use super::*;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_response_deserializes_camel_case() {
    let json = r#"{
        "accessToken": "tok1",
        "tokenType": "Bearer",
        "expiresIn": 3600,
        "user": {"id": 1, "name": "A", "email": "a@b.com", "role": "USER", "enabled": true}
    }"#;
    let resp: AuthResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.access_token, "tok1");
    assert_eq!(resp.token_type, "Bearer");
    assert_eq!(resp.user.role, UserRole::User);
    assert!(resp.user.enabled);
}

#[test]
fn user_role_admin_round_trips_uppercase() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
    let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(role, UserRole::Admin);
}

#[test]
fn user_request_omits_password_when_absent() {
    let req = UserRequest {
        name: "B".to_owned(),
        email: "b@c.com".to_owned(),
        password: None,
        role: UserRole::User,
        enabled: true,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("password").is_none());
}

// =============================================================
// Entity payloads
// =============================================================

#[test]
fn book_deserializes_with_embedded_author_and_stores() {
    let json = r#"{
        "id": 7,
        "title": "Dune",
        "isbn": "978-0441172719",
        "price": 9.99,
        "publishedDate": "1965-08-01",
        "author": {"id": 3, "name": "Frank Herbert"},
        "stores": [{"id": 5, "name": "Main St"}]
    }"#;
    let book: Book = serde_json::from_str(json).unwrap();
    assert_eq!(book.author.as_ref().map(|a| a.id), Some(3));
    assert_eq!(book.stores.as_ref().map(Vec::len), Some(1));
    assert!(book.description.is_none());
}

#[test]
fn book_request_serializes_snake_fields_as_camel() {
    let req = BookRequest {
        title: "Dune".to_owned(),
        isbn: "978".to_owned(),
        description: None,
        price: 9.99,
        published_date: Some("1965-08-01".to_owned()),
        author_id: 3,
        store_ids: Some(vec![5, 6]),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["authorId"], 3);
    assert_eq!(json["publishedDate"], "1965-08-01");
    assert_eq!(json["storeIds"][1], 6);
    assert!(json.get("description").is_none());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_response_deserializes_metadata() {
    let json = r#"{
        "content": [{"id": 1, "name": "A"}],
        "page": 0,
        "size": 20,
        "totalElements": 95,
        "totalPages": 5,
        "first": true,
        "last": false,
        "hasNext": true,
        "hasPrevious": false
    }"#;
    let page: PageResponse<Author> = serde_json::from_str(json).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_pages, 5);
    assert!(page.first);
    assert!(!page.last);
    assert!(page.has_next);
}

#[test]
fn page_response_tolerates_missing_has_flags() {
    let json = r#"{
        "content": [],
        "page": 0,
        "size": 10,
        "totalElements": 0,
        "totalPages": 0,
        "first": true,
        "last": true
    }"#;
    let page: PageResponse<Store> = serde_json::from_str(json).unwrap();
    assert!(!page.has_next);
    assert!(!page.has_previous);
}

#[test]
fn with_size_resets_to_page_zero() {
    let req = PageRequest { page: 4, size: 20, sort_by: None, sort_dir: None };
    let resized = req.with_size(50);
    assert_eq!(resized.page, 0);
    assert_eq!(resized.size, 50);
}

#[test]
fn with_page_keeps_size_and_sort() {
    let req = PageRequest {
        page: 0,
        size: 10,
        sort_by: Some("title".to_owned()),
        sort_dir: Some(SortDir::Desc),
    };
    let moved = req.with_page(3);
    assert_eq!(moved.page, 3);
    assert_eq!(moved.size, 10);
    assert_eq!(moved.sort_by.as_deref(), Some("title"));
    assert_eq!(moved.sort_dir, Some(SortDir::Desc));
}
