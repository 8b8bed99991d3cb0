use super::*;

// =============================================================
// Query-string construction
// =============================================================

#[test]
fn list_query_always_sends_page_and_size() {
    let req = PageRequest { page: 3, size: 50, sort_by: None, sort_dir: None };
    assert_eq!(list_query(&req), "page=3&size=50");
}

#[test]
fn list_query_appends_sort_when_present() {
    let req = PageRequest {
        page: 0,
        size: 20,
        sort_by: Some("title".to_owned()),
        sort_dir: Some(crate::net::types::SortDir::Desc),
    };
    assert_eq!(list_query(&req), "page=0&size=20&sortBy=title&sortDir=desc");
}

// =============================================================
// Empty-query-is-list law
// =============================================================

#[test]
fn blank_search_takes_the_list_path() {
    let req = PageRequest::default();
    assert_eq!(page_path("books", Some("title"), "", &req), "/books?page=0&size=20");
}

#[test]
fn whitespace_search_takes_the_list_path() {
    let req = PageRequest::default();
    assert_eq!(
        page_path("authors", Some("name"), "   ", &req),
        format!("/authors?{}", list_query(&req))
    );
}

#[test]
fn non_blank_search_takes_the_search_endpoint() {
    let req = PageRequest { page: 2, size: 10, sort_by: None, sort_dir: None };
    assert_eq!(
        page_path("books", Some("title"), "dune", &req),
        "/books/search?title=dune&page=2&size=10"
    );
}

#[test]
fn search_query_is_url_encoded() {
    let req = PageRequest::default();
    assert_eq!(
        page_path("stores", Some("name"), "main & co", &req),
        "/stores/search?name=main+%26+co&page=0&size=20"
    );
}

#[test]
fn resource_without_search_param_always_lists() {
    // Users have no search endpoint; any query falls back to the list
    // path instead of fabricating a /users/search URL.
    let req = PageRequest::default();
    assert_eq!(page_path("users", None, "ada", &req), "/users?page=0&size=20");
    assert_eq!(page_path("users", None, "", &req), "/users?page=0&size=20");
}

// =============================================================
// Error fallbacks
// =============================================================

#[test]
fn fallback_messages_name_the_resource() {
    assert_eq!(load_failed("books"), "Failed to load books");
    assert_eq!(save_failed("authors"), "Failed to save authors");
    assert_eq!(delete_failed("stores"), "Failed to delete stores");
}
