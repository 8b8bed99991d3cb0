//! Generic REST client for one server-paginated resource.
//!
//! DESIGN
//! ======
//! Books, authors, stores, and users expose the same list/search/CRUD
//! surface; one parameterized client instantiated per resource replaces
//! four hand-duplicated copies. Page and size are re-sent on every list
//! call — the server is the source of truth for clamping out-of-range
//! pages.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api;
use super::types::{Book, BookRequest, PageRequest, PageResponse, User, UserRequest};
use super::types::{Author, AuthorRequest, Store, StoreRequest};

/// Client for one REST resource, generic over the entity type `T` and
/// its create/update request type `R`. Resources without a server
/// search endpoint carry no search parameter; their `search` degrades
/// to `list`.
pub struct ResourceClient<T, R> {
    base: &'static str,
    search_param: Option<&'static str>,
    label: &'static str,
    _marker: PhantomData<fn() -> (T, R)>,
}

pub const BOOKS: ResourceClient<Book, BookRequest> =
    ResourceClient::new("books", Some("title"), "books");
pub const AUTHORS: ResourceClient<Author, AuthorRequest> =
    ResourceClient::new("authors", Some("name"), "authors");
pub const STORES: ResourceClient<Store, StoreRequest> =
    ResourceClient::new("stores", Some("name"), "stores");
pub const USERS: ResourceClient<User, UserRequest> = ResourceClient::new("users", None, "users");

impl<T, R> ResourceClient<T, R>
where
    T: DeserializeOwned,
    R: Serialize,
{
    pub const fn new(
        base: &'static str,
        search_param: Option<&'static str>,
        label: &'static str,
    ) -> Self {
        Self { base, search_param, label, _marker: PhantomData }
    }

    /// Fetch one page of the collection.
    pub async fn list(
        &self,
        token: Option<&str>,
        req: &PageRequest,
    ) -> Result<PageResponse<T>, String> {
        let path = format!("/{}?{}", self.base, list_query(req));
        api::get_json(&path, token, &load_failed(self.label)).await
    }

    /// Fetch one filtered page. A blank query is defined as `list` —
    /// the two must return identical results for the same page/size.
    pub async fn search(
        &self,
        token: Option<&str>,
        query: &str,
        req: &PageRequest,
    ) -> Result<PageResponse<T>, String> {
        let path = page_path(self.base, self.search_param, query, req);
        api::get_json(&path, token, "Search failed").await
    }

    /// Fetch a single entity by id. Failure propagates to the caller,
    /// which decides navigation (e.g. redirect to the list view).
    pub async fn get_by_id(&self, token: Option<&str>, id: i64) -> Result<T, String> {
        let path = format!("/{}/{id}", self.base);
        api::get_json(&path, token, &load_failed(self.label)).await
    }

    pub async fn create(&self, token: Option<&str>, body: &R) -> Result<T, String> {
        let path = format!("/{}", self.base);
        api::post_json(&path, token, body, &save_failed(self.label)).await
    }

    pub async fn update(&self, token: Option<&str>, id: i64, body: &R) -> Result<T, String> {
        let path = format!("/{}/{id}", self.base);
        api::put_json(&path, token, body, &save_failed(self.label)).await
    }

    pub async fn delete(&self, token: Option<&str>, id: i64) -> Result<(), String> {
        let path = format!("/{}/{id}", self.base);
        api::delete(&path, token, &delete_failed(self.label)).await
    }
}

/// Page of books written by one author.
pub async fn books_by_author(
    token: Option<&str>,
    author_id: i64,
    req: &PageRequest,
) -> Result<PageResponse<Book>, String> {
    let path = format!("/books/author/{author_id}?{}", list_query(req));
    api::get_json(&path, token, "Failed to load books").await
}

/// Page of books carried by one store.
pub async fn books_by_store(
    token: Option<&str>,
    store_id: i64,
    req: &PageRequest,
) -> Result<PageResponse<Book>, String> {
    let path = format!("/books/store/{store_id}?{}", list_query(req));
    api::get_json(&path, token, "Failed to load books").await
}

/// Page of books priced within `[min_price, max_price]`.
pub async fn books_by_price_range(
    token: Option<&str>,
    min_price: f64,
    max_price: f64,
    req: &PageRequest,
) -> Result<PageResponse<Book>, String> {
    let path = format!(
        "/books/price-range?minPrice={min_price}&maxPrice={max_price}&{}",
        list_query(req)
    );
    api::get_json(&path, token, "Failed to load books").await
}

/// Query string for a list call: page/size always, sort when present.
pub fn list_query(req: &PageRequest) -> String {
    let mut query = format!("page={}&size={}", req.page, req.size);
    if let Some(sort_by) = &req.sort_by {
        query.push_str("&sortBy=");
        query.push_str(sort_by);
    }
    if let Some(dir) = req.sort_dir {
        query.push_str("&sortDir=");
        query.push_str(dir.as_str());
    }
    query
}

/// Request path for a browse-or-search page fetch. Blank queries take
/// the plain list endpoint so `search("")` and `list` are the same call;
/// so does any query against a resource with no search parameter.
pub fn page_path(
    base: &str,
    search_param: Option<&str>,
    query: &str,
    req: &PageRequest,
) -> String {
    let trimmed = query.trim();
    let (Some(param), false) = (search_param, trimmed.is_empty()) else {
        return format!("/{base}?{}", list_query(req));
    };
    let encoded: String = form_urlencoded::byte_serialize(trimmed.as_bytes()).collect();
    format!("/{base}/search?{param}={encoded}&page={}&size={}", req.page, req.size)
}

fn load_failed(label: &str) -> String {
    format!("Failed to load {label}")
}

fn save_failed(label: &str) -> String {
    format!("Failed to save {label}")
}

fn delete_failed(label: &str) -> String {
    format!("Failed to delete {label}")
}
