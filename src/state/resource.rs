//! Held state for one server-paginated resource, generic over entity type.
//!
//! DESIGN
//! ======
//! One `PagedState<T>` per resource (books, authors, stores, users) lives
//! in a root-provided `RwSignal`; the async drivers here issue the HTTP
//! call and fold the outcome back into the signal. Each fetched page
//! replaces the prior one wholesale. Failures keep the last-good page
//! visible (stale-but-visible) and set an error message for a banner.
//!
//! Write operations never patch the held page: after a create, update, or
//! delete the caller re-fetches with [`refresh_current_page`]. There is no
//! per-resource in-flight guard and no request cancellation — two list
//! calls racing resolve in arrival order and the held page reflects
//! whichever lands last.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::resource::ResourceClient;
use crate::net::types::{Author, Book, PageRequest, PageResponse, Store, User};

/// Latest page, selection, and call status for one resource.
#[derive(Clone, Debug)]
pub struct PagedState<T> {
    /// Last successfully fetched page; survives failed fetches.
    pub page: Option<PageResponse<T>>,
    /// Entity loaded by `load_by_id`, independent of the page collection.
    pub selected: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Current search query; blank means browsing. This is the only
    /// tracker distinguishing search mode from browse mode.
    pub query: String,
    /// Last-used pagination, re-sent on every fetch and reused by
    /// [`refresh_current_page`].
    pub request: PageRequest,
}

pub type BooksState = PagedState<Book>;
pub type AuthorsState = PagedState<Author>;
pub type StoresState = PagedState<Store>;
pub type UsersState = PagedState<User>;

impl<T> Default for PagedState<T> {
    fn default() -> Self {
        Self {
            page: None,
            selected: None,
            loading: false,
            error: None,
            query: String::new(),
            request: PageRequest::default(),
        }
    }
}

impl<T> PagedState<T> {
    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Items of the held page, empty before the first successful fetch.
    pub fn items(&self) -> &[T] {
        self.page.as_ref().map_or(&[], |p| &p.content)
    }

    fn begin(&mut self, query: String, request: PageRequest) {
        self.loading = true;
        self.error = None;
        self.query = query;
        self.request = request;
    }

    fn apply_page(&mut self, page: PageResponse<T>) {
        self.page = Some(page);
        self.loading = false;
    }

    /// Failure policy: keep the prior page visible, surface the message.
    fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub fn clear_selected(&mut self) {
        self.selected = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Fetch one browse page and replace the held page.
pub async fn load_page<T, R>(
    state: RwSignal<PagedState<T>>,
    client: &ResourceClient<T, R>,
    token: Option<String>,
    request: PageRequest,
) where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
    R: Serialize,
{
    state.update(|s| s.begin(String::new(), request.clone()));
    match client.list(token.as_deref(), &request).await {
        Ok(page) => state.update(|s| s.apply_page(page)),
        Err(err) => state.update(|s| s.apply_error(err)),
    }
}

/// Fetch one filtered page. A blank query delegates to [`load_page`], so
/// searching for nothing and browsing are the same operation.
pub async fn search<T, R>(
    state: RwSignal<PagedState<T>>,
    client: &ResourceClient<T, R>,
    token: Option<String>,
    query: String,
    request: PageRequest,
) where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
    R: Serialize,
{
    if query.trim().is_empty() {
        load_page(state, client, token, request).await;
        return;
    }
    state.update(|s| s.begin(query.clone(), request.clone()));
    match client.search(token.as_deref(), &query, &request).await {
        Ok(page) => state.update(|s| s.apply_page(page)),
        Err(err) => state.update(|s| s.apply_error(err)),
    }
}

/// Re-issue the last fetch (browse or search) with the last-used
/// page/size. Callers invoke this after a mutation — most importantly
/// after a delete, since the held page is never patched locally.
pub async fn refresh_current_page<T, R>(
    state: RwSignal<PagedState<T>>,
    client: &ResourceClient<T, R>,
    token: Option<String>,
) where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
    R: Serialize,
{
    let (query, request) = {
        let current = state.get_untracked();
        (current.query.clone(), current.request.clone())
    };
    search(state, client, token, query, request).await;
}

/// Fetch a single entity and hold it as selected. The page collection is
/// untouched; failure is propagated so the caller can decide navigation
/// (list pages redirect on not-found).
pub async fn load_by_id<T, R>(
    state: RwSignal<PagedState<T>>,
    client: &ResourceClient<T, R>,
    token: Option<String>,
    id: i64,
) -> Result<T, String>
where
    T: Clone + DeserializeOwned + Send + Sync + 'static,
    R: Serialize,
{
    state.update(|s| s.loading = true);
    let result = client.get_by_id(token.as_deref(), id).await;
    match result {
        Ok(entity) => {
            state.update(|s| {
                s.selected = Some(entity.clone());
                s.loading = false;
            });
            Ok(entity)
        }
        Err(err) => {
            state.update(|s| s.loading = false);
            Err(err)
        }
    }
}
