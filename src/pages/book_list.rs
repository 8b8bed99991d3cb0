//! Book list page: browse, search by title, filter by price range.

#[cfg(test)]
#[path = "book_list_test.rs"]
mod book_list_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirmation_dialog::ConfirmationDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::navbar::Navbar;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::resource::{BOOKS, books_by_price_range};
use crate::net::types::{Book, PageRequest};
use crate::state::resource as paged;
use crate::state::resource::BooksState;
use crate::state::session::SessionState;
use crate::util::format::{format_price, or_dash};
use crate::util::guard::{RouteAccess, install_guard};

/// Fetch one page of the price-range filter. Bypasses the search/browse
/// drivers because the filter has its own endpoint; the held query is
/// blanked so a later refresh falls back to browsing.
async fn load_price_range(
    books: RwSignal<BooksState>,
    token: Option<String>,
    min: f64,
    max: f64,
    request: PageRequest,
) {
    books.update(|s| {
        s.loading = true;
        s.error = None;
        s.query = String::new();
        s.request = request.clone();
    });
    match books_by_price_range(token.as_deref(), min, max, &request).await {
        Ok(page) => books.update(|s| {
            s.page = Some(page);
            s.loading = false;
        }),
        Err(err) => books.update(|s| {
            s.error = Some(err);
            s.loading = false;
        }),
    }
}

/// Parse the two price inputs into an inclusive range.
pub fn parse_price_range(min: &str, max: &str) -> Result<(f64, f64), String> {
    let min: f64 = min
        .trim()
        .parse()
        .map_err(|_| "Enter a valid minimum price.".to_owned())?;
    let max: f64 = max
        .trim()
        .parse()
        .map_err(|_| "Enter a valid maximum price.".to_owned())?;
    if min < 0.0 || max < 0.0 {
        return Err("Prices cannot be negative.".to_owned());
    }
    if min > max {
        return Err("Minimum price cannot exceed maximum.".to_owned());
    }
    Ok((min, max))
}

#[component]
pub fn BookListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let books = expect_context::<RwSignal<BooksState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Authenticated, navigate);

    let is_admin = move || session.get().is_admin();
    let delete_target = RwSignal::new(None::<Book>);
    let price_min = RwSignal::new(String::new());
    let price_max = RwSignal::new(String::new());
    let price_filter = RwSignal::new(None::<(f64, f64)>);
    let filter_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    if session.get_untracked().is_authenticated() {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            paged::refresh_current_page(books, &BOOKS, token).await;
        });
    }

    let on_search = Callback::new(move |query: String| {
        price_filter.set(None);
        filter_error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let request = books.get_untracked().request.with_page(0);
            leptos::task::spawn_local(async move {
                paged::search(books, &BOOKS, token, query, request).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    });

    let on_apply_filter = move |_| {
        match parse_price_range(&price_min.get_untracked(), &price_max.get_untracked()) {
            Ok((min, max)) => {
                filter_error.set(None);
                price_filter.set(Some((min, max)));
                #[cfg(feature = "hydrate")]
                {
                    let token = session.get_untracked().token();
                    let request = books.get_untracked().request.with_page(0);
                    leptos::task::spawn_local(load_price_range(books, token, min, max, request));
                }
            }
            Err(message) => filter_error.set(Some(message)),
        }
    };

    let on_clear_filter = move |_| {
        price_min.set(String::new());
        price_max.set(String::new());
        filter_error.set(None);
        if price_filter.get_untracked().is_none() {
            return;
        }
        price_filter.set(None);
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let request = books.get_untracked().request.with_page(0);
            leptos::task::spawn_local(async move {
                paged::load_page(books, &BOOKS, token, request).await;
            });
        }
    };

    let on_page = Callback::new(move |page: u32| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let current = books.get_untracked();
            let request = current.request.with_page(page);
            if let Some((min, max)) = price_filter.get_untracked() {
                leptos::task::spawn_local(load_price_range(books, token, min, max, request));
            } else {
                let query = current.query.clone();
                leptos::task::spawn_local(async move {
                    paged::search(books, &BOOKS, token, query, request).await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    });

    let on_size = Callback::new(move |size: u32| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let current = books.get_untracked();
            // New size restarts from page 0.
            let request = current.request.with_size(size);
            if let Some((min, max)) = price_filter.get_untracked() {
                leptos::task::spawn_local(load_price_range(books, token, min, max, request));
            } else {
                let query = current.query.clone();
                leptos::task::spawn_local(async move {
                    paged::search(books, &BOOKS, token, query, request).await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = size;
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(book) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            leptos::task::spawn_local(async move {
                match BOOKS.delete(token.as_deref(), book.id).await {
                    // The held page is never patched locally; re-fetch.
                    Ok(()) => paged::refresh_current_page(books, &BOOKS, token).await,
                    Err(err) => books.update(|s| s.error = Some(err)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = book;
    });
    let on_cancel_delete = Callback::new(move |()| delete_target.set(None));

    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map_or_else(String::new, |b| format!("Delete \"{}\"? This cannot be undone.", b.title))
    });

    let current_page = Signal::derive(move || books.get().page.as_ref().map_or(0, |p| p.page));
    let page_size = Signal::derive(move || books.get().request.size);
    let total_elements =
        Signal::derive(move || books.get().page.as_ref().map_or(0, |p| p.total_elements));
    let total_pages =
        Signal::derive(move || books.get().page.as_ref().map_or(0, |p| p.total_pages));
    let is_first = Signal::derive(move || books.get().page.as_ref().is_none_or(|p| p.first));
    let is_last = Signal::derive(move || books.get().page.as_ref().is_none_or(|p| p.last));
    let loading = Signal::derive(move || books.get().loading);
    let error = Signal::derive(move || books.get().error.clone());

    view! {
        <Navbar/>
        <main class="page">
            <header class="page__header">
                <h1>"Books"</h1>
                <Show when=is_admin>
                    <a class="btn btn--primary" href="/books/new">
                        "New Book"
                    </a>
                </Show>
            </header>

            <div class="page__toolbar">
                <SearchInput placeholder="Search by title..." loading=loading on_search=on_search/>
                <div class="price-filter">
                    <input
                        class="price-filter__input"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Min $"
                        prop:value=move || price_min.get()
                        on:input=move |ev| price_min.set(event_target_value(&ev))
                    />
                    <input
                        class="price-filter__input"
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="Max $"
                        prop:value=move || price_max.get()
                        on:input=move |ev| price_max.set(event_target_value(&ev))
                    />
                    <button class="btn" on:click=on_apply_filter>
                        "Filter"
                    </button>
                    <Show when=move || price_filter.get().is_some()>
                        <button class="btn" on:click=on_clear_filter>
                            "Clear"
                        </button>
                    </Show>
                </div>
            </div>
            <Show when=move || filter_error.get().is_some()>
                <p class="form-error">{move || filter_error.get().unwrap_or_default()}</p>
            </Show>

            <ErrorBanner message=error/>

            <Show
                when=move || books.get().page.is_some()
                fallback=move || view! { <LoadingSpinner/> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"ISBN"</th>
                            <th>"Author"</th>
                            <th>"Price"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            books
                                .get()
                                .items()
                                .iter()
                                .cloned()
                                .map(|book| {
                                    let author_name = book
                                        .author
                                        .as_ref()
                                        .map(|a| a.name.clone());
                                    let detail = format!("/books/{}", book.id);
                                    let edit = format!("/books/{}/edit", book.id);
                                    let target = book.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <a href=detail>{book.title.clone()}</a>
                                            </td>
                                            <td>{book.isbn.clone()}</td>
                                            <td>{or_dash(author_name.as_deref())}</td>
                                            <td>{format_price(book.price)}</td>
                                            <td class="data-table__actions">
                                                <Show when=is_admin>
                                                    <a class="btn btn--small" href=edit.clone()>
                                                        "Edit"
                                                    </a>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click={
                                                            let target = target.clone();
                                                            move |_| delete_target.set(Some(target.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <Show when=move || books.get().items().is_empty()>
                    <p class="page__empty">"No books found."</p>
                </Show>

                <Pagination
                    current_page=current_page
                    page_size=page_size
                    total_elements=total_elements
                    total_pages=total_pages
                    is_first=is_first
                    is_last=is_last
                    on_page=on_page
                    on_size=on_size
                />
            </Show>

            <Show when=move || delete_target.get().is_some()>
                <ConfirmationDialog
                    title="Delete Book"
                    message=delete_message
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </main>
    }
}
