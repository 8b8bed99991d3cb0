//! Author detail page with the author's books as a paginated sub-list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_banner::ErrorBanner;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::navbar::Navbar;
use crate::components::pagination::Pagination;
use crate::net::resource::{AUTHORS, books_by_author};
use crate::net::types::{Book, PageRequest, PageResponse};
use crate::state::resource as paged;
use crate::state::resource::AuthorsState;
use crate::state::session::SessionState;
use crate::util::format::{format_price, or_dash};
use crate::util::guard::{RouteAccess, install_guard};

#[component]
pub fn AuthorDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let authors = expect_context::<RwSignal<AuthorsState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Authenticated, navigate.clone());

    let params = use_params_map();
    let id = move || params.read().get("id").and_then(|v| v.parse::<i64>().ok());

    authors.update(AuthorsState::clear_selected);

    // The sub-list is page-local state, not part of the shared books
    // collection; leaving this page discards it.
    let author_books = RwSignal::new(None::<PageResponse<Book>>);
    let books_request = RwSignal::new(PageRequest::default());
    let books_error = RwSignal::new(None::<String>);

    let load_books = move |request: PageRequest| {
        let Some(author_id) = id() else {
            return;
        };
        books_request.set(request.clone());
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            leptos::task::spawn_local(async move {
                match books_by_author(token.as_deref(), author_id, &request).await {
                    Ok(page) => {
                        author_books.set(Some(page));
                        books_error.set(None);
                    }
                    Err(err) => books_error.set(Some(err)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = author_id;
    };

    Effect::new(move |_| {
        let Some(author_id) = id() else {
            navigate("/authors", NavigateOptions::default());
            return;
        };
        load_books(PageRequest::default());
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if paged::load_by_id(authors, &AUTHORS, token, author_id).await.is_err() {
                    navigate("/authors", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = author_id;
    });

    let on_page = Callback::new(move |page: u32| {
        load_books(books_request.get_untracked().with_page(page));
    });
    let on_size = Callback::new(move |size: u32| {
        load_books(books_request.get_untracked().with_size(size));
    });

    let is_admin = move || session.get().is_admin();
    let author = move || authors.get().selected.clone();

    let current_page =
        Signal::derive(move || author_books.get().as_ref().map_or(0, |p| p.page));
    let page_size = Signal::derive(move || books_request.get().size);
    let total_elements =
        Signal::derive(move || author_books.get().as_ref().map_or(0, |p| p.total_elements));
    let total_pages =
        Signal::derive(move || author_books.get().as_ref().map_or(0, |p| p.total_pages));
    let is_first = Signal::derive(move || author_books.get().as_ref().is_none_or(|p| p.first));
    let is_last = Signal::derive(move || author_books.get().as_ref().is_none_or(|p| p.last));

    view! {
        <Navbar/>
        <main class="page">
            <Show when=move || author().is_some() fallback=move || view! { <LoadingSpinner/> }>
                {move || {
                    author()
                        .map(|author| {
                            let edit = format!("/authors/{}/edit", author.id);
                            view! {
                                <header class="page__header">
                                    <h1>{author.name.clone()}</h1>
                                    <div class="page__actions">
                                        <a class="btn" href="/authors">
                                            "Back"
                                        </a>
                                        <Show when=is_admin>
                                            <a class="btn btn--primary" href=edit.clone()>
                                                "Edit"
                                            </a>
                                        </Show>
                                    </div>
                                </header>

                                <dl class="detail">
                                    <dt>"Born"</dt>
                                    <dd>{or_dash(author.birth_date.as_deref())}</dd>
                                    <dt>"Biography"</dt>
                                    <dd>{or_dash(author.biography.as_deref())}</dd>
                                </dl>
                            }
                        })
                }}
            </Show>

            <section class="detail__section">
                <h2>"Books"</h2>
                <ErrorBanner message=books_error/>
                <Show when=move || author_books.get().is_some()>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"ISBN"</th>
                                <th>"Price"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                author_books
                                    .get()
                                    .map(|page| page.content)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|book| {
                                        let href = format!("/books/{}", book.id);
                                        view! {
                                            <tr>
                                                <td>
                                                    <a href=href>{book.title.clone()}</a>
                                                </td>
                                                <td>{book.isbn.clone()}</td>
                                                <td>{format_price(book.price)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || {
                        author_books.get().as_ref().is_some_and(|p| p.content.is_empty())
                    }>
                        <p class="page__empty">"No books by this author."</p>
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
            </section>
        </main>
    }
}
