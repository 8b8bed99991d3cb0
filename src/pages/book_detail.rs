//! Book detail page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::navbar::Navbar;
use crate::net::resource::BOOKS;
use crate::state::resource as paged;
use crate::state::resource::BooksState;
use crate::state::session::SessionState;
use crate::util::format::{format_price, or_dash};
use crate::util::guard::{RouteAccess, install_guard};

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let books = expect_context::<RwSignal<BooksState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Authenticated, navigate.clone());

    let params = use_params_map();
    let id = move || params.read().get("id").and_then(|v| v.parse::<i64>().ok());

    books.update(BooksState::clear_selected);

    // Not-found (or any load failure) sends the user back to the list.
    Effect::new(move |_| {
        let Some(id) = id() else {
            navigate("/books", NavigateOptions::default());
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if paged::load_by_id(books, &BOOKS, token, id).await.is_err() {
                    navigate("/books", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let is_admin = move || session.get().is_admin();
    let book = move || books.get().selected.clone();

    view! {
        <Navbar/>
        <main class="page">
            <Show when=move || book().is_some() fallback=move || view! { <LoadingSpinner/> }>
                {move || {
                    book()
                        .map(|book| {
                            let edit = format!("/books/{}/edit", book.id);
                            let author = book
                                .author
                                .as_ref()
                                .map(|a| (a.id, a.name.clone()));
                            let stores = book.stores.clone().unwrap_or_default();
                            view! {
                                <header class="page__header">
                                    <h1>{book.title.clone()}</h1>
                                    <div class="page__actions">
                                        <a class="btn" href="/books">
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
                                    <dt>"ISBN"</dt>
                                    <dd>{book.isbn.clone()}</dd>
                                    <dt>"Price"</dt>
                                    <dd>{format_price(book.price)}</dd>
                                    <dt>"Published"</dt>
                                    <dd>{or_dash(book.published_date.as_deref())}</dd>
                                    <dt>"Author"</dt>
                                    <dd>
                                        {author
                                            .map(|(id, name)| {
                                                view! {
                                                    <a href=format!("/authors/{id}")>{name}</a>
                                                }
                                                    .into_any()
                                            })
                                            .unwrap_or_else(|| view! { <span>"—"</span> }.into_any())}
                                    </dd>
                                    <dt>"Description"</dt>
                                    <dd>{or_dash(book.description.as_deref())}</dd>
                                </dl>

                                <section class="detail__section">
                                    <h2>"Available at"</h2>
                                    <Show
                                        when={
                                            let empty = stores.is_empty();
                                            move || !empty
                                        }
                                        fallback=|| view! { <p class="page__empty">"Not carried by any store."</p> }
                                    >
                                        <ul class="detail__list">
                                            {stores
                                                .iter()
                                                .map(|store| {
                                                    let href = format!("/stores/{}", store.id);
                                                    view! {
                                                        <li>
                                                            <a href=href>{store.name.clone()}</a>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </Show>
                                </section>
                            }
                        })
                }}
            </Show>
        </main>
    }
}
