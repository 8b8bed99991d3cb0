//! Author list page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirmation_dialog::ConfirmationDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::navbar::Navbar;
use crate::components::pagination::Pagination;
use crate::components::search_input::SearchInput;
use crate::net::resource::AUTHORS;
use crate::net::types::Author;
use crate::state::resource as paged;
use crate::state::resource::AuthorsState;
use crate::state::session::SessionState;
use crate::util::format::or_dash;
use crate::util::guard::{RouteAccess, install_guard};

#[component]
pub fn AuthorListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let authors = expect_context::<RwSignal<AuthorsState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Authenticated, navigate);

    let is_admin = move || session.get().is_admin();
    let delete_target = RwSignal::new(None::<Author>);

    #[cfg(feature = "hydrate")]
    if session.get_untracked().is_authenticated() {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            paged::refresh_current_page(authors, &AUTHORS, token).await;
        });
    }

    let on_search = Callback::new(move |query: String| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let request = authors.get_untracked().request.with_page(0);
            leptos::task::spawn_local(async move {
                paged::search(authors, &AUTHORS, token, query, request).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    });

    let on_page = Callback::new(move |page: u32| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let current = authors.get_untracked();
            let request = current.request.with_page(page);
            let query = current.query.clone();
            leptos::task::spawn_local(async move {
                paged::search(authors, &AUTHORS, token, query, request).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    });

    let on_size = Callback::new(move |size: u32| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let current = authors.get_untracked();
            let request = current.request.with_size(size);
            let query = current.query.clone();
            leptos::task::spawn_local(async move {
                paged::search(authors, &AUTHORS, token, query, request).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = size;
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(author) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            leptos::task::spawn_local(async move {
                match AUTHORS.delete(token.as_deref(), author.id).await {
                    Ok(()) => paged::refresh_current_page(authors, &AUTHORS, token).await,
                    Err(err) => authors.update(|s| s.error = Some(err)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = author;
    });
    let on_cancel_delete = Callback::new(move |()| delete_target.set(None));

    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map_or_else(String::new, |a| format!("Delete \"{}\"? This cannot be undone.", a.name))
    });

    let current_page = Signal::derive(move || authors.get().page.as_ref().map_or(0, |p| p.page));
    let page_size = Signal::derive(move || authors.get().request.size);
    let total_elements =
        Signal::derive(move || authors.get().page.as_ref().map_or(0, |p| p.total_elements));
    let total_pages =
        Signal::derive(move || authors.get().page.as_ref().map_or(0, |p| p.total_pages));
    let is_first = Signal::derive(move || authors.get().page.as_ref().is_none_or(|p| p.first));
    let is_last = Signal::derive(move || authors.get().page.as_ref().is_none_or(|p| p.last));
    let loading = Signal::derive(move || authors.get().loading);
    let error = Signal::derive(move || authors.get().error.clone());

    view! {
        <Navbar/>
        <main class="page">
            <header class="page__header">
                <h1>"Authors"</h1>
                <Show when=is_admin>
                    <a class="btn btn--primary" href="/authors/new">
                        "New Author"
                    </a>
                </Show>
            </header>

            <div class="page__toolbar">
                <SearchInput placeholder="Search by name..." loading=loading on_search=on_search/>
            </div>

            <ErrorBanner message=error/>

            <Show
                when=move || authors.get().page.is_some()
                fallback=move || view! { <LoadingSpinner/> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Born"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            authors
                                .get()
                                .items()
                                .iter()
                                .cloned()
                                .map(|author| {
                                    let detail = format!("/authors/{}", author.id);
                                    let edit = format!("/authors/{}/edit", author.id);
                                    let target = author.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <a href=detail>{author.name.clone()}</a>
                                            </td>
                                            <td>{or_dash(author.birth_date.as_deref())}</td>
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
                <Show when=move || authors.get().items().is_empty()>
                    <p class="page__empty">"No authors found."</p>
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
                    title="Delete Author"
                    message=delete_message
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </main>
    }
}
