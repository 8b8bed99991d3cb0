//! User management list (admin-only). No search; users are few.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirmation_dialog::ConfirmationDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::navbar::Navbar;
use crate::components::pagination::Pagination;
use crate::net::resource::USERS;
use crate::net::types::{User, UserRole};
use crate::state::resource as paged;
use crate::state::resource::UsersState;
use crate::state::session::SessionState;
use crate::util::guard::{RouteAccess, install_guard};

#[component]
pub fn UserListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Admin, navigate);

    let delete_target = RwSignal::new(None::<User>);

    #[cfg(feature = "hydrate")]
    if session.get_untracked().is_admin() {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            paged::refresh_current_page(users, &USERS, token).await;
        });
    }

    let on_page = Callback::new(move |page: u32| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let request = users.get_untracked().request.with_page(page);
            leptos::task::spawn_local(async move {
                paged::load_page(users, &USERS, token, request).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    });

    let on_size = Callback::new(move |size: u32| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let request = users.get_untracked().request.with_size(size);
            leptos::task::spawn_local(async move {
                paged::load_page(users, &USERS, token, request).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = size;
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(user) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            leptos::task::spawn_local(async move {
                match USERS.delete(token.as_deref(), user.id).await {
                    Ok(()) => paged::refresh_current_page(users, &USERS, token).await,
                    Err(err) => users.update(|s| s.error = Some(err)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
    });
    let on_cancel_delete = Callback::new(move |()| delete_target.set(None));

    let delete_message = Signal::derive(move || {
        delete_target
            .get()
            .map_or_else(String::new, |u| format!("Delete \"{}\"? This cannot be undone.", u.email))
    });

    let current_page = Signal::derive(move || users.get().page.as_ref().map_or(0, |p| p.page));
    let page_size = Signal::derive(move || users.get().request.size);
    let total_elements =
        Signal::derive(move || users.get().page.as_ref().map_or(0, |p| p.total_elements));
    let total_pages =
        Signal::derive(move || users.get().page.as_ref().map_or(0, |p| p.total_pages));
    let is_first = Signal::derive(move || users.get().page.as_ref().is_none_or(|p| p.first));
    let is_last = Signal::derive(move || users.get().page.as_ref().is_none_or(|p| p.last));
    let error = Signal::derive(move || users.get().error.clone());

    // Deleting yourself is allowed by the server; hide the button instead.
    let own_id = move || session.get().session.as_ref().map(|s| s.user.id);

    view! {
        <Navbar/>
        <main class="page">
            <header class="page__header">
                <h1>"Users"</h1>
                <a class="btn btn--primary" href="/users/new">
                    "New User"
                </a>
            </header>

            <ErrorBanner message=error/>

            <Show
                when=move || users.get().page.is_some()
                fallback=move || view! { <LoadingSpinner/> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .items()
                                .iter()
                                .cloned()
                                .map(|user| {
                                    let edit = format!("/users/{}/edit", user.id);
                                    let role = match user.role {
                                        UserRole::Admin => "Admin",
                                        UserRole::User => "User",
                                    };
                                    let status = if user.enabled { "Enabled" } else { "Disabled" };
                                    let removable = own_id() != Some(user.id);
                                    let target = user.clone();
                                    view! {
                                        <tr>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{role}</td>
                                            <td>{status}</td>
                                            <td class="data-table__actions">
                                                <a class="btn btn--small" href=edit.clone()>
                                                    "Edit"
                                                </a>
                                                <Show when=move || removable>
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
                <Show when=move || users.get().items().is_empty()>
                    <p class="page__empty">"No users found."</p>
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
                    title="Delete User"
                    message=delete_message
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </main>
    }
}
