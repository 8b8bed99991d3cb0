//! Top navigation bar with entity links and the session controls.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};

/// Entity links for every signed-in user, a Users link for admins only,
/// and the display name + logout control. Logout clears the session; the
/// route guard on the current page then redirects to `/login`.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let display_name = move || session.get().display_name();
    let is_admin = move || session.get().is_admin();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session::logout(session).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = session;
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/books">
                "Bookstand"
            </a>
            <div class="navbar__links">
                <a href="/books">"Books"</a>
                <a href="/authors">"Authors"</a>
                <a href="/stores">"Stores"</a>
                <a href="/reports">"Reports"</a>
                <Show when=is_admin>
                    <a href="/users">"Users"</a>
                </Show>
            </div>
            <div class="navbar__session">
                <span class="navbar__user">{display_name}</span>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
