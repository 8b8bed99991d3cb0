//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{
    author_detail::AuthorDetailPage, author_form::AuthorFormPage, author_list::AuthorListPage,
    book_detail::BookDetailPage, book_form::BookFormPage, book_list::BookListPage,
    login::LoginPage, register::RegisterPage, reports::ReportsPage,
    store_detail::StoreDetailPage, store_form::StoreFormPage, store_list::StoreListPage,
    user_form::UserFormPage, user_list::UserListPage,
};
use crate::state::resource::{AuthorsState, BooksState, StoresState, UsersState};
use crate::state::session::{self, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the singleton session state (initialized from the credential
/// store) and one paged-collection state per entity, provides them via
/// context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    let books = RwSignal::new(BooksState::default());
    let authors = RwSignal::new(AuthorsState::default());
    let stores = RwSignal::new(StoresState::default());
    let users = RwSignal::new(UsersState::default());

    provide_context(session);
    provide_context(books);
    provide_context(authors);
    provide_context(stores);
    provide_context(users);

    // A restored session may hold a stale token. Validate it once up
    // front; refresh is fail-closed, so any failure clears the session
    // and the guards route to /login.
    #[cfg(feature = "hydrate")]
    if session.get_untracked().is_authenticated() {
        leptos::task::spawn_local(async move {
            if let Err(err) = session::refresh(session).await {
                leptos::logging::warn!("startup session refresh failed: {err}");
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/bookstand.css"/>
        <Title text="Bookstand"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/books"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/books"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>

                <Route path=StaticSegment("books") view=BookListPage/>
                <Route
                    path=(StaticSegment("books"), StaticSegment("new"))
                    view=BookFormPage
                />
                <Route path=(StaticSegment("books"), ParamSegment("id")) view=BookDetailPage/>
                <Route
                    path=(StaticSegment("books"), ParamSegment("id"), StaticSegment("edit"))
                    view=BookFormPage
                />

                <Route path=StaticSegment("authors") view=AuthorListPage/>
                <Route
                    path=(StaticSegment("authors"), StaticSegment("new"))
                    view=AuthorFormPage
                />
                <Route path=(StaticSegment("authors"), ParamSegment("id")) view=AuthorDetailPage/>
                <Route
                    path=(StaticSegment("authors"), ParamSegment("id"), StaticSegment("edit"))
                    view=AuthorFormPage
                />

                <Route path=StaticSegment("stores") view=StoreListPage/>
                <Route
                    path=(StaticSegment("stores"), StaticSegment("new"))
                    view=StoreFormPage
                />
                <Route path=(StaticSegment("stores"), ParamSegment("id")) view=StoreDetailPage/>
                <Route
                    path=(StaticSegment("stores"), ParamSegment("id"), StaticSegment("edit"))
                    view=StoreFormPage
                />

                <Route path=StaticSegment("users") view=UserListPage/>
                <Route path=(StaticSegment("users"), StaticSegment("new")) view=UserFormPage/>
                <Route
                    path=(StaticSegment("users"), ParamSegment("id"), StaticSegment("edit"))
                    view=UserFormPage
                />

                <Route path=StaticSegment("reports") view=ReportsPage/>
            </Routes>
        </Router>
    }
}
