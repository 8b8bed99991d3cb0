//! Author create/edit form (admin-only).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::resource::AUTHORS;
use crate::net::types::AuthorRequest;
use crate::pages::book_form::opt_field;
use crate::state::session::SessionState;
use crate::util::guard::{RouteAccess, install_guard};

#[component]
pub fn AuthorFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Admin, navigate.clone());

    let params = use_params_map();
    let editing_id = params
        .read_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());

    let name = RwSignal::new(String::new());
    let biography = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if let Some(id) = editing_id {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            match AUTHORS.get_by_id(token.as_deref(), id).await {
                Ok(author) => {
                    name.set(author.name);
                    biography.set(author.biography.unwrap_or_default());
                    birth_date.set(author.birth_date.unwrap_or_default());
                }
                Err(err) => error.set(Some(err)),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let name_value = name.get().trim().to_owned();
        if name_value.is_empty() {
            error.set(Some("Name is required.".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let token = session.get_untracked().token();
            let request = AuthorRequest {
                name: name_value,
                biography: opt_field(&biography.get_untracked()),
                birth_date: opt_field(&birth_date.get_untracked()),
            };
            leptos::task::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => AUTHORS.update(token.as_deref(), id, &request).await,
                    None => AUTHORS.create(token.as_deref(), &request).await,
                };
                match result {
                    Ok(_) => navigate("/authors", NavigateOptions::default()),
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = name_value;
    };

    view! {
        <Navbar/>
        <main class="page page--narrow">
            <h1>{if editing_id.is_some() { "Edit Author" } else { "New Author" }}</h1>

            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Born"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || birth_date.get()
                        on:input=move |ev| birth_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Biography"
                    <textarea
                        class="form__input"
                        prop:value=move || biography.get()
                        on:input=move |ev| biography.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <a class="btn" href="/authors">
                        "Cancel"
                    </a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </main>
    }
}
