//! Store create/edit form (admin-only).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::resource::STORES;
use crate::net::types::StoreRequest;
use crate::pages::book_form::opt_field;
use crate::state::session::SessionState;
use crate::util::guard::{RouteAccess, install_guard};

#[component]
pub fn StoreFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Admin, navigate.clone());

    let params = use_params_map();
    let editing_id = params
        .read_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());

    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if let Some(id) = editing_id {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            match STORES.get_by_id(token.as_deref(), id).await {
                Ok(store) => {
                    name.set(store.name);
                    address.set(store.address.unwrap_or_default());
                    city.set(store.city.unwrap_or_default());
                    country.set(store.country.unwrap_or_default());
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
            let request = StoreRequest {
                name: name_value,
                address: opt_field(&address.get_untracked()),
                city: opt_field(&city.get_untracked()),
                country: opt_field(&country.get_untracked()),
            };
            leptos::task::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => STORES.update(token.as_deref(), id, &request).await,
                    None => STORES.create(token.as_deref(), &request).await,
                };
                match result {
                    Ok(_) => navigate("/stores", NavigateOptions::default()),
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
            <h1>{if editing_id.is_some() { "Edit Store" } else { "New Store" }}</h1>

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
                    "Address"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "City"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Country"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || country.get()
                        on:input=move |ev| country.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <a class="btn" href="/stores">
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
