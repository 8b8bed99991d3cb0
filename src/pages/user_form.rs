//! User create/edit form (admin-only).

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::resource::USERS;
use crate::net::types::{UserRequest, UserRole};
use crate::pages::login::{MIN_PASSWORD_LEN, is_plausible_email};
use crate::state::session::SessionState;
use crate::util::guard::{RouteAccess, install_guard};

/// Password rules apply when creating, and when editing only if a
/// replacement password was typed. Blank on edit means unchanged.
pub fn validate_user(
    name: &str,
    email: &str,
    password: &str,
    creating: bool,
) -> Option<String> {
    if name.is_empty() {
        return Some("Name is required.".to_owned());
    }
    if !is_plausible_email(email) {
        return Some("Enter a valid email address.".to_owned());
    }
    if (creating || !password.is_empty()) && password.len() < MIN_PASSWORD_LEN {
        return Some(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
    }
    None
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Admin, navigate.clone());

    let params = use_params_map();
    let editing_id = params
        .read_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::User);
    let enabled = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if let Some(id) = editing_id {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            match USERS.get_by_id(token.as_deref(), id).await {
                Ok(user) => {
                    name.set(user.name);
                    email.set(user.email);
                    role.set(user.role);
                    enabled.set(user.enabled);
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
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Some(message) =
            validate_user(&name_value, &email_value, &password_value, editing_id.is_none())
        {
            error.set(Some(message));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let token = session.get_untracked().token();
            let request = UserRequest {
                name: name_value,
                email: email_value,
                password: if password_value.is_empty() { None } else { Some(password_value) },
                role: role.get_untracked(),
                enabled: enabled.get_untracked(),
            };
            leptos::task::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => USERS.update(token.as_deref(), id, &request).await,
                    None => USERS.create(token.as_deref(), &request).await,
                };
                match result {
                    Ok(_) => navigate("/users", NavigateOptions::default()),
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (name_value, email_value, password_value);
    };

    view! {
        <Navbar/>
        <main class="page page--narrow">
            <h1>{if editing_id.is_some() { "Edit User" } else { "New User" }}</h1>

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
                    "Email"
                    <input
                        class="form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    {if editing_id.is_some() { "Password (leave blank to keep)" } else { "Password" }}
                    <input
                        class="form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Role"
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            role.set(
                                if event_target_value(&ev) == "ADMIN" {
                                    UserRole::Admin
                                } else {
                                    UserRole::User
                                },
                            );
                        }
                    >
                        <option value="USER" selected=move || role.get() == UserRole::User>
                            "User"
                        </option>
                        <option value="ADMIN" selected=move || role.get() == UserRole::Admin>
                            "Admin"
                        </option>
                    </select>
                </label>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || enabled.get()
                        on:change=move |_| enabled.update(|e| *e = !*e)
                    />
                    "Enabled"
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <a class="btn" href="/users">
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
