//! Book create/edit form (admin-only).
//!
//! One component serves both `/books/new` and `/books/:id/edit`; the
//! presence of the `id` param selects the mode. Author and store options
//! are fetched once on mount.

#[cfg(test)]
#[path = "book_form_test.rs"]
mod book_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::resource::{AUTHORS, BOOKS, STORES};
use crate::net::types::{Author, BookRequest, PageRequest, SortDir, Store};
use crate::state::session::SessionState;
use crate::util::guard::{RouteAccess, install_guard};

/// Page size used when fetching the full option lists for the selects.
const OPTIONS_PAGE_SIZE: u32 = 100;

/// Validate the raw form fields; returns the parsed price.
pub fn validate_book(
    title: &str,
    isbn: &str,
    price: &str,
    author_id: Option<i64>,
) -> Result<f64, String> {
    if title.is_empty() {
        return Err("Title is required.".to_owned());
    }
    if isbn.is_empty() {
        return Err("ISBN is required.".to_owned());
    }
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|_| "Enter a valid price.".to_owned())?;
    if price < 0.0 {
        return Err("Price cannot be negative.".to_owned());
    }
    if author_id.is_none() {
        return Err("Select an author.".to_owned());
    }
    Ok(price)
}

/// Empty strings become absent optional fields on the wire.
pub fn opt_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn name_sorted_options() -> PageRequest {
    PageRequest {
        page: 0,
        size: OPTIONS_PAGE_SIZE,
        sort_by: Some("name".to_owned()),
        sort_dir: Some(SortDir::Asc),
    }
}

#[component]
pub fn BookFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Admin, navigate.clone());

    let params = use_params_map();
    let editing_id = params
        .read_untracked()
        .get("id")
        .and_then(|v| v.parse::<i64>().ok());

    let title = RwSignal::new(String::new());
    let isbn = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let published_date = RwSignal::new(String::new());
    let author_id = RwSignal::new(None::<i64>);
    let store_ids = RwSignal::new(Vec::<i64>::new());

    let author_options = RwSignal::new(Vec::<Author>::new());
    let store_options = RwSignal::new(Vec::<Store>::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            let request = name_sorted_options();
            match AUTHORS.list(token.as_deref(), &request).await {
                Ok(page) => author_options.set(page.content),
                Err(err) => error.set(Some(err)),
            }
            match STORES.list(token.as_deref(), &request).await {
                Ok(page) => store_options.set(page.content),
                Err(err) => error.set(Some(err)),
            }
            if let Some(id) = editing_id {
                match BOOKS.get_by_id(token.as_deref(), id).await {
                    Ok(book) => {
                        title.set(book.title);
                        isbn.set(book.isbn);
                        description.set(book.description.unwrap_or_default());
                        price.set(book.price.to_string());
                        published_date.set(book.published_date.unwrap_or_default());
                        author_id.set(book.author.map(|a| a.id));
                        store_ids
                            .set(book.stores.unwrap_or_default().iter().map(|s| s.id).collect());
                    }
                    Err(err) => error.set(Some(err)),
                }
            }
        });
    }

    let toggle_store = move |store_id: i64| {
        store_ids.update(|ids| {
            if let Some(pos) = ids.iter().position(|&s| s == store_id) {
                ids.remove(pos);
            } else {
                ids.push(store_id);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        let isbn_value = isbn.get().trim().to_owned();
        let author_value = author_id.get_untracked();
        let price_value =
            match validate_book(&title_value, &isbn_value, &price.get_untracked(), author_value) {
                Ok(price) => price,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let token = session.get_untracked().token();
            let request = BookRequest {
                title: title_value,
                isbn: isbn_value,
                description: opt_field(&description.get_untracked()),
                price: price_value,
                published_date: opt_field(&published_date.get_untracked()),
                author_id: author_value.unwrap_or_default(),
                // Always sent so edits can clear the store list.
                store_ids: Some(store_ids.get_untracked()),
            };
            leptos::task::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => BOOKS.update(token.as_deref(), id, &request).await,
                    None => BOOKS.create(token.as_deref(), &request).await,
                };
                match result {
                    Ok(_) => navigate("/books", NavigateOptions::default()),
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (title_value, isbn_value, price_value);
    };

    view! {
        <Navbar/>
        <main class="page page--narrow">
            <h1>{if editing_id.is_some() { "Edit Book" } else { "New Book" }}</h1>

            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "ISBN"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || isbn.get()
                        on:input=move |ev| isbn.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Price"
                    <input
                        class="form__input"
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Published"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || published_date.get()
                        on:input=move |ev| published_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Author"
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            author_id.set(event_target_value(&ev).parse::<i64>().ok());
                        }
                    >
                        <option value="" selected=move || author_id.get().is_none()>
                            "Select an author..."
                        </option>
                        {move || {
                            author_options
                                .get()
                                .into_iter()
                                .map(|author| {
                                    let selected = move || author_id.get() == Some(author.id);
                                    view! {
                                        <option value=author.id selected=selected>
                                            {author.name.clone()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__input"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <fieldset class="form__fieldset">
                    <legend>"Stores"</legend>
                    {move || {
                        store_options
                            .get()
                            .into_iter()
                            .map(|store| {
                                let id = store.id;
                                let checked =
                                    move || store_ids.get().contains(&id);
                                view! {
                                    <label class="form__checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| toggle_store(id)
                                        />
                                        {store.name.clone()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </fieldset>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form__actions">
                    <a class="btn" href="/books">
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
