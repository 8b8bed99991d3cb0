//! Debounced search box for list pages.
//!
//! DESIGN
//! ======
//! Each keystroke restarts a fixed quiet-period timer; only the timer
//! that is still current when it fires emits the query. The sequence
//! check goes through `try_get_untracked`, which returns `None` once the
//! component's owner is disposed, so a timer outliving the page emits
//! nothing.

use leptos::prelude::*;

/// Quiet period after the last keystroke before a search fires.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Text input that emits `on_search` with the debounced query, and an
/// empty string when cleared. Emitting an empty query is how callers
/// fall back from searching to browsing.
#[component]
pub fn SearchInput(
    placeholder: &'static str,
    #[prop(into)] loading: Signal<bool>,
    on_search: Callback<String>,
) -> impl IntoView {
    let value = RwSignal::new(String::new());
    let seq = RwSignal::new(0u64);

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        value.set(text.clone());
        let issued = seq.get_untracked() + 1;
        seq.set(issued);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS))
                .await;
            // A newer keystroke (or teardown) invalidates this timer.
            if seq.try_get_untracked() == Some(issued) {
                on_search.run(text);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let on_clear = move |_| {
        value.set(String::new());
        seq.update(|s| *s += 1);
        on_search.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">
                {move || if loading.get() { "…" } else { "🔍" }}
            </span>
            <input
                class="search-input__field"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=on_input
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" title="Clear search" on:click=on_clear>
                    "×"
                </button>
            </Show>
        </div>
    }
}
