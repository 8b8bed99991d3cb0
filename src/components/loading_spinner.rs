//! Inline loading indicator.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status" aria-label="Loading">
            <div class="spinner__circle"></div>
        </div>
    }
}
