//! Error banner shown above list content.
//!
//! List views keep the last-good page visible under this banner rather
//! than clearing to empty on failure.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
