//! Pagination bar: range summary, per-page selector, windowed page buttons.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::net::types::PAGE_SIZE_OPTIONS;

/// Sentinel in [`visible_pages`] output marking an ellipsis gap.
pub const ELLIPSIS: i64 = -1;

/// Pagination controls under a list. All numbers come from the held
/// `PageResponse`; the component performs no fetching itself.
#[component]
pub fn Pagination(
    #[prop(into)] current_page: Signal<u32>,
    #[prop(into)] page_size: Signal<u32>,
    #[prop(into)] total_elements: Signal<u64>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] is_first: Signal<bool>,
    #[prop(into)] is_last: Signal<bool>,
    on_page: Callback<u32>,
    on_size: Callback<u32>,
) -> impl IntoView {
    let go_to = move |page: i64| {
        if let Some(page) = accepted_navigation(page, current_page.get(), total_pages.get()) {
            on_page.run(page);
        }
    };

    view! {
        <div class="pagination">
            <div class="pagination__summary">
                {move || {
                    format!(
                        "Showing {} to {} of {} results",
                        start_item(current_page.get(), page_size.get(), total_elements.get()),
                        end_item(current_page.get(), page_size.get(), total_elements.get()),
                        total_elements.get(),
                    )
                }}
            </div>

            <div class="pagination__controls">
                <label class="pagination__size">
                    "Per page:"
                    <select on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_size.run(size);
                        }
                    }>
                        {PAGE_SIZE_OPTIONS
                            .into_iter()
                            .map(|size| {
                                view! {
                                    <option value=size selected=move || page_size.get() == size>
                                        {size}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <nav class="pagination__pages">
                    <button
                        class="pagination__btn"
                        disabled=move || is_first.get()
                        title="First page"
                        on:click=move |_| go_to(0)
                    >
                        "«"
                    </button>
                    <button
                        class="pagination__btn"
                        disabled=move || is_first.get()
                        title="Previous page"
                        on:click=move |_| go_to(i64::from(current_page.get()) - 1)
                    >
                        "‹"
                    </button>

                    {move || {
                        visible_pages(total_pages.get(), current_page.get())
                            .into_iter()
                            .map(|page| {
                                if page == ELLIPSIS {
                                    view! { <span class="pagination__gap">"…"</span> }.into_any()
                                } else {
                                    let active = move || i64::from(current_page.get()) == page;
                                    view! {
                                        <button
                                            class="pagination__btn"
                                            class:pagination__btn--active=active
                                            on:click=move |_| go_to(page)
                                        >
                                            {page + 1}
                                        </button>
                                    }
                                    .into_any()
                                }
                            })
                            .collect::<Vec<_>>()
                    }}

                    <button
                        class="pagination__btn"
                        disabled=move || is_last.get()
                        title="Next page"
                        on:click=move |_| go_to(i64::from(current_page.get()) + 1)
                    >
                        "›"
                    </button>
                    <button
                        class="pagination__btn"
                        disabled=move || is_last.get()
                        title="Last page"
                        on:click=move |_| go_to(i64::from(total_pages.get()) - 1)
                    >
                        "»"
                    </button>
                </nav>
            </div>
        </div>
    }
}

/// 1-based index of the first visible item; 0 when the page is empty.
pub fn start_item(current_page: u32, page_size: u32, total_elements: u64) -> u64 {
    if total_elements == 0 {
        return 0;
    }
    u64::from(current_page) * u64::from(page_size) + 1
}

/// 1-based index of the last visible item, clamped to the total.
pub fn end_item(current_page: u32, page_size: u32, total_elements: u64) -> u64 {
    ((u64::from(current_page) + 1) * u64::from(page_size)).min(total_elements)
}

/// Accept a page-button click only when it lands in range and actually
/// moves; out-of-range server clamping applies to direct fetches, not
/// button mashing.
pub fn accepted_navigation(target: i64, current: u32, total_pages: u32) -> Option<u32> {
    if target >= 0 && target < i64::from(total_pages) && target != i64::from(current) {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        Some(target as u32)
    } else {
        None
    }
}

/// Page numbers to render: all of them up to seven pages, otherwise a
/// window around the current page with first/last always present and
/// [`ELLIPSIS`] marking the gaps.
pub fn visible_pages(total_pages: u32, current: u32) -> Vec<i64> {
    let total = i64::from(total_pages);
    let current = i64::from(current);
    let mut pages = Vec::new();

    if total <= 7 {
        pages.extend(0..total);
        return pages;
    }

    pages.push(0);
    if current > 3 {
        pages.push(ELLIPSIS);
    }
    let start = 1.max(current - 1);
    let end = (total - 2).min(current + 1);
    pages.extend(start..=end);
    if current < total - 4 {
        pages.push(ELLIPSIS);
    }
    pages.push(total - 1);
    pages
}
