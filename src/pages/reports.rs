//! Report generation page: pick a collection and format, download the file.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::reports::{
    self, ReportFormat, ReportKind, ReportParams, report_filename, today_iso,
};
use crate::net::resource::AUTHORS;
use crate::net::types::{Author, PageRequest, SortDir};
use crate::state::session::SessionState;
use crate::util::guard::{RouteAccess, install_guard};

/// Parse the optional filter inputs into request parameters. Blank
/// fields are simply absent; only typed values can fail.
pub fn parse_report_params(
    limit: &str,
    start_date: &str,
    end_date: &str,
    author_id: Option<i64>,
) -> Result<ReportParams, String> {
    let limit = match limit.trim() {
        "" => None,
        text => {
            let value: u32 = text.parse().map_err(|_| "Enter a valid limit.".to_owned())?;
            if value == 0 {
                return Err("Limit must be at least 1.".to_owned());
            }
            Some(value)
        }
    };
    let date = |raw: &str| {
        let trimmed = raw.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
    };
    let start_date = date(start_date);
    let end_date = date(end_date);
    if let (Some(start), Some(end)) = (&start_date, &end_date) {
        // ISO dates compare correctly as strings.
        if start > end {
            return Err("Start date cannot be after end date.".to_owned());
        }
    }
    Ok(ReportParams { limit, start_date, end_date, author_id })
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_guard(session, RouteAccess::Authenticated, navigate);

    let kind = RwSignal::new(ReportKind::Books);
    let format = RwSignal::new(ReportFormat::Pdf);
    let limit = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let author_id = RwSignal::new(None::<i64>);

    let author_options = RwSignal::new(Vec::<Author>::new());
    let available_formats = RwSignal::new(None::<Vec<String>>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    if session.get_untracked().is_authenticated() {
        let token = session.get_untracked().token();
        leptos::task::spawn_local(async move {
            match reports::fetch_formats(token.as_deref()).await {
                Ok(formats) => available_formats.set(Some(formats)),
                Err(err) => leptos::logging::warn!("report formats unavailable: {err}"),
            }
            let request = PageRequest {
                page: 0,
                size: 100,
                sort_by: Some("name".to_owned()),
                sort_dir: Some(SortDir::Asc),
            };
            match AUTHORS.list(token.as_deref(), &request).await {
                Ok(page) => author_options.set(page.content),
                Err(err) => leptos::logging::warn!("author filter unavailable: {err}"),
            }
        });
    }

    // Without the formats endpoint everything stays selectable; the
    // server still rejects what it cannot render.
    let format_supported = move |f: ReportFormat| {
        available_formats
            .get()
            .is_none_or(|formats| formats.iter().any(|s| s == f.path_segment()))
    };

    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        let author_filter = if kind.get_untracked() == ReportKind::Books {
            author_id.get_untracked()
        } else {
            None
        };
        let params = match parse_report_params(
            &limit.get_untracked(),
            &start_date.get_untracked(),
            &end_date.get_untracked(),
            author_filter,
        ) {
            Ok(params) => params,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token();
            let kind = kind.get_untracked();
            let format = format.get_untracked();
            leptos::task::spawn_local(async move {
                match reports::generate(token.as_deref(), kind, format, &params).await {
                    Ok(bytes) => {
                        let filename = report_filename(kind, format, &today_iso());
                        reports::download(&bytes, &filename, format.content_type());
                        busy.set(false);
                    }
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = params;
    };

    view! {
        <Navbar/>
        <main class="page page--narrow">
            <h1>"Reports"</h1>

            <section class="report-form">
                <label class="form__label">
                    "Collection"
                    <select
                        class="form__input"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            kind.set(
                                ReportKind::ALL
                                    .into_iter()
                                    .find(|k| k.path_segment() == value)
                                    .unwrap_or_default(),
                            );
                        }
                    >
                        {ReportKind::ALL
                            .into_iter()
                            .map(|k| {
                                view! {
                                    <option
                                        value=k.path_segment()
                                        selected=move || kind.get() == k
                                    >
                                        {k.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <fieldset class="form__fieldset">
                    <legend>"Format"</legend>
                    {ReportFormat::ALL
                        .into_iter()
                        .map(|f| {
                            view! {
                                <label class="form__radio">
                                    <input
                                        type="radio"
                                        name="format"
                                        value=f.path_segment()
                                        prop:checked=move || format.get() == f
                                        disabled=move || !format_supported(f)
                                        on:change=move |_| format.set(f)
                                    />
                                    <span class="form__radio-label">{f.label()}</span>
                                    <span class="form__radio-hint">{f.description()}</span>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <label class="form__label">
                    "Limit"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        placeholder="All rows"
                        prop:value=move || limit.get()
                        on:input=move |ev| limit.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "From"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "To"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || kind.get() == ReportKind::Books>
                    <label class="form__label">
                        "Author"
                        <select
                            class="form__input"
                            on:change=move |ev| {
                                author_id.set(event_target_value(&ev).parse::<i64>().ok());
                            }
                        >
                            <option value="" selected=move || author_id.get().is_none()>
                                "All authors"
                            </option>
                            {move || {
                                author_options
                                    .get()
                                    .into_iter()
                                    .map(|author| {
                                        let selected =
                                            move || author_id.get() == Some(author.id);
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
                </Show>

                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary" disabled=move || busy.get() on:click=on_generate>
                    {move || if busy.get() { "Generating..." } else { "Generate Report" }}
                </button>
            </section>
        </main>
    }
}
