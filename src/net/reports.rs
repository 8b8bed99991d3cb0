//! Export-report generation and browser download.
//!
//! The server renders the report; the client picks kind/format, fetches
//! the bytes with a matching `Accept` header, and hands them to the
//! browser as a blob download.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use super::api;

/// Which collection the report covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportKind {
    #[default]
    Books,
    Authors,
    Stores,
}

impl ReportKind {
    pub const ALL: [Self; 3] = [Self::Books, Self::Authors, Self::Stores];

    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Authors => "authors",
            Self::Stores => "stores",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Books => "Books",
            Self::Authors => "Authors",
            Self::Stores => "Stores",
        }
    }
}

/// Output format negotiated with the server via path and `Accept` header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Pdf,
    Csv,
    Xml,
    Json,
}

impl ReportFormat {
    pub const ALL: [Self; 4] = [Self::Pdf, Self::Csv, Self::Xml, Self::Json];

    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Csv => "CSV",
            Self::Xml => "XML",
            Self::Json => "JSON",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Csv => "text/csv",
            Self::Xml => "application/xml",
            Self::Json => "application/json",
        }
    }

    pub fn extension(self) -> &'static str {
        self.path_segment()
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Pdf => "Portable Document Format - Best for printing and sharing",
            Self::Csv => "Comma-Separated Values - Best for spreadsheet applications",
            Self::Xml => "Extensible Markup Language - Best for data exchange",
            Self::Json => "JavaScript Object Notation - Best for web applications",
        }
    }
}

/// Optional report filters; all server-interpreted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportParams {
    pub limit: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub author_id: Option<i64>,
}

/// Request path for a report: `/reports/{kind}/{format}` plus whichever
/// filters are set.
pub fn report_path(kind: ReportKind, format: ReportFormat, params: &ReportParams) -> String {
    let mut path = format!("/reports/{}/{}", kind.path_segment(), format.path_segment());
    let mut sep = '?';
    let mut push = |key: &str, value: String, path: &mut String, sep: &mut char| {
        path.push(*sep);
        path.push_str(key);
        path.push('=');
        path.push_str(&value);
        *sep = '&';
    };
    if let Some(limit) = params.limit {
        push("limit", limit.to_string(), &mut path, &mut sep);
    }
    if let Some(start) = &params.start_date {
        push("startDate", start.clone(), &mut path, &mut sep);
    }
    if let Some(end) = &params.end_date {
        push("endDate", end.clone(), &mut path, &mut sep);
    }
    if let Some(author_id) = params.author_id {
        push("authorId", author_id.to_string(), &mut path, &mut sep);
    }
    path
}

/// Download filename like `books-report-2026-08-23.pdf`.
pub fn report_filename(kind: ReportKind, format: ReportFormat, date: &str) -> String {
    format!("{}-report-{date}.{}", kind.path_segment(), format.extension())
}

/// Formats the server can render, from `/api/reports/formats`.
pub async fn fetch_formats(token: Option<&str>) -> Result<Vec<String>, String> {
    api::get_json("/reports/formats", token, "Failed to load report formats").await
}

/// Fetch the rendered report bytes.
pub async fn generate(
    token: Option<&str>,
    kind: ReportKind,
    format: ReportFormat,
    params: &ReportParams,
) -> Result<Vec<u8>, String> {
    let path = report_path(kind, format, params);
    api::get_bytes(&path, token, format.content_type(), "Failed to generate report").await
}

/// Today's date as `YYYY-MM-DD` in the browser's clock.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.chars().take(10).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Hand the bytes to the browser as a named file download.
pub fn download(bytes: &[u8], filename: &str, content_type: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes).buffer());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(content_type);
        let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                anchor.click();
            }
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename, content_type);
    }
}
