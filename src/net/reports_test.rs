use super::*;

#[test]
fn report_path_without_filters_has_no_query() {
    let path = report_path(ReportKind::Books, ReportFormat::Pdf, &ReportParams::default());
    assert_eq!(path, "/reports/books/pdf");
}

#[test]
fn report_path_appends_set_filters_in_order() {
    let params = ReportParams {
        limit: Some(25),
        start_date: Some("2026-01-01".to_owned()),
        end_date: None,
        author_id: Some(3),
    };
    let path = report_path(ReportKind::Books, ReportFormat::Csv, &params);
    assert_eq!(path, "/reports/books/csv?limit=25&startDate=2026-01-01&authorId=3");
}

#[test]
fn content_type_matches_format() {
    assert_eq!(ReportFormat::Pdf.content_type(), "application/pdf");
    assert_eq!(ReportFormat::Csv.content_type(), "text/csv");
    assert_eq!(ReportFormat::Xml.content_type(), "application/xml");
    assert_eq!(ReportFormat::Json.content_type(), "application/json");
}

#[test]
fn filename_uses_kind_date_and_extension() {
    assert_eq!(
        report_filename(ReportKind::Authors, ReportFormat::Json, "2026-08-23"),
        "authors-report-2026-08-23.json"
    );
}
