use super::parse_report_params;
use crate::net::reports::ReportParams;

#[test]
fn all_blank_means_no_filters() {
    assert_eq!(parse_report_params("", "", "", None), Ok(ReportParams::default()));
}

#[test]
fn parses_each_filter() {
    let params =
        parse_report_params("50", "2026-01-01", "2026-06-30", Some(7)).expect("should parse");
    assert_eq!(params.limit, Some(50));
    assert_eq!(params.start_date.as_deref(), Some("2026-01-01"));
    assert_eq!(params.end_date.as_deref(), Some("2026-06-30"));
    assert_eq!(params.author_id, Some(7));
}

#[test]
fn rejects_zero_or_garbage_limit() {
    assert!(parse_report_params("0", "", "", None).is_err());
    assert!(parse_report_params("many", "", "", None).is_err());
}

#[test]
fn rejects_inverted_date_range() {
    let err = parse_report_params("", "2026-06-30", "2026-01-01", None).unwrap_err();
    assert!(err.contains("Start date"));
}

#[test]
fn open_ended_ranges_are_fine() {
    assert!(parse_report_params("", "2026-01-01", "", None).is_ok());
    assert!(parse_report_params("", "", "2026-06-30", None).is_ok());
}
