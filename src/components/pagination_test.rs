use super::*;

// =============================================================
// Item range summary
// =============================================================

#[test]
fn start_item_is_zero_for_empty_results() {
    assert_eq!(start_item(0, 20, 0), 0);
}

#[test]
fn start_and_end_item_for_a_middle_page() {
    assert_eq!(start_item(2, 20, 95), 41);
    assert_eq!(end_item(2, 20, 95), 60);
}

#[test]
fn end_item_clamps_to_total_on_the_last_page() {
    assert_eq!(end_item(4, 20, 95), 95);
}

// =============================================================
// Page-button window
// =============================================================

#[test]
fn seven_or_fewer_pages_render_without_gaps() {
    assert_eq!(visible_pages(7, 3), vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(visible_pages(1, 0), vec![0]);
}

#[test]
fn window_near_the_start_gaps_only_the_tail() {
    assert_eq!(visible_pages(10, 1), vec![0, 1, 2, ELLIPSIS, 9]);
}

#[test]
fn window_in_the_middle_gaps_both_sides() {
    assert_eq!(visible_pages(10, 5), vec![0, ELLIPSIS, 4, 5, 6, ELLIPSIS, 9]);
}

#[test]
fn window_near_the_end_gaps_only_the_head() {
    assert_eq!(visible_pages(10, 8), vec![0, ELLIPSIS, 7, 8, 9]);
}

// =============================================================
// Click acceptance
// =============================================================

#[test]
fn navigation_to_the_current_page_is_ignored() {
    assert_eq!(accepted_navigation(3, 3, 10), None);
}

#[test]
fn navigation_out_of_range_is_ignored() {
    assert_eq!(accepted_navigation(-1, 0, 10), None);
    assert_eq!(accepted_navigation(10, 0, 10), None);
}

#[test]
fn navigation_in_range_is_accepted() {
    assert_eq!(accepted_navigation(4, 3, 10), Some(4));
}
