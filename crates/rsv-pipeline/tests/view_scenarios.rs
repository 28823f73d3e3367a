//! End-to-end view scenarios: normalize, sort, filter, search.

use chrono::NaiveDate;
use rsv_model::{ReservationField, SortDirection, ViewerZone};
use rsv_pipeline::{BookingView, ViewSummary, search};
use serde_json::{Value, json};

fn tokyo() -> ViewerZone {
    ViewerZone::east_hours(9).unwrap()
}

fn booking(date: &str, store: &str, name: &str, phone: &str) -> Value {
    json!({
        "日付": date,
        "店舗": store,
        "キャスト": "美咲",
        "名前": name,
        "電話番号": phone,
    })
}

fn names(view: &[rsv_model::Reservation]) -> Vec<&str> {
    view.iter().map(|r| r.customer_name.as_str()).collect()
}

// =========================================================================
// Normalization
// =========================================================================

#[test]
fn record_with_empty_date_is_dropped() {
    let raw = vec![
        json!({"日付": "", "店舗": "A", "キャスト": "X", "名前": "Y", "電話番号": "1"}),
        booking("2024-01-05T10:00", "A", "kept", "2"),
    ];
    let view = BookingView::from_raw(&raw, tokyo());
    assert_eq!(names(view.records()), vec!["kept"]);
}

#[test]
fn extra_payload_keys_never_reach_the_view() {
    let raw = vec![json!({
        "日付": "2024-01-05T10:00",
        "店舗": "A",
        "キャスト": "X",
        "名前": "Y",
        "電話番号": "1",
        "メール": "y@example.com",
        "備考": "internal note",
        "id": 42,
    })];
    let view = BookingView::from_raw(&raw, tokyo());
    let rendered = serde_json::to_value(&view.records()[0]).unwrap();
    let keys: Vec<_> = rendered.as_object().unwrap().keys().cloned().collect();
    assert!(!keys.contains(&"備考".to_string()));
    assert!(!keys.contains(&"id".to_string()));
    assert_eq!(rendered["メール"], "y@example.com");
}

// =========================================================================
// Sorting
// =========================================================================

#[test]
fn store_sort_is_stable_for_ties() {
    let raw = vec![
        booking("2024-01-05T10:00", "A店", "first", "1"),
        booking("2024-01-05T11:00", "A店", "second", "2"),
    ];
    let mut view = BookingView::from_raw(&raw, tokyo());
    view.set_sort_key(ReservationField::Store);
    assert_eq!(names(&view.current_view()), vec!["first", "second"]);
}

#[test]
fn selecting_same_key_flips_direction() {
    let raw = vec![
        booking("2024-01-05T10:00", "A店", "a", "1"),
        booking("2024-01-05T11:00", "C店", "c", "2"),
        booking("2024-01-05T12:00", "B店", "b", "3"),
    ];
    let mut view = BookingView::from_raw(&raw, tokyo());

    view.set_sort_key(ReservationField::Store);
    assert_eq!(view.sort_state().direction(), SortDirection::Ascending);
    assert_eq!(names(&view.current_view()), vec!["a", "b", "c"]);

    view.set_sort_key(ReservationField::Store);
    assert_eq!(view.sort_state().direction(), SortDirection::Descending);
    assert_eq!(names(&view.current_view()), vec!["c", "b", "a"]);

    view.set_sort_key(ReservationField::Date);
    assert_eq!(view.sort_state().direction(), SortDirection::Ascending);
    assert_eq!(names(&view.current_view()), vec!["a", "c", "b"]);
}

#[test]
fn current_view_is_idempotent() {
    let raw = vec![
        booking("2024-01-06T10:00", "B", "one", "1"),
        booking("2024-01-05T10:00", "A", "two", "2"),
    ];
    let mut view = BookingView::from_raw(&raw, tokyo());
    view.set_sort_key(ReservationField::Date);
    assert_eq!(view.current_view(), view.current_view());
}

// =========================================================================
// Date filter
// =========================================================================

#[test]
fn date_filter_matches_local_calendar_day() {
    let raw = vec![
        booking("2024-01-05T23:59", "A", "late", "1"),
        booking("2024-01-06T00:01", "A", "next", "2"),
        booking("2024-01-05T00:00", "A", "midnight", "3"),
    ];
    let mut view = BookingView::from_raw(&raw, tokyo());
    view.set_date_filter(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert_eq!(names(&view.current_view()), vec!["late", "midnight"]);
}

#[test]
fn utc_timestamps_are_bucketed_in_viewer_zone() {
    // 2024-01-05T20:00Z is 2024-01-06 05:00 in Tokyo
    let raw = vec![booking("2024-01-05T20:00:00Z", "A", "utc", "1")];
    let mut view = BookingView::from_raw(&raw, tokyo());

    view.set_date_filter(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    assert!(view.current_view().is_empty());

    view.set_date_filter(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
    assert_eq!(names(&view.current_view()), vec!["utc"]);
}

#[test]
fn picker_input_forms_agree() {
    let raw = vec![booking("2024-01-05T12:00", "A", "noon", "1")];
    let mut by_date = BookingView::from_raw(&raw, tokyo());
    let mut by_timestamp = by_date.clone();

    by_date.apply_date_input("2024-01-05");
    by_timestamp.apply_date_input("2024-01-05T00:00");
    assert_eq!(by_date.date_filter(), by_timestamp.date_filter());
    assert_eq!(by_date.current_view(), by_timestamp.current_view());
}

// =========================================================================
// Search
// =========================================================================

#[test]
fn phone_prefix_search() {
    let raw = vec![
        booking("2024-01-05T10:00", "A", "Taro", "090-1234-5678"),
        booking("2024-01-05T11:00", "A", "Jiro", "080-1234-5678"),
    ];
    let view = BookingView::from_raw(&raw, tokyo());
    let found = search(&view.current_view(), "090");
    assert_eq!(names(&found), vec!["Taro"]);
}

#[test]
fn search_applies_after_sort_and_filter() {
    let raw = vec![
        booking("2024-01-05T10:00", "B店", "taro b", "1"),
        booking("2024-01-06T10:00", "A店", "taro other day", "2"),
        booking("2024-01-05T11:00", "A店", "taro a", "3"),
        booking("2024-01-05T12:00", "A店", "hanako", "4"),
    ];
    let mut view = BookingView::from_raw(&raw, tokyo());
    view.set_sort_key(ReservationField::Store);
    view.set_date_filter(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());

    let found = search(&view.current_view(), "TARO");
    assert_eq!(names(&found), vec!["taro a", "taro b"]);
}

#[test]
fn summary_snapshot() {
    let raw = vec![
        booking("2024-01-05T10:00", "A", "a", "1"),
        booking("2024-01-05T18:00", "A", "b", "2"),
        booking("2024-01-07T10:00", "A", "c", "3"),
    ];
    let view = BookingView::from_raw(&raw, tokyo());
    let summary = ViewSummary::compute(
        &view.current_view(),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    );
    insta::assert_json_snapshot!(summary, @r#"
    {
      "total": 3,
      "today": 2
    }
    "#);
}
