use chrono::NaiveDate;
use rtripplan::core::layout::engine::layout_day;
use rtripplan::core::layout::geometry::{
    BAR_INSET, HOUR_WIDTH, MIN_BAR_WIDTH, PADDING_LEFT, PADDING_TOP, ROW_HEIGHT,
};
use rtripplan::errors::AppError;
use rtripplan::models::duty_status::{DutyStatus, STATUS_COUNT, STATUS_ROWS};
use rtripplan::models::segment::SegmentRecord;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn seg(start: &str, end: &str, status: &str) -> SegmentRecord {
    SegmentRecord {
        start: start.to_string(),
        end: end.to_string(),
        status: status.to_string(),
        note: String::new(),
    }
}

#[test]
fn driving_segment_lands_on_third_row() {
    let segments = [seg("2024-01-01T00:00:00", "2024-01-01T08:00:00", "D")];
    let layout = layout_day(day(), &segments);

    assert!(layout.is_clean());
    assert_eq!(layout.rects.len(), 1);

    let r = &layout.rects[0];
    assert_eq!(r.x, PADDING_LEFT);
    assert_eq!(r.width, 8.0 * HOUR_WIDTH);
    assert_eq!(r.y, PADDING_TOP + 2.0 * ROW_HEIGHT + BAR_INSET);
    assert_eq!(r.color, "#2e7d32");
}

#[test]
fn segment_before_the_day_degrades_to_left_marker() {
    let segments = [seg("2023-12-31T20:00:00", "2023-12-31T23:00:00", "OFF")];
    let layout = layout_day(day(), &segments);

    let r = &layout.rects[0];
    assert_eq!(r.x, PADDING_LEFT);
    assert_eq!(r.width, MIN_BAR_WIDTH);
}

#[test]
fn segment_past_midnight_clamps_to_right_edge() {
    let segments = [seg("2024-01-01T22:00:00", "2024-01-02T02:00:00", "D")];
    let layout = layout_day(day(), &segments);

    let r = &layout.rects[0];
    assert_eq!(r.x + r.width, PADDING_LEFT + 24.0 * HOUR_WIDTH);
    assert_eq!(r.width, 2.0 * HOUR_WIDTH);
}

#[test]
fn segment_after_the_day_degrades_to_right_marker() {
    let segments = [seg("2024-01-02T03:00:00", "2024-01-02T05:00:00", "ON")];
    let layout = layout_day(day(), &segments);

    let r = &layout.rects[0];
    assert_eq!(r.width, MIN_BAR_WIDTH);
    assert_eq!(r.x + r.width, PADDING_LEFT + 24.0 * HOUR_WIDTH);
}

#[test]
fn rects_stay_inside_the_day_window() {
    let segments = [
        seg("2023-12-25T00:00:00", "2023-12-25T12:00:00", "OFF"),
        seg("2023-12-31T23:00:00", "2024-01-01T05:00:00", "SB"),
        seg("2024-01-01T20:00:00", "2024-01-02T09:00:00", "D"),
        seg("2024-01-05T00:00:00", "2024-01-06T00:00:00", "ON"),
    ];
    let layout = layout_day(day(), &segments);

    assert!(layout.is_clean());
    for r in &layout.rects {
        assert!(r.x >= PADDING_LEFT);
        assert!(r.x + r.width <= PADDING_LEFT + 24.0 * HOUR_WIDTH);
        assert!(r.width >= MIN_BAR_WIDTH);
    }
}

#[test]
fn unknown_status_faults_without_losing_neighbours() {
    let segments = [
        seg("2024-01-01T00:00:00", "2024-01-01T06:00:00", "OFF"),
        seg("2024-01-01T06:00:00", "2024-01-01T10:00:00", "XX"),
        seg("2024-01-01T10:00:00", "2024-01-01T18:00:00", "D"),
    ];
    let layout = layout_day(day(), &segments);

    assert_eq!(layout.rects.len(), 2);
    assert_eq!(layout.faults.len(), 1);
    assert_eq!(layout.faults[0].index, 1);
    assert!(matches!(
        &layout.faults[0].error,
        AppError::UnknownStatus(s) if s == "XX"
    ));
}

#[test]
fn malformed_timestamp_faults_only_that_segment() {
    let segments = [
        seg("not-a-timestamp", "2024-01-01T06:00:00", "OFF"),
        seg("2024-01-01T06:00:00", "2024-01-01T10:00:00", "D"),
    ];
    let layout = layout_day(day(), &segments);

    assert_eq!(layout.rects.len(), 1);
    assert_eq!(layout.faults.len(), 1);
    assert_eq!(layout.faults[0].index, 0);
    assert!(matches!(
        &layout.faults[0].error,
        AppError::MalformedTimestamp(s) if s == "not-a-timestamp"
    ));
}

#[test]
fn empty_day_lays_out_nothing() {
    let layout = layout_day(day(), &[]);
    assert!(layout.rects.is_empty());
    assert!(layout.faults.is_empty());
}

#[test]
fn zero_duration_segment_keeps_minimum_width() {
    let segments = [seg("2024-01-01T12:00:00", "2024-01-01T12:00:00", "ON")];
    let layout = layout_day(day(), &segments);

    assert_eq!(layout.rects[0].width, MIN_BAR_WIDTH);
}

#[test]
fn reversed_interval_degrades_to_marker() {
    let segments = [seg("2024-01-01T12:00:00", "2024-01-01T10:00:00", "OFF")];
    let layout = layout_day(day(), &segments);

    let r = &layout.rects[0];
    assert_eq!(r.x, PADDING_LEFT + 12.0 * HOUR_WIDTH);
    assert_eq!(r.width, MIN_BAR_WIDTH);
}

#[test]
fn layout_is_idempotent() {
    let segments = [
        seg("2024-01-01T00:00:00", "2024-01-01T07:30:00", "SB"),
        seg("2024-01-01T07:30:00", "2024-01-01T16:00:00", "D"),
    ];
    let first = layout_day(day(), &segments);
    let second = layout_day(day(), &segments);

    assert_eq!(first.rects, second.rects);
}

#[test]
fn start_order_is_monotonic_in_x() {
    let segments = [
        seg("2023-12-31T22:00:00", "2024-01-01T02:00:00", "OFF"),
        seg("2024-01-01T02:00:00", "2024-01-01T08:00:00", "SB"),
        seg("2024-01-01T08:00:00", "2024-01-01T14:00:00", "D"),
        seg("2024-01-01T14:00:00", "2024-01-02T03:00:00", "ON"),
    ];
    let layout = layout_day(day(), &segments);

    assert!(layout.is_clean());
    for pair in layout.rects.windows(2) {
        assert!(pair[0].x <= pair[1].x);
    }
}

#[test]
fn overlapping_segments_lay_out_independently() {
    let segments = [
        seg("2024-01-01T08:00:00", "2024-01-01T12:00:00", "D"),
        seg("2024-01-01T10:00:00", "2024-01-01T14:00:00", "D"),
    ];
    let layout = layout_day(day(), &segments);

    assert_eq!(layout.rects.len(), 2);
    assert!(layout.rects[0].x < layout.rects[1].x);
}

#[test]
fn segment_notes_become_rect_labels() {
    let mut rec = seg("2024-01-01T09:00:00", "2024-01-01T10:00:00", "ON");
    rec.note = "Pickup".to_string();
    let layout = layout_day(day(), &[rec]);

    assert_eq!(layout.rects[0].label, "Pickup");
}

#[test]
fn catalog_rows_are_total_and_injective() {
    let codes = ["OFF", "SB", "D", "ON"];
    let mut seen = [false; STATUS_COUNT];

    for code in codes {
        let status = DutyStatus::from_code(code).expect("catalog member must parse");
        let row = status.row_index();
        assert!(row < STATUS_COUNT);
        assert!(!seen[row], "row {} mapped twice", row);
        seen[row] = true;
        assert_eq!(status.code(), code);
    }

    assert!(seen.iter().all(|&s| s));
}

#[test]
fn catalog_table_matches_declaration_order() {
    for (i, row) in STATUS_ROWS.iter().enumerate() {
        assert_eq!(row.status.row_index(), i);
        assert_eq!(row.label, row.status.label());
        assert_eq!(row.color, row.status.color());
    }
}

#[test]
fn unknown_code_never_reaches_a_row() {
    assert!(DutyStatus::from_code("PC").is_none());
    assert!(DutyStatus::from_code("off").is_none());
    assert!(DutyStatus::from_code("").is_none());
}
