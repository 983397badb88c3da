//! Duty-status timeline layout engine.
//!
//! Converts one day's duty segments into positioned bar geometry on the
//! fixed 24-hour grid. Pure: identical input yields bit-identical rects,
//! and days can be laid out in any order with no coordination.

use crate::errors::AppError;
use crate::models::segment::{DutySegment, SegmentRecord};
use chrono::{NaiveDate, NaiveDateTime};

use super::geometry::{
    BAR_INSET, HOUR_WIDTH, HOURS_PER_DAY, LayoutRect, MIN_BAR_WIDTH, PADDING_LEFT, PADDING_TOP,
    ROW_HEIGHT, chart_right,
};

/// One segment that could not be laid out, with its position in the
/// day's input order so callers can report it precisely.
#[derive(Debug)]
pub struct SegmentFault {
    pub index: usize,
    pub error: AppError,
}

/// Result of laying out one day: a rect per valid segment plus the
/// faults collected along the way.
#[derive(Debug)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub rects: Vec<LayoutRect>,
    pub faults: Vec<SegmentFault>,
}

impl DayLayout {
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

fn hours_between(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    (b - a).num_seconds() as f64 / 3600.0
}

/// Lay out one day's duty segments on the 24-hour grid.
///
/// Segments are processed independently in input order: a record that
/// fails validation produces a fault and no rect, and never disturbs its
/// neighbours. No re-sorting and no overlap resolution happen here;
/// out-of-order or overlapping input lays out overlapping bars.
pub fn layout_day(date: NaiveDate, segments: &[SegmentRecord]) -> DayLayout {
    // Midnight of a valid NaiveDate always exists.
    let day_start = date.and_hms_opt(0, 0, 0).unwrap();

    let mut rects = Vec::with_capacity(segments.len());
    let mut faults = Vec::new();

    for (index, rec) in segments.iter().enumerate() {
        match DutySegment::from_record(rec) {
            Ok(seg) => rects.push(layout_segment(day_start, &seg)),
            Err(error) => faults.push(SegmentFault { index, error }),
        }
    }

    DayLayout {
        date,
        rects,
        faults,
    }
}

/// Map one validated segment to its bar.
///
/// Offsets are clamped to the day window: a segment reaching outside
/// `[00:00, 24:00]` is truncated, never split (the planner pre-splits
/// segments at midnight). A segment entirely outside the window, or with
/// a reversed interval, degenerates to a minimum-width marker at the
/// clamped boundary.
fn layout_segment(day_start: NaiveDateTime, seg: &DutySegment) -> LayoutRect {
    let start_h = hours_between(day_start, seg.start).clamp(0.0, HOURS_PER_DAY);
    let end_h = hours_between(day_start, seg.end).clamp(0.0, HOURS_PER_DAY);

    let row = seg.status.row_index() as f64;

    let width = ((end_h - start_h) * HOUR_WIDTH).max(MIN_BAR_WIDTH);
    // The width floor must not push a right-edge marker past the canvas.
    let x = (PADDING_LEFT + start_h * HOUR_WIDTH).min(chart_right() - width);

    LayoutRect {
        x,
        y: PADDING_TOP + row * ROW_HEIGHT + BAR_INSET,
        width,
        height: ROW_HEIGHT - 2.0 * BAR_INSET,
        color: seg.status.color(),
        label: seg.note.clone(),
    }
}
