//! Static axis and grid geometry for the 24-hour canvas.
//! No inputs and no failure modes: every invocation yields the same grid.

use crate::models::duty_status::{STATUS_COUNT, STATUS_ROWS};

use super::geometry::{
    HOUR_WIDTH, PADDING_LEFT, PADDING_TOP, ROW_HEIGHT, chart_bottom, chart_right,
};

/// Hours that receive a tick label.
pub const TICK_HOURS: [u32; 7] = [0, 4, 8, 12, 16, 20, 24];

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGrid {
    /// 25 vertical lines, one per integer hour 0..=24.
    pub hour_lines: Vec<GridLine>,
    /// One horizontal separator below each status row, catalog order.
    pub row_separators: Vec<GridLine>,
    /// Tick labels at [`TICK_HOURS`].
    pub tick_labels: Vec<GridLabel>,
    /// Status row labels, catalog order.
    pub row_labels: Vec<GridLabel>,
}

pub fn day_grid() -> DayGrid {
    let hour_lines = (0..=24)
        .map(|h| {
            let x = PADDING_LEFT + f64::from(h) * HOUR_WIDTH;
            GridLine {
                x1: x,
                y1: PADDING_TOP,
                x2: x,
                y2: chart_bottom(),
            }
        })
        .collect();

    let row_separators = (0..STATUS_COUNT)
        .map(|i| {
            let y = PADDING_TOP + (i as f64 + 1.0) * ROW_HEIGHT;
            GridLine {
                x1: PADDING_LEFT,
                y1: y,
                x2: chart_right(),
                y2: y,
            }
        })
        .collect();

    let tick_labels = TICK_HOURS
        .iter()
        .map(|&h| GridLabel {
            x: PADDING_LEFT + f64::from(h) * HOUR_WIDTH - 6.0,
            y: PADDING_TOP - 8.0,
            text: h.to_string(),
        })
        .collect();

    let row_labels = STATUS_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| GridLabel {
            x: 8.0,
            y: PADDING_TOP + i as f64 * ROW_HEIGHT + ROW_HEIGHT - 8.0,
            text: row.label.to_string(),
        })
        .collect();

    DayGrid {
        hour_lines,
        row_separators,
        tick_labels,
        row_labels,
    }
}
