//! Terminal render surface: one colored line per status row, one column
//! per hour.

use crate::core::layout::engine::DayLayout;
use crate::core::layout::geometry::{BAR_INSET, HOUR_WIDTH, PADDING_LEFT, PADDING_TOP, ROW_HEIGHT};
use crate::models::duty_status::{STATUS_COUNT, STATUS_ROWS};
use crate::utils::colors::{RESET, color_for_row};
use unicode_width::UnicodeWidthStr;

const LABEL_WIDTH: usize = 9;

fn pad_label(s: &str) -> String {
    let pad = LABEL_WIDTH.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Recover the status row of a rect from its vertical position.
fn row_of(y: f64) -> usize {
    let row = ((y - PADDING_TOP - BAR_INSET) / ROW_HEIGHT).round();
    (row.max(0.0) as usize).min(STATUS_COUNT - 1)
}

/// Render one day as plain text: hour ruler, one line per status row
/// with a block glyph per covered hour, then the segment notes.
pub fn day_to_text(layout: &DayLayout) -> String {
    let mut covered = [[false; 24]; STATUS_COUNT];

    for rect in &layout.rects {
        let row = row_of(rect.y);
        let from = (((rect.x - PADDING_LEFT) / HOUR_WIDTH).floor().max(0.0) as usize).min(23);
        let to = ((((rect.x + rect.width) - PADDING_LEFT) / HOUR_WIDTH).ceil() as usize).min(24);
        let to = to.max(from + 1).min(24);
        for cell in &mut covered[row][from..to] {
            *cell = true;
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", layout.date));

    out.push_str(&pad_label(""));
    for h in (0..24).step_by(4) {
        out.push_str(&format!("{h:<4}"));
    }
    out.push('\n');

    for (i, row) in STATUS_ROWS.iter().enumerate() {
        out.push_str(&pad_label(row.label));
        let color = color_for_row(i);
        for &on in &covered[i] {
            if on {
                out.push_str(&format!("{color}\u{2588}{RESET}"));
            } else {
                out.push('\u{00b7}');
            }
        }
        out.push('\n');
    }

    for rect in &layout.rects {
        if !rect.label.is_empty() {
            out.push_str(&format!("  - {}\n", rect.label));
        }
    }

    out
}
