//! SVG render surface: one document per day, grid first, then one
//! rounded bar per laid-out segment.

use crate::core::layout::engine::DayLayout;
use crate::core::layout::geometry::{canvas_height, canvas_width};
use crate::core::layout::grid::DayGrid;
use crate::errors::AppResult;
use std::fmt::Write as _;
use std::path::Path;

use super::style;

/// Escape free text (segment notes) for XML attribute/body positions.
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Build the SVG document for one day.
pub fn day_to_svg(layout: &DayLayout, grid: &DayGrid) -> String {
    let st = style::current();
    let w = canvas_width();
    let h = canvas_height();

    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" font-family="{}">"#,
        st.font_family
    );
    let _ = writeln!(
        svg,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        st.background
    );
    let _ = writeln!(
        svg,
        r#"  <text x="8" y="12" font-size="12" fill="{}">{}</text>"#,
        st.row_text, layout.date
    );

    for line in &grid.hour_lines {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            line.x1, line.y1, line.x2, line.y2, st.hour_line
        );
    }

    for line in &grid.row_separators {
        let _ = writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"/>"#,
            line.x1, line.y1, line.x2, line.y2, st.row_separator
        );
    }

    for lbl in &grid.tick_labels {
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="10" fill="{}">{}</text>"#,
            lbl.x, lbl.y, st.tick_text, lbl.text
        );
    }

    for lbl in &grid.row_labels {
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-size="12" fill="{}">{}</text>"#,
            lbl.x, lbl.y, st.row_text, lbl.text
        );
    }

    for rect in &layout.rects {
        let _ = write!(
            svg,
            r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{r}" ry="{r}" fill="{}">"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rect.color,
            r = st.bar_radius
        );
        if !rect.label.is_empty() {
            let _ = write!(svg, "<title>{}</title>", xml_escape(&rect.label));
        }
        svg.push_str("</rect>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write one day's log to an `.svg` file.
pub fn write_day_svg(path: &Path, layout: &DayLayout, grid: &DayGrid) -> AppResult<()> {
    std::fs::write(path, day_to_svg(layout, grid))?;
    Ok(())
}
