//! Shared rendering pipeline: planning response → per-day layouts →
//! the selected render surface.

use crate::core::layout::engine::{DayLayout, layout_day};
use crate::core::layout::grid::day_grid;
use crate::errors::{AppError, AppResult};
use crate::models::plan::PlanResponse;
use crate::render::pdf::LogPdf;
use crate::render::{RenderFormat, ascii, svg};
use crate::ui::messages::{error, success};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Load a previously saved planning response.
pub fn load_response(path: &str) -> AppResult<PlanResponse> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Lay out and render the response's log days.
///
/// A day with segment faults renders nothing — no half-drawn timeline.
/// Its faults are reported with day date and segment index, the clean
/// days render normally, and the call fails at the end so the process
/// exits nonzero.
pub fn render_response(
    response: &PlanResponse,
    format: &RenderFormat,
    out_dir: &Path,
    only_date: Option<NaiveDate>,
) -> AppResult<()> {
    let grid = day_grid();

    let mut layouts: Vec<DayLayout> = Vec::new();
    let mut faulty_days = 0usize;

    for day in &response.eld_days {
        let date = parse_date(&day.date).ok_or_else(|| AppError::InvalidDate(day.date.clone()))?;
        if only_date.is_some_and(|d| d != date) {
            continue;
        }

        let layout = layout_day(date, &day.segments);
        if layout.is_clean() {
            layouts.push(layout);
        } else {
            for fault in &layout.faults {
                error(format!(
                    "{}: segment {}: {}",
                    layout.date, fault.index, fault.error
                ));
            }
            faulty_days += 1;
        }
    }

    match format {
        RenderFormat::Svg => {
            fs::create_dir_all(out_dir)?;
            for layout in &layouts {
                let path = out_dir.join(format!("eld-{}.svg", layout.date));
                svg::write_day_svg(&path, layout, &grid)?;
                success(format!("Wrote {}", path.display()));
            }
        }
        RenderFormat::Pdf => {
            fs::create_dir_all(out_dir)?;
            let mut doc = LogPdf::new();
            for layout in &layouts {
                doc.add_day(layout, &grid);
            }
            let path = out_dir.join("eld-log.pdf");
            doc.save(&path)?;
            success(format!("Wrote {}", path.display()));
        }
        RenderFormat::Ascii => {
            for layout in &layouts {
                println!("{}", ascii::day_to_text(layout));
            }
        }
    }

    if faulty_days > 0 {
        return Err(AppError::Render(format!(
            "{faulty_days} day(s) could not be laid out"
        )));
    }

    Ok(())
}
