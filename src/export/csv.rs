use crate::errors::AppResult;
use crate::models::plan::PlanResponse;
use csv::Writer;

/// Write every duty segment to CSV, flattened across days.
pub fn write_csv(path: &str, response: &PlanResponse) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "start", "end", "status", "note"])?;

    for day in &response.eld_days {
        for seg in &day.segments {
            wtr.write_record([
                day.date.as_str(),
                seg.start.as_str(),
                seg.end.as_str(),
                seg.status.as_str(),
                seg.note.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
