use crate::errors::AppResult;
use crate::models::plan::PlanResponse;

/// Write the log days as formatted JSON.
pub fn write_json(path: &str, response: &PlanResponse) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&response.eld_days)?;
    std::fs::write(path, json)?;
    Ok(())
}
