//! Formatting utilities used for CLI outputs.

use crate::models::segment::parse_timestamp;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Fractional hours → "26h 30m".
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", total_minutes / 60, total_minutes % 60)
}

/// Shorten a planner ETA timestamp for table display; falls back to the
/// raw string when it does not parse.
pub fn format_eta(eta: &str) -> String {
    match parse_timestamp(eta) {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => eta.to_string(),
    }
}
