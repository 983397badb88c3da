use super::duty_status::DutyStatus;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One duty segment exactly as the planning service sends it.
/// Status and timestamps stay unvalidated until promotion to
/// [`DutySegment`], so one bad record cannot fail a whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub start: String,
    pub end: String,
    pub status: String,
    #[serde(default)]
    pub note: String,
}

/// A validated duty segment: one continuous period in a single status.
/// Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct DutySegment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: DutyStatus,
    pub note: String,
}

impl DutySegment {
    /// Promote a wire record, rejecting unknown status codes and bad
    /// timestamps with a named error instead of letting them reach the
    /// layout math.
    pub fn from_record(rec: &SegmentRecord) -> AppResult<Self> {
        let status = DutyStatus::from_code(&rec.status)
            .ok_or_else(|| AppError::UnknownStatus(rec.status.clone()))?;
        let start = parse_timestamp(&rec.start)?;
        let end = parse_timestamp(&rec.end)?;

        Ok(Self {
            start,
            end,
            status,
            note: rec.note.clone(),
        })
    }
}

/// Parse a planner timestamp ("2024-01-01T08:00:00", optionally with
/// fractional seconds or a trailing UTC marker).
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let trimmed = s.trim().trim_end_matches('Z');

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|_| AppError::MalformedTimestamp(s.to_string()))
}
