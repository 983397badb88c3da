use serde::Serialize;

/// The four duty-status categories of an ELD log, in display order
/// (top row first). The set is fixed by the Hours-of-Service regulation;
/// extending it is a rebuild, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DutyStatus {
    Off,
    Sleeper,
    Driving,
    OnDuty,
}

pub const STATUS_COUNT: usize = 4;

/// One catalog row: display label and bar color for a duty status.
#[derive(Debug)]
pub struct StatusRow {
    pub status: DutyStatus,
    pub label: &'static str,
    pub color: &'static str,
}

/// Fixed display catalog. Declaration order of [`DutyStatus`] is catalog
/// order, so `status as usize` indexes this table totally.
pub const STATUS_ROWS: [StatusRow; STATUS_COUNT] = [
    StatusRow {
        status: DutyStatus::Off,
        label: "Off",
        color: "#90a4ae",
    },
    StatusRow {
        status: DutyStatus::Sleeper,
        label: "Sleeper",
        color: "#7e57c2",
    },
    StatusRow {
        status: DutyStatus::Driving,
        label: "Driving",
        color: "#2e7d32",
    },
    StatusRow {
        status: DutyStatus::OnDuty,
        label: "On duty",
        color: "#f9a825",
    },
];

impl DutyStatus {
    /// Convert wire code → enum. The only place a raw status string
    /// becomes a `DutyStatus`.
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "OFF" => Some(DutyStatus::Off),
            "SB" => Some(DutyStatus::Sleeper),
            "D" => Some(DutyStatus::Driving),
            "ON" => Some(DutyStatus::OnDuty),
            _ => None,
        }
    }

    /// Convert enum → wire code
    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::Off => "OFF",
            DutyStatus::Sleeper => "SB",
            DutyStatus::Driving => "D",
            DutyStatus::OnDuty => "ON",
        }
    }

    /// Grid row of this status. Total over the enum: no lookup can miss.
    pub fn row_index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        STATUS_ROWS[self.row_index()].label
    }

    pub fn color(&self) -> &'static str {
        STATUS_ROWS[self.row_index()].color
    }
}
