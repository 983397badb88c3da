/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Terminal color for a duty-status row, same order as the catalog
/// (Off, Sleeper, Driving, On duty).
pub fn color_for_row(row: usize) -> &'static str {
    match row {
        0 => GREY,
        1 => MAGENTA,
        2 => GREEN,
        3 => YELLOW,
        _ => RESET,
    }
}

/// Terminal color for a planner stop kind.
pub fn color_for_stop(kind: &str) -> &'static str {
    match kind {
        "pickup" => CYAN,
        "dropoff" => RED,
        "fuel" => YELLOW,
        "break" => BLUE,
        "rest" => MAGENTA,
        _ => RESET,
    }
}
