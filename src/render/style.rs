//! Process-wide render style (fonts, grid and label colors).
//!
//! Installed exactly once by `run()` before the first render and never
//! mutated afterwards. Render code reads it through [`current`], which
//! falls back to the standard style so library callers (and unit tests)
//! that skip `run()` still get a fully initialized style.

use std::sync::OnceLock;

#[derive(Debug)]
pub struct RenderStyle {
    pub font_family: &'static str,
    pub background: &'static str,
    pub hour_line: &'static str,
    pub row_separator: &'static str,
    pub tick_text: &'static str,
    pub row_text: &'static str,
    pub bar_radius: f64,
}

impl RenderStyle {
    fn standard() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif",
            background: "#ffffff",
            hour_line: "#e0e0e0",
            row_separator: "#eeeeee",
            tick_text: "#777777",
            row_text: "#555555",
            bar_radius: 3.0,
        }
    }
}

static STYLE: OnceLock<RenderStyle> = OnceLock::new();

/// Install the render style. Called once at process startup; later calls
/// are no-ops.
pub fn install() {
    let _ = STYLE.set(RenderStyle::standard());
}

pub fn current() -> &'static RenderStyle {
    STYLE.get_or_init(RenderStyle::standard)
}
