pub mod ascii;
pub mod pdf;
pub mod style;
pub mod svg;

use clap::ValueEnum;

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Svg,
    Pdf,
    Ascii,
}

impl RenderFormat {
    /// Parse a config-file format name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "svg" => Some(RenderFormat::Svg),
            "pdf" => Some(RenderFormat::Pdf),
            "ascii" => Some(RenderFormat::Ascii),
            _ => None,
        }
    }
}
