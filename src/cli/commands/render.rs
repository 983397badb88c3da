use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::{load_response, render_response};
use crate::errors::{AppError, AppResult};
use crate::render::RenderFormat;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        input,
        out,
        format,
        date,
    } = cmd
    {
        let response = load_response(input)?;

        let only_date = match date {
            Some(d) => {
                Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?)
            }
            None => None,
        };

        let format = match format {
            Some(f) => f.clone(),
            None => RenderFormat::from_name(&cfg.log_format).ok_or_else(|| {
                AppError::Config(format!("unknown log_format '{}'", cfg.log_format))
            })?,
        };

        let out_dir = expand_tilde(out.as_deref().unwrap_or(&cfg.output_dir));
        render_response(&response, &format, &out_dir, only_date)?;
    }
    Ok(())
}
