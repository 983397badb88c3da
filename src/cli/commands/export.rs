use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::render::load_response;
use crate::errors::AppResult;
use crate::export::export_segments;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let response = load_response(input)?;
        export_segments(&response, format, file, *force)?;
    }
    Ok(())
}
