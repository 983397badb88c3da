use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: create the config directory and a default
/// configuration file. An existing file is left untouched.
pub fn handle() -> AppResult<()> {
    let path = Config::init_all()?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
