use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub api_base: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_api_base() -> String {
    "http://localhost:8000".to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_log_format() -> String {
    "svg".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_timeout(),
            output_dir: default_output_dir(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtripplan")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtripplan")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtripplan.conf")
    }

    /// Load configuration from the standard location, or defaults if the
    /// file does not exist.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from an explicit file. A missing file yields
    /// defaults silently; an unreadable or malformed one yields defaults
    /// with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_yaml::from_str(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring invalid config file {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Initialize the configuration directory and file with defaults.
    /// An existing config file is left untouched.
    pub fn init_all() -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !path.exists() {
            let yaml = serde_yaml::to_string(&Config::default())
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
