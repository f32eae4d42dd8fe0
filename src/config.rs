use crate::clipboard::DEFAULT_CLIPBOARD_COMMAND;
use crate::error::{Encod3rError, Result};
use crate::method::Method;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Optional settings read from a TOML file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub default_method: Option<Method>,
    pub copy: Option<bool>,
    pub clipboard_command: Option<Vec<String>>,
    pub log_level: Option<String>, // e.g. "warn", "debug"
}

impl FileConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        Self::from_toml(&s)
    }
}

/// Overrides taken from the command line
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub method: Option<Method>,
    pub copy: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_method: Method,
    pub copy: bool,
    pub clipboard_command: Vec<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_method: Method::Url,
            copy: false,
            clipboard_command: DEFAULT_CLIPBOARD_COMMAND.iter().map(|s| s.to_string()).collect(),
            log_level: "warn".into(),
        }
    }
}

impl Config {
    /// Defaults, then the file, then the command line
    pub fn merge(file: Option<FileConfig>, cli: CliOverrides) -> Result<Self> {
        let mut c = Config::default();
        if let Some(f) = file {
            if let Some(v) = f.default_method { c.default_method = v; }
            if let Some(v) = f.copy { c.copy = v; }
            if let Some(v) = f.clipboard_command { c.clipboard_command = v; }
            if let Some(v) = f.log_level { c.log_level = v; }
        }
        if let Some(v) = cli.method { c.default_method = v; }
        if let Some(v) = cli.copy { c.copy = v; }
        if let Some(v) = cli.log_level { c.log_level = v; }

        if c.clipboard_command.first().map_or(true, |p| p.is_empty()) {
            return Err(Encod3rError::Clipboard(
                "clipboard_command must name a program".into(),
            ));
        }
        Ok(c)
    }
}
