//! Locating and reading the CLI's TOML configuration.
//!
//! ```toml
//! [layout]
//! width = 2000.0
//! text_size_ratio = 0.01
//!
//! [sizing]
//! arrow_len = 2.0
//! interaction_line_pad_b = 1.0
//! ```
//!
//! Every key is optional. Without any file the built-in defaults apply.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use lanechart::{LanechartError, config::AppConfig};

/// Relative path checked in the working directory.
const LOCAL_CONFIG: &str = "lanechart/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(String),

    #[error("{0}")]
    Validation(String),
}

impl From<ConfigError> for LanechartError {
    fn from(err: ConfigError) -> Self {
        LanechartError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// Named with `--config`.
    Explicit,
    /// `lanechart/config.toml` under the working directory.
    Local,
    /// The platform's per-user config directory.
    System,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit",
            Self::Local => "local",
            Self::System => "system",
        })
    }
}

/// Picks the configuration file to read, if any.
///
/// An explicit path wins even when it does not exist, so that a typo is
/// reported rather than silently ignored.
fn locate(explicit: Option<&Path>) -> Option<(ConfigSource, PathBuf)> {
    if let Some(path) = explicit {
        return Some((ConfigSource::Explicit, path.to_path_buf()));
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some((ConfigSource::Local, local));
    }

    let system = ProjectDirs::from("com", "lanechart", "lanechart")?
        .config_dir()
        .join("config.toml");
    if system.is_file() {
        return Some((ConfigSource::System, system));
    }
    debug!(checked:? = system; "No system configuration file");
    None
}

/// Loads the configuration for this run.
///
/// # Errors
///
/// Returns [`LanechartError::Config`] when the chosen file is missing,
/// unreadable, not valid TOML or holds values no diagram can be built with.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, LanechartError> {
    let Some((source, path)) = locate(explicit) else {
        debug!("Using default configuration");
        return Ok(AppConfig::default());
    };

    info!(source:% = source, path:? = path; "Loading configuration");
    let config = read_config(&path)?;
    debug!(
        width = config.layout().width(),
        text_size_ratio = config.layout().text_size_ratio();
        "Configuration loaded"
    );
    Ok(config)
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::MissingFile(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_config(&content)
}

/// Parses `content` and rejects layouts that cannot produce a diagram.
fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;

    let layout = config.layout();
    for (key, value) in [
        ("layout.width", layout.width()),
        ("layout.text_size_ratio", layout.text_size_ratio()),
    ] {
        if !(value > 0.0) {
            return Err(ConfigError::Validation(format!(
                "{key} must be positive, got {value}"
            )));
        }
    }

    Ok(config)
}
