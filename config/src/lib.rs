//! Configuration for qrfolio.
//!
//! ```toml
//! [app]
//! theme = "dark"
//! remember_theme = false
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//! ```
//!
//! The file lives at `~/.qrfolio/config.toml`. A missing file means defaults.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use qrfolio_types::ThemeMode;
use qrfolio_types::ui::UiOptions;

/// Environment override for the launch theme.
pub const THEME_ENV_VAR: &str = "QRFOLIO_THEME";

#[derive(Debug, Default, Deserialize)]
pub struct PortfolioConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// "dark" or "light".
    pub theme: Option<String>,
    /// Write the theme back to this file whenever it is toggled.
    #[serde(default)]
    pub remember_theme: bool,
    /// Use ASCII-only glyphs for icons and connectors.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable section entrance animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to edit config at {}: {source}", path.display())]
    Edit {
        path: PathBuf,
        source: toml_edit::TomlError,
    },
    #[error("config at {}: `app` is not a table", path.display())]
    AppNotTable { path: PathBuf },
    #[error("failed to write config at {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Edit { path, .. }
            | ConfigError::AppNotTable { path }
            | ConfigError::Write { path, .. } => path,
        }
    }
}

impl PortfolioConfig {
    /// Loads the config from the default location.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Configured launch theme. Unknown values are ignored with a warning.
    #[must_use]
    pub fn theme(&self) -> Option<ThemeMode> {
        let raw = self.app.as_ref()?.theme.as_deref()?;
        match raw.parse() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!("Ignoring theme in config: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn remember_theme(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.remember_theme)
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }
}

/// Reads the launch theme from `QRFOLIO_THEME`.
#[must_use]
pub fn theme_from_env() -> Option<ThemeMode> {
    parse_env_theme(env::var(THEME_ENV_VAR).ok().as_deref())
}

fn parse_env_theme(value: Option<&str>) -> Option<ThemeMode> {
    let value = value?;
    match value.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!("Ignoring {THEME_ENV_VAR}: {err}");
            None
        }
    }
}

/// Persist the theme to the config file at `path`.
///
/// Uses `toml_edit` to preserve comments and formatting.
/// Creates the config file and parent directory if they don't exist.
pub fn persist_theme(path: &Path, mode: ThemeMode) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
        #[cfg(unix)]
        restrict_permissions(parent, 0o700).map_err(write_err)?;
    }

    let content = if path.exists() {
        fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|source| ConfigError::Edit {
            path: path.to_path_buf(),
            source,
        })?;

    let app = doc
        .entry("app")
        .or_insert_with(toml_edit::table)
        .as_table_like_mut()
        .ok_or_else(|| ConfigError::AppNotTable {
            path: path.to_path_buf(),
        })?;
    app.insert("theme", toml_edit::value(mode.as_str()));

    // Write to a sibling temp file and rename over the target.
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(doc.to_string().as_bytes())
        .map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;

    #[cfg(unix)]
    restrict_permissions(path, 0o600).map_err(write_err)?;

    tracing::debug!(path = %path.display(), theme = %mode, "Persisted theme");
    Ok(())
}

/// Drops group/other permission bits on a path we own.
#[cfg(unix)]
fn restrict_permissions(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let metadata = fs::metadata(path)?;
    let our_uid = unsafe { libc::getuid() };
    if metadata.uid() == our_uid {
        let current = metadata.permissions().mode() & 0o777;
        if current & 0o077 != 0 {
            fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
        }
    }
    Ok(())
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qrfolio").join("config.toml"))
}
