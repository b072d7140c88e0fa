//! Site settings loading.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::configuration::SiteSettings;

/// Settings file looked up in the working directory when no path is given.
pub const SETTINGS_FILE: &str = "site.toml";

/// Where the settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// Path given explicitly; it must exist.
    Explicit(PathBuf),
    /// Conventional `site.toml` under a directory; defaults apply when absent.
    Discover(PathBuf),
}

impl SettingsSource {
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Self {
        match explicit {
            Some(path) => SettingsSource::Explicit(path.to_path_buf()),
            None => SettingsSource::Discover(cwd.join(SETTINGS_FILE)),
        }
    }
}

/// Load settings from `source`, apply environment overrides, and validate.
pub fn load_settings<F>(source: &SettingsSource, env: F) -> Result<SiteSettings, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match source {
        SettingsSource::Explicit(path) => {
            if !path.exists() {
                return Err(AppError::ConfigMissing(path.display().to_string()));
            }
            read_settings(path)?
        }
        SettingsSource::Discover(path) if path.exists() => read_settings(path)?,
        SettingsSource::Discover(path) => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            SiteSettings::default()
        }
    };

    settings.apply_env_overrides(env)?;
    settings.validate()?;
    Ok(settings)
}

fn read_settings(path: &Path) -> Result<SiteSettings, AppError> {
    tracing::debug!(path = %path.display(), "reading site settings");
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Parse settings from TOML content without environment overrides.
pub fn parse_settings_content(content: &str) -> Result<SiteSettings, AppError> {
    let settings: SiteSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
