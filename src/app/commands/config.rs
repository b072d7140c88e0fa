//! Config command: render the `SITE_CONFIG` record derived from site settings.

use std::fmt;
use std::str::FromStr;

use crate::domain::{AppError, SiteConfig};

/// Output shape for the rendered record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    /// Pretty-printed JSON object.
    #[default]
    Json,
    /// Script assigning the record to `window.SITE_CONFIG`.
    Js,
}

impl FromStr for ConfigFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(ConfigFormat::Json),
            "js" => Ok(ConfigFormat::Js),
            other => Err(AppError::config_error(format!(
                "Unknown config format '{other}': expected json or js"
            ))),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Js => write!(f, "js"),
        }
    }
}

/// Render a record in the requested format.
pub fn render(config: &SiteConfig, format: ConfigFormat) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(match format {
        ConfigFormat::Json => json,
        ConfigFormat::Js => format!("window.SITE_CONFIG = {json};"),
    })
}
