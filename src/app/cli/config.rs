//! Config command implementation.

use std::path::PathBuf;

use crate::app::api::{self, ConfigFormat};
use crate::domain::AppError;

pub fn run_config(config: Option<PathBuf>, format: &str) -> Result<(), AppError> {
    let format: ConfigFormat = format.parse()?;
    let settings = api::load_settings(config.as_deref())?;
    let record = api::site_config(&settings);
    println!("{}", api::render_site_config(&record, format)?);
    Ok(())
}
