//! Bind command implementation.

use std::io::Write;
use std::path::PathBuf;

use crate::app::api::{self, BindRequest};
use crate::domain::AppError;

pub struct BindArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub record: Option<PathBuf>,
    pub template_name: Option<String>,
}

pub fn run_bind(args: BindArgs) -> Result<(), AppError> {
    if !args.input.exists() {
        return Err(AppError::InputNotFound(args.input.display().to_string()));
    }

    let request = build_request(&args)?;
    let outcome = api::bind_path(&args.input, args.output.as_deref(), &request)?;

    if let Some(html) = outcome.html {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let totals = outcome.totals();
    println!("✅ Bound {} page(s) with {} substitution(s)", outcome.pages.len(), totals.total());
    for page in &outcome.pages {
        println!("  • {} ({})", page.path, page.stats.total());
    }
    tracing::info!(
        text = totals.text,
        year = totals.year,
        href = totals.href,
        map_link = totals.map_link,
        mailto = totals.mailto,
        title = totals.title,
        "binding complete"
    );
    Ok(())
}

fn build_request(args: &BindArgs) -> Result<BindRequest, AppError> {
    if let Some(record) = &args.record {
        let config = api::load_record(record)?;
        let template_business_name = args
            .template_name
            .clone()
            .unwrap_or_else(|| crate::domain::TEMPLATE_BUSINESS_NAME.to_string());
        return Ok(BindRequest { config, template_business_name });
    }

    let settings = api::load_settings(args.config.as_deref())?;
    let template_business_name = args
        .template_name
        .clone()
        .unwrap_or_else(|| settings.binding.template_business_name.clone());
    Ok(BindRequest { config: api::site_config(&settings), template_business_name })
}
