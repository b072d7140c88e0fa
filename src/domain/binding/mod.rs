//! Configuration binder.
//!
//! Applies a [`SiteConfig`] to marker-tagged elements of an HTML page in one
//! streaming pass. Each marker group is independent of the others, and a
//! missing configuration value always leaves the template's default content
//! in place.

pub mod markers;
pub mod title;

use std::cell::Cell;

use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use serde::Serialize;

use crate::domain::AppError;
use crate::domain::site_config::{HrefKind, MapLinkKind, SiteConfig};

/// Default business name baked into the page templates' titles.
pub const TEMPLATE_BUSINESS_NAME: &str = "Florida Alignment & Suspension";

/// Inputs to a binding pass that do not come from the configuration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    /// Literal name to replace in the document title.
    pub template_business_name: String,
    /// Calendar year stamped when the record carries no `currentYear`.
    pub fallback_year: i32,
}

impl BindOptions {
    pub fn new(template_business_name: impl Into<String>, fallback_year: i32) -> Self {
        Self { template_business_name: template_business_name.into(), fallback_year }
    }
}

/// Number of elements mutated per binding group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BindingStats {
    pub text: usize,
    pub year: usize,
    pub href: usize,
    pub map_link: usize,
    pub mailto: usize,
    pub title: usize,
}

impl BindingStats {
    pub fn total(&self) -> usize {
        self.text + self.year + self.href + self.map_link + self.mailto + self.title
    }

    pub fn merge(&mut self, other: &BindingStats) {
        self.text += other.text;
        self.year += other.year;
        self.href += other.href;
        self.map_link += other.map_link;
        self.mailto += other.mailto;
        self.title += other.title;
    }
}

/// Result of binding one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundPage {
    pub html: String,
    pub stats: BindingStats,
}

#[derive(Default)]
struct Counters {
    text: Cell<usize>,
    year: Cell<usize>,
    href: Cell<usize>,
    map_link: Cell<usize>,
    mailto: Cell<usize>,
    title: Cell<usize>,
    titles_seen: Cell<usize>,
}

impl Counters {
    fn bump(cell: &Cell<usize>) {
        cell.set(cell.get() + 1);
    }

    fn into_stats(self) -> BindingStats {
        BindingStats {
            text: self.text.get(),
            year: self.year.get(),
            href: self.href.get(),
            map_link: self.map_link.get(),
            mailto: self.mailto.get(),
            title: self.title.get(),
        }
    }
}

/// Applies a configuration record to HTML pages.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBinder<'a> {
    config: &'a SiteConfig,
    options: &'a BindOptions,
}

impl<'a> ConfigBinder<'a> {
    pub fn new(config: &'a SiteConfig, options: &'a BindOptions) -> Self {
        Self { config, options }
    }

    /// Run the binding pass over `html` and return the rewritten page.
    pub fn bind(&self, html: &str) -> Result<BoundPage, AppError> {
        let counters = Counters::default();
        let config = self.config;
        let fallback_year = self.options.fallback_year.to_string();
        let year = config.current_year().unwrap_or(&fallback_year).to_string();

        let c = &counters;
        let mut handlers = vec![
            element!(markers::TEXT_SELECTOR, move |el| {
                let key = el.get_attribute(markers::TEXT).unwrap_or_default();
                if let Some(value) = config.text(&key) {
                    el.set_inner_content(value, ContentType::Text);
                    Counters::bump(&c.text);
                }
                Ok(())
            }),
            element!(markers::YEAR_SELECTOR, |el| {
                el.set_inner_content(&year, ContentType::Text);
                Counters::bump(&c.year);
                Ok(())
            }),
            element!(markers::HREF_SELECTOR, move |el| {
                let marker = el.get_attribute(markers::HREF).unwrap_or_default();
                if let Some(href) = HrefKind::from_marker(&marker).href(config) {
                    el.set_attribute(markers::HREF_ATTR, &href)?;
                    Counters::bump(&c.href);
                }
                Ok(())
            }),
            element!(markers::MAP_LINK_SELECTOR, move |el| {
                if config.maps_query_encoded().is_none() {
                    return Ok(());
                }
                let marker = el.get_attribute(markers::MAP_LINK).unwrap_or_default();
                if let Some(href) = MapLinkKind::from_marker(&marker).href(config) {
                    el.set_attribute(markers::HREF_ATTR, &href)?;
                    Counters::bump(&c.map_link);
                }
                Ok(())
            }),
            element!(markers::MAILTO_SELECTOR, move |el| {
                if let Some(email) = config.business_email() {
                    el.set_attribute(markers::MAILTO_DATA_ATTR, email)?;
                    el.set_attribute(markers::ACTION_ATTR, &format!("mailto:{email}"))?;
                    Counters::bump(&c.mailto);
                }
                Ok(())
            }),
        ];

        if let Some(business_name) = config.business_name() {
            let template_name = self.options.template_business_name.as_str();
            let mut raw_title = String::new();

            handlers.push(element!(markers::TITLE_SELECTOR, move |_el| {
                Counters::bump(&c.titles_seen);
                Ok(())
            }));
            handlers.push(text!(markers::TITLE_SELECTOR, move |chunk| {
                // Only the first <title> is the document title.
                if c.titles_seen.get() != 1 {
                    return Ok(());
                }
                raw_title.push_str(chunk.as_str());
                if !chunk.last_in_text_node() {
                    chunk.remove();
                    return Ok(());
                }

                match title::rebrand(&raw_title, template_name, business_name) {
                    Some(rebranded) => {
                        chunk.replace(&rebranded, ContentType::Text);
                        Counters::bump(&c.title);
                    }
                    None => chunk.replace(&raw_title, ContentType::Html),
                }
                raw_title.clear();
                // Later text nodes of the same element are left as-is.
                Counters::bump(&c.titles_seen);
                Ok(())
            }));
        }

        let html = rewrite_str(
            html,
            RewriteStrSettings { element_content_handlers: handlers, ..RewriteStrSettings::new() },
        )?;

        Ok(BoundPage { html, stats: counters.into_stats() })
    }
}
