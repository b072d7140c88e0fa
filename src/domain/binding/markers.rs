//! Marker attribute contract shared with the page templates.

pub const TEXT: &str = "data-config-text";
pub const YEAR: &str = "data-config-year";
pub const HREF: &str = "data-config-href";
pub const MAP_LINK: &str = "data-config-map-link";
pub const MAILTO: &str = "data-config-mailto";

pub const TEXT_SELECTOR: &str = "[data-config-text]";
pub const YEAR_SELECTOR: &str = "[data-config-year]";
pub const HREF_SELECTOR: &str = "[data-config-href]";
pub const MAP_LINK_SELECTOR: &str = "[data-config-map-link]";
pub const MAILTO_SELECTOR: &str = "[data-config-mailto]";
pub const TITLE_SELECTOR: &str = "title";

/// Attributes written by the binder.
pub const HREF_ATTR: &str = "href";
pub const ACTION_ATTR: &str = "action";
pub const MAILTO_DATA_ATTR: &str = "data-mailto";
