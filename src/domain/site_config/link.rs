//! Marker subtypes for link-producing bindings.

use super::SiteConfig;

const MAPS_QUERY_BASE: &str = "https://maps.google.com?q=";
const MAPS_DIRECTIONS_BASE: &str = "https://maps.google.com/directions/?api=1&destination=";

/// Subtype named by a `data-config-href` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefKind {
    Tel,
    Mailto,
    Unknown,
}

impl HrefKind {
    pub fn from_marker(value: &str) -> Self {
        match value {
            "tel" => HrefKind::Tel,
            "mailto" => HrefKind::Mailto,
            _ => HrefKind::Unknown,
        }
    }

    /// Link target for this subtype, or `None` when the record lacks the value.
    pub fn href(self, config: &SiteConfig) -> Option<String> {
        match self {
            HrefKind::Tel => config.business_phone_link().map(|phone| format!("tel:{phone}")),
            HrefKind::Mailto => config.business_email().map(|email| format!("mailto:{email}")),
            HrefKind::Unknown => None,
        }
    }
}

/// Subtype named by a `data-config-map-link` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLinkKind {
    Query,
    Directions,
    Unknown,
}

impl MapLinkKind {
    pub fn from_marker(value: &str) -> Self {
        match value {
            "q" => MapLinkKind::Query,
            "directions" => MapLinkKind::Directions,
            _ => MapLinkKind::Unknown,
        }
    }

    pub fn href(self, config: &SiteConfig) -> Option<String> {
        let query = config.maps_query_encoded()?;
        match self {
            MapLinkKind::Query => Some(format!("{MAPS_QUERY_BASE}{query}")),
            MapLinkKind::Directions => Some(format!("{MAPS_DIRECTIONS_BASE}{query}")),
            MapLinkKind::Unknown => None,
        }
    }
}
