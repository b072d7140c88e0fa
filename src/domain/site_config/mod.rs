//! The `SITE_CONFIG` record consumed by the binder.
//!
//! Every field is optional. Empty strings are treated the same as absent
//! values so that templates never receive a blank substitution.

mod link;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use link::{HrefKind, MapLinkKind};

/// JSON keys of the named record fields.
pub const BUSINESS_NAME_KEY: &str = "businessName";
pub const BUSINESS_PHONE_LINK_KEY: &str = "businessPhoneLink";
pub const BUSINESS_EMAIL_KEY: &str = "businessEmail";
pub const MAPS_QUERY_ENCODED_KEY: &str = "mapsQueryEncoded";
pub const CURRENT_YEAR_KEY: &str = "currentYear";

/// Process-wide configuration record applied to marked-up pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_query_encoded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_year: Option<String>,
    /// Any other named value, addressable through `data-config-text`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl SiteConfig {
    /// Parse a record from a JSON object.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Look up a value by its record key. Absent and empty values yield `None`.
    pub fn text(&self, key: &str) -> Option<&str> {
        let value = match key {
            BUSINESS_NAME_KEY => self.business_name.as_deref(),
            BUSINESS_PHONE_LINK_KEY => self.business_phone_link.as_deref(),
            BUSINESS_EMAIL_KEY => self.business_email.as_deref(),
            MAPS_QUERY_ENCODED_KEY => self.maps_query_encoded.as_deref(),
            CURRENT_YEAR_KEY => self.current_year.as_deref(),
            _ => self.extra.get(key).map(String::as_str),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn business_name(&self) -> Option<&str> {
        non_empty(&self.business_name)
    }

    pub fn business_phone_link(&self) -> Option<&str> {
        non_empty(&self.business_phone_link)
    }

    pub fn business_email(&self) -> Option<&str> {
        non_empty(&self.business_email)
    }

    pub fn maps_query_encoded(&self) -> Option<&str> {
        non_empty(&self.maps_query_encoded)
    }

    pub fn current_year(&self) -> Option<&str> {
        non_empty(&self.current_year)
    }

    /// Insert an extra value unless the key names a record field.
    ///
    /// Returns `false` when the key was reserved and the value dropped.
    pub fn insert_extra(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if is_named_key(&key) {
            return false;
        }
        self.extra.insert(key, value.into());
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn is_named_key(key: &str) -> bool {
    matches!(
        key,
        BUSINESS_NAME_KEY
            | BUSINESS_PHONE_LINK_KEY
            | BUSINESS_EMAIL_KEY
            | MAPS_QUERY_ENCODED_KEY
            | CURRENT_YEAR_KEY
    )
}
