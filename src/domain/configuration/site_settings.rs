//! Site settings domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::binding::TEMPLATE_BUSINESS_NAME;
use crate::domain::site_config::SiteConfig;

pub const BUSINESS_NAME_ENV: &str = "BUSINESS_NAME";
pub const BUSINESS_PHONE_ENV: &str = "BUSINESS_PHONE";
pub const BUSINESS_EMAIL_ENV: &str = "BUSINESS_EMAIL";
pub const BUSINESS_ADDRESS_ENV: &str = "BUSINESS_ADDRESS";
pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
pub const CALENDLY_URL_ENV: &str = "CALENDLY_URL";
pub const GOOGLE_ANALYTICS_ID_ENV: &str = "GOOGLE_ANALYTICS_ID";

/// Site settings loaded from `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSettings {
    /// Business profile shown on every page.
    #[serde(default)]
    pub business: BusinessProfile,
    /// Third-party integration keys.
    #[serde(default)]
    pub integrations: Integrations,
    /// Binding pass settings.
    #[serde(default)]
    pub binding: BindingSettings,
    /// Extra values addressable through `data-config-text`.
    #[serde(default)]
    pub text: BTreeMap<String, String>,
}

impl SiteSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.business.validate()?;
        self.binding.validate()?;
        Ok(())
    }

    /// Override fields from environment variables that are set and non-empty.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(name) = var(BUSINESS_NAME_ENV) {
            self.business.name = name;
        }
        if let Some(phone) = var(BUSINESS_PHONE_ENV) {
            self.business.phone = phone;
        }
        if let Some(email) = var(BUSINESS_EMAIL_ENV) {
            self.business.email = email;
        }
        if let Some(address) = var(BUSINESS_ADDRESS_ENV) {
            self.business.address = address;
        }
        if let Some(key) = var(GOOGLE_MAPS_API_KEY_ENV) {
            self.integrations.google_maps_api_key = Some(key);
        }
        if let Some(raw) = var(CALENDLY_URL_ENV) {
            let url = Url::parse(&raw).map_err(|err| {
                AppError::InvalidSettings(format!("{CALENDLY_URL_ENV} is not a valid URL: {err}"))
            })?;
            self.integrations.calendly_url = Some(url);
        }
        if let Some(id) = var(GOOGLE_ANALYTICS_ID_ENV) {
            self.integrations.google_analytics_id = Some(id);
        }
        Ok(())
    }

    /// Derive the `SITE_CONFIG` record handed to the binder.
    pub fn to_site_config(&self) -> SiteConfig {
        let business = &self.business;
        let mut config = SiteConfig {
            business_name: some_if_present(&business.name),
            business_phone_link: dial_string(&business.phone),
            business_email: some_if_present(&business.email),
            maps_query_encoded: maps_query(&business.address),
            current_year: self.binding.current_year.clone(),
            ..SiteConfig::default()
        };

        let derived = [
            ("businessPhone", some_if_present(&business.phone)),
            ("businessAddress", some_if_present(&business.address)),
            ("googleMapsApiKey", self.integrations.google_maps_api_key.clone()),
            ("calendlyUrl", self.integrations.calendly_url.as_ref().map(Url::to_string)),
            ("googleAnalyticsId", self.integrations.google_analytics_id.clone()),
        ];
        for (key, value) in derived {
            if let Some(value) = value {
                config.insert_extra(key, value);
            }
        }
        for (key, value) in &self.text {
            if !config.insert_extra(key.as_str(), value.as_str()) {
                tracing::warn!(key = %key, "ignoring [text] entry that shadows a record field");
            }
        }
        config
    }
}

/// Business contact profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessProfile {
    #[serde(default = "default_name")]
    pub name: String,
    /// Display form, e.g. `(555) 123-4567`.
    #[serde(default = "default_phone")]
    pub phone: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            phone: default_phone(),
            email: default_email(),
            address: default_address(),
        }
    }
}

impl BusinessProfile {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidSettings("business.name must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_name() -> String {
    TEMPLATE_BUSINESS_NAME.to_string()
}

fn default_phone() -> String {
    "(555) 123-4567".to_string()
}

fn default_email() -> String {
    "info@floridaalignment.com".to_string()
}

fn default_address() -> String {
    "123 Main St, Orlando, FL 32801".to_string()
}

/// Third-party integration settings. All optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Integrations {
    pub google_maps_api_key: Option<String>,
    pub calendly_url: Option<Url>,
    pub google_analytics_id: Option<String>,
}

/// Settings for the binding pass itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingSettings {
    /// Business name literal baked into the templates' `<title>` elements.
    #[serde(default = "default_template_business_name")]
    pub template_business_name: String,
    /// Copyright year override; the current calendar year is used when unset.
    #[serde(default)]
    pub current_year: Option<String>,
}

impl Default for BindingSettings {
    fn default() -> Self {
        Self { template_business_name: default_template_business_name(), current_year: None }
    }
}

impl BindingSettings {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.template_business_name.trim().is_empty() {
            return Err(AppError::InvalidSettings(
                "binding.template_business_name must not be empty".to_string(),
            ));
        }
        if let Some(year) = &self.current_year
            && !(year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(AppError::InvalidSettings(format!(
                "binding.current_year must be a four-digit year, got '{year}'"
            )));
        }
        Ok(())
    }
}

fn default_template_business_name() -> String {
    TEMPLATE_BUSINESS_NAME.to_string()
}

fn some_if_present(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Dialable form of a display phone number: digits, keeping a leading `+`.
pub fn dial_string(phone: &str) -> Option<String> {
    let trimmed = phone.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    if trimmed.starts_with('+') { Some(format!("+{digits}")) } else { Some(digits) }
}

/// Form-encoded address used as a Google Maps query.
pub fn maps_query(address: &str) -> Option<String> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(url::form_urlencoded::byte_serialize(trimmed.as_bytes()).collect())
}
