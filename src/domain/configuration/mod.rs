pub mod loader;
pub mod site_settings;

pub use loader::{SETTINGS_FILE, SettingsSource, load_settings, parse_settings_content};
pub use site_settings::{BindingSettings, BusinessProfile, Integrations, SiteSettings};
