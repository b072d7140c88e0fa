pub mod binding;
pub mod catalog;
pub mod configuration;
pub mod contact;
pub mod error;
pub mod site_config;

pub use binding::{BindOptions, BindingStats, BoundPage, ConfigBinder, TEMPLATE_BUSINESS_NAME};
pub use catalog::{Catalog, Faq, Service, ServiceChoice, Testimonial};
pub use contact::{ContactRequest, FieldError, Urgency};
pub use configuration::{SettingsSource, SiteSettings};
pub use error::AppError;
pub use site_config::{HrefKind, MapLinkKind, SiteConfig};
