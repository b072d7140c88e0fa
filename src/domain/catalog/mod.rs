//! Static site catalog: services, FAQs and testimonials.

use serde::{Deserialize, Serialize};

/// Placeholder entry shown first in the contact form's service picker.
pub const SERVICE_PLACEHOLDER: (u32, &str) = (0, "Select a service...");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub icon_class: String,
    #[serde(default)]
    pub is_featured: bool,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faq {
    pub id: u32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub display_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub id: u32,
    pub customer_name: String,
    pub review_text: String,
    pub rating: u8,
    pub star_rating: String,
    #[serde(default)]
    pub is_featured: bool,
}

/// A `(value, label)` pair for a `<select>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceChoice {
    pub id: u32,
    pub label: String,
}

/// Catalog content with the ordering and filtering the pages rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<Service>,
    faqs: Vec<Faq>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    pub fn new(
        mut services: Vec<Service>,
        mut faqs: Vec<Faq>,
        testimonials: Vec<Testimonial>,
    ) -> Self {
        // Stable sorts keep declaration order among equal display orders.
        services.sort_by_key(|s| s.display_order);
        faqs.sort_by_key(|f| f.display_order);
        Self { services, faqs, testimonials }
    }

    /// All services ordered by `display_order`.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn featured_services(&self) -> Vec<&Service> {
        self.services.iter().filter(|s| s.is_featured).collect()
    }

    pub fn service_by_id(&self, id: u32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Choices for the contact form, placeholder first.
    pub fn service_choices(&self) -> Vec<ServiceChoice> {
        let (id, label) = SERVICE_PLACEHOLDER;
        std::iter::once(ServiceChoice { id, label: label.to_string() })
            .chain(self.services.iter().map(|s| ServiceChoice { id: s.id, label: s.name.clone() }))
            .collect()
    }

    /// All FAQs ordered by `display_order`.
    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    /// Featured testimonials in declaration order.
    pub fn testimonials(&self) -> Vec<&Testimonial> {
        self.testimonials.iter().filter(|t| t.is_featured).collect()
    }
}
