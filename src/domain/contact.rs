//! Contact and quote request submitted through the site's contact form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::catalog::ServiceChoice;

pub const NAME_LEN: (usize, usize) = (2, 100);
pub const EMAIL_MAX_LEN: usize = 120;
pub const PHONE_MAX_LEN: usize = 20;
pub const SUBJECT_MAX_LEN: usize = 200;
pub const MESSAGE_LEN: (usize, usize) = (10, 2000);
pub const VEHICLE_YEAR_RANGE: (i32, i32) = (1900, 2030);
pub const VEHICLE_TEXT_MAX_LEN: usize = 50;

/// How soon the customer needs the work done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
    Asap,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Normal, Urgency::Urgent, Urgency::Asap];

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Urgent => "urgent",
            Urgency::Asap => "asap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Normal => "Normal",
            Urgency::Urgent => "Urgent",
            Urgency::Asap => "ASAP",
        }
    }
}

impl FromStr for Urgency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| AppError::config_error(format!("Unknown urgency '{s}'")))
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected form field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

/// Contact form submission.
///
/// Optional text fields treat blank input as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub service_id: Option<u32>,
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
    pub vehicle_year: Option<i32>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub urgency: Urgency,
}

impl ContactRequest {
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check every field against the form rules.
    ///
    /// `choices` are the selectable services; an empty result means the
    /// request is acceptable.
    pub fn validate(&self, choices: &[ServiceChoice]) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Please enter your name."));
        } else if !within(name, NAME_LEN.0, NAME_LEN.1) {
            errors.push(FieldError::new("name", "Name must be between 2 and 100 characters."));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Please enter your email address."));
        } else if !is_email_shaped(email) {
            errors.push(FieldError::new("email", "Please enter a valid email address."));
        } else if email.chars().count() > EMAIL_MAX_LEN {
            errors.push(FieldError::new("email", "Email must be at most 120 characters."));
        }

        if let Some(phone) = present(&self.phone)
            && phone.chars().count() > PHONE_MAX_LEN
        {
            errors.push(FieldError::new("phone", "Phone number must be less than 20 characters."));
        }

        if let Some(id) = self.service_id
            && !choices.iter().any(|choice| choice.id == id)
        {
            errors.push(FieldError::new("service_id", "Not a valid choice."));
        }

        if let Some(subject) = present(&self.subject)
            && subject.chars().count() > SUBJECT_MAX_LEN
        {
            errors.push(FieldError::new("subject", "Subject must be less than 200 characters."));
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::new("message", "Please enter your message."));
        } else if !within(message, MESSAGE_LEN.0, MESSAGE_LEN.1) {
            errors.push(FieldError::new(
                "message",
                "Message must be between 10 and 2000 characters.",
            ));
        }

        if let Some(year) = self.vehicle_year
            && !(VEHICLE_YEAR_RANGE.0..=VEHICLE_YEAR_RANGE.1).contains(&year)
        {
            errors.push(FieldError::new("vehicle_year", "Please enter a valid year."));
        }

        let vehicle_text =
            [("vehicle_make", &self.vehicle_make), ("vehicle_model", &self.vehicle_model)];
        for (field, value) in vehicle_text {
            if let Some(value) = present(value)
                && value.chars().count() > VEHICLE_TEXT_MAX_LEN
            {
                let noun = if field == "vehicle_make" { "make" } else { "model" };
                errors.push(FieldError::new(
                    field,
                    format!("Vehicle {noun} must be less than 50 characters."),
                ));
            }
        }

        errors
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn within(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&value.chars().count())
}

/// `local@domain.tld` with no whitespace and non-empty domain labels.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
