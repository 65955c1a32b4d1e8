//! Subscriber Entity
//!
//! Email capture from the landing page.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, validate_email_domain, StoredRecord};

pub const DEFAULT_SOURCE: &str = "landing";

/// Marketing subscriber. No uniqueness is enforced on `email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Subscriber {
    #[validate(email, custom(function = "validate_email_domain"))]
    pub email: String,

    /// Optional first name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Event the subscriber wants to be notified about
    #[serde(default)]
    pub sale_event_id: Option<String>,

    /// Acquisition source/tag
    #[serde(default = "default_source")]
    pub source: Option<String>,

    /// Consented to receive communications
    #[serde(default = "default_true")]
    pub accepted_marketing: bool,
}

pub(crate) fn default_source() -> Option<String> {
    Some(DEFAULT_SOURCE.to_string())
}

impl Subscriber {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            sale_event_id: None,
            source: default_source(),
            accepted_marketing: true,
        }
    }
}

impl StoredRecord for Subscriber {
    const COLLECTION: &'static str = "subscriber";
}
