//! User Entity
//!
//! Generic example record; not used by any route.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{default_true, validate_email_domain, StoredRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub name: String,

    #[validate(email, custom(function = "validate_email_domain"))]
    pub email: String,

    #[serde(default)]
    pub address: Option<String>,

    #[validate(range(max = 120))]
    #[serde(default)]
    pub age: Option<u8>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl StoredRecord for User {
    const COLLECTION: &'static str = "user";
}
