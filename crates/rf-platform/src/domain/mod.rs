//! Domain Models
//!
//! Validated record shapes stored in the document database.
//! Each record lives in the collection named after its lowercased type name
//! (`SaleEvent` -> `saleevent`).

pub mod subscriber;
pub mod brand;
pub mod sale_event;
pub mod sale_product;
pub mod reservation;
pub mod user;

pub use subscriber::*;
pub use brand::*;
pub use sale_event::*;
pub use sale_product::*;
pub use reservation::*;
pub use user::*;

use serde::Serialize;
use validator::{Validate, ValidationError};

/// A record type that maps onto one collection.
pub trait StoredRecord: Serialize + Validate + Send + Sync {
    const COLLECTION: &'static str;
}

pub(crate) fn default_true() -> bool {
    true
}

/// Reject addresses whose domain has no dot (`a@b`, `user@localhost`).
/// Used next to `#[validate(email)]`, which accepts them.
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let domain = email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default();
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        let mut error = ValidationError::new("email_domain");
        error.message = Some("The part after the @-sign must contain a period".into());
        return Err(error);
    }
    Ok(())
}
