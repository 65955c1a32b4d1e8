//! Reservation Entity
//!
//! Shape only: no route reads or writes reservations, and no transition or
//! stock interaction is defined for the status.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{validate_email_domain, StoredRecord};

pub const MIN_RESERVATION_QUANTITY: u32 = 1;
pub const MAX_RESERVATION_QUANTITY: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Held,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Reservation {
    pub sale_event_id: String,

    pub product_id: String,

    #[validate(email, custom(function = "validate_email_domain"))]
    pub email: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, max = 10))]
    pub quantity: u32,

    #[serde(default)]
    pub status: ReservationStatus,
}

fn default_quantity() -> u32 {
    MIN_RESERVATION_QUANTITY
}

impl StoredRecord for Reservation {
    const COLLECTION: &'static str = "reservation";
}
