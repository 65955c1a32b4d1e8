//! Sale Event Entity
//!
//! A time-bounded flash sale campaign.

use std::fmt;
use std::str::FromStr;

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::StoredRecord;

/// Lifecycle label of an event. Stored as a lowercase string; no
/// transition rules are enforced between the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Scheduled,
    Live,
    Ended,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "live" => Ok(Self::Live),
            "ended" => Ok(Self::Ended),
            other => Err(format!("Unknown event status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SaleEvent {
    /// Campaign title
    pub title: String,

    /// Short teaser line
    #[serde(default)]
    pub subtitle: Option<String>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub start_at: DateTime<Utc>,

    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub end_at: DateTime<Utc>,

    /// Hero/banner image URL
    #[serde(default)]
    pub banner_url: Option<String>,

    /// Related brand ids (unchecked references)
    #[serde(default)]
    pub brand_ids: Vec<String>,

    /// Tags such as "mode" or "terroir"
    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub status: EventStatus,
}

impl SaleEvent {
    pub fn new(title: impl Into<String>, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            start_at,
            end_at,
            banner_url: None,
            brand_ids: Vec::new(),
            categories: Vec::new(),
            status: EventStatus::Scheduled,
        }
    }
}

impl StoredRecord for SaleEvent {
    const COLLECTION: &'static str = "saleevent";
}
