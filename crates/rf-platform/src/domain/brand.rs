//! Brand Entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::StoredRecord;

/// Brand taking part in sale events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Brand {
    pub name: String,

    /// Short brand description/story
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    /// Origin, e.g. "Réunion", "France"
    #[serde(default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub website: Option<String>,
}

impl Brand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            logo_url: None,
            origin: None,
            website: None,
        }
    }
}

impl StoredRecord for Brand {
    const COLLECTION: &'static str = "brand";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_required() {
        let result: Result<Brand, _> = serde_json::from_str(r#"{"origin":"Réunion"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let brand: Brand = serde_json::from_str(r#"{"name":"Kaz"}"#).unwrap();
        assert_eq!(brand, Brand::new("Kaz"));
        assert_eq!(Brand::COLLECTION, "brand");
    }
}
