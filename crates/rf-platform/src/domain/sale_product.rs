//! Sale Product Entity

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::StoredRecord;

/// Product offered during a sale event. Prices and stock are only checked
/// at the validation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SaleProduct {
    /// Associated sale event id (unchecked reference)
    pub sale_event_id: String,

    #[serde(default)]
    pub brand_id: Option<String>,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Image URLs; the first one is the card image
    #[serde(default)]
    pub images: Vec<String>,

    #[validate(range(min = 0.0))]
    pub price_original: f64,

    #[validate(range(min = 0.0))]
    pub price_sale: f64,

    #[validate(range(min = 0))]
    pub stock: i64,

    #[serde(default)]
    pub sku: Option<String>,

    /// Free-form attributes (size, colour, ...)
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl SaleProduct {
    pub fn new(
        sale_event_id: impl Into<String>,
        title: impl Into<String>,
        price_original: f64,
        price_sale: f64,
        stock: i64,
    ) -> Self {
        Self {
            sale_event_id: sale_event_id.into(),
            brand_id: None,
            title: title.into(),
            description: None,
            images: Vec::new(),
            price_original,
            price_sale,
            stock,
            sku: None,
            attributes: serde_json::Map::new(),
        }
    }
}

impl StoredRecord for SaleProduct {
    const COLLECTION: &'static str = "saleproduct";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_product() {
        let product = SaleProduct::new("evt1", "Rhum arrangé", 30.0, 19.9, 12);
        assert!(product.validate().is_ok());
        assert_eq!(SaleProduct::COLLECTION, "saleproduct");
    }

    #[test]
    fn test_negative_values_rejected() {
        let product = SaleProduct::new("evt1", "Vanille", -1.0, -0.5, -3);
        let errors = product.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price_original"));
        assert!(fields.contains_key("price_sale"));
        assert!(fields.contains_key("stock"));
    }

    #[test]
    fn test_zero_is_allowed() {
        let product = SaleProduct::new("evt1", "Sample", 0.0, 0.0, 0);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_attributes_round_trip_to_bson() {
        let mut product = SaleProduct::new("evt1", "T-shirt", 25.0, 15.0, 4);
        product.attributes.insert("size".to_string(), serde_json::json!("M"));
        let doc = bson::to_document(&product).unwrap();
        assert_eq!(doc.get_document("attributes").unwrap().get_str("size").unwrap(), "M");
    }
}
