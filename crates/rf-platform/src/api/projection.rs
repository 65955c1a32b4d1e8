//! Raw document readers used by the response projections.
//!
//! Stored documents are not validated on the way out, so every reader is
//! lenient: a missing or mistyped field yields `None`.

use bson::{Bson, Document};
use chrono::{DateTime, Utc};

use crate::repository::mongo::id_to_string;

pub fn document_id(doc: &Document) -> String {
    doc.get("_id")
        .cloned()
        .map(id_to_string)
        .unwrap_or_default()
}

pub fn optional_str(doc: &Document, key: &str) -> Option<String> {
    doc.get_str(key).ok().map(str::to_string)
}

pub fn datetime(doc: &Document, key: &str) -> Option<DateTime<Utc>> {
    doc.get_datetime(key).ok().map(|dt| dt.to_chrono())
}

pub fn number_f64(doc: &Document, key: &str) -> Option<f64> {
    match doc.get(key)? {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn number_i64(doc: &Document, key: &str) -> Option<i64> {
    match doc.get(key)? {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        Bson::Double(v) => Some(v.trunc() as i64),
        Bson::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String entries of an array field; other entries are skipped.
pub fn string_list(doc: &Document, key: &str) -> Vec<String> {
    doc.get_array(key)
        .map(|items| {
            items.iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// First element of an array field, when it is a string.
pub fn first_string(doc: &Document, key: &str) -> Option<String> {
    doc.get_array(key)
        .ok()?
        .first()?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::{doc, oid::ObjectId};

    #[test]
    fn test_document_id() {
        let oid = ObjectId::new();
        assert_eq!(document_id(&doc! { "_id": oid }), oid.to_hex());
        assert_eq!(document_id(&doc! { "_id": "custom" }), "custom");
        assert_eq!(document_id(&doc! {}), "");
    }

    #[test]
    fn test_numbers_accept_any_numeric_type() {
        let d = doc! { "a": 3_i32, "b": 4_i64, "c": 2.75, "d": "12", "e": true };
        assert_eq!(number_f64(&d, "a"), Some(3.0));
        assert_eq!(number_f64(&d, "b"), Some(4.0));
        assert_eq!(number_f64(&d, "c"), Some(2.75));
        assert_eq!(number_f64(&d, "d"), Some(12.0));
        assert_eq!(number_f64(&d, "e"), None);
        assert_eq!(number_i64(&d, "c"), Some(2));
        assert_eq!(number_i64(&d, "missing"), None);
    }

    #[test]
    fn test_first_string() {
        assert_eq!(
            first_string(&doc! { "images": ["a.jpg", "b.jpg"] }, "images"),
            Some("a.jpg".to_string())
        );
        assert_eq!(first_string(&doc! { "images": [] }, "images"), None);
        assert_eq!(first_string(&doc! { "images": Bson::Null }, "images"), None);
        assert_eq!(first_string(&doc! {}, "images"), None);
    }

    #[test]
    fn test_string_list_skips_non_strings() {
        let d = doc! { "categories": ["mode", 3, "terroir"] };
        assert_eq!(string_list(&d, "categories"), vec!["mode", "terroir"]);
        assert!(string_list(&d, "missing").is_empty());
    }

    #[test]
    fn test_datetime() {
        let now = bson::DateTime::now();
        let d = doc! { "end_at": now, "bad": "2024-01-01" };
        assert_eq!(datetime(&d, "end_at"), Some(now.to_chrono()));
        assert_eq!(datetime(&d, "bad"), None);
    }
}
