//! Repository Layer
//!
//! Generic document access over one database handle. Records go in
//! validated and come back out as raw documents; shaping for responses
//! happens in the API layer.

pub mod mongo;

pub use mongo::MongoDocumentStore;

use async_trait::async_trait;
use bson::Document;
use serde::Serialize;
use tracing::debug;
use validator::Validate;

use crate::error::Result;

/// Minimal document database surface used by the routes.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return its generated id.
    async fn insert_document(&self, collection: &str, document: Document) -> Result<String>;

    /// Up to `limit` documents matching `filter`, in no guaranteed order.
    async fn find_documents(&self, collection: &str, filter: Document, limit: i64) -> Result<Vec<Document>>;

    async fn list_collection_names(&self) -> Result<Vec<String>>;
}

/// Validate `record`, stamp `created_at`/`updated_at` and insert it.
pub async fn create_document<T>(store: &dyn DocumentStore, collection: &str, record: &T) -> Result<String>
where
    T: Serialize + Validate,
{
    record.validate()?;

    let mut document = bson::to_document(record)?;
    let now = bson::DateTime::now();
    document.insert("created_at", now);
    document.insert("updated_at", now);

    let id = store.insert_document(collection, document).await?;
    debug!(collection, id = %id, "Document created");
    Ok(id)
}

pub async fn get_documents(
    store: &dyn DocumentStore,
    collection: &str,
    filter: Document,
    limit: i64,
) -> Result<Vec<Document>> {
    let documents = store.find_documents(collection, filter, limit).await?;
    debug!(collection, limit, count = documents.len(), "Documents fetched");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Reservation, ReservationStatus, StoredRecord, Subscriber};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        inserted: Mutex<Vec<(String, Document)>>,
    }

    #[async_trait]
    impl DocumentStore for RecordingStore {
        async fn insert_document(&self, collection: &str, document: Document) -> Result<String> {
            self.inserted.lock().push((collection.to_string(), document));
            Ok("generated-id".to_string())
        }

        async fn find_documents(&self, _collection: &str, _filter: Document, _limit: i64) -> Result<Vec<Document>> {
            Ok(vec![])
        }

        async fn list_collection_names(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_create_document_stamps_timestamps() {
        let store = RecordingStore::default();
        let subscriber = Subscriber::new("a@b.com");

        let id = tokio_test::block_on(create_document(&store, Subscriber::COLLECTION, &subscriber)).unwrap();
        assert_eq!(id, "generated-id");

        let inserted = store.inserted.lock();
        let (collection, document) = &inserted[0];
        assert_eq!(collection, "subscriber");
        assert_eq!(document.get_str("source").unwrap(), "landing");
        assert!(document.get_bool("accepted_marketing").unwrap());
        assert_eq!(document.get_datetime("created_at").unwrap(), document.get_datetime("updated_at").unwrap());
    }

    #[test]
    fn test_create_document_rejects_invalid_record() {
        let store = RecordingStore::default();
        let reservation = Reservation {
            sale_event_id: "evt1".to_string(),
            product_id: "prd1".to_string(),
            email: "a@b.com".to_string(),
            quantity: 11,
            status: ReservationStatus::Held,
        };

        let result = tokio_test::block_on(create_document(&store, Reservation::COLLECTION, &reservation));
        assert!(matches!(result, Err(crate::error::PlatformError::Validation { .. })));
        assert!(store.inserted.lock().is_empty());
    }
}
