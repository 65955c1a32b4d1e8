//! MongoDB Document Store

use async_trait::async_trait;
use bson::{Bson, Document};
use futures::TryStreamExt;
use mongodb::{options::FindOptions, Client, Database};
use tracing::info;

use crate::error::Result;
use super::DocumentStore;

/// Store backed by a single `mongodb::Database` handle, opened at process
/// start and dropped with the server.
#[derive(Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn connect(url: &str, database_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        info!("MongoDB client configured for database {}", database_name);
        Ok(Self::new(client.database(database_name)))
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn insert_document(&self, collection: &str, document: Document) -> Result<String> {
        let result = self.db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(id_to_string(result.inserted_id))
    }

    async fn find_documents(&self, collection: &str, filter: Document, limit: i64) -> Result<Vec<Document>> {
        let options = FindOptions::builder()
            .limit(limit)
            .build();

        let cursor = self.db
            .collection::<Document>(collection)
            .find(filter)
            .with_options(options)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        Ok(self.db.list_collection_names().await?)
    }
}

/// Render a generated `_id` the way clients expect it: ObjectIds as hex.
pub fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}
