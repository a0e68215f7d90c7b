//! MongoDB client
//!
//! Blocking access to a single database. Calls here block on network I/O and
//! are meant to be run through [`BlockingPool`](crate::mongo::worker::BlockingPool).

use mongodb::bson::Document;
use mongodb::options::FindOptions;
use mongodb::sync::{Client, Database};

use crate::config::Config;
use crate::error::StoreResult;

/// Blocking operations on one document database.
///
/// Filters, updates and projections are forwarded untouched; implementations
/// must be safe to share across worker threads.
pub trait DocumentStore: Send + Sync {
    /// Return every document in `collection` matching `filter`
    fn find(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> StoreResult<Vec<Document>>;

    /// Apply `update` to every matching document, returning the modified count
    fn update_many(&self, collection: &str, filter: Document, update: Document) -> StoreResult<u64>;

    /// Delete every matching document, returning the deleted count
    fn delete_many(&self, collection: &str, filter: Document) -> StoreResult<u64>;

    /// Names of all collections in the database
    fn list_collection_names(&self) -> StoreResult<Vec<String>>;
}

/// MongoDB-backed document store
pub struct MongoStore {
    /// Kept alive for the lifetime of the store; owns the connection pool
    _client: Client,

    database: Database,
}

impl MongoStore {
    /// Create the driver client for the configured database.
    ///
    /// The driver connects lazily, so this only fails on an unusable URI.
    /// Must not be called from inside an async task.
    pub fn connect(config: &Config) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.mongo_uri)?;
        let database = client.database(&config.database_name);

        tracing::info!("Using MongoDB database '{}'", config.database_name);

        Ok(Self {
            _client: client,
            database,
        })
    }

    /// Name of the database this store operates on
    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

impl DocumentStore for MongoStore {
    fn find(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> StoreResult<Vec<Document>> {
        let mut options = FindOptions::default();
        options.projection = projection;

        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter, options)?;

        let documents = cursor.collect::<Result<Vec<_>, _>>()?;
        Ok(documents)
    }

    fn update_many(&self, collection: &str, filter: Document, update: Document) -> StoreResult<u64> {
        let result = self
            .database
            .collection::<Document>(collection)
            .update_many(filter, update, None)?;

        Ok(result.modified_count)
    }

    fn delete_many(&self, collection: &str, filter: Document) -> StoreResult<u64> {
        let result = self
            .database
            .collection::<Document>(collection)
            .delete_many(filter, None)?;

        Ok(result.deleted_count)
    }

    fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.database.list_collection_names(None)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(uri: &str) -> Config {
        Config::from_lookup(|var| match var {
            "MONGO_URI" => Some(uri.to_string()),
            "MONGO_DB_NAME" => Some("inventory".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_connect_is_lazy() {
        let store = MongoStore::connect(&config("mongodb://127.0.0.1:1")).unwrap();
        assert_eq!(store.database_name(), "inventory");
    }

    #[test]
    fn test_connect_rejects_malformed_uri() {
        assert!(MongoStore::connect(&config("postgres://localhost")).is_err());
    }
}
