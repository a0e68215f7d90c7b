//! Document store facade
//!
//! The four tool operations. Every method returns a string: either the
//! result or a description of what went wrong. Store failures never escape.

use std::sync::Arc;

use mongodb::bson::Document;

use crate::error::StoreResult;
use crate::mongo::client::DocumentStore;
use crate::mongo::json::documents_to_json_string;
use crate::mongo::worker::BlockingPool;

/// String-returning operations over a shared [`DocumentStore`]
#[derive(Clone)]
pub struct DocumentFacade {
    store: Arc<dyn DocumentStore>,
    pool: BlockingPool,
}

impl DocumentFacade {
    /// Create a facade over an already constructed store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            pool: BlockingPool::new(),
        }
    }

    /// Find documents matching `filter`, optionally projected
    pub async fn find_documents(
        &self,
        collection: &str,
        filter: Document,
        projection: Option<Document>,
    ) -> String {
        let store = self.store.clone();
        let name = collection.to_string();

        let result = self
            .pool
            .run("find", move || store.find(&name, filter, projection))
            .await;

        match result {
            Ok(documents) if documents.is_empty() => {
                format!("No documents found in '{}' with the specified filter.", collection)
            }
            Ok(documents) => match documents_to_json_string(documents) {
                Ok(json) => json,
                Err(e) => operation_failed("finding documents", &e),
            },
            Err(e) => operation_failed("finding documents", &e),
        }
    }

    /// Apply `update` to every document matching `filter`
    pub async fn update_documents(&self, collection: &str, filter: Document, update: Document) -> String {
        let store = self.store.clone();
        let name = collection.to_string();

        let result = self
            .pool
            .run("update", move || store.update_many(&name, filter, update))
            .await;

        match result {
            Ok(modified) => format!("Successfully updated {} document(s).", modified),
            Err(e) => operation_failed("updating documents", &e),
        }
    }

    /// Delete every document matching `filter`
    pub async fn delete_documents(&self, collection: &str, filter: Document) -> String {
        let store = self.store.clone();
        let name = collection.to_string();

        let result = self
            .pool
            .run("delete", move || store.delete_many(&name, filter))
            .await;

        match result {
            Ok(deleted) => format!("Successfully deleted {} document(s).", deleted),
            Err(e) => operation_failed("deleting documents", &e),
        }
    }

    /// List all collection names in the database
    pub async fn list_collections(&self) -> String {
        let store = self.store.clone();

        let result: StoreResult<Vec<String>> = self
            .pool
            .run("list_collections", move || store.list_collection_names())
            .await;

        match result {
            Ok(names) => format!("Available collections: {}", format_name_list(&names)),
            Err(e) => operation_failed("listing collections", &e),
        }
    }
}

fn operation_failed(action: &str, err: &dyn std::fmt::Display) -> String {
    tracing::warn!("Error while {}: {}", action, err);
    format!("An error occurred while {}: {}", action, err)
}

/// Render names as `['a', 'b']`
fn format_name_list(names: &[String]) -> String {
    let quoted = names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", quoted)
}
