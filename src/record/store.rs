//! Access to the remote collections that hold the records.

use std::{fmt::Debug, marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use crate::{
    Error,
    record::{FieldBag, Record},
};

/// A document database that organises untyped documents into collections.
///
/// Failures of any kind (network, authentication, server) are reported as
/// [Error::RecordStore], except for a missing document, which is
/// [Error::NotFound].
#[async_trait]
pub trait DocumentStore: Debug + Send + Sync {
    /// Fetch every document in the collection.
    async fn list_documents(&self, collection_id: &str) -> Result<Vec<FieldBag>, Error>;

    /// Fetch a single document.
    async fn get_document(&self, collection_id: &str, document_id: &str)
    -> Result<FieldBag, Error>;

    /// Store `data` as a new document and return the stored document.
    async fn create_document(&self, collection_id: &str, data: FieldBag)
    -> Result<FieldBag, Error>;

    /// Overwrite the fields in `data` on an existing document and return the stored document.
    async fn update_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: FieldBag,
    ) -> Result<FieldBag, Error>;

    /// Remove a document.
    async fn delete_document(&self, collection_id: &str, document_id: &str) -> Result<(), Error>;
}

/// A typed view of one collection in a [DocumentStore].
pub struct RecordCollection<R> {
    store: Arc<dyn DocumentStore>,
    collection_id: String,
    record: PhantomData<fn() -> R>,
}

impl<R> Clone for RecordCollection<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            collection_id: self.collection_id.clone(),
            record: PhantomData,
        }
    }
}

impl<R> Debug for RecordCollection<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordCollection")
            .field("store", &self.store)
            .field("collection_id", &self.collection_id)
            .finish()
    }
}

impl<R: Record> RecordCollection<R> {
    /// Create a view of the collection `collection_id` in `store`.
    pub fn new(store: Arc<dyn DocumentStore>, collection_id: &str) -> Self {
        Self {
            store,
            collection_id: collection_id.to_owned(),
            record: PhantomData,
        }
    }

    /// Fetch every record in the collection.
    pub async fn list_all(&self) -> Result<Vec<R>, Error> {
        let documents = self.store.list_documents(&self.collection_id).await?;

        Ok(documents.iter().map(R::from_field_bag).collect())
    }

    /// Fetch the record with the ID `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if there is no such record.
    pub async fn get_by_id(&self, id: &str) -> Result<R, Error> {
        self.store
            .get_document(&self.collection_id, id)
            .await
            .map(|document| R::from_field_bag(&document))
    }

    /// Store `record` as a new record. The ID of `record` is ignored.
    pub async fn create(&self, record: &R) -> Result<R, Error> {
        self.store
            .create_document(&self.collection_id, record.to_field_bag())
            .await
            .map(|document| R::from_field_bag(&document))
    }

    /// Overwrite the stored record that has the same ID as `record`.
    pub async fn update(&self, record: &R) -> Result<R, Error> {
        self.store
            .update_document(&self.collection_id, record.id(), record.to_field_bag())
            .await
            .map(|document| R::from_field_bag(&document))
    }

    /// Remove the record with the ID `id`.
    pub async fn delete_by_id(&self, id: &str) -> Result<(), Error> {
        self.store.delete_document(&self.collection_id, id).await
    }
}
