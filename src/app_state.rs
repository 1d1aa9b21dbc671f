//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{
    Error,
    config::CollectionIds,
    record::{DocumentStore, Record, RecordCollection},
    timezone::get_local_offset,
};

/// The state of the REST server.
///
/// The state is immutable, each request builds its own list of records from
/// the store.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The database that holds the records.
    pub document_store: Arc<dyn DocumentStore>,

    /// The IDs of the collection for each kind of record.
    pub collections: CollectionIds,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        document_store: Arc<dyn DocumentStore>,
        collections: CollectionIds,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            document_store,
            collections,
        })
    }

    /// A typed view of the collection `collection_id`.
    pub(crate) fn collection<R: Record>(&self, collection_id: &str) -> RecordCollection<R> {
        RecordCollection::new(self.document_store.clone(), collection_id)
    }
}
