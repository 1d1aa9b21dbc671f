//! The in-memory list of records behind a list page.

use serde::Deserialize;

use crate::{
    Error,
    record::{Record, RecordCollection},
};

/// The query string of a list page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// The search term, an empty term shows every record.
    #[serde(default)]
    pub q: String,
}

/// Holds the last fetched set of records for one page request and derives
/// the filtered subsets shown to the user.
///
/// A controller is created per request, so nothing is cached between page
/// loads.
#[derive(Debug)]
pub struct ListController<R> {
    collection: RecordCollection<R>,
    records: Vec<R>,
}

impl<R: Record> ListController<R> {
    /// Create a controller with an empty list. Call [ListController::refresh]
    /// to load the records.
    pub fn new(collection: RecordCollection<R>) -> Self {
        Self {
            collection,
            records: Vec::new(),
        }
    }

    /// Fetch every record, replacing the in-memory list.
    ///
    /// # Errors
    /// Returns the store error and keeps the previous list if the fetch fails.
    pub async fn refresh(&mut self) -> Result<&[R], Error> {
        let mut records = self
            .collection
            .list_all()
            .await
            .inspect_err(|error| tracing::debug!("could not load {} records: {error}", R::KIND))?;

        R::sort_for_display(&mut records);
        self.records = records;

        Ok(&self.records)
    }

    /// The records from the last successful fetch.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The records whose search fields contain `term`, ignoring case.
    ///
    /// A blank term returns every record.
    pub fn filter(&self, term: &str) -> Vec<&R> {
        if term.trim().is_empty() {
            return self.records.iter().collect();
        }

        let needle = term.to_lowercase();

        self.records
            .iter()
            .filter(|record| record.matches(&needle))
            .collect()
    }

    /// Persist `record`, creating it if it has no ID and updating it otherwise.
    ///
    /// On success the stored record replaces its old copy in the list, or is
    /// added to the list if it is new.
    ///
    /// # Errors
    /// Returns the store error and leaves the list unchanged if the write fails.
    pub async fn save(&mut self, record: R) -> Result<R, Error> {
        let saved = if record.id().is_empty() {
            self.collection.create(&record).await
        } else {
            self.collection.update(&record).await
        }
        .inspect_err(|error| tracing::debug!("could not save {} record: {error}", R::KIND))?;

        match self
            .records
            .iter_mut()
            .find(|existing| existing.id() == saved.id())
        {
            Some(existing) => *existing = saved.clone(),
            None => self.records.push(saved.clone()),
        }

        R::sort_for_display(&mut self.records);

        Ok(saved)
    }

    /// Delete the record with the ID `id`, but only if `confirmed` is true.
    ///
    /// Returns whether the record was deleted.
    ///
    /// # Errors
    /// Returns the store error and leaves the list unchanged if the delete fails.
    pub async fn delete(&mut self, id: &str, confirmed: bool) -> Result<bool, Error> {
        if !confirmed {
            tracing::debug!("delete of {} record {id} was not confirmed", R::KIND);
            return Ok(false);
        }

        self.collection
            .delete_by_id(id)
            .await
            .inspect_err(|error| {
                tracing::debug!("could not delete {} record {id}: {error}", R::KIND)
            })?;

        self.records.retain(|record| record.id() != id);

        Ok(true)
    }
}
