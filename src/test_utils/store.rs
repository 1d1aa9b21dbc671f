use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use serde_json::{Value, json};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    Error,
    record::{CREATED_AT_FIELD, DocumentStore, FieldBag, ID_FIELD, UPDATED_AT_FIELD, into_field_bag},
};

#[derive(Debug, Default)]
struct FakeState {
    collections: HashMap<String, Vec<FieldBag>>,
    next_id: usize,
    write_calls: usize,
}

/// An in-memory [DocumentStore] that assigns IDs and timestamps the way the
/// real server does.
#[derive(Debug, Default)]
pub(crate) struct FakeDocumentStore {
    state: Mutex<FakeState>,
    failing: AtomicBool,
}

impl FakeDocumentStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed `collection_id` with `documents`, which should carry their own `$id`.
    pub(crate) fn with_documents(self, collection_id: &str, documents: Vec<Value>) -> Self {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry(collection_id.to_owned())
            .or_default()
            .extend(documents.into_iter().map(into_field_bag));

        self
    }

    /// Make every following request fail as if the server was unreachable.
    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn documents(&self, collection_id: &str) -> Vec<FieldBag> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection_id)
            .cloned()
            .unwrap_or_default()
    }

    /// The number of create, update and delete requests received.
    pub(crate) fn write_calls(&self) -> usize {
        self.state.lock().unwrap().write_calls
    }

    fn check_failing(&self) -> Result<(), Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(Error::RecordStore("connection refused".to_owned()))
        } else {
            Ok(())
        }
    }
}

fn now_string() -> String {
    OffsetDateTime::now_utc().format(&Rfc3339).unwrap()
}

fn document_id(document: &FieldBag) -> Option<&str> {
    document.get(ID_FIELD).and_then(Value::as_str)
}

#[async_trait]
impl DocumentStore for FakeDocumentStore {
    async fn list_documents(&self, collection_id: &str) -> Result<Vec<FieldBag>, Error> {
        self.check_failing()?;

        Ok(self.documents(collection_id))
    }

    async fn get_document(
        &self,
        collection_id: &str,
        id: &str,
    ) -> Result<FieldBag, Error> {
        self.check_failing()?;

        self.documents(collection_id)
            .into_iter()
            .find(|document| document_id(document) == Some(id))
            .ok_or(Error::NotFound)
    }

    async fn create_document(
        &self,
        collection_id: &str,
        mut data: FieldBag,
    ) -> Result<FieldBag, Error> {
        self.check_failing()?;

        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;
        state.next_id += 1;

        let now = now_string();
        data.insert(ID_FIELD.to_owned(), json!(format!("doc{}", state.next_id)));
        data.insert(CREATED_AT_FIELD.to_owned(), json!(now));
        data.insert(UPDATED_AT_FIELD.to_owned(), json!(now));

        state
            .collections
            .entry(collection_id.to_owned())
            .or_default()
            .push(data.clone());

        Ok(data)
    }

    async fn update_document(
        &self,
        collection_id: &str,
        id: &str,
        data: FieldBag,
    ) -> Result<FieldBag, Error> {
        self.check_failing()?;

        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;

        let document = state
            .collections
            .get_mut(collection_id)
            .and_then(|documents| {
                documents
                    .iter_mut()
                    .find(|document| document_id(document) == Some(id))
            })
            .ok_or(Error::NotFound)?;

        document.extend(data);
        document.insert(UPDATED_AT_FIELD.to_owned(), json!(now_string()));

        Ok(document.clone())
    }

    async fn delete_document(&self, collection_id: &str, id: &str) -> Result<(), Error> {
        self.check_failing()?;

        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;

        let documents = state
            .collections
            .get_mut(collection_id)
            .ok_or(Error::NotFound)?;
        let index = documents
            .iter()
            .position(|document| document_id(document) == Some(id))
            .ok_or(Error::NotFound)?;
        documents.remove(index);

        Ok(())
    }
}
