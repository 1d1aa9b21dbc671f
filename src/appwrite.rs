//! A [DocumentStore] backed by the Appwrite REST API (v1).

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::{Value, json};

use crate::{
    Error,
    config::AppwriteConfig,
    record::{DocumentStore, FieldBag, into_field_bag},
};

/// The number of documents requested per page when listing a collection.
const PAGE_SIZE: usize = 100;

/// A client for the documents in one Appwrite database.
#[derive(Debug, Clone)]
pub struct AppwriteStore {
    client: reqwest::Client,
    endpoint: String,
    project_id: String,
    database_id: String,
    api_key: Option<String>,
}

impl AppwriteStore {
    /// Create a client for the database described by `config`.
    pub fn new(config: &AppwriteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn documents_url(&self, collection_id: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, collection_id
        )
    }

    fn document_url(&self, collection_id: &str, document_id: &str) -> String {
        format!("{}/{}", self.documents_url(collection_id), document_id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self
            .client
            .request(method, url)
            .header("X-Appwrite-Project", &self.project_id);

        match &self.api_key {
            Some(api_key) => request.header("X-Appwrite-Key", api_key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, Error> {
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        let body = response.text().await.unwrap_or_default();

        Err(error_from_response(status, &body))
    }
}

#[async_trait]
impl DocumentStore for AppwriteStore {
    async fn list_documents(&self, collection_id: &str) -> Result<Vec<FieldBag>, Error> {
        let url = self.documents_url(collection_id);
        let mut documents = Vec::new();

        loop {
            let request = self.request(Method::GET, &url).query(&[
                ("queries[]", limit_query(PAGE_SIZE)),
                ("queries[]", offset_query(documents.len())),
            ]);
            let page = parse_document_list(self.send(request).await?)?;
            let page_len = page.documents.len();
            documents.extend(page.documents);

            if page_len == 0 || documents.len() >= page.total {
                break;
            }
        }

        tracing::debug!(
            "fetched {} documents from collection {collection_id}",
            documents.len()
        );

        Ok(documents)
    }

    async fn get_document(
        &self,
        collection_id: &str,
        document_id: &str,
    ) -> Result<FieldBag, Error> {
        let request = self.request(Method::GET, &self.document_url(collection_id, document_id));

        self.send(request).await.map(into_field_bag)
    }

    async fn create_document(
        &self,
        collection_id: &str,
        data: FieldBag,
    ) -> Result<FieldBag, Error> {
        let request = self
            .request(Method::POST, &self.documents_url(collection_id))
            .json(&json!({ "documentId": "unique()", "data": data }));

        self.send(request).await.map(into_field_bag)
    }

    async fn update_document(
        &self,
        collection_id: &str,
        document_id: &str,
        data: FieldBag,
    ) -> Result<FieldBag, Error> {
        let request = self
            .request(Method::PATCH, &self.document_url(collection_id, document_id))
            .json(&json!({ "data": data }));

        self.send(request).await.map(into_field_bag)
    }

    async fn delete_document(&self, collection_id: &str, document_id: &str) -> Result<(), Error> {
        let request = self.request(
            Method::DELETE,
            &self.document_url(collection_id, document_id),
        );

        self.send(request).await.map(|_| ())
    }
}

/// One page of a document listing.
#[derive(Debug)]
struct DocumentList {
    total: usize,
    documents: Vec<FieldBag>,
}

fn parse_document_list(body: Value) -> Result<DocumentList, Error> {
    let Value::Object(mut body) = body else {
        return Err(Error::RecordStore(
            "expected a JSON object in the document list response".to_owned(),
        ));
    };

    let documents = match body.remove("documents") {
        Some(Value::Array(documents)) => documents.into_iter().map(into_field_bag).collect(),
        _ => {
            return Err(Error::RecordStore(
                "the document list response has no documents".to_owned(),
            ));
        }
    };

    let total = body
        .get("total")
        .and_then(Value::as_u64)
        .and_then(|total| usize::try_from(total).ok())
        .unwrap_or(0);

    Ok(DocumentList { total, documents })
}

fn error_from_response(status: StatusCode, body: &str) -> Error {
    if status == StatusCode::NOT_FOUND {
        return Error::NotFound;
    }

    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.to_owned());

    tracing::error!("the record store responded with {status}: {message}");

    Error::RecordStore(format!("{status}: {message}"))
}

fn limit_query(limit: usize) -> String {
    json!({ "method": "limit", "values": [limit] }).to_string()
}

fn offset_query(offset: usize) -> String {
    json!({ "method": "offset", "values": [offset] }).to_string()
}
