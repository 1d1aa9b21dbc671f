//! Settings for connecting to the Appwrite database that holds the records.

/// The IDs of the collections that hold each kind of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionIds {
    /// The collection of food purchases.
    pub food: String,
    /// The collection of subscriptions.
    pub subscription: String,
    /// The collection of bank accounts.
    pub bank: String,
}

/// Where to find the Appwrite database and how to authenticate with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppwriteConfig {
    /// The base URL of the Appwrite REST API, e.g. "https://cloud.appwrite.io/v1".
    pub endpoint: String,
    /// The ID of the Appwrite project.
    pub project_id: String,
    /// The ID of the database within the project.
    pub database_id: String,
    /// A server API key, required unless the collections allow guest access.
    pub api_key: Option<String>,
}
