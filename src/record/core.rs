//! The behaviour shared by every kind of stored record.

use std::fmt::Debug;

use crate::record::FieldBag;

/// The server-assigned ID of a stored record.
///
/// A record that has not been persisted yet has an empty ID.
pub type RecordId = String;

/// A typed record that is stored as a document in a remote collection.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// A lowercase, human readable name for this kind of record, e.g. "food".
    const KIND: &'static str;

    /// The server-assigned ID, or an empty string for a new record.
    fn id(&self) -> &str;

    /// The text used to refer to the record in messages, e.g. on the delete page.
    fn display_name(&self) -> &str;

    /// Build a record from a stored document, supplying defaults for
    /// missing or malformed fields.
    fn from_field_bag(bag: &FieldBag) -> Self;

    /// The fields to send to the store when writing this record.
    ///
    /// Server-populated fields (ID and timestamps) are never included.
    fn to_field_bag(&self) -> FieldBag;

    /// The text fields that a search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether any search field contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Put freshly fetched records into the order they are displayed in.
    ///
    /// Records keep the store's order unless a record kind overrides this.
    fn sort_for_display(_records: &mut [Self]) {}
}
