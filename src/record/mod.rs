//! The CRUD lifecycle shared by every kind of record: map stored documents to
//! typed records, list and filter them, edit them through forms and delete
//! them after confirmation.

mod confirm;
mod controller;
mod core;
mod field_bag;
mod form;
mod handlers;
mod store;

pub use confirm::{DeleteConfirmation, DeleteQuery};
pub use controller::{ListController, SearchQuery};
pub use core::{Record, RecordId};
pub use field_bag::{
    CREATED_AT_FIELD, FieldBag, ID_FIELD, UPDATED_AT_FIELD, format_datetime, get_datetime,
    get_int, get_string, into_field_bag,
};
pub use form::{
    EditForm, FormAction, FormOutcome, ValidationError, add_one_month, format_date_input,
    parse_amount, parse_date_input, require_text,
};
pub use handlers::{
    delete_confirmation_page, delete_record, local_now, open_edit_form, open_new_form, submit_form,
};
pub use store::{DocumentStore, RecordCollection};
