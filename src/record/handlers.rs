//! Request handling shared by the food, subscription and bank pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::Markup;
use time::OffsetDateTime;

use crate::{
    Error,
    record::{
        DeleteConfirmation, EditForm, FormOutcome, ListController, Record, RecordCollection,
    },
    timezone::get_local_offset,
};

/// The current time in `local_timezone`.
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a valid
/// canonical timezone name.
pub fn local_now(local_timezone: &str) -> Result<OffsetDateTime, Error> {
    let offset = get_local_offset(local_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(local_timezone.to_owned()))?;

    Ok(OffsetDateTime::now_utc().to_offset(offset))
}

/// An empty form for creating a record.
pub fn open_new_form<F: EditForm>(local_timezone: &str) -> Result<F, Error> {
    Ok(F::open(None, local_now(local_timezone)?))
}

/// A form pre-filled with the stored record `id`.
///
/// # Errors
/// Returns [Error::NotFound] if there is no such record, or the store error
/// if it could not be fetched.
pub async fn open_edit_form<F: EditForm>(
    collection: &RecordCollection<F::Record>,
    id: &str,
    local_timezone: &str,
) -> Result<F, Error> {
    let now = local_now(local_timezone)?;
    let record = collection.get_by_id(id).await.inspect_err(|error| {
        tracing::debug!("could not load {} record {id}: {error}", F::Record::KIND)
    })?;

    Ok(F::open(Some(&record), now))
}

/// Handle a submitted create or edit form.
///
/// `id` is empty for a new record. Saving or cancelling redirects to
/// `list_endpoint`. Invalid input re-renders the form with `render_form`,
/// which is given the error message.
pub async fn submit_form<F: EditForm>(
    collection: RecordCollection<F::Record>,
    form: &F,
    id: &str,
    local_timezone: &str,
    list_endpoint: &str,
    render_form: impl FnOnce(&str) -> Markup,
) -> Response {
    let Some(offset) = get_local_offset(local_timezone) else {
        return Error::InvalidTimezoneError(local_timezone.to_owned()).into_alert_response();
    };

    let record = match form.submit(id, offset) {
        Ok(FormOutcome::Accepted(record)) => record,
        Ok(FormOutcome::Cancelled) => return redirect_to(list_endpoint),
        Err(error) => return render_form(&format!("Error: {error}")).into_response(),
    };

    let mut controller = ListController::new(collection);

    match controller.save(record).await {
        Ok(_) => redirect_to(list_endpoint),
        Err(error) => error.into_alert_response(),
    }
}

/// Render the page asking the user to confirm the deletion of record `id`.
pub async fn delete_confirmation_page<R: Record>(
    collection: &RecordCollection<R>,
    id: &str,
    record_kind: &str,
    delete_endpoint: &str,
    list_endpoint: &str,
) -> Result<Response, Error> {
    let record = collection.get_by_id(id).await.inspect_err(|error| {
        tracing::debug!("could not load {} record {id}: {error}", R::KIND)
    })?;

    let confirmation = DeleteConfirmation {
        record_kind,
        label: record.display_name(),
        delete_endpoint,
        list_endpoint,
    };

    Ok(confirmation.into_html().into_response())
}

/// Delete record `id` if the request confirmed it, then redirect to `list_endpoint`.
pub async fn delete_record<R: Record>(
    collection: RecordCollection<R>,
    id: &str,
    confirmed: bool,
    list_endpoint: &str,
) -> Response {
    let mut controller = ListController::new(collection);

    match controller.delete(id, confirmed).await {
        Ok(true) => redirect_to(list_endpoint),
        Ok(false) => Error::DeleteNotConfirmed.into_alert_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn redirect_to(endpoint: &str) -> Response {
    (HxRedirect(endpoint.to_owned()), StatusCode::SEE_OTHER).into_response()
}
