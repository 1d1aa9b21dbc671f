//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// The errors that may occur in the application.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested record was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the record has not been deleted.
    #[error("the requested record could not be found")]
    NotFound,

    /// The record store could not complete a request.
    ///
    /// This covers network, authentication and server failures alike. The
    /// message is only meant for the server logs.
    #[error("the record store request failed: {0}")]
    RecordStore(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// A delete request did not carry an explicit confirmation.
    #[error("the delete was not confirmed")]
    DeleteNotConfirmed,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        tracing::error!("a request to the record store failed: {value}");
        Error::RecordStore(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::RecordStore(message) => {
                tracing::error!("Could not reach the record store: {message}");
                InternalServerError {
                    description: "Could Not Load Your Records",
                    fix: "The database could not be reached. Check that the Appwrite server is \
                    running and that the server settings are correct.",
                }
                .into_response()
            }
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for htmx to swap into the page.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Record not found",
                    "The record could not be found. \
                    Try refreshing the page to see if it has already been deleted.",
                ),
            ),
            Error::RecordStore(message) => {
                tracing::error!("Could not reach the record store: {message}");
                (
                    StatusCode::BAD_GATEWAY,
                    Alert::error(
                        "Could not reach the database",
                        "Your changes were not saved. Try again later or check the server logs.",
                    ),
                )
            }
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                        ensure the timezone has been set to valid, canonical timezone string"
                    ),
                ),
            ),
            Error::DeleteNotConfirmed => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Delete not confirmed",
                    "Nothing was deleted. Use the delete button on the confirmation page.",
                ),
            ),
        };

        alert.into_response_with_status(status_code)
    }

    /// Render the error as an alert for htmx requests, or as a full page otherwise.
    pub fn into_page_or_alert(self, is_htmx_request: bool) -> Response {
        if is_htmx_request {
            self.into_alert_response()
        } else {
            self.into_response()
        }
    }
}
