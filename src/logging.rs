//! Middleware for logging requests and responses.

use axum::{
    extract::Request,
    http::{Method, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The form fields whose values are never written to the logs.
const REDACTED_FORM_FIELDS: [&str; 2] = ["account", "card"];

/// Bodies longer than this many characters are truncated at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Requests with a body larger than this many bytes are rejected, the same
/// limit axum applies to its body extractors by default.
pub const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
/// Account and card numbers in submitted forms are redacted.
///
/// A request body that cannot be read, or is larger than
/// [REQUEST_BODY_LIMIT], is answered with 400 Bad Request.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let Some((headers, body_text)) = extract_header_and_body_text_from_request(request).await
    else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    if is_form_submission(&headers) {
        let display_text = REDACTED_FORM_FIELDS
            .iter()
            .fold(body_text.clone(), |text, field_name| {
                redact_field(&text, field_name)
            });
        log_request(&headers, &display_text);
    } else {
        log_request(&headers, &body_text);
    }

    let request = Request::from_parts(headers, body_text.into());
    let response = next.run(request).await;

    let Some((headers, body_text)) = extract_header_and_body_text_from_response(response).await
    else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    log_response(&headers, &body_text);

    Response::from_parts(headers, body_text.into())
}

fn is_form_submission(headers: &axum::http::request::Parts) -> bool {
    let is_write = headers.method == Method::POST || headers.method == Method::PUT;
    let is_form = headers
        .headers
        .get(CONTENT_TYPE)
        .and_then(|content_type| content_type.to_str().ok())
        .is_some_and(|content_type| {
            content_type.starts_with("application/x-www-form-urlencoded")
        });

    is_write && is_form
}

/// Replace the value of every `field_name` in the url-encoded `form_text`.
fn redact_field(form_text: &str, field_name: &str) -> String {
    form_text
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) if name == field_name => format!("{name}=********"),
            _ => pair.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn extract_header_and_body_text_from_request(
    request: Request,
) -> Option<(axum::http::request::Parts, String)> {
    let (headers, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, REQUEST_BODY_LIMIT)
        .await
        .inspect_err(|error| tracing::warn!("could not read request body: {error}"))
        .ok()?;

    Some((headers, String::from_utf8_lossy(&body_bytes).to_string()))
}

async fn extract_header_and_body_text_from_response(
    response: Response,
) -> Option<(axum::http::response::Parts, String)> {
    let (headers, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read response body: {error}"))
        .ok()?;

    Some((headers, String::from_utf8_lossy(&body_bytes).to_string()))
}

/// The first [LOG_BODY_LENGTH_LIMIT] characters of `body`, or `None` if it is not longer.
fn truncate_body(body: &str) -> Option<&str> {
    body.char_indices()
        .nth(LOG_BODY_LENGTH_LIMIT)
        .map(|(end, _)| &body[..end])
}

fn log_request(headers: &axum::http::request::Parts, body: &str) {
    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Received request: {headers:#?}\nbody: {truncated}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {headers:#?}\nbody: {body:?}"),
    }
}

fn log_response(headers: &axum::http::response::Parts, body: &str) {
    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {headers:#?}\nbody: {truncated}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {headers:#?}\nbody: {body:?}"),
    }
}
