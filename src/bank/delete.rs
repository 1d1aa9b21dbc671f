//! Deleting a bank account after confirmation.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    bank::BankState,
    endpoints::{self, format_endpoint},
    record::{DeleteQuery, RecordId, delete_confirmation_page, delete_record},
};

/// Ask the user to confirm the deletion of the bank account `bank_id`.
pub async fn get_delete_bank_page(
    Path(bank_id): Path<RecordId>,
    State(state): State<BankState>,
) -> Response {
    let delete_endpoint = format_endpoint(endpoints::DELETE_BANK, &bank_id);

    delete_confirmation_page(
        &state.collection,
        &bank_id,
        "Bank",
        &delete_endpoint,
        endpoints::BANKS_VIEW,
    )
    .await
    .unwrap_or_else(IntoResponse::into_response)
}

/// Delete the bank account `bank_id` if the request carries `confirm=true`.
pub async fn delete_bank_endpoint(
    Path(bank_id): Path<RecordId>,
    State(state): State<BankState>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    delete_record(state.collection, &bank_id, query.confirm, endpoints::BANKS_VIEW).await
}
