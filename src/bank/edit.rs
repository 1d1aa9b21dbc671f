//! The page and endpoint for editing a bank account.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::{
    bank::{
        BankState,
        form::{BankForm, bank_form_view},
    },
    endpoints::{self, format_endpoint},
    html::{FormEndpoint, form_page},
    record::{RecordId, open_edit_form, submit_form},
};

/// Render the form for editing the bank account `bank_id`.
pub async fn get_edit_bank_page(
    Path(bank_id): Path<RecordId>,
    State(state): State<BankState>,
) -> Response {
    match open_edit_form::<BankForm>(&state.collection, &bank_id, &state.local_timezone).await {
        Ok(form) => form_page(
            "Edit Bank",
            endpoints::BANKS_VIEW,
            &edit_bank_form_view(&bank_id, &form, ""),
        )
        .into_response(),
        Err(error) => error.into_response(),
    }
}

/// Save the changes to the bank account `bank_id`.
pub async fn update_bank_endpoint(
    Path(bank_id): Path<RecordId>,
    State(state): State<BankState>,
    Form(form): Form<BankForm>,
) -> Response {
    submit_form(
        state.collection,
        &form,
        &bank_id,
        &state.local_timezone,
        endpoints::BANKS_VIEW,
        |error_message| edit_bank_form_view(&bank_id, &form, error_message),
    )
    .await
}

fn edit_bank_form_view(bank_id: &str, form: &BankForm, error_message: &str) -> Markup {
    let endpoint = FormEndpoint::Put(format_endpoint(endpoints::PUT_BANK, bank_id));

    bank_form_view(form, &endpoint, "Save Changes", error_message)
}
