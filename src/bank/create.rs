//! The page and endpoint for adding a bank account.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::{
    bank::{
        BankState,
        form::{BankForm, bank_form_view},
    },
    endpoints,
    html::{FormEndpoint, form_page},
    record::{open_new_form, submit_form},
};

/// Render the form for a new bank account.
pub async fn get_new_bank_page(State(state): State<BankState>) -> Response {
    match open_new_form::<BankForm>(&state.local_timezone) {
        Ok(form) => form_page(
            "Add Bank",
            endpoints::BANKS_VIEW,
            &new_bank_form_view(&form, ""),
        )
        .into_response(),
        Err(error) => error.into_response(),
    }
}

/// Save a new bank account, or go back to the list if the form was cancelled.
pub async fn create_bank_endpoint(
    State(state): State<BankState>,
    Form(form): Form<BankForm>,
) -> Response {
    submit_form(
        state.collection,
        &form,
        "",
        &state.local_timezone,
        endpoints::BANKS_VIEW,
        |error_message| new_bank_form_view(&form, error_message),
    )
    .await
}

fn new_bank_form_view(form: &BankForm, error_message: &str) -> Markup {
    bank_form_view(
        form,
        &FormEndpoint::Post(endpoints::POST_BANK.to_owned()),
        "Add Bank",
        error_message,
    )
}
