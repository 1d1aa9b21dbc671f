//! The page and endpoint for adding a subscription.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::{
    endpoints,
    html::{FormEndpoint, form_page},
    record::{open_new_form, submit_form},
    subscription::{
        SubscriptionState,
        form::{SubscriptionForm, subscription_form_view},
    },
};

/// Render the form for a new subscription, renewing one month from today.
pub async fn get_new_subscription_page(State(state): State<SubscriptionState>) -> Response {
    match open_new_form::<SubscriptionForm>(&state.local_timezone) {
        Ok(form) => form_page(
            "Add Subscription",
            endpoints::SUBSCRIPTIONS_VIEW,
            &new_subscription_form_view(&form, ""),
        )
        .into_response(),
        Err(error) => error.into_response(),
    }
}

/// Save a new subscription, or go back to the list if the form was cancelled.
pub async fn create_subscription_endpoint(
    State(state): State<SubscriptionState>,
    Form(form): Form<SubscriptionForm>,
) -> Response {
    submit_form(
        state.collection,
        &form,
        "",
        &state.local_timezone,
        endpoints::SUBSCRIPTIONS_VIEW,
        |error_message| new_subscription_form_view(&form, error_message),
    )
    .await
}

fn new_subscription_form_view(form: &SubscriptionForm, error_message: &str) -> Markup {
    subscription_form_view(
        form,
        &FormEndpoint::Post(endpoints::POST_SUBSCRIPTION.to_owned()),
        "Add Subscription",
        error_message,
    )
}
