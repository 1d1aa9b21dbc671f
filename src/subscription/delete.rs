//! Deleting a subscription after confirmation.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    endpoints::{self, format_endpoint},
    record::{DeleteQuery, RecordId, delete_confirmation_page, delete_record},
    subscription::SubscriptionState,
};

/// Ask the user to confirm the deletion of the subscription `subscription_id`.
pub async fn get_delete_subscription_page(
    Path(subscription_id): Path<RecordId>,
    State(state): State<SubscriptionState>,
) -> Response {
    let delete_endpoint = format_endpoint(endpoints::DELETE_SUBSCRIPTION, &subscription_id);

    delete_confirmation_page(
        &state.collection,
        &subscription_id,
        "Subscription",
        &delete_endpoint,
        endpoints::SUBSCRIPTIONS_VIEW,
    )
    .await
    .unwrap_or_else(IntoResponse::into_response)
}

/// Delete the subscription `subscription_id` if the request carries `confirm=true`.
pub async fn delete_subscription_endpoint(
    Path(subscription_id): Path<RecordId>,
    State(state): State<SubscriptionState>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    delete_record(
        state.collection,
        &subscription_id,
        query.confirm,
        endpoints::SUBSCRIPTIONS_VIEW,
    )
    .await
}
