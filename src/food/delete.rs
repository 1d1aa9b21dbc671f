//! Deleting a food purchase after confirmation.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    endpoints::{self, format_endpoint},
    food::FoodState,
    record::{DeleteQuery, RecordId, delete_confirmation_page, delete_record},
};

/// Ask the user to confirm the deletion of the food purchase `food_id`.
pub async fn get_delete_food_page(
    Path(food_id): Path<RecordId>,
    State(state): State<FoodState>,
) -> Response {
    let delete_endpoint = format_endpoint(endpoints::DELETE_FOOD, &food_id);

    delete_confirmation_page(
        &state.collection,
        &food_id,
        "Food Purchase",
        &delete_endpoint,
        endpoints::FOODS_VIEW,
    )
    .await
    .unwrap_or_else(IntoResponse::into_response)
}

/// Delete the food purchase `food_id` if the request carries `confirm=true`.
pub async fn delete_food_endpoint(
    Path(food_id): Path<RecordId>,
    State(state): State<FoodState>,
    Query(query): Query<DeleteQuery>,
) -> Response {
    delete_record(
        state.collection,
        &food_id,
        query.confirm,
        endpoints::FOODS_VIEW,
    )
    .await
}
