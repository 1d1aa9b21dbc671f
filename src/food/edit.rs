//! The page and endpoint for editing a food purchase.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::{
    endpoints::{self, format_endpoint},
    food::{
        FoodState,
        form::{FoodForm, food_form_view},
    },
    html::{FormEndpoint, form_page},
    record::{RecordId, open_edit_form, submit_form},
};

/// Render the form for editing the food purchase `food_id`.
pub async fn get_edit_food_page(
    Path(food_id): Path<RecordId>,
    State(state): State<FoodState>,
) -> Response {
    match open_edit_form::<FoodForm>(&state.collection, &food_id, &state.local_timezone).await {
        Ok(form) => form_page(
            "Edit Food Purchase",
            endpoints::FOODS_VIEW,
            &edit_food_form_view(&food_id, &form, ""),
        )
        .into_response(),
        Err(error) => error.into_response(),
    }
}

/// Save the changes to the food purchase `food_id`.
pub async fn update_food_endpoint(
    Path(food_id): Path<RecordId>,
    State(state): State<FoodState>,
    Form(form): Form<FoodForm>,
) -> Response {
    submit_form(
        state.collection,
        &form,
        &food_id,
        &state.local_timezone,
        endpoints::FOODS_VIEW,
        |error_message| edit_food_form_view(&food_id, &form, error_message),
    )
    .await
}

fn edit_food_form_view(food_id: &str, form: &FoodForm, error_message: &str) -> Markup {
    let endpoint = FormEndpoint::Put(format_endpoint(endpoints::PUT_FOOD, food_id));

    food_form_view(form, &endpoint, "Save Changes", error_message)
}
