//! The page and endpoint for recording a food purchase.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::{
    endpoints,
    food::{
        FoodState,
        form::{FoodForm, food_form_view},
    },
    html::{FormEndpoint, form_page},
    record::{open_new_form, submit_form},
};

/// Render the form for a new food purchase.
pub async fn get_new_food_page(State(state): State<FoodState>) -> Response {
    match open_new_form::<FoodForm>(&state.local_timezone) {
        Ok(form) => new_food_view(&form).into_response(),
        Err(error) => error.into_response(),
    }
}

/// Save a new food purchase, or go back to the list if the form was cancelled.
pub async fn create_food_endpoint(
    State(state): State<FoodState>,
    Form(form): Form<FoodForm>,
) -> Response {
    submit_form(
        state.collection,
        &form,
        "",
        &state.local_timezone,
        endpoints::FOODS_VIEW,
        |error_message| new_food_form_view(&form, error_message),
    )
    .await
}

fn new_food_view(form: &FoodForm) -> Markup {
    form_page(
        "Add Food Purchase",
        endpoints::FOODS_VIEW,
        &new_food_form_view(form, ""),
    )
}

fn new_food_form_view(form: &FoodForm, error_message: &str) -> Markup {
    food_form_view(
        form,
        &FormEndpoint::Post(endpoints::POST_FOOD.to_owned()),
        "Add Purchase",
        error_message,
    )
}

#[cfg(test)]
mod new_food_page_tests {
    use std::sync::Arc;

    use axum::extract::{FromRef, State};

    use crate::{
        endpoints,
        food::{FoodState, get_new_food_page},
        test_utils::{
            FakeDocumentStore, app_state, assert_content_type, assert_form_input,
            assert_form_submit_button_with_text, assert_hx_endpoint, assert_status_ok,
            assert_valid_html, must_get_form, parse_html_document,
        },
    };

    #[tokio::test]
    async fn render_page() {
        let store = Arc::new(FakeDocumentStore::new());
        let state = FoodState::from_ref(&app_state(&store));

        let response = get_new_food_page(State(state)).await;

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_FOOD, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "shop", "text");
        assert_form_input(&form, "purchased_on", "date");
        assert_form_submit_button_with_text(&form, "Add Purchase");
    }
}
