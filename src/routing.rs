//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    bank::{
        create_bank_endpoint, delete_bank_endpoint, get_banks_page, get_delete_bank_page,
        get_edit_bank_page, get_new_bank_page, update_bank_endpoint,
    },
    endpoints,
    food::{
        create_food_endpoint, delete_food_endpoint, get_delete_food_page, get_edit_food_page,
        get_foods_page, get_new_food_page, update_food_endpoint,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    subscription::{
        create_subscription_endpoint, delete_subscription_endpoint, get_delete_subscription_page,
        get_edit_subscription_page, get_new_subscription_page, get_subscriptions_page,
        update_subscription_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let food_routes = Router::new()
        .route(endpoints::FOODS_VIEW, get(get_foods_page))
        .route(endpoints::NEW_FOOD_VIEW, get(get_new_food_page))
        .route(endpoints::EDIT_FOOD_VIEW, get(get_edit_food_page))
        .route(endpoints::DELETE_FOOD_VIEW, get(get_delete_food_page))
        .route(endpoints::POST_FOOD, post(create_food_endpoint))
        .route(
            endpoints::PUT_FOOD,
            put(update_food_endpoint).delete(delete_food_endpoint),
        );

    let subscription_routes = Router::new()
        .route(endpoints::SUBSCRIPTIONS_VIEW, get(get_subscriptions_page))
        .route(
            endpoints::NEW_SUBSCRIPTION_VIEW,
            get(get_new_subscription_page),
        )
        .route(
            endpoints::EDIT_SUBSCRIPTION_VIEW,
            get(get_edit_subscription_page),
        )
        .route(
            endpoints::DELETE_SUBSCRIPTION_VIEW,
            get(get_delete_subscription_page),
        )
        .route(
            endpoints::POST_SUBSCRIPTION,
            post(create_subscription_endpoint),
        )
        .route(
            endpoints::PUT_SUBSCRIPTION,
            put(update_subscription_endpoint).delete(delete_subscription_endpoint),
        );

    let bank_routes = Router::new()
        .route(endpoints::BANKS_VIEW, get(get_banks_page))
        .route(endpoints::NEW_BANK_VIEW, get(get_new_bank_page))
        .route(endpoints::EDIT_BANK_VIEW, get(get_edit_bank_page))
        .route(endpoints::DELETE_BANK_VIEW, get(get_delete_bank_page))
        .route(endpoints::POST_BANK, post(create_bank_endpoint))
        .route(
            endpoints::PUT_BANK,
            put(update_bank_endpoint).delete(delete_bank_endpoint),
        );

    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .merge(food_routes)
        .merge(subscription_routes)
        .merge(bank_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the food purchases page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::FOODS_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_foods() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::FOODS_VIEW);
    }
}
