//! The food purchases page.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    endpoints::{self, format_endpoint},
    food::{Food, FoodState},
    html::{ListPage, card_field, card_list, edit_delete_links, external_link, format_amount},
    record::{ListController, SearchQuery, format_date_input, local_now},
};

const FOOD_LIST_ID: &str = "food-list";

/// Render the food purchases, filtered by the search term `q`.
pub async fn get_foods_page(
    State(state): State<FoodState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<SearchQuery>,
) -> Response {
    let offset = match local_now(&state.local_timezone) {
        Ok(now) => now.offset(),
        Err(error) => return error.into_page_or_alert(is_htmx_request),
    };
    let mut controller = ListController::new(state.collection);

    if let Err(error) = controller.refresh().await {
        return error.into_page_or_alert(is_htmx_request);
    }

    let foods = controller.filter(&query.q);
    let list = food_list_view(&foods, offset, &query.q);

    ListPage {
        title: "Food",
        list_endpoint: endpoints::FOODS_VIEW,
        new_endpoint: endpoints::NEW_FOOD_VIEW,
        new_link_text: "Add Purchase",
        search_term: &query.q,
        search_placeholder: "Search by name or shop",
        list_id: FOOD_LIST_ID,
    }
    .into_html(&list)
    .into_response()
}

fn food_list_view(foods: &[&Food], offset: UtcOffset, search_term: &str) -> Markup {
    let cards = foods
        .iter()
        .map(|food| food_card(food, offset))
        .collect::<Vec<_>>();

    html! {
        div id=(FOOD_LIST_ID)
        {
            (card_list(
                &cards,
                "food purchases",
                search_term,
                endpoints::NEW_FOOD_VIEW,
            ))
        }
    }
}

fn food_card(food: &Food, offset: UtcOffset) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_FOOD_VIEW, &food.id);
    let delete_url = format_endpoint(endpoints::DELETE_FOOD_VIEW, &food.id);
    let purchased_on = format_date_input(food.purchased_at.to_offset(offset).date());

    html! {
        div class="flex items-start justify-between gap-3"
        {
            div
            {
                h2 class="font-semibold" { (food.name) }
                p class="text-sm text-gray-500 dark:text-gray-400" { (food.shop) }
            }

            span
                class="text-lg font-bold tabular-nums text-blue-600 dark:text-blue-400"
                data-food-total="true"
            {
                (format_amount(food.total_price()))
            }
        }

        div class="mt-2 space-y-1"
        {
            (card_field("Quantity", &html! { (food.quantity) }))
            (card_field("Unit price", &html! { (format_amount(food.unit_price)) }))
            (card_field("Date", &html! { (purchased_on) }))

            @if !food.photo.is_empty() {
                (card_field("Photo", &external_link(&food.photo, "View")))
            }
        }

        (edit_delete_links(&edit_url, &delete_url))
    }
}
