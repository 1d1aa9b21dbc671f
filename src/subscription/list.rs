//! The subscriptions page, soonest renewal first.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BADGE_DUE_SOON_STYLE, BADGE_OVERDUE_STYLE, ListPage, card_field, card_list,
        edit_delete_links, external_link, format_amount,
    },
    record::{ListController, SearchQuery, format_date_input, local_now},
    subscription::{RenewalStatus, Subscription, SubscriptionState},
};

const SUBSCRIPTION_LIST_ID: &str = "subscription-list";

/// Render the subscriptions, filtered by the search term `q`.
pub async fn get_subscriptions_page(
    State(state): State<SubscriptionState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<SearchQuery>,
) -> Response {
    let now = match local_now(&state.local_timezone) {
        Ok(now) => now,
        Err(error) => return error.into_page_or_alert(is_htmx_request),
    };
    let mut controller = ListController::new(state.collection);

    if let Err(error) = controller.refresh().await {
        return error.into_page_or_alert(is_htmx_request);
    }

    let subscriptions = controller.filter(&query.q);
    let list = subscription_list_view(&subscriptions, now, &query.q);

    ListPage {
        title: "Subscriptions",
        list_endpoint: endpoints::SUBSCRIPTIONS_VIEW,
        new_endpoint: endpoints::NEW_SUBSCRIPTION_VIEW,
        new_link_text: "Add Subscription",
        search_term: &query.q,
        search_placeholder: "Search by name, site or account",
        list_id: SUBSCRIPTION_LIST_ID,
    }
    .into_html(&list)
    .into_response()
}

fn subscription_list_view(
    subscriptions: &[&Subscription],
    now: OffsetDateTime,
    search_term: &str,
) -> Markup {
    let cards = subscriptions
        .iter()
        .map(|subscription| subscription_card(subscription, now))
        .collect::<Vec<_>>();

    html! {
        div id=(SUBSCRIPTION_LIST_ID)
        {
            (card_list(
                &cards,
                "subscriptions",
                search_term,
                endpoints::NEW_SUBSCRIPTION_VIEW,
            ))
        }
    }
}

fn status_badge(status: RenewalStatus) -> Markup {
    match status {
        RenewalStatus::Overdue => html! {
            span class=(BADGE_OVERDUE_STYLE) data-status="overdue" { "Overdue" }
        },
        RenewalStatus::DueSoon => html! {
            span class=(BADGE_DUE_SOON_STYLE) data-status="due-soon" { "Due soon" }
        },
        RenewalStatus::Normal => html! {},
    }
}

fn subscription_card(subscription: &Subscription, now: OffsetDateTime) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_SUBSCRIPTION_VIEW, &subscription.id);
    let delete_url = format_endpoint(endpoints::DELETE_SUBSCRIPTION_VIEW, &subscription.id);
    let next_renewal = format_date_input(subscription.next_renewal.to_offset(now.offset()).date());

    html! {
        div class="flex items-start justify-between gap-3"
        {
            div class="flex items-center gap-2"
            {
                h2 class="font-semibold" { (subscription.name) }
                (status_badge(subscription.status(now)))
            }

            span class="text-lg font-bold tabular-nums" { (format_amount(subscription.price)) }
        }

        div class="mt-2 space-y-1"
        {
            (card_field("Site", &external_link(&subscription.site, &subscription.site)))

            @if !subscription.account.is_empty() {
                (card_field("Account", &html! { (subscription.account) }))
            }

            (card_field("Next renewal", &html! { (next_renewal) }))
            (card_field("Remaining", &html! { (subscription.remaining_days_text(now)) }))

            @if !subscription.note.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400" { (subscription.note) }
            }
        }

        (edit_delete_links(&edit_url, &delete_url))
    }
}

#[cfg(test)]
mod subscriptions_page_tests {
    use std::sync::Arc;

    use axum::extract::{FromRef, Query, State};
    use axum_htmx::HxRequest;
    use scraper::{Html, Selector};
    use serde_json::json;
    use time::{Duration, OffsetDateTime};

    use crate::{
        record::{SearchQuery, format_datetime},
        subscription::{SubscriptionState, get_subscriptions_page},
        test_utils::{
            FakeDocumentStore, SUBSCRIPTION_COLLECTION, app_state, assert_status_ok,
            assert_valid_html, parse_html_document,
        },
    };

    fn renewing_in(days: i64) -> String {
        // Half a day extra keeps the whole day count stable while the test runs.
        format_datetime(OffsetDateTime::now_utc() + Duration::days(days) + Duration::hours(12))
    }

    fn state_with_subscriptions() -> SubscriptionState {
        let store = Arc::new(FakeDocumentStore::new().with_documents(
            SUBSCRIPTION_COLLECTION,
            vec![
                json!({ "$id": "a", "name": "Music", "site": "https://music.example.com", "nextdate": renewing_in(90) }),
                json!({ "$id": "b", "name": "News", "site": "https://news.example.com", "nextdate": renewing_in(-6) }),
                json!({ "$id": "c", "name": "Streaming", "site": "https://stream.example.com", "account": "me@example.com", "nextdate": renewing_in(10) }),
            ],
        ));

        SubscriptionState::from_ref(&app_state(&store))
    }

    fn card_names(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("#subscription-list h2").unwrap())
            .map(|heading| heading.text().collect::<String>())
            .collect()
    }

    fn statuses(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("#subscription-list [data-status]").unwrap())
            .filter_map(|badge| badge.value().attr("data-status").map(str::to_owned))
            .collect()
    }

    #[tokio::test]
    async fn lists_soonest_renewal_first_with_status() {
        let response = get_subscriptions_page(
            State(state_with_subscriptions()),
            HxRequest(false),
            Query(SearchQuery::default()),
        )
        .await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(card_names(&html), ["News", "Streaming", "Music"]);
        assert_eq!(statuses(&html), ["overdue", "due-soon"]);
        assert!(html.html().contains("Overdue by 5 days"));
    }

    #[tokio::test]
    async fn filters_by_account() {
        let response = get_subscriptions_page(
            State(state_with_subscriptions()),
            HxRequest(true),
            Query(SearchQuery {
                q: "ME@EXAMPLE".to_owned(),
            }),
        )
        .await;

        let html = parse_html_document(response).await;
        assert_eq!(card_names(&html), ["Streaming"]);
    }
}
