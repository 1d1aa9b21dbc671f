//! The page and endpoint for editing a subscription.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use maud::Markup;

use crate::{
    endpoints::{self, format_endpoint},
    html::{FormEndpoint, form_page},
    record::{RecordId, open_edit_form, submit_form},
    subscription::{
        SubscriptionState,
        form::{SubscriptionForm, subscription_form_view},
    },
};

/// Render the form for editing the subscription `subscription_id`.
pub async fn get_edit_subscription_page(
    Path(subscription_id): Path<RecordId>,
    State(state): State<SubscriptionState>,
) -> Response {
    let form = open_edit_form::<SubscriptionForm>(
        &state.collection,
        &subscription_id,
        &state.local_timezone,
    )
    .await;

    match form {
        Ok(form) => form_page(
            "Edit Subscription",
            endpoints::SUBSCRIPTIONS_VIEW,
            &edit_subscription_form_view(&subscription_id, &form, ""),
        )
        .into_response(),
        Err(error) => error.into_response(),
    }
}

/// Save the changes to the subscription `subscription_id`.
pub async fn update_subscription_endpoint(
    Path(subscription_id): Path<RecordId>,
    State(state): State<SubscriptionState>,
    Form(form): Form<SubscriptionForm>,
) -> Response {
    submit_form(
        state.collection,
        &form,
        &subscription_id,
        &state.local_timezone,
        endpoints::SUBSCRIPTIONS_VIEW,
        |error_message| edit_subscription_form_view(&subscription_id, &form, error_message),
    )
    .await
}

fn edit_subscription_form_view(
    subscription_id: &str,
    form: &SubscriptionForm,
    error_message: &str,
) -> Markup {
    let endpoint =
        FormEndpoint::Put(format_endpoint(endpoints::PUT_SUBSCRIPTION, subscription_id));

    subscription_form_view(form, &endpoint, "Save Changes", error_message)
}

#[cfg(test)]
mod edit_subscription_tests {
    use std::sync::Arc;

    use axum::{
        Form,
        extract::{FromRef, Path, State},
        http::StatusCode,
    };
    use serde_json::json;

    use crate::{
        endpoints,
        record::FormAction,
        subscription::{
            SubscriptionForm, SubscriptionState, get_edit_subscription_page,
            update_subscription_endpoint,
        },
        test_utils::{
            FakeDocumentStore, SUBSCRIPTION_COLLECTION, app_state, assert_form_input_with_value,
            assert_hx_redirect, assert_status_ok, assert_valid_html, must_get_form,
            parse_html_document,
        },
    };
    use scraper::Selector;

    fn store_with_streaming() -> Arc<FakeDocumentStore> {
        Arc::new(FakeDocumentStore::new().with_documents(
            SUBSCRIPTION_COLLECTION,
            vec![json!({
                "$id": "sub1",
                "name": "Streaming",
                "site": "https://stream.example.com",
                "price": 15,
                "nextdate": "2025-08-01T00:00:00.000+00:00",
            })],
        ))
    }

    #[tokio::test]
    async fn edit_page_is_prefilled() {
        let store = store_with_streaming();
        let state = SubscriptionState::from_ref(&app_state(&store));

        let response = get_edit_subscription_page(Path("sub1".to_owned()), State(state)).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "name", "text", "Streaming");
        assert_form_input_with_value(&form, "next_renewal", "date", "2025-08-01");
    }

    #[tokio::test]
    async fn site_without_scheme_can_be_edited_and_saved() {
        let store = Arc::new(FakeDocumentStore::new().with_documents(
            SUBSCRIPTION_COLLECTION,
            vec![json!({
                "$id": "sub2",
                "name": "Netflix",
                "site": "netflix.com",
                "nextdate": "2025-08-01T00:00:00.000+00:00",
            })],
        ));
        let state = SubscriptionState::from_ref(&app_state(&store));

        let response =
            get_edit_subscription_page(Path("sub2".to_owned()), State(state.clone())).await;

        let html = parse_html_document(response).await;
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "site", "text", "netflix.com");
        assert!(
            form.select(&Selector::parse("input[type=url]").unwrap())
                .next()
                .is_none(),
            "want no url inputs"
        );

        let form = SubscriptionForm {
            name: "Netflix".to_owned(),
            site: "netflix.com".to_owned(),
            next_renewal: "2025-08-01".to_owned(),
            ..Default::default()
        };
        let response =
            update_subscription_endpoint(Path("sub2".to_owned()), State(state), Form(form)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            store.documents(SUBSCRIPTION_COLLECTION)[0].get("site"),
            Some(&json!("netflix.com"))
        );
    }

    #[tokio::test]
    async fn update_saves_new_renewal_date() {
        let store = store_with_streaming();
        let state = SubscriptionState::from_ref(&app_state(&store));
        let form = SubscriptionForm {
            name: "Streaming".to_owned(),
            site: "https://stream.example.com".to_owned(),
            price: "18".to_owned(),
            next_renewal: "2025-09-01".to_owned(),
            ..Default::default()
        };

        let response =
            update_subscription_endpoint(Path("sub1".to_owned()), State(state), Form(form)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::SUBSCRIPTIONS_VIEW);
        let documents = store.documents(SUBSCRIPTION_COLLECTION);
        assert_eq!(documents[0].get("price"), Some(&json!(18)));
        assert_eq!(
            documents[0].get("nextdate"),
            Some(&json!("2025-09-01T00:00:00Z"))
        );
    }

    #[tokio::test]
    async fn cancel_leaves_subscription_unchanged() {
        let store = store_with_streaming();
        let state = SubscriptionState::from_ref(&app_state(&store));
        let form = SubscriptionForm {
            action: FormAction::Cancel,
            ..Default::default()
        };

        let response =
            update_subscription_endpoint(Path("sub1".to_owned()), State(state), Form(form)).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.write_calls(), 0);
        assert_eq!(
            store.documents(SUBSCRIPTION_COLLECTION)[0].get("price"),
            Some(&json!(15))
        );
    }
}
