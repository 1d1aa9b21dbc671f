//! The bank accounts page with a summary of the shown accounts.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use maud::{Markup, html};

use crate::{
    bank::{
        Bank, BankState, BankStatistics,
        statistics::{balance_style, statistics_view},
    },
    endpoints::{self, format_endpoint},
    html::{ListPage, card_field, card_list, edit_delete_links, external_link, format_amount},
    record::{ListController, SearchQuery},
};

const BANK_LIST_ID: &str = "bank-list";

/// Render the bank accounts, filtered by the search term `q`.
///
/// The summary covers only the accounts that match the search.
pub async fn get_banks_page(
    State(state): State<BankState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<SearchQuery>,
) -> Response {
    let mut controller = ListController::new(state.collection);

    if let Err(error) = controller.refresh().await {
        return error.into_page_or_alert(is_htmx_request);
    }

    let banks = controller.filter(&query.q);
    let statistics = BankStatistics::from_banks(banks.iter().copied());
    let list = bank_list_view(&banks, &statistics, &query.q);

    ListPage {
        title: "Banks",
        list_endpoint: endpoints::BANKS_VIEW,
        new_endpoint: endpoints::NEW_BANK_VIEW,
        new_link_text: "Add Bank",
        search_term: &query.q,
        search_placeholder: "Search by name, account or card",
        list_id: BANK_LIST_ID,
    }
    .into_html(&list)
    .into_response()
}

fn bank_list_view(banks: &[&Bank], statistics: &BankStatistics, search_term: &str) -> Markup {
    let cards = banks.iter().map(|bank| bank_card(bank)).collect::<Vec<_>>();

    html! {
        div id=(BANK_LIST_ID) class="space-y-4"
        {
            (statistics_view(statistics))
            (card_list(
                &cards,
                "banks",
                search_term,
                endpoints::NEW_BANK_VIEW,
            ))
        }
    }
}

fn bank_card(bank: &Bank) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_BANK_VIEW, &bank.id);
    let delete_url = format_endpoint(endpoints::DELETE_BANK_VIEW, &bank.id);
    let net_balance = bank.net_balance();

    html! {
        div class="flex items-start justify-between gap-3"
        {
            h2 class="font-semibold" { (bank.name) }

            span class=(balance_style(net_balance)) data-net-balance="true"
            {
                (format_amount(net_balance))
            }
        }

        div class="mt-2 space-y-1"
        {
            @if !bank.account.is_empty() {
                (card_field("Account", &html! { (bank.account) }))
            }

            @if !bank.card.is_empty() {
                (card_field("Card", &html! { (bank.card) }))
            }

            (card_field("Deposit", &html! { (format_amount(bank.deposit)) }))
            (card_field("Withdrawals", &html! { (format_amount(bank.withdrawals)) }))
            (card_field("Transfer", &html! { (format_amount(bank.transfer)) }))
            (card_field("Total expenditure", &html! { (format_amount(bank.total_expenditure())) }))

            @if !bank.address.is_empty() {
                (card_field("Address", &html! { (bank.address) }))
            }

            @if !bank.site.is_empty() {
                (card_field("Site", &external_link(&bank.site, "Online banking")))
            }

            @if !bank.activity.is_empty() {
                (card_field("Activity", &external_link(&bank.activity, "View")))
            }
        }

        (edit_delete_links(&edit_url, &delete_url))
    }
}
