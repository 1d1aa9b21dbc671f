//! The summary shown above the list of bank accounts.

use maud::{Markup, html};

use crate::{
    bank::Bank,
    html::{CARD_STYLE, card_field, format_amount},
};

/// Totals over a set of bank accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankStatistics {
    /// The sum of the deposits.
    pub total_deposit: i64,
    /// The sum of the withdrawals.
    pub total_withdrawals: i64,
    /// The sum of the transfers.
    pub total_transfer: i64,
    /// The sum of the net balances.
    pub net_balance: i64,
}

impl BankStatistics {
    /// Sum the amounts of exactly the accounts in `banks`.
    pub fn from_banks<'a>(banks: impl IntoIterator<Item = &'a Bank>) -> Self {
        banks
            .into_iter()
            .fold(Self::default(), |statistics, bank| Self {
                total_deposit: statistics.total_deposit.saturating_add(bank.deposit),
                total_withdrawals: statistics.total_withdrawals.saturating_add(bank.withdrawals),
                total_transfer: statistics.total_transfer.saturating_add(bank.transfer),
                net_balance: statistics.net_balance.saturating_add(bank.net_balance()),
            })
    }
}

/// The class for a net balance, green when it is zero or more and red otherwise.
pub(super) fn balance_style(balance: i64) -> &'static str {
    if balance >= 0 {
        "font-semibold text-green-600 dark:text-green-400"
    } else {
        "font-semibold text-red-600 dark:text-red-400"
    }
}

pub(super) fn statistics_view(statistics: &BankStatistics) -> Markup {
    html! {
        section class=(CARD_STYLE) data-bank-statistics="true"
        {
            h2 class="mb-2 font-semibold" { "Summary" }

            div class="space-y-1"
            {
                (card_field("Total deposit", &html! { (format_amount(statistics.total_deposit)) }))
                (card_field("Total withdrawals", &html! { (format_amount(statistics.total_withdrawals)) }))
                (card_field("Total transfer", &html! { (format_amount(statistics.total_transfer)) }))
                (card_field("Net balance", &html! {
                    span class=(balance_style(statistics.net_balance)) data-net-balance="true"
                    {
                        (format_amount(statistics.net_balance))
                    }
                }))
            }
        }
    }
}
