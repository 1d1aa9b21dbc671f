use maud::{Markup, html};
use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};

use crate::{
    bank::Bank,
    html::{FormEndpoint, amount_input, form_buttons, form_error_message, hx_form, labelled_input},
    record::{EditForm, FormAction, ValidationError, parse_amount, require_text},
};

/// The input of the create and edit bank forms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BankForm {
    pub name: String,
    pub account: String,
    pub card: String,
    pub site: String,
    pub address: String,
    pub activity: String,
    pub deposit: String,
    pub withdrawals: String,
    pub transfer: String,
    pub action: FormAction,
}

impl EditForm for BankForm {
    type Record = Bank;

    fn open(existing: Option<&Bank>, _now: OffsetDateTime) -> Self {
        match existing {
            Some(bank) => Self {
                name: bank.name.clone(),
                account: bank.account.clone(),
                card: bank.card.clone(),
                site: bank.site.clone(),
                address: bank.address.clone(),
                activity: bank.activity.clone(),
                deposit: bank.deposit.to_string(),
                withdrawals: bank.withdrawals.to_string(),
                transfer: bank.transfer.to_string(),
                action: FormAction::Save,
            },
            None => Self {
                deposit: "0".to_owned(),
                withdrawals: "0".to_owned(),
                transfer: "0".to_owned(),
                ..Default::default()
            },
        }
    }

    fn action(&self) -> FormAction {
        self.action
    }

    fn validate(&self, id: &str, _offset: UtcOffset) -> Result<Bank, ValidationError> {
        Ok(Bank {
            id: id.to_owned(),
            name: require_text(&self.name, "Name")?,
            account: self.account.trim().to_owned(),
            card: self.card.trim().to_owned(),
            site: self.site.trim().to_owned(),
            address: self.address.trim().to_owned(),
            activity: self.activity.trim().to_owned(),
            deposit: parse_amount(&self.deposit, "Deposit")?,
            withdrawals: parse_amount(&self.withdrawals, "Withdrawals")?,
            transfer: parse_amount(&self.transfer, "Transfer")?,
            created_at: None,
            updated_at: None,
        })
    }
}

pub(super) fn bank_form_view(
    form: &BankForm,
    endpoint: &FormEndpoint,
    submit_text: &str,
    error_message: &str,
) -> Markup {
    let amount = |text: &str| -> i64 { text.trim().parse().unwrap_or(0) };

    let fields = html! {
        (labelled_input("name", "Name", "text", &form.name, true))
        (labelled_input("account", "Account number", "text", &form.account, false))
        (labelled_input("card", "Card number", "text", &form.card, false))
        (amount_input("deposit", "Deposit", amount(&form.deposit), true))
        (amount_input("withdrawals", "Withdrawals", amount(&form.withdrawals), true))
        (amount_input("transfer", "Transfer", amount(&form.transfer), true))
        (labelled_input("site", "Site", "text", &form.site, false))
        (labelled_input("address", "Address", "text", &form.address, false))
        (labelled_input("activity", "Activity link", "text", &form.activity, false))
        (form_error_message(error_message))
        (form_buttons(submit_text))
    };

    hx_form(endpoint, &fields)
}
