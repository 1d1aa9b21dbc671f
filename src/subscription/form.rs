use maud::{Markup, html};
use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};

use crate::{
    html::{
        FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, FormEndpoint, amount_input, form_buttons,
        form_error_message, hx_form, labelled_input,
    },
    record::{
        EditForm, FormAction, ValidationError, add_one_month, format_date_input, parse_amount,
        parse_date_input, require_text,
    },
    subscription::Subscription,
};

/// The input of the create and edit subscription forms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubscriptionForm {
    pub name: String,
    pub site: String,
    pub account: String,
    pub price: String,
    /// The next renewal date as `YYYY-MM-DD`.
    pub next_renewal: String,
    pub note: String,
    pub action: FormAction,
}

impl EditForm for SubscriptionForm {
    type Record = Subscription;

    fn open(existing: Option<&Subscription>, now: OffsetDateTime) -> Self {
        match existing {
            Some(subscription) => Self {
                name: subscription.name.clone(),
                site: subscription.site.clone(),
                account: subscription.account.clone(),
                price: subscription.price.to_string(),
                next_renewal: format_date_input(
                    subscription.next_renewal.to_offset(now.offset()).date(),
                ),
                note: subscription.note.clone(),
                action: FormAction::Save,
            },
            None => Self {
                price: "0".to_owned(),
                next_renewal: format_date_input(add_one_month(now.date())),
                ..Default::default()
            },
        }
    }

    fn action(&self) -> FormAction {
        self.action
    }

    fn validate(&self, id: &str, offset: UtcOffset) -> Result<Subscription, ValidationError> {
        let name = require_text(&self.name, "Name")?;
        let site = require_text(&self.site, "Site")?;
        let next_renewal = parse_date_input(&self.next_renewal, "Next renewal", offset)?;
        let price = parse_amount(&self.price, "Price")?;

        Ok(Subscription {
            id: id.to_owned(),
            name,
            site,
            account: self.account.trim().to_owned(),
            price,
            next_renewal,
            note: self.note.trim().to_owned(),
            created_at: None,
            updated_at: None,
        })
    }
}

pub(super) fn subscription_form_view(
    form: &SubscriptionForm,
    endpoint: &FormEndpoint,
    submit_text: &str,
    error_message: &str,
) -> Markup {
    let price = form.price.trim().parse().unwrap_or(0);

    let fields = html! {
        (labelled_input("name", "Name", "text", &form.name, true))
        (labelled_input("site", "Site", "text", &form.site, true))
        (labelled_input("account", "Account", "text", &form.account, false))
        (amount_input("price", "Price", price, true))
        (labelled_input("next_renewal", "Next renewal", "date", &form.next_renewal, true))

        div
        {
            label for="note" class=(FORM_LABEL_STYLE) { "Note" }

            textarea
                id="note"
                name="note"
                rows="3"
                placeholder="Note"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                (form.note)
            }
        }

        (form_error_message(error_message))
        (form_buttons(submit_text))
    };

    hx_form(endpoint, &fields)
}

#[cfg(test)]
mod subscription_form_tests {
    use time::{UtcOffset, macros::datetime};

    use crate::{
        record::{EditForm, FormOutcome, ValidationError},
        subscription::SubscriptionForm,
        test_utils::subscription,
    };

    fn valid_form() -> SubscriptionForm {
        SubscriptionForm {
            name: "Streaming".to_owned(),
            site: "https://stream.example.com".to_owned(),
            price: "15".to_owned(),
            next_renewal: "2025-08-01".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn new_form_renews_in_one_month() {
        let form = SubscriptionForm::open(None, datetime!(2025-01-31 9:00 +13));

        assert_eq!(form.next_renewal, "2025-02-28");
    }

    #[test]
    fn edit_form_is_prefilled() {
        let mut existing = subscription("sub1", "Streaming", datetime!(2025-08-01 0:00 UTC));
        existing.note = "family plan".to_owned();

        let form = SubscriptionForm::open(Some(&existing), datetime!(2025-07-01 0:00 UTC));

        assert_eq!(form.name, "Streaming");
        assert_eq!(form.site, existing.site);
        assert_eq!(form.price, "15");
        assert_eq!(form.next_renewal, "2025-08-01");
        assert_eq!(form.note, "family plan");
    }

    #[test]
    fn requires_site() {
        let form = SubscriptionForm {
            site: String::new(),
            ..valid_form()
        };

        assert_eq!(
            form.submit("", UtcOffset::UTC),
            Err(ValidationError::MissingField("Site"))
        );
    }

    #[test]
    fn requires_valid_date() {
        let form = SubscriptionForm {
            next_renewal: "2025-02-30".to_owned(),
            ..valid_form()
        };

        assert_eq!(
            form.submit("", UtcOffset::UTC),
            Err(ValidationError::InvalidDate("Next renewal"))
        );
    }

    #[test]
    fn accepts_blank_account_and_note() {
        let Ok(FormOutcome::Accepted(got)) = valid_form().submit("sub1", UtcOffset::UTC) else {
            panic!("want the form to be accepted");
        };

        assert_eq!(got.id, "sub1");
        assert_eq!(got.account, "");
        assert_eq!(got.next_renewal, datetime!(2025-08-01 0:00 UTC));
    }
}
