//! The subscription record, its renewal status and how it is stored.

use axum::extract::FromRef;
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    AppState,
    record::{
        CREATED_AT_FIELD, FieldBag, ID_FIELD, Record, RecordCollection, RecordId,
        UPDATED_AT_FIELD, format_datetime, get_datetime, get_int, get_string, into_field_bag,
    },
};

const NAME_KEY: &str = "name";
const SITE_KEY: &str = "site";
const ACCOUNT_KEY: &str = "account";
const PRICE_KEY: &str = "price";
const NEXT_DATE_KEY: &str = "nextdate";
const NOTE_KEY: &str = "note";

/// Renewals at most this many days away are due soon.
pub const DUE_SOON_DAYS: i64 = 30;

/// How close a subscription is to renewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalStatus {
    /// The renewal date has passed.
    Overdue,
    /// The renewal is today or within [DUE_SOON_DAYS] days.
    DueSoon,
    /// The renewal is more than [DUE_SOON_DAYS] days away.
    Normal,
}

impl RenewalStatus {
    /// The status of a renewal that is `days` whole days away.
    pub fn from_days_until_next(days: i64) -> Self {
        if days < 0 {
            Self::Overdue
        } else if days <= DUE_SOON_DAYS {
            Self::DueSoon
        } else {
            Self::Normal
        }
    }
}

/// A recurring payment for an online service.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    /// The server-assigned ID, empty if the subscription has not been stored yet.
    pub id: RecordId,
    /// The name of the service.
    pub name: String,
    /// The URL of the service.
    pub site: String,
    /// The account the subscription is registered under, e.g. an email address.
    pub account: String,
    /// The price per renewal in whole dollars.
    pub price: i64,
    /// When the subscription next renews.
    pub next_renewal: OffsetDateTime,
    /// Free text, may be empty.
    pub note: String,
    /// When the server first stored the record.
    pub created_at: Option<OffsetDateTime>,
    /// When the server last changed the record.
    pub updated_at: Option<OffsetDateTime>,
}

impl Subscription {
    /// The whole days from `now` until the next renewal, negative once it
    /// has passed. Partial days are truncated toward zero.
    pub fn days_until_next(&self, now: OffsetDateTime) -> i64 {
        (self.next_renewal - now).whole_days()
    }

    pub fn status(&self, now: OffsetDateTime) -> RenewalStatus {
        RenewalStatus::from_days_until_next(self.days_until_next(now))
    }

    /// The time left until renewal, e.g. "12 days" or "Overdue by 3 days".
    pub fn remaining_days_text(&self, now: OffsetDateTime) -> String {
        let days = self.days_until_next(now);

        if days < 0 {
            format!("Overdue by {} days", days.unsigned_abs())
        } else {
            format!("{days} days")
        }
    }
}

impl Record for Subscription {
    const KIND: &'static str = "subscription";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn from_field_bag(bag: &FieldBag) -> Self {
        let now = OffsetDateTime::now_utc();

        Self {
            id: get_string(bag, ID_FIELD),
            name: get_string(bag, NAME_KEY),
            site: get_string(bag, SITE_KEY),
            account: get_string(bag, ACCOUNT_KEY),
            price: get_int(bag, PRICE_KEY),
            next_renewal: get_datetime(bag, NEXT_DATE_KEY, now),
            note: get_string(bag, NOTE_KEY),
            created_at: Some(get_datetime(bag, CREATED_AT_FIELD, now)),
            updated_at: Some(get_datetime(bag, UPDATED_AT_FIELD, now)),
        }
    }

    fn to_field_bag(&self) -> FieldBag {
        into_field_bag(json!({
            NAME_KEY: self.name,
            SITE_KEY: self.site,
            ACCOUNT_KEY: self.account,
            PRICE_KEY: self.price,
            NEXT_DATE_KEY: format_datetime(self.next_renewal),
            NOTE_KEY: self.note,
        }))
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.site.as_str(),
            self.account.as_str(),
        ]
    }

    /// Soonest renewal first.
    fn sort_for_display(records: &mut [Self]) {
        records.sort_by_key(|subscription| subscription.next_renewal);
    }
}

/// The state needed by the subscription pages.
#[derive(Debug, Clone)]
pub struct SubscriptionState {
    /// The collection that holds the subscriptions.
    pub collection: RecordCollection<Subscription>,
    /// The canonical name of the timezone used to display dates.
    pub local_timezone: String,
}

impl FromRef<AppState> for SubscriptionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            collection: state.collection(&state.collections.subscription),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
