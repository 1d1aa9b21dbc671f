//! The bank account record and how it is stored.

use axum::extract::FromRef;
use serde_json::json;
use time::OffsetDateTime;

use crate::{
    AppState,
    record::{
        CREATED_AT_FIELD, FieldBag, ID_FIELD, Record, RecordCollection, RecordId,
        UPDATED_AT_FIELD, get_datetime, get_int, get_string, into_field_bag,
    },
};

const NAME_KEY: &str = "name";
const ACCOUNT_KEY: &str = "account";
const CARD_KEY: &str = "card";
const SITE_KEY: &str = "site";
const ADDRESS_KEY: &str = "address";
const ACTIVITY_KEY: &str = "activity";
const DEPOSIT_KEY: &str = "deposit";
const WITHDRAWALS_KEY: &str = "withdrawals";
const TRANSFER_KEY: &str = "transfer";

/// A bank account and the money that has moved through it.
///
/// Amounts are whole dollars as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    /// The server-assigned ID, empty if the account has not been stored yet.
    pub id: RecordId,
    /// The name of the bank.
    pub name: String,
    /// The account number.
    pub account: String,
    /// The card number linked to the account.
    pub card: String,
    /// The URL of the bank's online banking site.
    pub site: String,
    /// The address of the branch.
    pub address: String,
    /// A link to the bank's current promotions or activities.
    pub activity: String,
    /// The money paid into the account.
    pub deposit: i64,
    /// The money taken out of the account.
    pub withdrawals: i64,
    /// The money moved to other accounts.
    pub transfer: i64,
    /// When the server first stored the record.
    pub created_at: Option<OffsetDateTime>,
    /// When the server last changed the record.
    pub updated_at: Option<OffsetDateTime>,
}

impl Bank {
    /// The deposit less withdrawals and transfers, may be negative.
    pub fn net_balance(&self) -> i64 {
        self.deposit
            .saturating_sub(self.withdrawals)
            .saturating_sub(self.transfer)
    }

    /// The money that left the account.
    pub fn total_expenditure(&self) -> i64 {
        self.withdrawals.saturating_add(self.transfer)
    }
}

impl Record for Bank {
    const KIND: &'static str = "bank";

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
            account: get_string(bag, ACCOUNT_KEY),
            card: get_string(bag, CARD_KEY),
            site: get_string(bag, SITE_KEY),
            address: get_string(bag, ADDRESS_KEY),
            activity: get_string(bag, ACTIVITY_KEY),
            deposit: get_int(bag, DEPOSIT_KEY),
            withdrawals: get_int(bag, WITHDRAWALS_KEY),
            transfer: get_int(bag, TRANSFER_KEY),
            created_at: Some(get_datetime(bag, CREATED_AT_FIELD, now)),
            updated_at: Some(get_datetime(bag, UPDATED_AT_FIELD, now)),
        }
    }

    fn to_field_bag(&self) -> FieldBag {
        into_field_bag(json!({
            NAME_KEY: self.name,
            ACCOUNT_KEY: self.account,
            CARD_KEY: self.card,
            SITE_KEY: self.site,
            ADDRESS_KEY: self.address,
            ACTIVITY_KEY: self.activity,
            DEPOSIT_KEY: self.deposit,
            WITHDRAWALS_KEY: self.withdrawals,
            TRANSFER_KEY: self.transfer,
        }))
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.account.as_str(),
            self.card.as_str(),
        ]
    }
}

/// The state needed by the bank pages.
#[derive(Debug, Clone)]
pub struct BankState {
    /// The collection that holds the bank accounts.
    pub collection: RecordCollection<Bank>,
    /// The canonical name of the timezone used to display dates.
    pub local_timezone: String,
}

impl FromRef<AppState> for BankState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            collection: state.collection(&state.collections.bank),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
