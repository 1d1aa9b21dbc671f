use std::sync::Arc;

use time::{OffsetDateTime, macros::datetime};

use crate::{
    AppState,
    bank::Bank,
    config::{AppwriteConfig, CollectionIds},
    food::Food,
    subscription::Subscription,
    test_utils::FakeDocumentStore,
};

pub(crate) const FOOD_COLLECTION: &str = "foods";
pub(crate) const SUBSCRIPTION_COLLECTION: &str = "subscriptions";
pub(crate) const BANK_COLLECTION: &str = "banks";

pub(crate) fn collection_ids() -> CollectionIds {
    CollectionIds {
        food: FOOD_COLLECTION.to_owned(),
        subscription: SUBSCRIPTION_COLLECTION.to_owned(),
        bank: BANK_COLLECTION.to_owned(),
    }
}

pub(crate) fn appwrite_config() -> AppwriteConfig {
    AppwriteConfig {
        endpoint: "https://appwrite.example.com/v1".to_owned(),
        project_id: "tally".to_owned(),
        database_id: "main".to_owned(),
        api_key: None,
    }
}

pub(crate) fn app_state(store: &Arc<FakeDocumentStore>) -> AppState {
    AppState::new(store.clone(), collection_ids(), "Etc/UTC")
        .expect("Could not create app state")
}

pub(crate) fn food(id: &str, name: &str, shop: &str) -> Food {
    Food {
        id: id.to_owned(),
        name: name.to_owned(),
        quantity: 1,
        unit_price: 10,
        shop: shop.to_owned(),
        purchased_at: datetime!(2025-07-01 0:00 UTC),
        photo: String::new(),
        photo_hash: String::new(),
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn subscription(id: &str, name: &str, next_renewal: OffsetDateTime) -> Subscription {
    Subscription {
        id: id.to_owned(),
        name: name.to_owned(),
        site: format!("https://{}.example.com", name.to_lowercase()),
        account: "me@example.com".to_owned(),
        price: 15,
        next_renewal,
        note: String::new(),
        created_at: None,
        updated_at: None,
    }
}

pub(crate) fn bank(id: &str, name: &str, account: &str) -> Bank {
    Bank {
        id: id.to_owned(),
        name: name.to_owned(),
        account: account.to_owned(),
        card: String::new(),
        site: String::new(),
        address: String::new(),
        activity: String::new(),
        deposit: 0,
        withdrawals: 0,
        transfer: 0,
        created_at: None,
        updated_at: None,
    }
}
