//! The food purchase record and how it is stored.

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
const AMOUNT_KEY: &str = "amount";
const PRICE_KEY: &str = "price";
const SHOP_KEY: &str = "shop";
const DATE_KEY: &str = "todate";
const PHOTO_KEY: &str = "photo";
const PHOTO_HASH_KEY: &str = "photohash";

/// A food purchase.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    /// The server-assigned ID, empty if the purchase has not been stored yet.
    pub id: RecordId,
    /// What was bought.
    pub name: String,
    /// How many units were bought.
    pub quantity: i64,
    /// The price of one unit in whole dollars.
    pub unit_price: i64,
    /// Where it was bought.
    pub shop: String,
    /// When it was bought.
    pub purchased_at: OffsetDateTime,
    /// A URL to a photo of the purchase, may be empty.
    pub photo: String,
    /// A hash of the photo file, may be empty.
    pub photo_hash: String,
    /// When the server first stored the record.
    pub created_at: Option<OffsetDateTime>,
    /// When the server last changed the record.
    pub updated_at: Option<OffsetDateTime>,
}

impl Food {
    /// The price of all units, computed on every call.
    pub fn total_price(&self) -> i64 {
        self.quantity.saturating_mul(self.unit_price)
    }
}

impl Record for Food {
    const KIND: &'static str = "food";

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
            quantity: get_int(bag, AMOUNT_KEY),
            unit_price: get_int(bag, PRICE_KEY),
            shop: get_string(bag, SHOP_KEY),
            purchased_at: get_datetime(bag, DATE_KEY, now),
            photo: get_string(bag, PHOTO_KEY),
            photo_hash: get_string(bag, PHOTO_HASH_KEY),
            created_at: Some(get_datetime(bag, CREATED_AT_FIELD, now)),
            updated_at: Some(get_datetime(bag, UPDATED_AT_FIELD, now)),
        }
    }

    fn to_field_bag(&self) -> FieldBag {
        into_field_bag(json!({
            NAME_KEY: self.name,
            AMOUNT_KEY: self.quantity,
            PRICE_KEY: self.unit_price,
            SHOP_KEY: self.shop,
            DATE_KEY: format_datetime(self.purchased_at),
            PHOTO_KEY: self.photo,
            PHOTO_HASH_KEY: self.photo_hash,
        }))
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.shop.as_str()]
    }
}

/// The state needed by the food pages.
#[derive(Debug, Clone)]
pub struct FoodState {
    /// The collection that holds the food purchases.
    pub collection: RecordCollection<Food>,
    /// The canonical name of the timezone used to display dates.
    pub local_timezone: String,
}

impl FromRef<AppState> for FoodState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            collection: state.collection(&state.collections.food),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
