use maud::{Markup, html};
use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};

use crate::{
    food::Food,
    html::{FormEndpoint, amount_input, form_buttons, form_error_message, hx_form, labelled_input},
    record::{
        EditForm, FormAction, ValidationError, format_date_input, parse_amount, parse_date_input,
        require_text,
    },
};

/// The input of the create and edit food forms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FoodForm {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub shop: String,
    /// The purchase date as `YYYY-MM-DD`.
    pub purchased_on: String,
    pub photo: String,
    pub photo_hash: String,
    pub action: FormAction,
}

impl EditForm for FoodForm {
    type Record = Food;

    fn open(existing: Option<&Food>, now: OffsetDateTime) -> Self {
        match existing {
            Some(food) => Self {
                name: food.name.clone(),
                quantity: food.quantity.to_string(),
                unit_price: food.unit_price.to_string(),
                shop: food.shop.clone(),
                purchased_on: format_date_input(food.purchased_at.to_offset(now.offset()).date()),
                photo: food.photo.clone(),
                photo_hash: food.photo_hash.clone(),
                action: FormAction::Save,
            },
            None => Self {
                quantity: "1".to_owned(),
                unit_price: "0".to_owned(),
                purchased_on: format_date_input(now.date()),
                ..Default::default()
            },
        }
    }

    fn action(&self) -> FormAction {
        self.action
    }

    fn validate(&self, id: &str, offset: UtcOffset) -> Result<Food, ValidationError> {
        let name = require_text(&self.name, "Name")?;
        let shop = require_text(&self.shop, "Shop")?;
        let purchased_at = parse_date_input(&self.purchased_on, "Date", offset)?;
        let quantity = if self.quantity.trim().is_empty() {
            1
        } else {
            parse_amount(&self.quantity, "Quantity")?
        };
        let unit_price = parse_amount(&self.unit_price, "Price")?;

        Ok(Food {
            id: id.to_owned(),
            name,
            quantity,
            unit_price,
            shop,
            purchased_at,
            photo: self.photo.trim().to_owned(),
            photo_hash: self.photo_hash.trim().to_owned(),
            created_at: None,
            updated_at: None,
        })
    }
}

pub(super) fn food_form_view(
    form: &FoodForm,
    endpoint: &FormEndpoint,
    submit_text: &str,
    error_message: &str,
) -> Markup {
    let quantity = form.quantity.trim().parse().unwrap_or(1);
    let unit_price = form.unit_price.trim().parse().unwrap_or(0);

    let fields = html! {
        (labelled_input("name", "Name", "text", &form.name, true))
        (labelled_input("shop", "Shop", "text", &form.shop, true))
        (amount_input("quantity", "Quantity", quantity, false))
        (amount_input("unit_price", "Unit Price", unit_price, true))
        (labelled_input("purchased_on", "Date", "date", &form.purchased_on, true))
        (labelled_input("photo", "Photo URL", "text", &form.photo, false))
        (labelled_input("photo_hash", "Photo Hash", "text", &form.photo_hash, false))
        (form_error_message(error_message))
        (form_buttons(submit_text))
    };

    hx_form(endpoint, &fields)
}

#[cfg(test)]
mod food_form_tests {
    use time::{UtcOffset, macros::datetime};

    use crate::{
        food::{Food, FoodForm},
        record::{EditForm, FormAction, FormOutcome, ValidationError},
        test_utils::food,
    };

    fn valid_form() -> FoodForm {
        FoodForm {
            name: "Milk".to_owned(),
            quantity: "2".to_owned(),
            unit_price: "45".to_owned(),
            shop: "Store".to_owned(),
            purchased_on: "2025-07-01".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn new_form_has_defaults() {
        let form = FoodForm::open(None, datetime!(2025-07-05 13:30 +8));

        assert_eq!(form.quantity, "1");
        assert_eq!(form.purchased_on, "2025-07-05");
        assert_eq!(form.name, "");
    }

    #[test]
    fn edit_form_is_prefilled() {
        let mut existing = food("abc123", "Milk", "Corner Shop");
        existing.purchased_at = datetime!(2025-06-30 20:00 UTC);

        let form = FoodForm::open(Some(&existing), datetime!(2025-07-05 13:30 +8));

        assert_eq!(form.name, "Milk");
        assert_eq!(form.shop, "Corner Shop");
        assert_eq!(form.quantity, existing.quantity.to_string());
        // 20:00 UTC is the next morning at +8.
        assert_eq!(form.purchased_on, "2025-07-01");
    }

    #[test]
    fn rejects_empty_shop() {
        let form = FoodForm {
            shop: " ".to_owned(),
            ..valid_form()
        };

        assert_eq!(
            form.submit("", UtcOffset::UTC),
            Err(ValidationError::MissingField("Shop"))
        );
    }

    #[test]
    fn rejects_missing_name_and_date() {
        let no_name = FoodForm {
            name: String::new(),
            ..valid_form()
        };
        let no_date = FoodForm {
            purchased_on: String::new(),
            ..valid_form()
        };

        assert_eq!(
            no_name.submit("", UtcOffset::UTC),
            Err(ValidationError::MissingField("Name"))
        );
        assert_eq!(
            no_date.submit("", UtcOffset::UTC),
            Err(ValidationError::InvalidDate("Date"))
        );
    }

    #[test]
    fn accepted_edit_keeps_id() {
        let got = valid_form().submit("abc123", UtcOffset::UTC);

        assert_eq!(
            got,
            Ok(FormOutcome::Accepted(Food {
                id: "abc123".to_owned(),
                name: "Milk".to_owned(),
                quantity: 2,
                unit_price: 45,
                shop: "Store".to_owned(),
                purchased_at: datetime!(2025-07-01 0:00 UTC),
                photo: String::new(),
                photo_hash: String::new(),
                created_at: None,
                updated_at: None,
            }))
        );
    }

    #[test]
    fn cancel_skips_validation() {
        let form = FoodForm {
            action: FormAction::Cancel,
            ..Default::default()
        };

        assert_eq!(form.submit("", UtcOffset::UTC), Ok(FormOutcome::Cancelled));
    }
}
