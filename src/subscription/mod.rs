//! Subscriptions to online services and when they renew.

mod core;
mod create;
mod delete;
mod edit;
mod form;
mod list;

pub use core::{RenewalStatus, Subscription, SubscriptionState};
pub use create::{create_subscription_endpoint, get_new_subscription_page};
pub use delete::{delete_subscription_endpoint, get_delete_subscription_page};
pub use edit::{get_edit_subscription_page, update_subscription_endpoint};
pub use form::SubscriptionForm;
pub use list::get_subscriptions_page;
