//! Bank accounts, their balances and a summary across accounts.

mod core;
mod create;
mod delete;
mod edit;
mod form;
mod list;
mod statistics;

pub use core::{Bank, BankState};
pub use create::{create_bank_endpoint, get_new_bank_page};
pub use delete::{delete_bank_endpoint, get_delete_bank_page};
pub use edit::{get_edit_bank_page, update_bank_endpoint};
pub use form::BankForm;
pub use list::get_banks_page;
pub use statistics::BankStatistics;
