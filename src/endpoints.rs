//! The endpoint URIs of the app.
//!
//! For endpoints that take a parameter, e.g. '/foods/{food_id}/edit', use [format_endpoint].

/// The root route which redirects to the food list.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The page listing food purchases.
pub const FOODS_VIEW: &str = "/foods";
/// The page for recording a new food purchase.
pub const NEW_FOOD_VIEW: &str = "/foods/new";
/// The page for editing a food purchase.
pub const EDIT_FOOD_VIEW: &str = "/foods/{food_id}/edit";
/// The page for confirming the deletion of a food purchase.
pub const DELETE_FOOD_VIEW: &str = "/foods/{food_id}/delete";
/// The route to create a food purchase.
pub const POST_FOOD: &str = "/api/foods";
/// The route to update a food purchase.
pub const PUT_FOOD: &str = "/api/foods/{food_id}";
/// The route to delete a food purchase.
pub const DELETE_FOOD: &str = "/api/foods/{food_id}";

/// The page listing subscriptions.
pub const SUBSCRIPTIONS_VIEW: &str = "/subscriptions";
/// The page for adding a subscription.
pub const NEW_SUBSCRIPTION_VIEW: &str = "/subscriptions/new";
/// The page for editing a subscription.
pub const EDIT_SUBSCRIPTION_VIEW: &str = "/subscriptions/{subscription_id}/edit";
/// The page for confirming the deletion of a subscription.
pub const DELETE_SUBSCRIPTION_VIEW: &str = "/subscriptions/{subscription_id}/delete";
/// The route to create a subscription.
pub const POST_SUBSCRIPTION: &str = "/api/subscriptions";
/// The route to update a subscription.
pub const PUT_SUBSCRIPTION: &str = "/api/subscriptions/{subscription_id}";
/// The route to delete a subscription.
pub const DELETE_SUBSCRIPTION: &str = "/api/subscriptions/{subscription_id}";

/// The page listing bank accounts and their statistics.
pub const BANKS_VIEW: &str = "/banks";
/// The page for adding a bank account.
pub const NEW_BANK_VIEW: &str = "/banks/new";
/// The page for editing a bank account.
pub const EDIT_BANK_VIEW: &str = "/banks/{bank_id}/edit";
/// The page for confirming the deletion of a bank account.
pub const DELETE_BANK_VIEW: &str = "/banks/{bank_id}/delete";
/// The route to create a bank account.
pub const POST_BANK: &str = "/api/banks";
/// The route to update a bank account.
pub const PUT_BANK: &str = "/api/banks/{bank_id}";
/// The route to delete a bank account.
pub const DELETE_BANK: &str = "/api/banks/{bank_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with a right brace, e.g.
/// '{food_id}' in '/foods/{food_id}/edit'. Only the first parameter is
/// replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |offset| param_start + offset + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
