//! The page that asks the user to confirm a delete.

use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    html::{BUTTON_DANGER_STYLE, BUTTON_SECONDARY_STYLE, FORM_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// The query string of a delete request.
///
/// A delete only goes ahead when `confirm=true` is given explicitly.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    /// Whether the user confirmed the delete.
    #[serde(default)]
    pub confirm: bool,
}

/// A confirmation prompt for deleting one record.
pub struct DeleteConfirmation<'a> {
    /// The kind of record in title case, e.g. "Subscription".
    pub record_kind: &'a str,
    /// The display name of the record.
    pub label: &'a str,
    /// The endpoint that deletes the record.
    pub delete_endpoint: &'a str,
    /// The list page to return to on cancel.
    pub list_endpoint: &'a str,
}

impl DeleteConfirmation<'_> {
    /// The question shown to the user.
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete '{}'? This cannot be undone.",
            self.label
        )
    }

    /// Render the confirmation page.
    pub fn into_html(self) -> Markup {
        let nav_bar = NavBar::new(self.list_endpoint).into_html();
        let confirm_url = format!("{}?confirm=true", self.delete_endpoint);
        let title = format!("Delete {}", self.record_kind);

        let content = html! {
            (nav_bar)

            div class=(FORM_CONTAINER_STYLE)
            {
                section class="w-full space-y-4 md:space-y-6"
                {
                    h1 class="text-xl font-bold" { (title) }

                    p { (self.prompt()) }

                    div class="flex gap-4"
                    {
                        button
                            type="button"
                            hx-delete=(confirm_url)
                            hx-target-error="#alert-container"
                            class=(BUTTON_DANGER_STYLE)
                        {
                            "Delete"
                        }

                        a href=(self.list_endpoint) class=(BUTTON_SECONDARY_STYLE)
                        {
                            "Cancel"
                        }
                    }
                }
            }
        };

        base(&title, &[], &content)
    }
}
