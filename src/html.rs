use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::navigation::NavBar;

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 disabled:bg-blue-700 hover:enabled:bg-blue-600 \
    hover:enabled:dark:bg-blue-700 text-white rounded";

pub const BUTTON_SECONDARY_STYLE: &str = "block w-full py-2 px-4 text-center \
    text-sm font-medium text-gray-900 bg-white rounded border border-gray-200 \
    hover:bg-gray-100 hover:text-blue-700 focus:z-10 dark:bg-gray-800 \
    dark:text-gray-400 dark:border-gray-600 dark:hover:text-white \
    dark:hover:bg-gray-700";

pub const BUTTON_DANGER_STYLE: &str = "w-full px-4 py-2 bg-red-600 \
    hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-800 text-white rounded";

pub const BUTTON_DELETE_STYLE: &str = "text-red-600 hover:text-red-500 \
    dark:text-red-500 dark:hover:text-red-400 underline bg-transparent \
    border-none cursor-pointer";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "flex flex-col items-center px-6 py-8 \
    mx-auto lg:py-0 max-w-md text-gray-900 dark:text-white";
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white disabled:text-gray-500 bg-gray-50 \
    dark:bg-gray-700 border border-gray-300 dark:border-gray-600 \
    dark:placeholder-gray-400 focus:ring-blue-600 focus:border-blue-600 \
    focus:dark:border-blue-500 focus:dark:ring-blue-500";

// Card styles
pub const CARD_STYLE: &str = "rounded border border-gray-200 bg-white px-4 py-3 \
    shadow-sm dark:border-gray-700 dark:bg-gray-800";
pub const CARD_LABEL_STYLE: &str = "text-gray-500 dark:text-gray-400";
pub const EMPTY_LIST_STYLE: &str = "rounded border border-dashed border-gray-300 \
    bg-white px-4 py-6 text-center text-sm text-gray-500 dark:border-gray-700 \
    dark:bg-gray-800 dark:text-gray-400";

// Badge styles
pub const BADGE_OVERDUE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-red-800 bg-red-100 rounded-full \
    dark:bg-red-900 dark:text-red-300";
pub const BADGE_DUE_SOON_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold text-yellow-800 bg-yellow-100 rounded-full \
    dark:bg-yellow-900 dark:text-yellow-300";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center px-6 py-8 mx-auto lg:py-5 text-gray-900 dark:text-white";

pub enum HeadElement {
    Style(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Tally" }
                link rel="icon" type="image/png" href="/static/favicon-32x32.png" sizes="32x32";
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 pb-[calc(5rem+env(safe-area-inset-bottom))] lg:pb-0"
            {
                (content)

                // Error alerts from htmx requests are swapped in here.
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// Returns the CSS styles for adding a dollar sign prefix to number inputs.
pub fn dollar_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
            display: block;
        }
        .input-wrapper input[type="number"] {
            padding-left: 1.4rem;
        }
        .input-wrapper::before {
            content: '$';
            position: absolute;
            left: 0.6rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}

/// Format a whole-dollar amount with thousands separators, e.g. "-$1,234".
pub fn format_amount(amount: i64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    match amount {
        0 => "$0".to_owned(),
        amount if amount < 0 => negative_fmt.fmt_string(amount.unsigned_abs() as f64),
        amount => positive_fmt.fmt_string(amount as f64),
    }
}

/// A link with blue text that opens in a new tab.
pub fn external_link(url: &str, text: &str) -> Markup {
    html! (
        a
            href=(url)
            target="_blank"
            rel="noopener noreferrer"
            class=(LINK_STYLE)
        {
          (text)
        }
    )
}

/// A labelled form input, `input_type` is the HTML input type, e.g. "date".
pub fn labelled_input(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    required: bool,
) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                id=(name)
                type=(input_type)
                name=(name)
                placeholder=(label)
                value=(value)
                required[required]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// A labelled input for whole numbers of zero or more.
///
/// Currency inputs are prefixed with a dollar sign, which requires
/// [dollar_input_styles] in the page head.
pub fn amount_input(name: &str, label: &str, value: i64, is_currency: bool) -> Markup {
    let input = html! {
        input
            id=(name)
            type="number"
            name=(name)
            min="0"
            step="1"
            value=(value)
            class=(FORM_TEXT_INPUT_STYLE);
    };

    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            @if is_currency {
                div class="input-wrapper" { (input) }
            } @else {
                (input)
            }
        }
    }
}

/// Where a create or edit form is submitted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEndpoint {
    /// Create a record with a POST request.
    Post(String),
    /// Update a record with a PUT request.
    Put(String),
}

/// A form submitted by htmx.
///
/// A rejected form is swapped for the form in the response and request
/// errors are shown in the alert container.
pub fn hx_form(endpoint: &FormEndpoint, fields: &Markup) -> Markup {
    match endpoint {
        FormEndpoint::Post(url) => html! {
            form
                hx-post=(url)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                (fields)
            }
        },
        FormEndpoint::Put(url) => html! {
            form
                hx-put=(url)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                (fields)
            }
        },
    }
}

/// A page holding a single create or edit form.
///
/// `list_endpoint` is the list page the form belongs to, it is highlighted in
/// the navigation bar.
pub fn form_page(title: &str, list_endpoint: &str, form: &Markup) -> Markup {
    let nav_bar = NavBar::new(list_endpoint).into_html();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="w-full mb-4 text-xl font-bold" { (title) }

            (form)
        }
    };

    base(title, &[dollar_input_styles()], &content)
}

/// The message shown at the bottom of a form when its input is rejected.
pub fn form_error_message(error_message: &str) -> Markup {
    html! {
        @if !error_message.is_empty() {
            p class="text-red-600 dark:text-red-400" { (error_message) }
        }
    }
}

/// The save and cancel buttons of a form.
///
/// The cancel button skips browser validation and submits `action=cancel`.
pub fn form_buttons(submit_text: &str) -> Markup {
    html! {
        div class="flex gap-4"
        {
            button type="submit" name="action" value="save" class=(BUTTON_PRIMARY_STYLE)
            {
                (submit_text)
            }

            button
                type="submit"
                name="action"
                value="cancel"
                formnovalidate
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Cancel"
            }
        }
    }
}

/// The heading, search input and record list of a list page.
pub struct ListPage<'a> {
    pub title: &'a str,
    /// The URL of this page, the search input requests it with `?q=`.
    pub list_endpoint: &'a str,
    pub new_endpoint: &'a str,
    pub new_link_text: &'a str,
    pub search_term: &'a str,
    pub search_placeholder: &'a str,
    /// The ID of the element in `list` that is replaced by search results.
    pub list_id: &'a str,
}

impl ListPage<'_> {
    pub fn into_html(self, list: &Markup) -> Markup {
        let nav_bar = NavBar::new(self.list_endpoint).into_html();
        let target = format!("#{}", self.list_id);

        let content = html! {
            (nav_bar)

            main class=(PAGE_CONTAINER_STYLE)
            {
                section class="w-full max-w-md lg:max-w-3xl space-y-4"
                {
                    header class="flex justify-between flex-wrap items-end"
                    {
                        h1 class="text-xl font-bold" { (self.title) }

                        a href=(self.new_endpoint) class=(LINK_STYLE)
                        {
                            (self.new_link_text)
                        }
                    }

                    input
                        type="search"
                        name="q"
                        value=(self.search_term)
                        placeholder=(self.search_placeholder)
                        aria-label=(self.search_placeholder)
                        hx-get=(self.list_endpoint)
                        hx-trigger="input changed delay:300ms, search"
                        hx-select=(target)
                        hx-target=(target)
                        hx-swap="outerHTML"
                        hx-target-error="#alert-container"
                        class=(FORM_TEXT_INPUT_STYLE);

                    (list)
                }
            }
        };

        base(self.title, &[], &content)
    }
}

/// A list of record cards.
///
/// If there are no cards, an empty list links to the create page and a search
/// with no matches says so. `record_plural` names the records in lowercase,
/// e.g. "banks".
pub fn card_list(
    cards: &[Markup],
    record_plural: &str,
    search_term: &str,
    new_endpoint: &str,
) -> Markup {
    let search_term = search_term.trim();

    html! {
        ul class="space-y-4"
        {
            @for card in cards {
                li class=(CARD_STYLE) data-record-card="true" { (card) }
            }

            @if cards.is_empty() {
                li class=(EMPTY_LIST_STYLE)
                {
                    @if search_term.is_empty() {
                        "No " (record_plural) " yet. "
                        a href=(new_endpoint) class=(LINK_STYLE) { "Add one" }
                    } @else {
                        "No " (record_plural) " match \"" (search_term) "\"."
                    }
                }
            }
        }
    }
}

/// A labelled value on a record card.
pub fn card_field(label: &str, value: &Markup) -> Markup {
    html! {
        div class="flex justify-between gap-3 text-sm"
        {
            span class=(CARD_LABEL_STYLE) { (label) }
            span class="text-right tabular-nums text-gray-900 dark:text-white" { (value) }
        }
    }
}

/// The edit and delete links at the bottom of a record card.
pub fn edit_delete_links(edit_url: &str, delete_url: &str) -> Markup {
    html! {
        div class="mt-2 flex items-center gap-4 text-sm"
        {
            a href=(edit_url) class=(LINK_STYLE) { "Edit" }
            a href=(delete_url) class=(BUTTON_DELETE_STYLE) { "Delete" }
        }
    }
}
