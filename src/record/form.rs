//! The shared parts of the create and edit forms.

use serde::Deserialize;
use time::{
    Date, Month, OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::record::Record;

const DATE_INPUT_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// The button used to submit a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    /// Validate the input and store the record.
    #[default]
    Save,
    /// Discard the input.
    Cancel,
}

/// The result of submitting a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome<R> {
    /// The input was valid and produced this record.
    Accepted(R),
    /// The user cancelled, nothing should be stored.
    Cancelled,
}

/// Why the input of a form was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A date field does not hold a valid date.
    #[error("{0} must be a valid date")]
    InvalidDate(&'static str),

    /// A number field holds something other than a whole number of zero or more.
    #[error("{0} must be a whole number of zero or more")]
    InvalidAmount(&'static str),
}

/// The input captured by the form for one kind of record.
pub trait EditForm: Sized {
    /// The kind of record this form produces.
    type Record: Record;

    /// Create the form, pre-filled from `existing` when editing or with
    /// defaults when creating.
    ///
    /// `now` should be in the user's local offset, it determines "today" for
    /// default dates.
    fn open(existing: Option<&Self::Record>, now: OffsetDateTime) -> Self;

    /// The button that submitted the form.
    fn action(&self) -> FormAction;

    /// Check the required fields and build the record with the ID `id`.
    ///
    /// Dates entered in the form are interpreted as midnight at `offset`.
    fn validate(&self, id: &str, offset: UtcOffset) -> Result<Self::Record, ValidationError>;

    /// Handle the submitted form.
    ///
    /// A cancelled form is never validated.
    fn submit(
        &self,
        id: &str,
        offset: UtcOffset,
    ) -> Result<FormOutcome<Self::Record>, ValidationError> {
        match self.action() {
            FormAction::Cancel => Ok(FormOutcome::Cancelled),
            FormAction::Save => self.validate(id, offset).map(FormOutcome::Accepted),
        }
    }
}

/// Return `text` trimmed, or an error naming `label` if it is blank.
pub fn require_text(text: &str, label: &'static str) -> Result<String, ValidationError> {
    let text = text.trim();

    if text.is_empty() {
        Err(ValidationError::MissingField(label))
    } else {
        Ok(text.to_owned())
    }
}

/// Parse the value of a date input (`YYYY-MM-DD`) as midnight at `offset`.
pub fn parse_date_input(
    text: &str,
    label: &'static str,
    offset: UtcOffset,
) -> Result<OffsetDateTime, ValidationError> {
    Date::parse(text.trim(), DATE_INPUT_FORMAT)
        .map(|date| date.midnight().assume_offset(offset))
        .map_err(|_| ValidationError::InvalidDate(label))
}

/// Format `date` as the value of a date input.
pub fn format_date_input(date: Date) -> String {
    date.format(DATE_INPUT_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse the value of a number input. A blank input is zero.
pub fn parse_amount(text: &str, label: &'static str) -> Result<i64, ValidationError> {
    let text = text.trim();

    if text.is_empty() {
        return Ok(0);
    }

    match text.parse::<i64>() {
        Ok(amount) if amount >= 0 => Ok(amount),
        _ => Err(ValidationError::InvalidAmount(label)),
    }
}

/// The same day in the following month, or the last day of that month if it
/// is shorter.
pub fn add_one_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        month => (date.year(), month.next()),
    };

    (1..=date.day())
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
        .unwrap_or(date)
}
