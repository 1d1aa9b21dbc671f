//! Typed access to the untyped documents returned by the record store.
//!
//! Every getter is total: a missing, null or malformed value is replaced with
//! a default instead of failing the whole conversion.

use serde_json::{Map, Value};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};

/// An untyped key-value map representing one stored document.
pub type FieldBag = Map<String, Value>;

/// The key of the server-assigned document ID.
pub const ID_FIELD: &str = "$id";
/// The key of the server-populated creation timestamp.
pub const CREATED_AT_FIELD: &str = "$createdAt";
/// The key of the server-populated update timestamp.
pub const UPDATED_AT_FIELD: &str = "$updatedAt";

const DATE_ONLY_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// Convert a JSON object into a field bag, anything else yields an empty bag.
pub fn into_field_bag(value: Value) -> FieldBag {
    match value {
        Value::Object(map) => map,
        _ => FieldBag::new(),
    }
}

/// Get the text stored under `key`, or an empty string if it is missing or null.
///
/// Non-string values are rendered as their JSON text, e.g. `12` becomes "12".
pub fn get_string(bag: &FieldBag, key: &str) -> String {
    match bag.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Get the whole number stored under `key`, or 0 if it is missing or null.
///
/// Integers, floats (rounded half away from zero), numeric strings and
/// booleans (true = 1) are accepted. Values that cannot be converted are
/// logged and treated as 0.
pub fn get_int(bag: &FieldBag, key: &str) -> i64 {
    match bag.get(key) {
        None | Some(Value::Null) => 0,
        Some(value) => value_to_int(value).unwrap_or_else(|| {
            tracing::warn!("field \"{key}\" holds {value}, which is not a whole number, using 0");
            0
        }),
    }
}

/// Get the date-time stored under `key`, written as an RFC 3339 string.
///
/// A plain `YYYY-MM-DD` date is read as midnight UTC. A missing or unparsable
/// value falls back to `fallback`, which callers set to the current time.
pub fn get_datetime(bag: &FieldBag, key: &str, fallback: OffsetDateTime) -> OffsetDateTime {
    match bag.get(key) {
        Some(Value::String(text)) => parse_datetime(text).unwrap_or_else(|| {
            tracing::warn!("field \"{key}\" holds \"{text}\", which is not a valid date, using {fallback}");
            fallback
        }),
        _ => fallback,
    }
}

/// Format `datetime` the way the record store expects dates to be written.
pub fn format_datetime(datetime: OffsetDateTime) -> String {
    datetime
        .format(&Rfc3339)
        .unwrap_or_else(|_| datetime.to_string())
}

fn parse_datetime(text: &str) -> Option<OffsetDateTime> {
    let text = text.trim();

    OffsetDateTime::parse(text, &Rfc3339).ok().or_else(|| {
        Date::parse(text, DATE_ONLY_FORMAT)
            .ok()
            .map(|date| date.midnight().assume_utc())
    })
}

fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(float_to_int)),
        Value::String(text) => {
            let text = text.trim();

            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(float_to_int))
        }
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn float_to_int(number: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, so the comparison must be strict.
    if number.is_finite() && number.abs() < i64::MAX as f64 {
        Some(number.round() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod get_string_tests {
    use serde_json::json;

    use super::{get_string, into_field_bag};

    #[test]
    fn returns_text() {
        let bag = into_field_bag(json!({ "name": "Milk" }));

        assert_eq!(get_string(&bag, "name"), "Milk");
    }

    #[test]
    fn missing_and_null_are_empty() {
        let bag = into_field_bag(json!({ "note": null }));

        assert_eq!(get_string(&bag, "note"), "");
        assert_eq!(get_string(&bag, "site"), "");
    }

    #[test]
    fn numbers_are_rendered_as_text() {
        let bag = into_field_bag(json!({ "account": 1234 }));

        assert_eq!(get_string(&bag, "account"), "1234");
    }
}

#[cfg(test)]
mod get_int_tests {
    use serde_json::json;

    use super::{get_int, into_field_bag};

    #[test]
    fn accepts_convertible_values() {
        let bag = into_field_bag(json!({
            "integer": 42,
            "float": 2.5,
            "negative_float": -2.5,
            "string": " 17 ",
            "float_string": "3.7",
            "flag": true,
        }));

        assert_eq!(get_int(&bag, "integer"), 42);
        assert_eq!(get_int(&bag, "float"), 3);
        assert_eq!(get_int(&bag, "negative_float"), -3);
        assert_eq!(get_int(&bag, "string"), 17);
        assert_eq!(get_int(&bag, "float_string"), 4);
        assert_eq!(get_int(&bag, "flag"), 1);
    }

    #[test]
    fn falls_back_to_zero() {
        let bag = into_field_bag(json!({
            "null": null,
            "text": "twelve",
            "list": [1, 2],
            "huge": 1e300,
        }));

        assert_eq!(get_int(&bag, "missing"), 0);
        assert_eq!(get_int(&bag, "null"), 0);
        assert_eq!(get_int(&bag, "text"), 0);
        assert_eq!(get_int(&bag, "list"), 0);
        assert_eq!(get_int(&bag, "huge"), 0);
    }
}

#[cfg(test)]
mod datetime_tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::{format_datetime, get_datetime, into_field_bag};

    #[test]
    fn parses_store_timestamps() {
        let bag = into_field_bag(json!({
            "with_millis": "2025-07-05T10:30:00.000+00:00",
            "with_offset": "2025-07-05T08:00:00+08:00",
            "date_only": "2025-07-05",
        }));
        let fallback = datetime!(2000-01-01 0:00 UTC);

        assert_eq!(
            get_datetime(&bag, "with_millis", fallback),
            datetime!(2025-07-05 10:30 UTC)
        );
        assert_eq!(
            get_datetime(&bag, "with_offset", fallback),
            datetime!(2025-07-05 0:00 UTC)
        );
        assert_eq!(
            get_datetime(&bag, "date_only", fallback),
            datetime!(2025-07-05 0:00 UTC)
        );
    }

    #[test]
    fn invalid_or_missing_dates_use_fallback() {
        let bag = into_field_bag(json!({ "garbage": "next tuesday", "number": 5 }));
        let fallback = datetime!(2000-01-01 0:00 UTC);

        assert_eq!(get_datetime(&bag, "garbage", fallback), fallback);
        assert_eq!(get_datetime(&bag, "number", fallback), fallback);
        assert_eq!(get_datetime(&bag, "missing", fallback), fallback);
    }

    #[test]
    fn formatted_dates_parse_back() {
        let want = datetime!(2025-12-31 23:59:59 +8);
        let bag = into_field_bag(json!({ "date": format_datetime(want) }));

        let fallback = datetime!(2000-01-01 0:00 UTC);

        assert_eq!(get_datetime(&bag, "date", fallback), want);
    }
}
