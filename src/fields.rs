//! Safe navigation through a loosely-shaped activity record.
//!
//! Paths are dotted keys with optional array indices, e.g.
//! `brief.proposedVenues[1]` or `meetingDetails.coffeeBreak.selected`.
//! Any segment that is missing, null, or of the wrong shape ends the walk
//! and the caller's placeholder is returned untouched.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Blank used for most date slots on the form.
pub const DATE_BLANK: &str = "______/______/______";

/// Resolve `path` against `root`. Returns `None` as soon as a key is absent,
/// an index is out of range, or an intermediate value is not a container.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cur = root;
    for segment in path.split('.') {
        let (key, indices) = match segment.find('[') {
            Some(i) => (&segment[..i], &segment[i..]),
            None => (segment, ""),
        };
        if !key.is_empty() {
            cur = cur.as_object()?.get(key)?;
        }
        for idx in indices.split('[').skip(1) {
            let n: usize = idx.strip_suffix(']')?.parse().ok()?;
            cur = cur.as_array()?.get(n)?;
        }
    }
    Some(cur)
}

/// Printable form of a leaf value. Empty strings, nulls and containers have
/// no printable form.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The field at `path` as text, or `placeholder` when it cannot be printed.
pub fn field_or(root: &Value, path: &str, placeholder: &str) -> String {
    lookup(root, path)
        .and_then(scalar_text)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Boolean field. Only a literal `true` counts; anything else, including
/// truthy strings and numbers, yields `default`.
pub fn field_or_bool(root: &Value, path: &str, default: bool) -> bool {
    match lookup(root, path) {
        Some(Value::Bool(b)) => *b,
        _ => default,
    }
}

/// Case-insensitive comparison of a string field with `expected`
/// (used for the yes/no radio pairs).
pub fn field_is(root: &Value, path: &str, expected: &str) -> bool {
    lookup(root, path)
        .and_then(Value::as_str)
        .is_some_and(|s| s.trim().eq_ignore_ascii_case(expected))
}

/// Date field rendered as `MM/DD/YYYY`, or `placeholder` when absent or
/// unparseable.
pub fn date_or(root: &Value, path: &str, placeholder: &str) -> String {
    lookup(root, path)
        .and_then(format_date)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Format a date value as `MM/DD/YYYY`.
///
/// Accepts RFC 3339 timestamps (the calendar date in the timestamp's own
/// offset is kept), naive `YYYY-MM-DDTHH:MM:SS[.fff]`, bare `YYYY-MM-DD`,
/// and integer epoch milliseconds.
pub fn format_date(value: &Value) -> Option<String> {
    let date = match value {
        Value::String(s) => parse_date(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }?;
    Some(date.format("%m/%d/%Y").to_string())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}
