//! # Field Extraction Rules
//!
//! Small pure functions that turn one loosely-typed source field into its output
//! form. None of them fail: a value that cannot be interpreted degrades to the
//! field's sentinel.

use super::text::{is_truthy, value_text};
use crate::constants::{ENTRY_KEYWORDS, MID_KEYWORDS, NOT_SPECIFIED, SENIOR_KEYWORDS};
use crate::types::RawRecord;
use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::debug;

/// The outcome of coercing a loosely-typed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced<T> {
    /// Missing, null, zero or empty.
    Absent,
    Present(T),
    /// Present but not interpretable as `T`.
    Invalid,
}

/// Coerces an amount given as an integer, a float or a string of ASCII digits.
pub fn coerce_amount(value: Option<&Value>) -> Coerced<i64> {
    let Some(value) = value else {
        return Coerced::Absent;
    };
    if !is_truthy(value) {
        return Coerced::Absent;
    }
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Coerced::Present(i),
            (None, Some(f)) if f.is_finite() && f.abs() < i64::MAX as f64 => {
                Coerced::Present(f.trunc() as i64)
            }
            _ => Coerced::Invalid,
        },
        Value::String(s) if s.bytes().all(|b| b.is_ascii_digit()) => match s.parse::<i64>() {
            Ok(0) => Coerced::Absent,
            Ok(i) => Coerced::Present(i),
            Err(_) => Coerced::Invalid,
        },
        _ => Coerced::Invalid,
    }
}

/// Formats `salary_min`/`salary_max` as a display range.
pub fn parse_salary(job: &RawRecord) -> String {
    let min = coerce_amount(job.get("salary_min"));
    let max = coerce_amount(job.get("salary_max"));

    match (min, max) {
        (Coerced::Invalid, _) | (_, Coerced::Invalid) => {
            debug!(
                "Error parsing salary: min={:?} max={:?}",
                job.get("salary_min"),
                job.get("salary_max")
            );
            NOT_SPECIFIED.to_string()
        }
        (Coerced::Present(min), Coerced::Present(max)) => {
            format!("${} - ${}", format_thousands(min), format_thousands(max))
        }
        (Coerced::Present(min), Coerced::Absent) => format!("${}+", format_thousands(min)),
        (Coerced::Absent, Coerced::Present(max)) => format!("Up to ${}", format_thousands(max)),
        (Coerced::Absent, Coerced::Absent) => NOT_SPECIFIED.to_string(),
    }
}

/// Inserts comma thousands separators: `1234567` becomes `"1,234,567"`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Coerces a Unix timestamp given as an integer, a float or a numeric string.
pub fn coerce_timestamp(value: Option<&Value>) -> Option<i64> {
    let value = value.filter(|v| is_truthy(v))?;
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.floor() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Converts a Unix timestamp to a local `YYYY-MM-DD` date.
pub fn parse_date(value: Option<&Value>) -> String {
    coerce_timestamp(value)
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| {
            debug!("Error parsing date: {value:?}");
            NOT_SPECIFIED.to_string()
        })
}

/// Guesses the seniority of a listing from its description and tags.
///
/// Keyword groups are checked in the order senior, entry, mid; the first group
/// with any substring hit wins.
pub fn extract_experience_level(description: Option<&Value>, tags: Option<&Value>) -> String {
    let mut parts = vec![description.map(value_text).unwrap_or_default()];
    match tags {
        Some(Value::Array(items)) => parts.extend(items.iter().map(value_text)),
        Some(Value::String(s)) => parts.push(s.clone()),
        _ => {}
    }
    let text = parts.join(" ").to_lowercase();

    let level = if contains_any(&text, SENIOR_KEYWORDS) {
        "Senior"
    } else if contains_any(&text, ENTRY_KEYWORDS) {
        "Entry"
    } else if contains_any(&text, MID_KEYWORDS) {
        "Mid"
    } else {
        NOT_SPECIFIED
    };
    level.to_string()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Joins a tags list with `", "`. Returns `None` when the list holds anything
/// other than strings.
pub fn tags_to_string(tags: Option<&Value>) -> Option<String> {
    match tags {
        None => Some(String::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str())
            .collect::<Option<Vec<_>>>()
            .map(|tags| tags.join(", ")),
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) if is_truthy(other) => Some(value_text(other)),
        Some(_) => Some(String::new()),
    }
}

/// Renders a pass-through field without cleaning. Missing or null is `""`.
pub fn plain_text(value: Option<&Value>) -> String {
    value.map(value_text).unwrap_or_default()
}
