//! # Text Cleaning
//!
//! Turns free-form HTML fragments from the feed into single-line CSV values.

use regex::Regex;
use serde_json::Value;

/// Flattens free text into a single CSV-safe line.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    markup: Regex,
    whitespace: Regex,
    control: Regex,
}

impl TextCleaner {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            markup: Regex::new(r"<[^>]+>")?,
            whitespace: Regex::new(r"[\s\x1c-\x1f]+")?,
            control: Regex::new(r"[\x00-\x1f\x7f-\x9f]")?,
        })
    }

    /// Strips markup, collapses whitespace, drops control characters, trims and
    /// doubles embedded quotes.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let text = self.markup.replace_all(text, " ");
        let text = self.whitespace.replace_all(&text, " ");
        let text = self.control.replace_all(&text, "");
        let text = self.whitespace.replace_all(&text, " ");
        text.trim().replace('"', "\"\"")
    }

    /// Cleans any JSON value. Falsy values (null, false, zero, empty) become `""`.
    pub fn clean_value(&self, value: &Value) -> String {
        if !is_truthy(value) {
            return String::new();
        }
        self.clean(&value_text(value))
    }
}

/// Renders a JSON value as plain text: strings unquoted, null empty, everything
/// else as its JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
