// SPDX-License-Identifier: GPL-3.0

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Optional sign, digits with an optional fraction, optional exponent.
static DECIMAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?").expect("Valid regex")
});

/// Returns whether the string starts with a finite number, after any leading whitespace.
///
/// Only the longest leading decimal is read, so `"3.14px"` is numeric while `"Infinity"`
/// and `"abc"` are not.
///
/// # Arguments
/// * `value` - The string to check.
pub fn is_numeric(value: &str) -> bool {
	DECIMAL_PREFIX
		.find(value.trim_start())
		.is_some_and(|prefix| prefix.as_str().parse::<f64>().is_ok_and(f64::is_finite))
}

/// Returns whether the string is non-empty and only contains ASCII letters and digits.
///
/// # Arguments
/// * `value` - The string to check.
pub fn is_alpha_numeric(value: &str) -> bool {
	!value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Returns whether a value is missing or blank: absent, `null`, an empty string, an empty
/// array or an empty object.
///
/// Numbers and booleans are never blank, including `0` and `false`.
///
/// # Arguments
/// * `value` - The value to check, `None` when absent.
pub fn is_null_empty_or_undefined(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => true,
		Some(Value::String(text)) => text.is_empty(),
		Some(Value::Array(items)) => items.is_empty(),
		Some(Value::Object(entries)) => entries.is_empty(),
		Some(Value::Bool(_) | Value::Number(_)) => false,
	}
}
