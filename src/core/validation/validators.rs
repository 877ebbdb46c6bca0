//! Reusable field validators
//!
//! Each validator checks one property of one value and returns the supplied
//! message on failure. They know nothing about employees; the rule set in
//! [`super::employee`] decides which field gets which validator.

use chrono::NaiveDate;
use regex::Regex;
use validator::ValidateEmail;

/// Validator: text must contain something other than whitespace
pub fn not_blank(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validator: character count must be within `min..=max`
pub fn char_length(value: &str, min: usize, max: usize, message: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > max {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validator: text must contain the given character
pub fn contains_char(value: &str, needle: char, message: &str) -> Result<(), String> {
    if value.contains(needle) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validator: text must be a syntactically valid email address
pub fn email_address(value: &str, message: &str) -> Result<(), String> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validator: the whole text must match the pattern
pub fn matches_pattern(value: &str, pattern: &Regex, message: &str) -> Result<(), String> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validator: number must not be zero
pub fn non_zero(value: i32, message: &str) -> Result<(), String> {
    if value == 0 {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validator: number must be within `min..=max`
pub fn in_range(value: i32, min: i32, max: i32, message: &str) -> Result<(), String> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Validator: a value must be present
pub fn present<T>(value: Option<&T>, message: &str) -> Result<(), String> {
    match value {
        Some(_) => Ok(()),
        None => Err(message.to_string()),
    }
}

/// Validator: date must fall strictly before `limit`
///
/// An absent date passes; pair with [`present`] to require one.
pub fn date_before(value: Option<NaiveDate>, limit: NaiveDate, message: &str) -> Result<(), String> {
    match value {
        Some(date) if date >= limit => Err(message.to_string()),
        _ => Ok(()),
    }
}
