//! Client-side validation of collected form values.
//!
//! The renderer runs [`validate_form`] before handing values to the
//! submission handler. Rules are derived from each field's `required` flag and
//! its [`FieldType`]; blank optional fields always pass.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{FieldType, FormConfig, FormField};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?([a-z0-9]([a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(:\d{1,5})?(/\S*)?$")
        .expect("url pattern")
});

const MIN_PHONE_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a valid website address")]
    InvalidUrl,
    #[error("Please choose one of the listed options")]
    InvalidOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {kind}")]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

/// Values keyed by field name, in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    /// One empty entry per field of `config`.
    pub fn for_config(config: &FormConfig) -> Self {
        Self(
            config
                .fields
                .iter()
                .map(|f| (f.name.to_string(), String::new()))
                .collect(),
        )
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Missing entries read as empty.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy with surrounding whitespace removed from every value.
    pub fn trimmed(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), v.trim().to_string()))
                .collect(),
        )
    }
}

pub fn validate_field(field: &FormField, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let fail = |kind| Err(FieldError { field: field.name, kind });

    if value.is_empty() {
        return if field.required { fail(FieldErrorKind::Required) } else { Ok(()) };
    }

    match field.field_type {
        FieldType::Email if !EMAIL_RE.is_match(value) => fail(FieldErrorKind::InvalidEmail),
        FieldType::Tel if !is_phone_number(value) => fail(FieldErrorKind::InvalidPhone),
        FieldType::Url if !URL_RE.is_match(value) => fail(FieldErrorKind::InvalidUrl),
        FieldType::Select if !field.select_options().iter().any(|o| o.value == value) => {
            fail(FieldErrorKind::InvalidOption)
        }
        _ => Ok(()),
    }
}

/// Every failing field of `config`, in field declaration order.
pub fn validate_form(config: &FormConfig, values: &FormValues) -> Vec<FieldError> {
    config
        .fields
        .iter()
        .filter_map(|field| validate_field(field, values.get(field.name)).err())
        .collect()
}

fn is_phone_number(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    value.chars().all(allowed) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
