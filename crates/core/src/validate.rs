//! Field-level validation primitives.
//!
//! Admin create/edit failures are reported as a field → message map so the
//! caller can render errors inline next to each form field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Accepts absolute http(s) URLs with a non-empty host.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#]+\.?[^\s]*$").expect("valid regex"));

/// Whether `value` is a well-formed absolute http(s) URL.
pub fn is_valid_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

/// Ordered field → message map for inline display.
///
/// `BTreeMap` keeps serialization order stable for clients and tests.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Consume into a domain validation error, or `Ok(())` when empty.
    pub fn into_result(self) -> Result<(), crate::error::CoreError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(crate::error::CoreError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
