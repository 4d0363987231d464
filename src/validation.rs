//! Product name validation against safety-manifest.json limits
//!
//! The same gate runs in the browser (via WASM) for immediate feedback and
//! at the HTTP boundary, where it is authoritative.
//!
//! The denylist is a plain substring check. It is trivially bypassed by
//! spelling variations and must not be treated as a security boundary.

use crate::manifest::MANIFEST;

/// Reason a product name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Absent, not a string, or empty
    Missing,
    /// Fewer than the minimum UTF-16 units after trimming
    TooShort,
    /// More than the maximum UTF-16 units (untrimmed)
    TooLong,
    /// Contains a denylisted term
    Disallowed,
}

impl ValidationError {
    /// Stable identifier used in logs and the WASM surface
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::TooShort => "tooShort",
            Self::TooLong => "tooLong",
            Self::Disallowed => "disallowed",
        }
    }

    /// User-facing message
    pub fn message(&self) -> &'static str {
        let m = &MANIFEST.messages;
        match self {
            Self::Missing => &m.missing,
            Self::TooShort => &m.too_short,
            Self::TooLong => &m.too_long,
            Self::Disallowed => &m.disallowed,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// A validated, trimmed product name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate raw user input.
///
/// Checks run in order: missing, too short (trimmed), too long (raw),
/// disallowed term.
pub fn validate_product_name(input: Option<&str>) -> Result<ProductName, ValidationError> {
    let limits = &MANIFEST.name_limits;

    let raw = match input {
        Some(s) if !s.is_empty() => s,
        _ => return Err(ValidationError::Missing),
    };

    let trimmed = raw.trim();
    if utf16_len(trimmed) < limits.min_trimmed_chars {
        return Err(ValidationError::TooShort);
    }
    if utf16_len(raw) > limits.max_chars {
        return Err(ValidationError::TooLong);
    }
    if contains_denylisted(raw) {
        return Err(ValidationError::Disallowed);
    }

    Ok(ProductName(trimmed.to_string()))
}

/// Validate a JSON value taken from a request body.
///
/// Anything other than a JSON string counts as missing.
pub fn validate_json(value: Option<&serde_json::Value>) -> Result<ProductName, ValidationError> {
    validate_product_name(value.and_then(|v| v.as_str()))
}

/// Length in UTF-16 code units, as the browser's `String.length` reports it
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn contains_denylisted(input: &str) -> bool {
    let lower = input.to_lowercase();
    MANIFEST.denylist.iter().any(|term| lower.contains(term.as_str()))
}

/// WASM-friendly validation (returns `{"ok":true,"productName":...}` or
/// `{"ok":false,"kind":...,"message":...}`)
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "validateProductName")]
pub fn validate_product_name_wasm(input: &str) -> String {
    let value = match validate_product_name(Some(input)) {
        Ok(name) => serde_json::json!({ "ok": true, "productName": name.as_str() }),
        Err(e) => serde_json::json!({ "ok": false, "kind": e.kind(), "message": e.message() }),
    };
    value.to_string()
}
