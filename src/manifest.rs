//! safety-manifest.json parser and typed accessors
//!
//! Embeds safety-manifest.json at compile time via `include_str!` and provides
//! the single source of truth for all domain constants (sections, denylist,
//! name limits, model identifier, user-facing messages).

use std::sync::LazyLock;
use serde::Deserialize;

/// Raw JSON embedded at compile time
const MANIFEST_JSON: &str = include_str!("../safety-manifest.json");

/// Parsed safety-manifest.json (singleton)
pub static MANIFEST: LazyLock<SafetyManifest> = LazyLock::new(|| {
    serde_json::from_str(MANIFEST_JSON).expect("Failed to parse embedded safety-manifest.json")
});

/// Top-level manifest (v1.0.0)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SafetyManifest {
    pub version: String,
    /// Default generative model identifier
    pub model: String,
    pub name_limits: NameLimits,
    /// Lowercase substrings rejected by the validation gate
    pub denylist: Vec<String>,
    /// Sections in prompt order
    pub sections: Vec<SectionEntry>,
    pub guidelines: Vec<String>,
    pub prompt_format: String,
    pub messages: Messages,
    pub ui: UiConstants,
}

/// Product name length bounds (in UTF-16 code units)
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NameLimits {
    pub min_trimmed_chars: usize,
    pub max_chars: usize,
}

/// One response section as described to the model
#[derive(Debug, Deserialize, Clone)]
pub struct SectionEntry {
    pub field: String,
    pub title: String,
    pub keywords: Vec<String>,
    pub guidance: String,
}

/// User-facing message strings
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    pub missing: String,
    /// Shown by the page when the search box is empty
    pub enter_name: String,
    pub too_short: String,
    pub too_long: String,
    pub disallowed: String,
    pub upstream: String,
    pub no_information: String,
    pub health: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UiConstants {
    pub max_suggestions: usize,
    pub error_dismiss_secs: u64,
}

// === Accessor functions ===

/// Get a section entry by its wire field name
pub fn get_section(field: &str) -> Option<&'static SectionEntry> {
    MANIFEST.sections.iter().find(|s| s.field == field)
}

/// Placeholder text for empty result slots
pub fn no_information() -> &'static str {
    &MANIFEST.messages.no_information
}

/// Generic message returned when the generative backend fails
pub fn upstream_message() -> &'static str {
    &MANIFEST.messages.upstream
}
