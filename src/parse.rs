//! AI response markdown parsing
//!
//! Splits the generated text on level-2 headers and files each fragment
//! under one of the five sections by keyword substring. Parsing never fails:
//! unrecognised headers are dropped and missing sections stay empty.

use serde::{Deserialize, Serialize};

use crate::manifest::get_section;

/// Level-2 header marker
const HEADER_MARKER: &str = "##";

/// The five response sections, in header-matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    ProductSummary,
    ChemicalComponents,
    SafeUsage,
    ImproperUse,
    Environmental,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::ProductSummary,
        Section::ChemicalComponents,
        Section::SafeUsage,
        Section::ImproperUse,
        Section::Environmental,
    ];

    /// Wire field name (camelCase)
    pub fn field(&self) -> &'static str {
        match self {
            Self::ProductSummary => "productSummary",
            Self::ChemicalComponents => "chemicalComponents",
            Self::SafeUsage => "safeUsage",
            Self::ImproperUse => "improperUse",
            Self::Environmental => "environmental",
        }
    }

    /// Canonical header title
    pub fn title(&self) -> &'static str {
        get_section(self.field()).map(|s| s.title.as_str()).unwrap_or("")
    }

    /// Lowercase header substrings that select this section
    pub fn keywords(&self) -> &'static [String] {
        get_section(self.field()).map(|s| s.keywords.as_slice()).unwrap_or(&[])
    }
}

/// Structured analysis, one field per section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub product_summary: String,
    #[serde(default)]
    pub chemical_components: String,
    #[serde(default)]
    pub safe_usage: String,
    #[serde(default)]
    pub improper_use: String,
    #[serde(default)]
    pub environmental: String,
}

impl AnalysisResult {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::ProductSummary => &self.product_summary,
            Section::ChemicalComponents => &self.chemical_components,
            Section::SafeUsage => &self.safe_usage,
            Section::ImproperUse => &self.improper_use,
            Section::Environmental => &self.environmental,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::ProductSummary => &mut self.product_summary,
            Section::ChemicalComponents => &mut self.chemical_components,
            Section::SafeUsage => &mut self.safe_usage,
            Section::ImproperUse => &mut self.improper_use,
            Section::Environmental => &mut self.environmental,
        }
    }

    /// Sections with no content
    pub fn missing_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.get(*s).is_empty())
            .collect()
    }
}

/// Classify a header line. First matching section in priority order wins.
pub fn classify_header(header: &str) -> Option<Section> {
    let lower = header.to_lowercase();
    Section::ALL
        .into_iter()
        .find(|s| s.keywords().iter().any(|k| lower.contains(k.as_str())))
}

/// Parse generated markdown into an `AnalysisResult`.
///
/// A repeated section overwrites the earlier one (last write wins).
pub fn parse_sections(text: &str) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    for fragment in text.split(HEADER_MARKER) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }

        let (header, content) = match fragment.split_once('\n') {
            Some((h, c)) => (h, c.trim()),
            None => (fragment, ""),
        };

        if let Some(section) = classify_header(header) {
            *result.slot_mut(section) = content.to_string();
        }
    }

    result
}

/// WASM-friendly version (returns the AnalysisResult as JSON)
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseSections")]
pub fn parse_sections_wasm(text: &str) -> String {
    serde_json::to_string(&parse_sections(text)).unwrap_or_else(|_| "{}".to_string())
}
