//! Prompt building from safety-manifest.json
//!
//! Constructs the analysis prompt by interpolating the product name, the
//! section headers and the content guidelines into the promptFormat template.

use crate::manifest::MANIFEST;
use crate::validation::ProductName;

/// Build the analysis prompt for a validated product name
///
/// Replaces `{productName}`, `{sections}` and `{guidelines}` placeholders in
/// the promptFormat string. Deterministic for a given name.
pub fn build_analysis_prompt(name: &ProductName) -> String {
    MANIFEST.prompt_format
        .replace("{sections}", &section_outline())
        .replace("{guidelines}", &guideline_list())
        .replace("{productName}", name.as_str())
}

/// The five `## Title` headers with bracketed guidance, in prompt order
pub fn section_outline() -> String {
    MANIFEST.sections
        .iter()
        .map(|s| format!("## {}\n[{}]", s.title, s.guidance))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Content constraints as a bullet list
pub fn guideline_list() -> String {
    MANIFEST.guidelines
        .iter()
        .map(|g| format!("- {}", g))
        .collect::<Vec<_>>()
        .join("\n")
}

/// WASM-friendly version. Returns an empty string for invalid input.
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "buildAnalysisPrompt")]
pub fn build_analysis_prompt_wasm(product_name: &str) -> String {
    crate::validation::validate_product_name(Some(product_name))
        .map(|name| build_analysis_prompt(&name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_product_name;

    fn prompt_for(input: &str) -> String {
        build_analysis_prompt(&validate_product_name(Some(input)).unwrap())
    }

    #[test]
    fn test_prompt_has_no_placeholders() {
        let prompt = prompt_for("Bleach");
        assert!(!prompt.contains("{productName}"));
        assert!(!prompt.contains("{sections}"));
        assert!(!prompt.contains("{guidelines}"));
        assert!(prompt.contains("\"Bleach\""));
    }

    #[test]
    fn test_prompt_sections_in_fixed_order() {
        let prompt = prompt_for("Dish Soap");
        let positions: Vec<usize> = [
            "## Product Summary",
            "## Common Chemical Components",
            "## Safe Usage Guidelines",
            "## Effects of Improper Use",
            "## Environmental Considerations",
        ]
        .iter()
        .map(|h| prompt.find(h).unwrap_or_else(|| panic!("missing header {}", h)))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(prompt.matches("## ").count(), 5);
    }

    #[test]
    fn test_prompt_contains_constraints() {
        let prompt = prompt_for("Oven Cleaner");
        assert!(prompt.contains("Do not provide chemical formulas or synthesis instructions"));
        assert!(prompt.contains("2-4 sentences"));
        assert!(prompt.contains("not alarmist"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(prompt_for("Vinegar"), prompt_for("Vinegar"));
        assert_ne!(prompt_for("Vinegar"), prompt_for("Borax"));
    }

    #[test]
    fn test_prompt_uses_trimmed_name() {
        let prompt = prompt_for("   Borax  ");
        assert!(prompt.contains("\"Borax\""));
    }
}
