//! Autocomplete suggestion filtering and keyboard/mouse selection state
//!
//! Pure state machine: the page feeds it input changes, key presses and
//! clicks, and renders `suggestions()` / `highlighted()` after each event.

use crate::catalog::Catalog;
use crate::manifest::MANIFEST;

/// Case-insensitive substring filter over the catalog.
///
/// Returns at most `ui.maxSuggestions` entries in catalog order. An empty
/// (or whitespace-only) query yields no suggestions.
pub fn suggest(catalog: &Catalog, query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalog
        .products()
        .iter()
        .filter(|p| p.to_lowercase().contains(&needle))
        .take(MANIFEST.ui.max_suggestions)
        .cloned()
        .collect()
}

/// Keys the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// What the page should do after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond re-rendering the list
    None,
    /// Replace the input value with this suggestion (no analysis)
    Accept(String),
    /// Submit the current input for analysis
    Analyze,
}

#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    suggestions: Vec<String>,
    highlighted: Option<usize>,
}

impl Autocomplete {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible suggestions (empty when the list is dismissed)
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Recompute suggestions for a new input value. Clears the highlight.
    pub fn input_changed(&mut self, catalog: &Catalog, value: &str) {
        self.suggestions = suggest(catalog, value);
        self.highlighted = None;
    }

    pub fn key(&mut self, key: Key) -> Action {
        let count = self.suggestions.len();
        match key {
            Key::ArrowDown if count > 0 => {
                self.highlighted = Some(match self.highlighted {
                    Some(i) => (i + 1) % count,
                    None => 0,
                });
                Action::None
            }
            Key::ArrowUp if count > 0 => {
                self.highlighted = Some(match self.highlighted {
                    Some(i) if i > 0 => i - 1,
                    _ => count - 1,
                });
                Action::None
            }
            Key::Enter => match self.highlighted {
                Some(i) => self.select(i),
                None => Action::Analyze,
            },
            Key::Escape => {
                self.dismiss();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Mouse click on a suggestion
    pub fn select(&mut self, index: usize) -> Action {
        match self.suggestions.get(index).cloned() {
            Some(value) => {
                self.dismiss();
                Action::Accept(value)
            }
            None => Action::None,
        }
    }

    /// Click anywhere outside the input and the list
    pub fn click_outside(&mut self) {
        self.dismiss();
    }

    pub fn dismiss(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
    }
}

/// WASM-friendly version against the embedded catalog (returns a JSON array)
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "suggestProducts")]
pub fn suggest_products_wasm(query: &str) -> String {
    serde_json::to_string(&suggest(&crate::catalog::PRODUCTS, query))
        .unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Catalog {
        ["Bleach", "Baking Soda", "Ammonia"].into_iter().collect()
    }

    fn widget(query: &str) -> Autocomplete {
        let catalog: Catalog = ["Dish Soap", "Laundry Soap", "Soap Bar", "Bleach"]
            .into_iter()
            .collect();
        let mut w = Autocomplete::new();
        w.input_changed(&catalog, query);
        w
    }

    #[test]
    fn test_suggest_case_insensitive_substring() {
        assert_eq!(suggest(&small(), "ba"), vec!["Baking Soda".to_string()]);
        assert_eq!(suggest(&small(), "A"), vec!["Bleach", "Baking Soda", "Ammonia"]);
    }

    #[test]
    fn test_suggest_preserves_catalog_order() {
        let c: Catalog = ["Zinc Cream", "Aloe Cream", "Cream Cleaner"].into_iter().collect();
        assert_eq!(suggest(&c, "cream"), vec!["Zinc Cream", "Aloe Cream", "Cream Cleaner"]);
    }

    #[test]
    fn test_suggest_caps_at_ten() {
        let c: Catalog = (0..25).map(|i| format!("Cleaner {}", i)).collect();
        let s = suggest(&c, "cleaner");
        assert_eq!(s.len(), 10);
        assert_eq!(s[0], "Cleaner 0");
        assert_eq!(s[9], "Cleaner 9");
    }

    #[test]
    fn test_suggest_empty_query() {
        assert!(suggest(&small(), "").is_empty());
        assert!(suggest(&small(), "   ").is_empty());
        assert!(suggest(&small(), "xyz").is_empty());
    }

    #[test]
    fn test_arrow_down_wraps() {
        let mut w = widget("soap");
        assert_eq!(w.suggestions().len(), 3);
        w.key(Key::ArrowDown);
        assert_eq!(w.highlighted(), Some(0));
        w.key(Key::ArrowDown);
        w.key(Key::ArrowDown);
        assert_eq!(w.highlighted(), Some(2));
        w.key(Key::ArrowDown);
        assert_eq!(w.highlighted(), Some(0));
    }

    #[test]
    fn test_arrow_up_wraps() {
        let mut w = widget("soap");
        w.key(Key::ArrowUp);
        assert_eq!(w.highlighted(), Some(2));
        w.key(Key::ArrowUp);
        assert_eq!(w.highlighted(), Some(1));
        w.key(Key::ArrowUp);
        w.key(Key::ArrowUp);
        assert_eq!(w.highlighted(), Some(2));
    }

    #[test]
    fn test_enter_accepts_highlighted() {
        let mut w = widget("soap");
        w.key(Key::ArrowDown);
        w.key(Key::ArrowDown);
        assert_eq!(w.key(Key::Enter), Action::Accept("Laundry Soap".to_string()));
        assert!(!w.is_open());
        assert_eq!(w.highlighted(), None);
    }

    #[test]
    fn test_enter_without_highlight_analyzes() {
        let mut w = widget("soap");
        assert_eq!(w.key(Key::Enter), Action::Analyze);
        let mut closed = Autocomplete::new();
        assert_eq!(closed.key(Key::Enter), Action::Analyze);
    }

    #[test]
    fn test_escape_and_click_outside_dismiss() {
        let mut w = widget("soap");
        w.key(Key::Escape);
        assert!(!w.is_open());

        let mut w = widget("soap");
        w.click_outside();
        assert!(!w.is_open());
    }

    #[test]
    fn test_click_select() {
        let mut w = widget("soap");
        assert_eq!(w.select(2), Action::Accept("Soap Bar".to_string()));
        assert!(!w.is_open());
        assert_eq!(w.select(0), Action::None);
    }

    #[test]
    fn test_arrows_on_closed_list_are_ignored() {
        let mut w = widget("nothing matches");
        w.key(Key::ArrowDown);
        w.key(Key::ArrowUp);
        assert_eq!(w.highlighted(), None);
    }

    #[test]
    fn test_new_input_resets_highlight() {
        let catalog: Catalog = ["Dish Soap", "Laundry Soap"].into_iter().collect();
        let mut w = Autocomplete::new();
        w.input_changed(&catalog, "soap");
        w.key(Key::ArrowDown);
        w.input_changed(&catalog, "soa");
        assert_eq!(w.highlighted(), None);
        assert_eq!(w.suggestions().len(), 2);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Tab"), Key::Other);
    }
}

#[cfg(all(test, feature = "wasm"))]
mod wasm_tests {
    use super::*;

    #[test]
    fn test_suggest_wasm_shape() {
        let v: serde_json::Value = serde_json::from_str(&suggest_products_wasm("bleach")).unwrap();
        assert_eq!(v, serde_json::json!(["Bleach"]));
        let v: serde_json::Value = serde_json::from_str(&suggest_products_wasm("  ")).unwrap();
        assert_eq!(v, serde_json::json!([]));
    }

    #[test]
    fn test_suggest_wasm_capped() {
        let v: serde_json::Value = serde_json::from_str(&suggest_products_wasm("e")).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(10));
    }
}
