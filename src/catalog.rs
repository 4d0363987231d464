//! Known product names used for autocomplete
//!
//! The default list is products.json, embedded at compile time. The server
//! may replace it with a list loaded from disk.

use std::sync::LazyLock;

const PRODUCTS_JSON: &str = include_str!("../products.json");

/// Embedded catalog (singleton)
pub static PRODUCTS: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json_str(PRODUCTS_JSON).expect("Failed to parse embedded products.json")
});

/// Ordered list of product names. Order is preserved in suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<String>) -> Self {
        Self { products }
    }

    /// Parse a JSON array of strings
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<String>>(json).map(Self::new)
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Catalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        assert!(!PRODUCTS.is_empty());
        assert!(PRODUCTS.products().iter().any(|p| p == "Bleach"));
    }

    #[test]
    fn test_from_json_str() {
        let c = Catalog::from_json_str(r#"["Bleach","Borax"]"#).unwrap();
        assert_eq!(c.products(), &["Bleach".to_string(), "Borax".to_string()]);
        assert!(Catalog::from_json_str(r#"{"not":"a list"}"#).is_err());
    }

    #[test]
    fn test_collect() {
        let c: Catalog = ["A", "B"].into_iter().collect();
        assert_eq!(c.len(), 2);
    }
}
