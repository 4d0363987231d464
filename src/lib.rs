//! chemsafe-core: 化学品安全ルックアップ コアライブラリ
//!
//! This crate provides the validation, autocomplete, prompt, parsing and
//! rendering logic shared between the HTTP service and the browser page.
//!
//! Compiles to both native (rlib) and WebAssembly (cdylib via wasm-pack).
//! The HTTP service lives behind the `server` feature.

pub mod manifest;
pub mod catalog;
pub mod validation;
pub mod prompt;
pub mod parse;
pub mod autocomplete;
pub mod render;
pub mod pipeline;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod client;
#[cfg(feature = "server")]
pub mod server;

// Re-exports for convenience
pub use manifest::{SafetyManifest, MANIFEST};
pub use catalog::{Catalog, PRODUCTS};
pub use validation::{validate_product_name, ProductName, ValidationError};
pub use prompt::build_analysis_prompt;
pub use parse::{classify_header, parse_sections, AnalysisResult, Section};
pub use autocomplete::{suggest, Autocomplete};
pub use render::{ErrorBanner, ResultView, SearchSession};
pub use pipeline::{analyze_product, AiBackend, PipelineError};
