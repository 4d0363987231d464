//! Product analysis pipeline
//!
//! Provides the `AiBackend` trait and `analyze_product` function that
//! encapsulates validation, prompt building, the generative call and
//! section parsing.

use crate::parse::{parse_sections, AnalysisResult};
use crate::prompt::build_analysis_prompt;
use crate::validation::{validate_product_name, ProductName, ValidationError};

use std::fmt;

// ─── Errors ──────────────────────────────────────────────────────────

/// Pipeline error
#[derive(Debug)]
pub enum PipelineError {
    /// Input rejected before any backend call
    Invalid(ValidationError),
    /// Generative backend failed (transport, auth, or malformed reply)
    Upstream(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{}", e),
            Self::Upstream(s) => write!(f, "upstream error: {}", s),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ValidationError> for PipelineError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

// ─── AiBackend trait ─────────────────────────────────────────────────

/// Trait for sending prompts to a text-generation model.
/// Implemented by the HTTP client in the server and by stubs in tests.
#[async_trait::async_trait]
pub trait AiBackend: Send + Sync {
    /// Send a text prompt and return the raw text response.
    async fn send_prompt(&self, prompt: &str) -> Result<String, PipelineError>;
}

// ─── Pipeline ────────────────────────────────────────────────────────

/// Analyze an already validated product name.
///
/// 1. Build the prompt
/// 2. Single backend call (no retry)
/// 3. Parse sections (missing sections stay empty)
pub async fn analyze_validated(
    backend: &dyn AiBackend,
    name: &ProductName,
) -> Result<AnalysisResult, PipelineError> {
    let prompt = build_analysis_prompt(name);
    let text = backend.send_prompt(&prompt).await?;
    Ok(parse_sections(&text))
}

/// Validate raw input, then run the pipeline. The backend is never called
/// for rejected input.
pub async fn analyze_product(
    backend: &dyn AiBackend,
    input: Option<&str>,
) -> Result<AnalysisResult, PipelineError> {
    let name = validate_product_name(input)?;
    analyze_validated(backend, &name).await
}

// ─── Tests ───────────────────────────────────────────────────────────
