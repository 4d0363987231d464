//! Result display slots, error banner and search session state
//!
//! Times are milliseconds on a caller-supplied monotonic clock
//! (`performance.now()` in the browser), so the state stays testable.

use serde::Serialize;

use crate::manifest::{no_information, MANIFEST};
use crate::parse::{AnalysisResult, Section};
use crate::validation::{validate_product_name, ProductName, ValidationError};

/// One rendered output slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSlot {
    /// Element id / wire field name
    pub id: &'static str,
    pub title: &'static str,
    pub body: String,
}

/// All five slots, ready to be written as plain text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    pub slots: Vec<ResultSlot>,
    pub scroll_into_view: bool,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let slots = Section::ALL
            .into_iter()
            .map(|section| {
                let body = result.get(section);
                ResultSlot {
                    id: section.field(),
                    title: section.title(),
                    body: if body.is_empty() {
                        no_information().to_string()
                    } else {
                        body.to_string()
                    },
                }
            })
            .collect();
        Self {
            slots,
            scroll_into_view: true,
        }
    }

    pub fn slot(&self, section: Section) -> Option<&ResultSlot> {
        self.slots.iter().find(|s| s.id == section.field())
    }

    /// Plain-text rendering, one titled block per section
    pub fn to_text(&self) -> String {
        self.slots
            .iter()
            .map(|s| format!("{}\n{}", s.title, s.body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Non-blocking error banner that hides itself after a fixed delay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
    hide_at_ms: u64,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>, now_ms: u64) {
        self.message = Some(message.into());
        self.hide_at_ms = now_ms.saturating_add(MANIFEST.ui.error_dismiss_secs.saturating_mul(1000));
    }

    pub fn close(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self, now_ms: u64) -> bool {
        self.message.is_some() && now_ms < self.hide_at_ms
    }

    /// Message if still visible at `now_ms`
    pub fn message(&self, now_ms: u64) -> Option<&str> {
        if self.is_visible(now_ms) {
            self.message.as_deref()
        } else {
            None
        }
    }
}

/// Page-level state for one search box, its results and its error banner
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    input: String,
    results: Option<ResultView>,
    banner: ErrorBanner,
    in_flight: bool,
    focus_requested: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mirror the search field after each keystroke or accepted suggestion
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn results(&self) -> Option<&ResultView> {
        self.results.as_ref()
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    pub fn banner_mut(&mut self) -> &mut ErrorBanner {
        &mut self.banner
    }

    /// Submit control is disabled while a request is in flight
    pub fn submit_enabled(&self) -> bool {
        !self.in_flight
    }

    /// Consume a pending focus request for the search field
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Start an analysis. Returns the validated name to send, or `None` if
    /// a request is already in flight or the input is rejected (the banner
    /// then shows the reason).
    pub fn begin_submit(&mut self, now_ms: u64) -> Option<ProductName> {
        if self.in_flight {
            return None;
        }
        match validate_product_name(Some(self.input.trim())) {
            Ok(name) => {
                self.results = None;
                self.banner.close();
                self.in_flight = true;
                Some(name)
            }
            Err(ValidationError::Missing) => {
                self.banner.show(MANIFEST.messages.enter_name.as_str(), now_ms);
                None
            }
            Err(e) => {
                self.banner.show(e.message(), now_ms);
                None
            }
        }
    }

    pub fn finish_ok(&mut self, result: &AnalysisResult) {
        self.in_flight = false;
        self.results = Some(ResultView::from_result(result));
    }

    pub fn finish_err(&mut self, message: impl Into<String>, now_ms: u64) {
        self.in_flight = false;
        self.banner.show(message, now_ms);
    }

    /// Clear results and input and return focus to the search field
    pub fn search_again(&mut self) {
        self.results = None;
        self.input.clear();
        self.banner.close();
        self.focus_requested = true;
    }
}

/// WASM-friendly version. AnalysisResult JSON in; ResultView JSON with
/// `"ok":true` out, or `{"ok":false,"message":...}` for an unreadable payload.
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "renderResult")]
pub fn render_result_wasm(json: &str) -> String {
    let value = match serde_json::from_str::<AnalysisResult>(json) {
        Ok(result) => match serde_json::to_value(ResultView::from_result(&result)) {
            Ok(serde_json::Value::Object(mut view)) => {
                view.insert("ok".to_string(), serde_json::Value::Bool(true));
                serde_json::Value::Object(view)
            }
            _ => serde_json::json!({ "ok": false, "message": "failed to encode result" }),
        },
        Err(e) => serde_json::json!({ "ok": false, "message": e.to_string() }),
    };
    value.to_string()
}
