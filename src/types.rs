use serde::{Deserialize, Serialize};

/// An opaque sRGB color with 8-bit channels. Alpha is resolved away by the
/// parser before anything downstream sees the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Computed-style snapshot for one element pair, as captured by whatever
/// harness drives the rendered page: the text color, the resolved background
/// color behind it, and the font metrics that decide which threshold applies.
///
/// Field names are camelCase on the wire so a JSON dump produced by a JS
/// harness loads directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSample {
    /// Identifies the element pair in reports, e.g. ".feed a".
    #[serde(default)]
    pub selector: Option<String>,
    pub text_color: String,
    pub background_color: String,
    pub font_size_px: f64,
    pub font_weight: f64,
}

/// One evaluated sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastRecord {
    pub selector: Option<String>,
    pub text_color: String,
    pub background_color: String,
    pub font_size_px: f64,
    pub font_weight: f64,
    /// Contrast ratio rounded to 2 decimal places for reporting. The
    /// pass/fail decision is always made on the unrounded value.
    pub ratio: f64,
    pub is_large_text: bool,
    pub sufficient: bool,
}

/// A sample that could not be evaluated at all. Kept apart from
/// insufficient-contrast results: a parse failure is not a verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleFailure {
    pub selector: Option<String>,
    pub error: String,
}

/// Categorized outcome of a batch audit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub passed: Vec<ContrastRecord>,
    pub violations: Vec<ContrastRecord>,
    pub failed: Vec<SampleFailure>,
}

impl AuditReport {
    /// True when every sample evaluated cleanly and met its threshold.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.failed.is_empty()
    }
}
