use thiserror::Error;

/// Failures surfaced by the contrast evaluator.
///
/// A failure is never folded into a verdict: substituting a guessed color
/// or a default font size would invalidate the accessibility result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContrastError {
    /// The color string had no `(..)` component list, or fewer than three
    /// numeric channel values inside it. Carries the raw input so reports
    /// can show which computed-style string tripped the parser.
    #[error("malformed color {raw:?}: expected rgb(r, g, b) or rgba(r, g, b, a)")]
    MalformedColor { raw: String },

    /// Font metrics must be finite and non-negative for the size/weight
    /// thresholds to apply.
    #[error("invalid style input: {field} = {value}")]
    InvalidStyle { field: &'static str, value: f64 },
}
