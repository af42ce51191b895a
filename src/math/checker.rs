use crate::error::ContrastError;
use crate::types::{ContrastRecord, StyleSample};

use super::color_parse::parse_color;
use super::wcag::{contrast_ratio, relative_luminance};

/// WCAG AA large text: at least 18px, or at least 14px and bolder than
/// normal (weight > 400).
pub fn is_large_text(font_size_px: f64, font_weight: f64) -> bool {
    font_size_px >= 18.0 || (font_size_px >= 14.0 && font_weight > 400.0)
}

/// AA thresholds: 3:1 for large text, 4.5:1 for everything else. The 3:1
/// path is only reachable for large text.
pub fn meets_aa(ratio: f64, is_large_text: bool) -> bool {
    (is_large_text && ratio >= 3.0) || ratio >= 4.5
}

fn validate_metric(field: &'static str, value: f64) -> Result<(), ContrastError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ContrastError::InvalidStyle { field, value });
    }
    Ok(())
}

/// Evaluate one computed-style sample against WCAG 2.0 Level AA.
///
/// Font metrics are validated first, then both colors are parsed, the
/// contrast ratio computed, and the size/weight-dependent threshold
/// applied. Pure and deterministic: identical input yields an identical
/// record.
pub fn check_sample(sample: &StyleSample) -> Result<ContrastRecord, ContrastError> {
    validate_metric("fontSizePx", sample.font_size_px)?;
    validate_metric("fontWeight", sample.font_weight)?;

    let text = parse_color(&sample.text_color)?;
    let background = parse_color(&sample.background_color)?;

    let ratio = contrast_ratio(relative_luminance(text), relative_luminance(background));
    let large = is_large_text(sample.font_size_px, sample.font_weight);

    Ok(ContrastRecord {
        selector: sample.selector.clone(),
        text_color: sample.text_color.clone(),
        background_color: sample.background_color.clone(),
        font_size_px: sample.font_size_px,
        font_weight: sample.font_weight,
        ratio: (ratio * 100.0).round() / 100.0,
        is_large_text: large,
        sufficient: meets_aa(ratio, large),
    })
}

/// Minimal single-pair surface. `Ok(false)` is a definite
/// insufficient-contrast verdict; `Err` means the inputs could not be
/// evaluated at all.
pub fn evaluate(
    text_color: &str,
    background_color: &str,
    font_size_px: f64,
    font_weight: f64,
) -> Result<bool, ContrastError> {
    let sample = StyleSample {
        selector: None,
        text_color: text_color.to_string(),
        background_color: background_color.to_string(),
        font_size_px,
        font_weight,
    };
    check_sample(&sample).map(|record| record.sufficient)
}
