//! WCAG 2.0 Level AA color-contrast evaluation for computed-style
//! snapshots.
//!
//! The pipeline is four pure functions: parse an `rgb()`/`rgba()` string,
//! compute relative luminance, combine two luminances into a contrast
//! ratio, and classify the ratio against the AA size/weight thresholds.
//! Nothing here touches a DOM — callers resolve an element pair to plain
//! style values first and hand them in, either one at a time through
//! [`evaluate`] or as a batch through [`engine::audit`].

pub mod engine;
pub mod error;
pub mod math;
pub mod types;

pub use error::ContrastError;
pub use math::checker::evaluate;
pub use types::{AuditReport, ContrastRecord, Rgb, SampleFailure, StyleSample};
