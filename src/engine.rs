use rayon::prelude::*;

use crate::math::checker::check_sample;
use crate::types::{AuditReport, SampleFailure, StyleSample};

/// Evaluate a batch of computed-style samples and categorize the results.
///
/// Uses Rayon's `par_iter()` — every sample is a pure, independent
/// evaluation with no shared mutable state, so the batch parallelizes
/// without coordination. Result order follows input order.
pub fn audit(samples: &[StyleSample]) -> AuditReport {
    let evaluated: Vec<_> = samples.par_iter().map(check_sample).collect();

    let mut report = AuditReport::default();
    for (sample, outcome) in samples.iter().zip(evaluated) {
        match outcome {
            Ok(record) if record.sufficient => report.passed.push(record),
            Ok(record) => report.violations.push(record),
            Err(err) => report.failed.push(SampleFailure {
                selector: sample.selector.clone(),
                error: err.to_string(),
            }),
        }
    }
    report
}
