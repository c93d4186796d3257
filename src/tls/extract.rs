//! Mozilla grading extraction from a TLS report.

use serde::Serialize;
use serde_json::Value;

use crate::config::MOZILLA_GRADING_ANALYZER;

/// Grade assigned by the Mozilla grading analyzer.
///
/// Both fields are forwarded as the inspection service reports them (a number or a
/// string, `null` when absent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TlsGrade {
    /// Numeric or textual grade
    pub grade: Value,
    /// Letter grade, e.g. `"A+"`
    pub lettergrade: Value,
}

/// Finds the first Mozilla grading result in the report's `analysis` array.
///
/// Returns `None` when `analysis` is missing or not an array, or when no element's
/// `analyzer` equals `mozillaGradingWorker`. Once the analyzer is found its
/// `result.grade` and `result.lettergrade` are read, defaulting to `null`.
pub fn find_mozilla_grade(report: &Value) -> Option<TlsGrade> {
    let analysis = report.get("analysis")?.as_array()?;
    let entry = analysis.iter().find(|item| {
        item.get("analyzer").and_then(Value::as_str) == Some(MOZILLA_GRADING_ANALYZER)
    })?;

    let result = entry.get("result");
    let field = |name: &str| {
        result
            .and_then(|r| r.get(name))
            .cloned()
            .unwrap_or(Value::Null)
    };

    Some(TlsGrade {
        grade: field("grade"),
        lettergrade: field("lettergrade"),
    })
}
