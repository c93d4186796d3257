//! Coarse security score from an HTTP-security report.

use serde::Serialize;
use serde_json::Value;
use strum_macros::{Display, EnumIter};

use crate::config::{SCORE_MOYEN_FAILURES, SCORE_OK_MAX_FAILURES};

/// Coarse rating derived from the number of failed checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
pub enum SecurityScore {
    /// At most two failed checks
    #[serde(rename = "OK")]
    #[strum(serialize = "OK")]
    Ok,
    /// Exactly three failed checks
    #[serde(rename = "MOYEN")]
    #[strum(serialize = "MOYEN")]
    Moyen,
    /// Four or more failed checks
    #[serde(rename = "KO")]
    #[strum(serialize = "KO")]
    Ko,
    /// The report is not a check-name → value mapping
    Unknown,
}

impl SecurityScore {
    /// Maps a number of failed checks to a score.
    pub fn from_failures(failures: usize) -> Self {
        if failures <= SCORE_OK_MAX_FAILURES {
            SecurityScore::Ok
        } else if failures == SCORE_MOYEN_FAILURES {
            SecurityScore::Moyen
        } else {
            SecurityScore::Ko
        }
    }
}

/// Counts the checks whose value is exactly boolean `false`.
///
/// Returns `None` when the report is not a JSON object.
pub fn count_failed_checks(report: &Value) -> Option<usize> {
    let checks = report.as_object()?;
    Some(
        checks
            .values()
            .filter(|v| matches!(v, Value::Bool(false)))
            .count(),
    )
}

/// Scores an HTTP-security report.
pub fn calculate_score(report: &Value) -> SecurityScore {
    count_failed_checks(report)
        .map(SecurityScore::from_failures)
        .unwrap_or(SecurityScore::Unknown)
}
