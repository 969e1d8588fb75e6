//! Renewal validation report: an ordered sequence of check results plus
//! aggregate tallies.
//!
//! Aggregation rules:
//! - `overall_status` is `"ALL GOOD"` iff no check has status FAIL. Warnings
//!   do not flip the overall status.
//! - INFO checks are tallied separately from the four outcome statuses, so
//!   `passed + failed + warnings + skipped + info == total_checks`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CheckStatus;

pub const OVERALL_ALL_GOOD: &str = "ALL GOOD";
pub const OVERALL_ISSUES_FOUND: &str = "ISSUES FOUND";

/// Result of a single business-rule check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Ordered validation checks with their tallies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check without structured details.
    pub fn add_check(
        &mut self,
        name: impl Into<String>,
        status: CheckStatus,
        message: impl Into<String>,
    ) {
        self.checks.push(ValidationCheck {
            name: name.into(),
            status,
            message: message.into(),
            details: None,
        });
    }

    /// Append a check with structured details.
    pub fn add_check_with_details(
        &mut self,
        name: impl Into<String>,
        status: CheckStatus,
        message: impl Into<String>,
        details: serde_json::Value,
    ) {
        self.checks.push(ValidationCheck {
            name: name.into(),
            status,
            message: message.into(),
            details: Some(details),
        });
    }

    #[must_use]
    pub fn checks(&self) -> &[ValidationCheck] {
        &self.checks
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    /// The serialized summary form returned to callers.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            overall_status: if self.has_failures() {
                OVERALL_ISSUES_FOUND.into()
            } else {
                OVERALL_ALL_GOOD.into()
            },
            total_checks: self.checks.len(),
            passed: self.count(CheckStatus::Pass),
            failed: self.count(CheckStatus::Fail),
            warnings: self.count(CheckStatus::Warning),
            skipped: self.count(CheckStatus::Skip),
            info: self.count(CheckStatus::Info),
            checks: self.checks.clone(),
        }
    }
}

/// Flattened report shape serialized into handler responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    pub overall_status: String,
    pub total_checks: usize,
    pub passed: usize,
    pub failed: usize,
    pub warnings: usize,
    pub skipped: usize,
    pub info: usize,
    pub checks: Vec<ValidationCheck>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_report_is_all_good() {
        let report = ValidationReport::new();
        let summary = report.summary();
        assert_eq!(summary.overall_status, OVERALL_ALL_GOOD);
        assert_eq!(summary.total_checks, 0);
    }

    #[test]
    fn warnings_do_not_flip_overall_status() {
        let mut report = ValidationReport::new();
        report.add_check("a", CheckStatus::Pass, "ok");
        report.add_check("b", CheckStatus::Warning, "look into this");
        report.add_check("c", CheckStatus::Skip, "n/a");
        report.add_check("d", CheckStatus::Info, "fyi");
        let summary = report.summary();
        assert_eq!(summary.overall_status, OVERALL_ALL_GOOD);
        assert_eq!(summary.warnings, 1);
    }

    #[test]
    fn single_fail_flips_overall_status() {
        let mut report = ValidationReport::new();
        report.add_check("a", CheckStatus::Pass, "ok");
        report.add_check("b", CheckStatus::Fail, "missing field");
        let summary = report.summary();
        assert_eq!(summary.overall_status, OVERALL_ISSUES_FOUND);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn tallies_partition_the_checks() {
        let mut report = ValidationReport::new();
        report.add_check("a", CheckStatus::Pass, "");
        report.add_check("b", CheckStatus::Pass, "");
        report.add_check("c", CheckStatus::Fail, "");
        report.add_check("d", CheckStatus::Warning, "");
        report.add_check("e", CheckStatus::Skip, "");
        report.add_check("f", CheckStatus::Info, "");
        let s = report.summary();
        assert_eq!(
            s.passed + s.failed + s.warnings + s.skipped + s.info,
            s.total_checks
        );
        assert_eq!(s.passed, 2);
    }

    #[test]
    fn checks_keep_insertion_order() {
        let mut report = ValidationReport::new();
        report.add_check("first", CheckStatus::Info, "");
        report.add_check_with_details(
            "second",
            CheckStatus::Pass,
            "",
            serde_json::json!({"key": "value"}),
        );
        let names: Vec<&str> = report.checks().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert!(report.checks()[1].details.is_some());
    }

    #[test]
    fn details_omitted_from_json_when_absent() {
        let mut report = ValidationReport::new();
        report.add_check("no details", CheckStatus::Skip, "n/a");
        let json = serde_json::to_value(report.summary()).unwrap();
        assert!(json["checks"][0].get("details").is_none());
        assert_eq!(json["checks"][0]["status"], "SKIP");
    }
}
