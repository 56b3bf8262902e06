//! Test reporting with fail-fast support.
//!
//! The reporter collects per-case results and renders a text summary or
//! a JSON export. In [`FailureMode::FailFast`] it refuses further
//! recording as soon as a failure arrives, so the harness stops the run
//! at the first defect; [`FailureMode::CollectAll`] gathers every result
//! for exploratory runs.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::harness::SuiteResults;
use crate::result::{OjearError, OjearResult};

/// Failure mode for result recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Stop on first failure (default)
    #[default]
    FailFast,
    /// Collect all failures
    CollectAll,
}

/// Status of a recorded test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    /// Case passed
    Passed,
    /// Case failed
    Failed,
    /// Case was skipped
    Skipped,
}

impl TestStatus {
    /// Whether this status is passing
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Whether this status is failing
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// A recorded test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResultEntry {
    /// Case name
    pub name: String,
    /// Case status
    pub status: TestStatus,
    /// Wall-clock duration
    pub duration: Duration,
    /// Diagnostic message if failed
    pub error: Option<String>,
}

impl TestResultEntry {
    /// Create a passing entry
    #[must_use]
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Passed,
            duration,
            error: None,
        }
    }

    /// Create a failing entry
    #[must_use]
    pub fn failed(name: impl Into<String>, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Failed,
            duration,
            error: Some(error.into()),
        }
    }

    /// Create a skipped entry
    #[must_use]
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Skipped,
            duration: Duration::ZERO,
            error: None,
        }
    }
}

/// Collects test results and renders reports
#[derive(Debug, Default)]
pub struct Reporter {
    suite_name: String,
    entries: Vec<TestResultEntry>,
    failure_mode: FailureMode,
}

impl Reporter {
    /// Create a reporter in collect-all mode
    #[must_use]
    pub fn new(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            entries: Vec::new(),
            failure_mode: FailureMode::CollectAll,
        }
    }

    /// Create a reporter in fail-fast mode
    #[must_use]
    pub fn fail_fast(suite_name: impl Into<String>) -> Self {
        Self {
            suite_name: suite_name.into(),
            entries: Vec::new(),
            failure_mode: FailureMode::FailFast,
        }
    }

    /// The configured failure mode
    #[must_use]
    pub const fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    /// Record a result
    ///
    /// # Errors
    ///
    /// In fail-fast mode, recording a failing entry returns
    /// [`OjearError::AssertionFailed`] after storing it, signalling the
    /// caller to stop the run.
    pub fn record(&mut self, entry: TestResultEntry) -> OjearResult<()> {
        let failed = entry.status.is_failed();
        let diagnostic = entry.error.clone();
        let name = entry.name.clone();
        self.entries.push(entry);

        if failed && self.failure_mode == FailureMode::FailFast {
            return Err(OjearError::assertion(format!(
                "fail-fast: {name}: {}",
                diagnostic.unwrap_or_else(|| "no diagnostic".to_string())
            )));
        }
        Ok(())
    }

    /// Record every result from a harness run
    ///
    /// # Errors
    ///
    /// Propagates the fail-fast error from [`Reporter::record`].
    pub fn record_suite(&mut self, results: &SuiteResults) -> OjearResult<()> {
        for r in &results.results {
            let entry = if r.passed {
                TestResultEntry::passed(&r.name, r.duration)
            } else {
                TestResultEntry::failed(
                    &r.name,
                    r.duration,
                    r.error.as_deref().unwrap_or("unknown failure"),
                )
            };
            self.record(entry)?;
        }
        Ok(())
    }

    /// Recorded entries, record order
    #[must_use]
    pub fn entries(&self) -> &[TestResultEntry] {
        &self.entries
    }

    /// Count of passing entries
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_passed()).count()
    }

    /// Count of failing entries
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_failed()).count()
    }

    /// Whether every recorded entry passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// Plain-text summary
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{}: {} passed, {} failed, {} total\n",
            self.suite_name,
            self.passed_count(),
            self.failed_count(),
            self.entries.len()
        );
        for entry in &self.entries {
            let marker = match entry.status {
                TestStatus::Passed => "PASS",
                TestStatus::Failed => "FAIL",
                TestStatus::Skipped => "SKIP",
            };
            out.push_str(&format!("  [{marker}] {}\n", entry.name));
            if let Some(error) = &entry.error {
                out.push_str(&format!("         {error}\n"));
            }
        }
        out
    }

    /// JSON export of the recorded entries
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::Json`] if serialization fails.
    pub fn to_json(&self) -> OjearResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{TestHarness, TestSuite};
    use crate::result::OjearError;

    #[test]
    fn test_collect_all_keeps_recording_after_failure() {
        let mut reporter = Reporter::new("demo");
        reporter
            .record(TestResultEntry::failed("a", Duration::ZERO, "boom"))
            .unwrap();
        reporter
            .record(TestResultEntry::passed("b", Duration::ZERO))
            .unwrap();
        assert_eq!(reporter.failed_count(), 1);
        assert_eq!(reporter.passed_count(), 1);
    }

    #[test]
    fn test_fail_fast_stops_on_failure() {
        let mut reporter = Reporter::fail_fast("demo");
        reporter
            .record(TestResultEntry::passed("a", Duration::ZERO))
            .unwrap();
        let err = reporter
            .record(TestResultEntry::failed("b", Duration::ZERO, "boom"))
            .unwrap_err();
        assert!(matches!(err, OjearError::AssertionFailed { .. }));
        // The failing entry is still stored before the stop signal
        assert_eq!(reporter.entries().len(), 2);
    }

    #[test]
    fn test_summary_lists_statuses_and_diagnostics() {
        let mut reporter = Reporter::new("smoke");
        reporter
            .record(TestResultEntry::passed("greeting renders", Duration::ZERO))
            .unwrap();
        reporter
            .record(TestResultEntry::failed(
                "missing text",
                Duration::ZERO,
                "Unable to find text",
            ))
            .unwrap();
        let summary = reporter.summary();
        assert!(summary.contains("1 passed, 1 failed, 2 total"));
        assert!(summary.contains("[PASS] greeting renders"));
        assert!(summary.contains("[FAIL] missing text"));
        assert!(summary.contains("Unable to find text"));
    }

    #[test]
    fn test_json_export_round_trips() {
        let mut reporter = Reporter::new("smoke");
        reporter
            .record(TestResultEntry::passed("a", Duration::from_millis(5)))
            .unwrap();
        let json = reporter.to_json().unwrap();
        let back: Vec<TestResultEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert!(back[0].status.is_passed());
    }

    #[test]
    fn test_record_suite_bridges_harness_results() {
        let suite = TestSuite::new("demo")
            .with_case("passes", || Ok(()))
            .with_case("fails", || Err(OjearError::assertion("nope")));
        let results = TestHarness::new().run(&suite);

        let mut reporter = Reporter::new("demo");
        reporter.record_suite(&results).unwrap();
        assert_eq!(reporter.passed_count(), 1);
        assert_eq!(reporter.failed_count(), 1);
        assert!(!reporter.all_passed());
    }

    #[test]
    fn test_skipped_entries() {
        let entry = TestResultEntry::skipped("later");
        assert!(!entry.status.is_passed());
        assert!(!entry.status.is_failed());
    }
}
