//! Test harness for registering and running named test cases.
//!
//! A [`TestCase`] is a human-readable description plus a body returning
//! `OjearResult<()>`. Cases run single-threaded and to completion; any
//! error the body returns (render failures included) becomes a failing
//! result. The overall process exit code belongs to the embedding test
//! runner, not to this harness.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::result::OjearResult;

/// Body of a test case
pub type TestBody = Box<dyn Fn() -> OjearResult<()> + Send + Sync>;

/// A single named test case
pub struct TestCase {
    /// Human-readable description
    pub name: String,
    body: TestBody,
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

impl TestCase {
    /// Create a new test case
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        body: impl Fn() -> OjearResult<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Run the case body once
    ///
    /// # Errors
    ///
    /// Propagates whatever the body returns.
    pub fn run(&self) -> OjearResult<()> {
        (self.body)()
    }
}

/// A suite of test cases, run in registration order
#[derive(Debug, Default)]
pub struct TestSuite {
    /// Suite name
    pub name: String,
    /// Registered cases
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Create a new suite
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
        }
    }

    /// Register a test case
    pub fn add_case(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    /// Register a test case, builder-style
    #[must_use]
    pub fn with_case(
        mut self,
        name: impl Into<String>,
        body: impl Fn() -> OjearResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.add_case(TestCase::new(name, body));
        self
    }

    /// Number of registered cases
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }
}

/// Result of running a single test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// Case name
    pub name: String,
    /// Whether the case passed
    pub passed: bool,
    /// Error message if failed
    pub error: Option<String>,
    /// Wall-clock duration
    pub duration: Duration,
}

/// Results from running a suite
#[derive(Debug, Clone, Default)]
pub struct SuiteResults {
    /// Suite name
    pub suite_name: String,
    /// Per-case results, run order
    pub results: Vec<TestResult>,
    /// Total wall-clock duration
    pub duration: Duration,
}

impl SuiteResults {
    /// Whether every case passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Count of passing cases
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Count of failing cases
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    /// Total case count
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// The failing results
    #[must_use]
    pub fn failures(&self) -> Vec<&TestResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }
}

/// Runs suites, single-threaded, in registration order
#[derive(Debug, Default)]
pub struct TestHarness {
    /// Stop at the first failing case
    pub fail_fast: bool,
}

impl TestHarness {
    /// Create a harness with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable fail-fast mode
    #[must_use]
    pub const fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Run every case in the suite
    #[must_use]
    pub fn run(&self, suite: &TestSuite) -> SuiteResults {
        let start = Instant::now();
        let mut results = Vec::with_capacity(suite.case_count());

        info!(suite = %suite.name, cases = suite.case_count(), "running suite");
        for case in &suite.cases {
            let case_start = Instant::now();
            let outcome = case.run();
            let duration = case_start.elapsed();
            let result = match outcome {
                Ok(()) => TestResult {
                    name: case.name.clone(),
                    passed: true,
                    error: None,
                    duration,
                },
                Err(e) => {
                    warn!(case = %case.name, error = %e, "test case failed");
                    TestResult {
                        name: case.name.clone(),
                        passed: false,
                        error: Some(e.to_string()),
                        duration,
                    }
                }
            };
            let failed = !result.passed;
            results.push(result);
            if failed && self.fail_fast {
                break;
            }
        }

        SuiteResults {
            suite_name: suite.name.clone(),
            results,
            duration: start.elapsed(),
        }
    }
}
