//! Assertions over query results.
//!
//! An assertion is a terminal, single-shot check: it takes a query and an
//! expectation (required or forbidden, required by default) and produces
//! an [`AssertionOutcome`]. Failing outcomes carry a diagnostic naming
//! the pattern searched and enumerating the text actually present.
//!
//! Named matchers live in an explicit [`MatcherRegistry`] built once
//! during harness setup and passed by reference to the assertion entry
//! points. There is no process-global matcher state.

use std::collections::HashMap;

use crate::query::TextQuery;
use crate::render::RenderTree;
use crate::result::{OjearError, OjearResult};

/// Whether matching text must exist or must be absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expectation {
    /// Matching text must be present (the default)
    #[default]
    Required,
    /// Matching text must be absent
    Forbidden,
}

/// Result of an assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionOutcome {
    /// Whether the assertion passed
    pub passed: bool,
    /// Diagnostic message; empty on pass
    pub message: String,
}

impl AssertionOutcome {
    /// Create a passing outcome
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    /// Create a failing outcome with a diagnostic
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Convert to a `Result`, turning a failing outcome into
    /// [`OjearError::AssertionFailed`]
    pub fn into_result(self) -> OjearResult<()> {
        if self.passed {
            Ok(())
        } else {
            Err(OjearError::assertion(self.message))
        }
    }
}

/// Check a query against an expectation
///
/// This is the single-shot Assert step: no retries, no timeouts.
///
/// # Errors
///
/// Returns [`OjearError::InvalidPattern`] if the query's regex fails to
/// compile. Assertion verdicts are reported in the returned outcome, not
/// as errors.
pub fn assert_text(
    tree: &RenderTree,
    query: &TextQuery,
    expectation: Expectation,
) -> OjearResult<AssertionOutcome> {
    let found = query.find(tree)?.is_some();
    let outcome = match (expectation, found) {
        (Expectation::Required, true) | (Expectation::Forbidden, false) => AssertionOutcome::pass(),
        (Expectation::Required, false) => AssertionOutcome::fail(format!(
            "expected text matching {:?} but none found. Available text: {:?}",
            query.pattern().source(),
            tree.text_nodes()
        )),
        (Expectation::Forbidden, true) => AssertionOutcome::fail(format!(
            "expected no text matching {:?} but a match is present",
            query.pattern().source()
        )),
    };
    Ok(outcome)
}

/// A named matcher predicate over a query and a render tree
pub trait Matcher: Send + Sync {
    /// Registry name of this matcher
    fn name(&self) -> &'static str;

    /// Evaluate the matcher
    ///
    /// # Errors
    ///
    /// Returns an error only for malformed queries; verdicts are carried
    /// in the outcome.
    fn check(&self, tree: &RenderTree, query: &TextQuery) -> OjearResult<AssertionOutcome>;
}

/// Matcher requiring matching text to be in the document
#[derive(Debug, Default)]
pub struct InDocument;

impl Matcher for InDocument {
    fn name(&self) -> &'static str {
        "in-document"
    }

    fn check(&self, tree: &RenderTree, query: &TextQuery) -> OjearResult<AssertionOutcome> {
        assert_text(tree, query, Expectation::Required)
    }
}

/// Matcher forbidding matching text from the document
#[derive(Debug, Default)]
pub struct Absent;

impl Matcher for Absent {
    fn name(&self) -> &'static str {
        "absent"
    }

    fn check(&self, tree: &RenderTree, query: &TextQuery) -> OjearResult<AssertionOutcome> {
        assert_text(tree, query, Expectation::Forbidden)
    }
}

/// Explicit registry of named matchers
///
/// Built once during harness setup and passed by reference wherever
/// assertions run.
///
/// # Example
///
/// ```
/// use ojear::{mount, greeting, MatcherRegistry, TextQuery};
///
/// let registry = MatcherRegistry::with_defaults();
/// let tree = mount(&greeting()).unwrap();
/// let query = TextQuery::regex("Hello, Frontend!").case_insensitive(true);
/// let outcome = registry.assert_with("in-document", &tree, &query).unwrap();
/// assert!(outcome.passed);
/// ```
#[derive(Default)]
pub struct MatcherRegistry {
    matchers: HashMap<&'static str, Box<dyn Matcher>>,
}

impl std::fmt::Debug for MatcherRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatcherRegistry")
            .field("matchers", &self.names())
            .finish()
    }
}

impl MatcherRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in matchers
    /// (`in-document`, `absent`)
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(InDocument));
        registry.register(Box::new(Absent));
        registry
    }

    /// Register a matcher under its own name, replacing any previous
    /// matcher with that name
    pub fn register(&mut self, matcher: Box<dyn Matcher>) {
        self.matchers.insert(matcher.name(), matcher);
    }

    /// Whether a matcher with this name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.matchers.contains_key(name)
    }

    /// Registered matcher names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.matchers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered matchers
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Run the named matcher against a tree and query
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::UnknownMatcher`] if no matcher with this
    /// name is registered; otherwise whatever the matcher returns.
    pub fn assert_with(
        &self,
        name: &str,
        tree: &RenderTree,
        query: &TextQuery,
    ) -> OjearResult<AssertionOutcome> {
        let matcher = self
            .matchers
            .get(name)
            .ok_or_else(|| OjearError::UnknownMatcher {
                name: name.to_string(),
            })?;
        matcher.check(tree, query)
    }
}

/// Fluent assertion entry point for a render tree
#[derive(Debug, Clone, Copy)]
pub struct Expect<'t> {
    tree: &'t RenderTree,
}

impl Expect<'_> {
    /// Assert that text matching the query is in the tree
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::AssertionFailed`] with a diagnostic listing
    /// the available text if nothing matches.
    pub fn to_contain_text(&self, query: &TextQuery) -> OjearResult<()> {
        assert_text(self.tree, query, Expectation::Required)?.into_result()
    }

    /// Assert that no text matching the query is in the tree
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::AssertionFailed`] if a match is present.
    pub fn not_to_contain_text(&self, query: &TextQuery) -> OjearResult<()> {
        assert_text(self.tree, query, Expectation::Forbidden)?.into_result()
    }
}

/// Create an expectation for a render tree
///
/// ```
/// use ojear::{expect, mount, greeting, TextQuery};
///
/// let tree = mount(&greeting()).unwrap();
/// let query = TextQuery::regex("Hello, Frontend!").case_insensitive(true);
/// expect(&tree).to_contain_text(&query).unwrap();
/// ```
#[must_use]
pub fn expect(tree: &RenderTree) -> Expect<'_> {
    Expect { tree }
}
