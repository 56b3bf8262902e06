//! Ojear: Declarative UI Smoke-Test Harness
//!
//! Ojear (Spanish: "to glance over") mounts a declarative component
//! description into an in-memory render tree, queries the tree for text
//! content, and asserts presence or absence: no browser, no window, no
//! real DOM.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     OJEAR Pipeline                               │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────┐   ┌──────────┐   ┌────────┐          │
//! │  │ Component │──►│ Mount  │──►│ Query    │──►│ Assert │──► Pass/ │
//! │  │ (builder) │   │ (tree) │   │ (text)   │   │        │    Fail  │
//! │  └───────────┘   └────────┘   └──────────┘   └────────┘          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use ojear::{expect, greeting, mount, TextQuery};
//!
//! let tree = mount(&greeting()).unwrap();
//! let query = TextQuery::regex("Hello, Frontend!").case_insensitive(true);
//! expect(&tree).to_contain_text(&query).unwrap();
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

/// Assertions, matchers, and the explicit matcher registry
pub mod assertion;

/// Declarative component descriptions and the fluent builder
pub mod component;

/// Test case registration and single-threaded suite execution
pub mod harness;

/// Text queries over render trees
pub mod query;

/// Mounting component descriptions into render trees
pub mod render;

/// Reporting with fail-fast and collect-all modes
pub mod reporter;

mod result;

pub use assertion::{
    assert_text, expect, Absent, AssertionOutcome, Expect, Expectation, InDocument, Matcher,
    MatcherRegistry,
};
pub use component::{greeting, Component, ComponentBuilder};
pub use harness::{SuiteResults, TestBody, TestCase, TestHarness, TestResult, TestSuite};
pub use query::{Pattern, QueryOptions, TextQuery};
pub use render::{mount, RenderNode, RenderTree};
pub use reporter::{FailureMode, Reporter, TestResultEntry, TestStatus};
pub use result::{OjearError, OjearResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::assertion::{assert_text, expect, Expectation, MatcherRegistry};
    pub use super::component::{Component, ComponentBuilder};
    pub use super::harness::{TestCase, TestHarness, TestSuite};
    pub use super::query::TextQuery;
    pub use super::render::mount;
    pub use super::reporter::Reporter;
    pub use super::result::{OjearError, OjearResult};
}
