//! Text queries over render trees.
//!
//! Queries are read-only: they walk the most recently mounted
//! [`RenderTree`] in document order and match text-bearing nodes against
//! a [`Pattern`]. Three lookup flavors mirror the usual harness
//! conventions:
//!
//! - [`RenderTree::query_by_text`] returns `Option`; absence is not an error
//! - [`RenderTree::get_by_text`] returns `Result`; absence (or ambiguity under
//!   strict mode) is an error listing the text actually present
//! - [`RenderTree::get_all_by_text`] returns every match, document order

use regex::RegexBuilder;
use tracing::trace;

use crate::render::{RenderNode, RenderTree};
use crate::result::{OjearError, OjearResult};

/// A text-match pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Literal substring match
    Substring(String),
    /// Regular expression match (source, compiled per query)
    Regex(String),
}

impl Pattern {
    /// Create a literal substring pattern
    #[must_use]
    pub fn substring(s: impl Into<String>) -> Self {
        Self::Substring(s.into())
    }

    /// Create a regex pattern from its source text
    #[must_use]
    pub fn regex(source: impl Into<String>) -> Self {
        Self::Regex(source.into())
    }

    /// The pattern source, for diagnostics
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Substring(s) | Self::Regex(s) => s,
        }
    }
}

/// Options controlling query behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Match case-insensitively
    pub case_insensitive: bool,
    /// Require at most one match for single-node lookups
    pub strict: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            strict: true,
        }
    }
}

/// A text query: pattern plus options
///
/// # Example
///
/// ```
/// use ojear::{mount, greeting, TextQuery};
///
/// let tree = mount(&greeting()).unwrap();
/// let query = TextQuery::substring("hello, frontend!").case_insensitive(true);
/// assert!(query.find(&tree).unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TextQuery {
    pattern: Pattern,
    options: QueryOptions,
}

impl TextQuery {
    /// Create a query from any pattern
    #[must_use]
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            options: QueryOptions::default(),
        }
    }

    /// Create a literal substring query
    #[must_use]
    pub fn substring(s: impl Into<String>) -> Self {
        Self::new(Pattern::substring(s))
    }

    /// Create a regex query
    #[must_use]
    pub fn regex(source: impl Into<String>) -> Self {
        Self::new(Pattern::regex(source))
    }

    /// Set case-insensitive matching
    #[must_use]
    pub const fn case_insensitive(mut self, yes: bool) -> Self {
        self.options.case_insensitive = yes;
        self
    }

    /// Set strict single-match mode for `get`-style lookups
    #[must_use]
    pub const fn strict(mut self, yes: bool) -> Self {
        self.options.strict = yes;
        self
    }

    /// The pattern
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The options
    #[must_use]
    pub const fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// First matching node in document order, or `None`
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::InvalidPattern`] if a regex pattern fails to
    /// compile.
    pub fn find<'t>(&self, tree: &'t RenderTree) -> OjearResult<Option<&'t RenderNode>> {
        Ok(self.find_all(tree)?.into_iter().next())
    }

    /// Every matching node in document order
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::InvalidPattern`] if a regex pattern fails to
    /// compile.
    pub fn find_all<'t>(&self, tree: &'t RenderTree) -> OjearResult<Vec<&'t RenderNode>> {
        let matcher = self.compile()?;
        let matches: Vec<&RenderNode> = tree
            .nodes()
            .filter(|n| n.has_text())
            .filter(|n| n.text.as_deref().is_some_and(|t| matcher.is_match(t)))
            .collect();
        trace!(
            pattern = self.pattern.source(),
            matches = matches.len(),
            "text query"
        );
        Ok(matches)
    }

    fn compile(&self) -> OjearResult<CompiledPattern> {
        match &self.pattern {
            Pattern::Substring(s) => {
                if self.options.case_insensitive {
                    Ok(CompiledPattern::SubstringFolded(s.to_lowercase()))
                } else {
                    Ok(CompiledPattern::Substring(s.clone()))
                }
            }
            Pattern::Regex(source) => {
                let regex = RegexBuilder::new(source)
                    .case_insensitive(self.options.case_insensitive)
                    .build()
                    .map_err(|e| OjearError::InvalidPattern {
                        pattern: source.clone(),
                        message: e.to_string(),
                    })?;
                Ok(CompiledPattern::Regex(regex))
            }
        }
    }
}

enum CompiledPattern {
    Substring(String),
    SubstringFolded(String),
    Regex(regex::Regex),
}

impl CompiledPattern {
    fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Substring(needle) => text.contains(needle.as_str()),
            Self::SubstringFolded(needle) => text.to_lowercase().contains(needle.as_str()),
            Self::Regex(re) => re.is_match(text),
        }
    }
}

impl RenderTree {
    /// First node matching the query, or `None` if absent
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::InvalidPattern`] on a bad regex.
    pub fn query_by_text(&self, query: &TextQuery) -> OjearResult<Option<&RenderNode>> {
        query.find(self)
    }

    /// The single node matching the query
    ///
    /// # Errors
    ///
    /// - [`OjearError::TextNotFound`] if nothing matches; the message
    ///   enumerates the tree's text nodes
    /// - [`OjearError::AmbiguousText`] if strict mode is on and more than
    ///   one node matches
    /// - [`OjearError::InvalidPattern`] on a bad regex
    pub fn get_by_text(&self, query: &TextQuery) -> OjearResult<&RenderNode> {
        let matches = query.find_all(self)?;
        match matches.as_slice() {
            [] => Err(OjearError::TextNotFound {
                pattern: query.pattern().source().to_string(),
                available: self.text_nodes().iter().map(ToString::to_string).collect(),
            }),
            [one] => Ok(*one),
            many if query.options().strict => Err(OjearError::AmbiguousText {
                pattern: query.pattern().source().to_string(),
                matches: many
                    .iter()
                    .filter_map(|n| n.text.clone())
                    .collect(),
            }),
            many => Ok(many[0]),
        }
    }

    /// Every node matching the query, document order
    ///
    /// # Errors
    ///
    /// Returns [`OjearError::InvalidPattern`] on a bad regex.
    pub fn get_all_by_text(&self, query: &TextQuery) -> OjearResult<Vec<&RenderNode>> {
        query.find_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{greeting, ComponentBuilder};
    use crate::render::mount;

    fn two_buttons() -> RenderTree {
        mount(
            &ComponentBuilder::new("app")
                .button("Save")
                .button("Save All")
                .build(),
        )
        .unwrap()
    }

    mod substring_tests {
        use super::*;

        #[test]
        fn test_substring_exact_case_matches() {
            let tree = mount(&greeting()).unwrap();
            let q = TextQuery::substring("Hello, Frontend!");
            assert!(q.find(&tree).unwrap().is_some());
        }

        #[test]
        fn test_substring_wrong_case_misses_by_default() {
            let tree = mount(&greeting()).unwrap();
            let q = TextQuery::substring("hello, frontend!");
            assert!(q.find(&tree).unwrap().is_none());
        }

        #[test]
        fn test_substring_case_insensitive_variants_agree() {
            let tree = mount(&greeting()).unwrap();
            let lower = TextQuery::substring("hello, frontend!").case_insensitive(true);
            let upper = TextQuery::substring("HELLO, FRONTEND!").case_insensitive(true);
            let a = lower.find(&tree).unwrap();
            let b = upper.find(&tree).unwrap();
            assert_eq!(a, b);
            assert!(a.is_some());
        }

        #[test]
        fn test_substring_partial_match() {
            let tree = mount(&greeting()).unwrap();
            let q = TextQuery::substring("Frontend");
            assert!(q.find(&tree).unwrap().is_some());
        }
    }

    mod regex_tests {
        use super::*;

        #[test]
        fn test_regex_case_insensitive_flag() {
            // The canonical /Hello, Frontend!/i query
            let tree = mount(&greeting()).unwrap();
            let q = TextQuery::regex("Hello, Frontend!").case_insensitive(true);
            let node = q.find(&tree).unwrap().unwrap();
            assert_eq!(node.text.as_deref(), Some("Hello, Frontend!"));
        }

        #[test]
        fn test_regex_anchors() {
            let tree = two_buttons();
            let q = TextQuery::regex("^Save$");
            let matches = q.find_all(&tree).unwrap();
            assert_eq!(matches.len(), 1);
            assert_eq!(matches[0].text.as_deref(), Some("Save"));
        }

        #[test]
        fn test_invalid_regex_reports_pattern() {
            let tree = mount(&greeting()).unwrap();
            let q = TextQuery::regex("[unclosed");
            let err = q.find(&tree).unwrap_err();
            assert!(matches!(err, OjearError::InvalidPattern { .. }));
            assert!(err.to_string().contains("[unclosed"));
        }
    }

    mod lookup_tests {
        use super::*;

        #[test]
        fn test_query_by_text_absent_is_none_not_error() {
            let tree = mount(&greeting()).unwrap();
            let q = TextQuery::substring("Goodbye");
            assert!(tree.query_by_text(&q).unwrap().is_none());
        }

        #[test]
        fn test_get_by_text_absent_lists_available() {
            let tree = mount(&ComponentBuilder::new("app").text("Goodbye").build()).unwrap();
            let q = TextQuery::substring("Hello, Frontend!");
            let err = tree.get_by_text(&q).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("Hello, Frontend!"));
            assert!(msg.contains("Goodbye"));
        }

        #[test]
        fn test_get_by_text_strict_rejects_ambiguity() {
            let tree = two_buttons();
            let q = TextQuery::substring("Save");
            let err = tree.get_by_text(&q).unwrap_err();
            assert!(matches!(err, OjearError::AmbiguousText { .. }));
        }

        #[test]
        fn test_get_by_text_non_strict_takes_first() {
            let tree = two_buttons();
            let q = TextQuery::substring("Save").strict(false);
            let node = tree.get_by_text(&q).unwrap();
            assert_eq!(node.text.as_deref(), Some("Save"));
        }

        #[test]
        fn test_get_all_by_text_document_order() {
            let tree = two_buttons();
            let q = TextQuery::substring("Save");
            let texts: Vec<_> = tree
                .get_all_by_text(&q)
                .unwrap()
                .iter()
                .filter_map(|n| n.text.as_deref())
                .collect();
            assert_eq!(texts, vec!["Save", "Save All"]);
        }

        #[test]
        fn test_query_is_read_only() {
            let tree = mount(&greeting()).unwrap();
            let before = tree.clone();
            let q = TextQuery::substring("Hello");
            let _ = tree.query_by_text(&q).unwrap();
            assert_eq!(tree, before);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_mount_idempotent_for_any_text(text in "[a-zA-Z0-9 ,!]{1,40}") {
                let c = ComponentBuilder::new("app").text(text.clone()).build();
                let a = mount(&c).unwrap();
                let b = mount(&c).unwrap();
                let q = TextQuery::substring(text).case_insensitive(true);
                prop_assert_eq!(a.query_by_text(&q).unwrap(), b.query_by_text(&q).unwrap());
            }

            #[test]
            fn prop_case_insensitive_fold_equivalence(text in "[a-zA-Z]{1,20}") {
                let c = ComponentBuilder::new("app").text(text.clone()).build();
                let tree = mount(&c).unwrap();
                let lower = TextQuery::substring(text.to_lowercase()).case_insensitive(true);
                let upper = TextQuery::substring(text.to_uppercase()).case_insensitive(true);
                prop_assert_eq!(
                    tree.query_by_text(&lower).unwrap().is_some(),
                    tree.query_by_text(&upper).unwrap().is_some()
                );
            }
        }
    }
}
