//! Mounting component descriptions into render trees.
//!
//! [`mount`] walks a [`Component`] and produces a [`RenderTree`]: a fresh,
//! exclusively-owned in-memory node tree. Mounting is synchronous, performs
//! no I/O, and is deterministic: mounting the same description twice
//! yields trees with identical document-order text content.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::component::Component;
use crate::result::{OjearError, OjearResult};

/// A node in a mounted render tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderNode {
    /// Element kind ("heading", "paragraph", "button", "text", "container")
    pub kind: String,
    /// Visible text carried by this node, if any
    pub text: Option<String>,
    /// Child nodes, document order
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    fn leaf(kind: &str, text: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Whether this node carries visible text
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.text.as_ref().is_some_and(|t| !t.is_empty())
    }
}

/// An in-memory tree produced by mounting a component description
///
/// One tree exists per mount; the tree is owned by the test invocation
/// and discarded with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderTree {
    root: RenderNode,
}

impl RenderTree {
    /// The root node
    #[must_use]
    pub fn root(&self) -> &RenderNode {
        &self.root
    }

    /// Iterate every node in document order (depth-first, pre-order)
    pub fn nodes(&self) -> impl Iterator<Item = &RenderNode> {
        DocumentOrder {
            stack: vec![&self.root],
        }
    }

    /// Text content of every text-bearing node, document order
    ///
    /// This is the list enumerated in not-found diagnostics.
    #[must_use]
    pub fn text_nodes(&self) -> Vec<&str> {
        self.nodes()
            .filter_map(|n| n.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Total node count, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }
}

/// Depth-first pre-order traversal over a render tree
struct DocumentOrder<'a> {
    stack: Vec<&'a RenderNode>,
}

impl<'a> Iterator for DocumentOrder<'a> {
    type Item = &'a RenderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Mount a component description into a render tree
///
/// # Errors
///
/// Returns [`OjearError::Render`] if the description is malformed:
/// heading level outside 1..=6, or any text-bearing element whose text
/// is empty.
pub fn mount(component: &Component) -> OjearResult<RenderTree> {
    let root = mount_node(component)?;
    let tree = RenderTree { root };
    debug!(nodes = tree.node_count(), "mounted component");
    Ok(tree)
}

fn mount_node(component: &Component) -> OjearResult<RenderNode> {
    match component {
        Component::Heading { level, text } => {
            if !(1..=6).contains(level) {
                return Err(OjearError::render(format!(
                    "heading level must be 1-6, got {level}"
                )));
            }
            if text.is_empty() {
                return Err(OjearError::render("heading text must not be empty"));
            }
            Ok(RenderNode::leaf("heading", text))
        }
        Component::Paragraph { text } => {
            if text.is_empty() {
                return Err(OjearError::render("paragraph text must not be empty"));
            }
            Ok(RenderNode::leaf("paragraph", text))
        }
        Component::Button { label } => {
            if label.is_empty() {
                return Err(OjearError::render("button label must not be empty"));
            }
            Ok(RenderNode::leaf("button", label))
        }
        Component::Text(text) => {
            if text.is_empty() {
                return Err(OjearError::render("text node must not be empty"));
            }
            Ok(RenderNode::leaf("text", text))
        }
        // Container names show up in Debug output only, never as text content
        Component::Container { children, .. } => {
            let children = children
                .iter()
                .map(mount_node)
                .collect::<OjearResult<Vec<_>>>()?;
            Ok(RenderNode {
                kind: "container".to_string(),
                text: None,
                children,
            })
        }
    }
}
