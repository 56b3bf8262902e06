//! Declarative component descriptions.
//!
//! A [`Component`] is an immutable element tree built fluently with
//! [`ComponentBuilder`]. It describes what a piece of UI contains; it is
//! rendered into an in-memory tree by [`crate::render::mount`] and never
//! touches a real window or DOM.

use serde::{Deserialize, Serialize};

/// Declarative description of a UI element tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    /// Heading element (levels 1-6)
    Heading {
        /// Heading level (1 = largest)
        level: u8,
        /// Heading text
        text: String,
    },
    /// Paragraph of text
    Paragraph {
        /// Paragraph text
        text: String,
    },
    /// Button element
    Button {
        /// Button label
        label: String,
    },
    /// Bare text node
    Text(String),
    /// Container with child components
    Container {
        /// Container name (for diagnostics)
        name: String,
        /// Child components, document order
        children: Vec<Component>,
    },
}

impl Component {
    /// Create a heading component
    #[must_use]
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph component
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// Create a button component
    #[must_use]
    pub fn button(label: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
        }
    }

    /// Create a bare text node
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Element kind name, used in render node tags and diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::Paragraph { .. } => "paragraph",
            Self::Button { .. } => "button",
            Self::Text(_) => "text",
            Self::Container { .. } => "container",
        }
    }
}

/// Fluent builder for container components
///
/// # Example
///
/// ```
/// use ojear::ComponentBuilder;
///
/// let app = ComponentBuilder::new("app")
///     .heading(1, "Hello, Frontend!")
///     .paragraph("Welcome to the demo")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentBuilder {
    name: String,
    children: Vec<Component>,
}

impl ComponentBuilder {
    /// Create a new builder for a named container
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Add a heading child
    #[must_use]
    pub fn heading(mut self, level: u8, text: impl Into<String>) -> Self {
        self.children.push(Component::heading(level, text));
        self
    }

    /// Add a paragraph child
    #[must_use]
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.children.push(Component::paragraph(text));
        self
    }

    /// Add a button child
    #[must_use]
    pub fn button(mut self, label: impl Into<String>) -> Self {
        self.children.push(Component::button(label));
        self
    }

    /// Add a bare text child
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Component::text(text));
        self
    }

    /// Add an already-built child component
    #[must_use]
    pub fn child(mut self, component: Component) -> Self {
        self.children.push(component);
        self
    }

    /// Build the container component
    #[must_use]
    pub fn build(self) -> Component {
        Component::Container {
            name: self.name,
            children: self.children,
        }
    }
}

/// Demo component matching the canonical greeting smoke test
///
/// Renders a single level-1 heading reading "Hello, Frontend!".
#[must_use]
pub fn greeting() -> Component {
    ComponentBuilder::new("app")
        .heading(1, "Hello, Frontend!")
        .build()
}
