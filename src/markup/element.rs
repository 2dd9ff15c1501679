//! Element tree
//!
//! An [`Element`] is either a named markup element (`<ul>`, `<p>`, ...) or an
//! anonymous grouping node that renders only its contents. Document roots are
//! anonymous.
//!
//! Children are [`Content`] entries kept in insertion order: nested elements,
//! raw text (which may carry `${name}` placeholders), or an empty entry left by
//! appending `None`. Attributes are `(name, value)` pairs, also kept in
//! insertion order, duplicates included.
//!
//! Building:
//!
//! ```text
//! let mut doc = Element::root();
//! let ul = doc.child("html").child("body").child("ul");
//! for i in 0..3 {
//!     ul.child("li").append(i.to_string());
//! }
//! ```
//!
//! Appending an `Element` moves it into its parent, so a node can only ever
//! have one parent.

use super::error::RenderError;
use super::render::Renderer;
use super::template::Namespace;
use std::fmt;

/// A single child entry of an [`Element`]
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Element(Element),
    Text(String),
    /// Recorded by appending `None`; skipped when rendering
    Empty,
}

impl Content {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Content::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Content::Element(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }
}

impl From<Element> for Content {
    fn from(element: Element) -> Self {
        Content::Element(element)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Content::Text(text.clone())
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(content: Option<T>) -> Self {
        content.map_or(Content::Empty, Into::into)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Element(element) => write!(f, "{element}"),
            Content::Text(text) => write!(f, "Text('{text}')"),
            Content::Empty => write!(f, "Empty"),
        }
    }
}

/// A node of the markup tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Content>,
    multi_line: bool,
}

impl Element {
    /// A named element such as `div`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// An anonymous node; renders its children with no enclosing tag
    pub fn root() -> Self {
        Self::default()
    }

    /// Tag name, or `None` for anonymous nodes (an empty name counts as anonymous)
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_anonymous(&self) -> bool {
        self.name().is_none()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    /// Direct element children, skipping text and empty entries
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Content::as_element)
    }

    /// True once any element child has been appended
    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    /// Append an attribute; names and values are kept verbatim
    pub fn attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Same as [`Element::attr`]
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.attr(name, value)
    }

    /// Append a new child element and return it
    ///
    /// Every call creates a new sibling, even for a name used before.
    pub fn child(&mut self, name: impl Into<String>) -> &mut Element {
        self.multi_line = true;
        self.children.push(Content::Element(Element::new(name)));
        let Some(Content::Element(child)) = self.children.last_mut() else {
            unreachable!("an element was just pushed");
        };
        child
    }

    /// Append an element, text, or `None`
    pub fn append(&mut self, content: impl Into<Content>) -> &mut Self {
        let content = content.into();
        if content.is_element() {
            self.multi_line = true;
        }
        self.children.push(content);
        self
    }

    /// Set `class` and then `id`, skipping whichever is `None` or empty
    pub fn with_class_and_id(&mut self, class: Option<&str>, id: Option<&str>) -> &mut Self {
        if let Some(class) = class.filter(|class| !class.is_empty()) {
            self.attr("class", class);
        }
        if let Some(id) = id.filter(|id| !id.is_empty()) {
            self.attr("id", id);
        }
        self
    }

    pub fn class(&mut self, class: &str) -> &mut Self {
        self.with_class_and_id(Some(class), None)
    }

    pub fn id(&mut self, id: &str) -> &mut Self {
        self.with_class_and_id(None, Some(id))
    }

    /// Run `build` against this node and return its result
    ///
    /// Purely a grouping aid for nested construction code. Nothing is undone
    /// if `build` bails out early; whatever it appended stays appended.
    pub fn scope<R>(&mut self, build: impl FnOnce(&mut Self) -> R) -> R {
        build(self)
    }

    /// Render with default options, starting at the root level
    pub fn render(&self, namespace: &Namespace) -> Result<String, RenderError> {
        Renderer::default().render(self, namespace)
    }

    /// Render with default options at an explicit indentation level
    pub fn render_at(&self, level: isize, namespace: &Namespace) -> Result<String, RenderError> {
        Renderer::default().render_at(self, level, namespace)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Element({}, {} attributes, {} children)",
            self.name().unwrap_or("<anonymous>"),
            self.attributes.len(),
            self.children.len()
        )
    }
}
