//! The markup tree: elements, text and comments.

use crate::attr::{AttrValue, Attributes, is_global_attribute};
use crate::error::{MarkupError, Result};
use crate::tracing_macros::trace;

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with a tag, attributes and children.
    Element(Element),
    /// Text content.
    Text(String),
    /// A comment, rendered as `<!-- content -->`.
    Comment(String),
    /// A comment with `<!--` and `-->` on their own lines.
    BlockComment(String),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a comment node.
    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }

    /// Create a block comment node.
    pub fn block_comment(content: impl Into<String>) -> Self {
        Self::BlockComment(content.into())
    }

    /// Wrap an element.
    pub fn element(element: Element) -> Self {
        Self::Element(element)
    }

    /// Returns `Some(&str)` if this is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Returns `Some(&Element)` if this is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// What goes inside a new element: nothing, one node, or a sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Content {
    /// No children.
    #[default]
    Empty,
    /// A single child.
    One(Node),
    /// Children in order.
    Many(Vec<Node>),
}

impl Content {
    /// True if there is nothing to add.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::One(_) => false,
            Self::Many(nodes) => nodes.is_empty(),
        }
    }

    /// The nodes in order.
    pub fn into_nodes(self) -> Vec<Node> {
        match self {
            Self::Empty => Vec::new(),
            Self::One(node) => vec![node],
            Self::Many(nodes) => nodes,
        }
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::One(node)
    }
}

impl From<Element> for Content {
    fn from(e: Element) -> Self {
        Self::One(Node::Element(e))
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::One(Node::text(s))
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::One(Node::Text(s))
    }
}

impl From<Vec<Node>> for Content {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Many(nodes)
    }
}

impl From<Vec<Element>> for Content {
    fn from(elements: Vec<Element>) -> Self {
        Self::Many(elements.into_iter().map(Node::Element).collect())
    }
}

impl<const N: usize> From<[Node; N]> for Content {
    fn from(nodes: [Node; N]) -> Self {
        Self::Many(nodes.into())
    }
}

impl From<Option<Node>> for Content {
    fn from(node: Option<Node>) -> Self {
        node.map_or(Self::Empty, Self::One)
    }
}

/// An element: tag name, ordered attributes and ordered children.
///
/// Void elements (`<br />`, `<meta />`, ...) never hold children; every path
/// that would add one fails with [`MarkupError::VoidContent`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Attributes,
    children: Vec<Node>,
    void: bool,
    allowed_attributes: Option<&'static [&'static str]>,
}

impl Element {
    /// Create an empty, non-void element.
    ///
    /// The tag name is taken as-is; use [`create_element`] to validate it.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
            void: false,
            allowed_attributes: None,
        }
    }

    /// Create a void element.
    pub fn void(tag: impl Into<String>) -> Self {
        Self {
            void: true,
            ..Self::new(tag)
        }
    }

    /// Create a non-void element holding `content`.
    pub fn with_content(tag: impl Into<String>, content: impl Into<Content>) -> Self {
        let mut element = Self::new(tag);
        element.children = content.into().into_nodes();
        element
    }

    /// Set an attribute whose name is known to be valid for this element.
    pub(crate) fn insert_attr(&mut self, name: &'static str, value: impl Into<AttrValue>) {
        self.attrs.insert_normalized(name, value.into());
    }

    pub(crate) fn restrict_attributes(&mut self, allowed: Option<&'static [&'static str]>) {
        self.allowed_attributes = allowed;
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// True for void elements.
    pub fn is_void(&self) -> bool {
        self.void
    }

    /// The attributes in insertion order.
    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    /// Get an attribute value by its rendered name.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// The children in order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Iterate over child elements (skipping text and comments).
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// The concatenated text of the whole subtree, comments excluded.
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => result.push_str(t),
                Node::Element(e) => result.push_str(&e.text_content()),
                Node::Comment(_) | Node::BlockComment(_) => {}
            }
        }
        result
    }

    /// Set one attribute, replacing any previous value for the same key.
    pub fn add_property(&mut self, key: &str, value: impl Into<AttrValue>) -> Result<()> {
        let name = crate::attr::normalize_key(key)?;
        if let Some(allowed) = self.allowed_attributes
            && !allowed.contains(&&*name)
            && !is_global_attribute(&name)
        {
            trace!(tag = %self.tag, key = %name, "attribute rejected");
            return Err(MarkupError::AttributeNotAllowed {
                tag: self.tag.clone(),
                key: name.into_owned(),
            });
        }
        self.attrs.insert_normalized(name, value.into());
        Ok(())
    }

    /// Set several attributes in order.
    ///
    /// Stops at the first bad key; pairs before it stay applied.
    pub fn add_properties<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        for (key, value) in pairs {
            self.add_property(key.as_ref(), value)?;
        }
        Ok(())
    }

    /// Append one child.
    pub fn add_child(&mut self, child: impl Into<Node>) -> Result<()> {
        if self.void {
            trace!(tag = %self.tag, "child rejected by void element");
            return Err(MarkupError::VoidContent {
                tag: self.tag.clone(),
            });
        }
        self.children.push(child.into());
        Ok(())
    }

    /// Append every node of `content` in order.
    pub fn add_content(&mut self, content: impl Into<Content>) -> Result<()> {
        let content = content.into();
        if content.is_empty() {
            return Ok(());
        }
        if self.void {
            return Err(MarkupError::VoidContent {
                tag: self.tag.clone(),
            });
        }
        self.children.extend(content.into_nodes());
        Ok(())
    }

    /// Append `name: value;` to the inline `style` attribute.
    ///
    /// Underscores in `name` become hyphens, so `font_size` writes
    /// `font-size`.
    pub fn add_style(&mut self, name: &str, value: impl std::fmt::Display) -> Result<()> {
        let declaration = format!("{}: {value};", name.replace('_', "-"));
        match self.attrs.get_mut("style") {
            Some(AttrValue::Str(style)) => {
                style.push_str(&declaration);
                Ok(())
            }
            _ => self.add_property("style", declaration),
        }
    }

    /// Append several inline style declarations in order.
    pub fn add_styles<I, K, V>(&mut self, declarations: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: std::fmt::Display,
    {
        for (name, value) in declarations {
            self.add_style(name.as_ref(), value)?;
        }
        Ok(())
    }

    /// Builder form of [`add_property`](Self::add_property).
    pub fn with_attr(mut self, key: &str, value: impl Into<AttrValue>) -> Result<Self> {
        self.add_property(key, value)?;
        Ok(self)
    }

    /// Builder form of [`add_properties`](Self::add_properties).
    pub fn with_attrs<I, K, V>(mut self, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        self.add_properties(pairs)?;
        Ok(self)
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn with_child(mut self, child: impl Into<Node>) -> Result<Self> {
        self.add_child(child)?;
        Ok(self)
    }

    /// Builder form of [`add_content`](Self::add_content).
    pub fn with_children(mut self, content: impl Into<Content>) -> Result<Self> {
        self.add_content(content)?;
        Ok(self)
    }

    /// Builder form of [`add_style`](Self::add_style).
    pub fn with_style(mut self, name: &str, value: impl std::fmt::Display) -> Result<Self> {
        self.add_style(name, value)?;
        Ok(self)
    }
}

fn validate_tag_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '=')
        });
    if bad {
        return Err(MarkupError::InvalidTagName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Build an element in one call.
///
/// `content` may be `()`, a string, a node, an element, or a sequence of
/// nodes or elements. Void elements reject any non-empty content. Attribute
/// keys are normalized as described in [`crate::attr`].
///
/// ```
/// use markupify::create_element;
///
/// let link = create_element("a", "home", [("href", "/")], false).unwrap();
/// assert_eq!(link.render(), r#"<a href="/">home</a>"#);
///
/// let rule = create_element("hr", (), [] as [(&str, &str); 0], true).unwrap();
/// assert_eq!(rule.render(), "<hr />");
/// ```
pub fn create_element<I, K, V>(
    tag_name: &str,
    content: impl Into<Content>,
    attributes: I,
    is_void: bool,
) -> Result<Element>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<AttrValue>,
{
    create_restricted(tag_name, content.into(), attributes, is_void, None)
}

pub(crate) fn create_restricted<I, K, V>(
    tag_name: &str,
    content: Content,
    attributes: I,
    is_void: bool,
    allowed: Option<&'static [&'static str]>,
) -> Result<Element>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<AttrValue>,
{
    validate_tag_name(tag_name)?;
    if is_void && !content.is_empty() {
        trace!(tag = tag_name, "content rejected by void element");
        return Err(MarkupError::VoidContent {
            tag: tag_name.to_string(),
        });
    }

    let mut element = if is_void {
        Element::void(tag_name)
    } else {
        Element::with_content(tag_name, content)
    };
    element.restrict_attributes(allowed);
    element.add_properties(attributes)?;
    Ok(element)
}
