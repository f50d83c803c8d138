//! Tag descriptors and one factory function per standard tag.
//!
//! Every tag is described by a [`TagDescriptor`]. The registry [`TAGS`]
//! answers lookups such as [`is_void_element`], and the flat factory
//! functions (`div`, `p`, `hr`, ...) are thin wrappers over the descriptors.
//!
//! New tags need no new types: declare a descriptor and call
//! [`TagDescriptor::create`].
//!
//! ```
//! use markupify::tags::{self, TagDescriptor};
//!
//! const BADGE: TagDescriptor = TagDescriptor::element("x-badge").allow(&["tone"]);
//!
//! let badge = BADGE.create("new", [("tone", "info")]).unwrap();
//! assert_eq!(badge.render(), r#"<x-badge tone="info">new</x-badge>"#);
//! assert!(BADGE.create((), [("href", "/")]).is_err());
//!
//! let page = tags::div(vec![tags::h1("Title"), tags::hr()]);
//! assert_eq!(page.render(), "<div><h1>Title</h1><hr /></div>");
//! ```

use crate::attr::AttrValue;
use crate::error::{MarkupError, Result};
use crate::node::{Content, Element, create_restricted};

/// Declarative description of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDescriptor {
    /// Tag name, emitted as written.
    pub name: &'static str,
    /// Void elements have no children and no closing tag.
    pub void: bool,
    /// When set, only these keys (plus global attributes) are accepted.
    pub allowed_attributes: Option<&'static [&'static str]>,
}

impl TagDescriptor {
    /// Describe an element that takes children.
    pub const fn element(name: &'static str) -> Self {
        Self {
            name,
            void: false,
            allowed_attributes: None,
        }
    }

    /// Describe a void element.
    pub const fn void(name: &'static str) -> Self {
        Self {
            name,
            void: true,
            allowed_attributes: None,
        }
    }

    /// Restrict the attribute keys accepted by elements built from this descriptor.
    pub const fn allow(mut self, keys: &'static [&'static str]) -> Self {
        self.allowed_attributes = Some(keys);
        self
    }

    /// Build an element from this descriptor.
    pub fn create<I, K, V>(&self, content: impl Into<Content>, attributes: I) -> Result<Element>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        create_restricted(
            self.name,
            content.into(),
            attributes,
            self.void,
            self.allowed_attributes,
        )
    }

    /// Build an empty element from this descriptor.
    pub fn empty(&self) -> Element {
        let mut element = if self.void {
            Element::void(self.name)
        } else {
            Element::new(self.name)
        };
        element.restrict_attributes(self.allowed_attributes);
        element
    }
}

/// Look a tag up in [`TAGS`], ignoring ASCII case.
pub fn descriptor(name: &str) -> Option<&'static TagDescriptor> {
    TAGS.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

/// True if `name` is a known void element.
pub fn is_void_element(name: &str) -> bool {
    descriptor(name).is_some_and(|d| d.void)
}

macro_rules! html_tags {
    ($($kind:ident $name:ident => $tag:literal;)*) => {
        /// Every tag known to this crate.
        pub static TAGS: &[TagDescriptor] = &[
            TagDescriptor::element("a"),
            TagDescriptor::void("img"),
            TagDescriptor::element("text"),
            $(html_tags!(@descriptor $kind $tag),)*
        ];

        $(html_tags!(@factory $kind $name $tag);)*
    };
    (@descriptor element $tag:literal) => {
        TagDescriptor::element($tag)
    };
    (@descriptor void $tag:literal) => {
        TagDescriptor::void($tag)
    };
    (@factory element $name:ident $tag:literal) => {
        #[doc = concat!("Create a `<", $tag, ">` element holding `content`.")]
        pub fn $name(content: impl Into<Content>) -> Element {
            Element::with_content($tag, content)
        }
    };
    (@factory void $name:ident $tag:literal) => {
        #[doc = concat!("Create a void `<", $tag, " />` element.")]
        pub fn $name() -> Element {
            Element::void($tag)
        }
    };
}

html_tags! {
    element abbr => "abbr";
    element address => "address";
    void area => "area";
    element article => "article";
    element aside => "aside";
    element audio => "audio";
    element b => "b";
    void base => "base";
    element bdi => "bdi";
    element bdo => "bdo";
    element blockquote => "blockquote";
    element body => "body";
    void br => "br";
    element button => "button";
    element canvas => "canvas";
    element caption => "caption";
    void circle => "circle";
    element cite => "cite";
    element code => "code";
    void col => "col";
    element colgroup => "colgroup";
    element data => "data";
    element datalist => "datalist";
    element dd => "dd";
    element defs => "defs";
    element del => "del";
    element details => "details";
    element dfn => "dfn";
    element dialog => "dialog";
    element div => "div";
    element dl => "dl";
    element dt => "dt";
    void ellipse => "ellipse";
    element em => "em";
    void embed => "embed";
    element fieldset => "fieldset";
    element figcaption => "figcaption";
    element figure => "figure";
    element footer => "footer";
    element form => "form";
    element h1 => "h1";
    element h2 => "h2";
    element h3 => "h3";
    element h4 => "h4";
    element h5 => "h5";
    element h6 => "h6";
    element head => "head";
    element header => "header";
    element hgroup => "hgroup";
    void hr => "hr";
    element html => "html";
    element i => "i";
    element iframe => "iframe";
    void input => "input";
    element ins => "ins";
    element kbd => "kbd";
    element label => "label";
    element legend => "legend";
    element li => "li";
    element linear_gradient => "linearGradient";
    void link => "link";
    element main => "main";
    element map => "map";
    element mark => "mark";
    element menu => "menu";
    void meta => "meta";
    element meter => "meter";
    element nav => "nav";
    element noscript => "noscript";
    element object => "object";
    element ol => "ol";
    element optgroup => "optgroup";
    element option => "option";
    element output => "output";
    element p => "p";
    void param => "param";
    element picture => "picture";
    void polygon => "polygon";
    element pre => "pre";
    element progress => "progress";
    element q => "q";
    void rect => "rect";
    element rp => "rp";
    element rt => "rt";
    element ruby => "ruby";
    element s => "s";
    element samp => "samp";
    element script => "script";
    element search => "search";
    element section => "section";
    element select => "select";
    element small => "small";
    void source => "source";
    element span => "span";
    void stop => "stop";
    element strong => "strong";
    element style => "style";
    element sub => "sub";
    element summary => "summary";
    element sup => "sup";
    element svg => "svg";
    element table => "table";
    element tbody => "tbody";
    element td => "td";
    element template => "template";
    element textarea => "textarea";
    element tfoot => "tfoot";
    element th => "th";
    element thead => "thead";
    element time => "time";
    element title => "title";
    element tr => "tr";
    void track => "track";
    element u => "u";
    element ul => "ul";
    element var => "var";
    element video => "video";
    void wbr => "wbr";
}

/// Create an `<a href="...">` element.
pub fn a(href: impl Into<AttrValue>, content: impl Into<Content>) -> Element {
    let mut link = Element::with_content("a", content);
    link.insert_attr("href", href);
    link
}

/// Create an `<img src="..." />` element.
pub fn img(src: impl Into<AttrValue>) -> Element {
    let mut image = Element::void("img");
    image.insert_attr("src", src);
    image
}

/// Create a heading element `<h1>` through `<h6>`.
pub fn h(level: u8, content: impl Into<Content>) -> Result<Element> {
    if !(1..=6).contains(&level) {
        return Err(MarkupError::InvalidHeadingLevel { level });
    }
    Ok(Element::with_content(format!("h{level}"), content))
}

/// Create an SVG `<text>` element.
pub fn svg_text(content: impl Into<Content>) -> Element {
    Element::with_content("text", content)
}

/// Create a text node; shorthand for [`Node::text`](crate::Node::text).
pub fn text(content: impl Into<String>) -> crate::Node {
    crate::Node::text(content)
}

/// Create a comment node; shorthand for [`Node::comment`](crate::Node::comment).
pub fn comment(content: impl Into<String>) -> crate::Node {
    crate::Node::comment(content)
}

/// Create a block comment node; shorthand for
/// [`Node::block_comment`](crate::Node::block_comment).
pub fn block_comment(content: impl Into<String>) -> crate::Node {
    crate::Node::block_comment(content)
}
