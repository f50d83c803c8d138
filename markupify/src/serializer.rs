//! HTML serializer with compact and pretty-printed output.
//!
//! Compact output puts the whole tree on one line with no added whitespace.
//! Pretty output puts every element, text run and comment on its own line,
//! indented by nesting depth, with closing tags lined up under their opening
//! tags. A lone text child goes on its own line too:
//!
//! ```
//! use markupify::tags::{div, h1};
//!
//! let tree = div(h1("Greetings"));
//! assert_eq!(tree.render(), "<div><h1>Greetings</h1></div>");
//! assert_eq!(
//!     tree.render_pretty(),
//!     "<div>\n <h1>\n  Greetings\n </h1>\n</div>\n"
//! );
//! ```
//!
//! Text and attribute values are HTML-escaped by default; see
//! [`SerializeOptions::escape`].

use std::borrow::Cow;
use std::fmt;

use crate::attr::{AttrValue, Attributes};
use crate::node::{Element, Node};

/// HTML5 elements where whitespace is significant (preformatted content).
/// Pretty output renders these on a single line so their content is untouched.
const WHITESPACE_SENSITIVE_ELEMENTS: &[&str] = &["pre", "textarea", "script", "style"];

/// HTML5 raw text elements where content should NOT be HTML-escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Options for HTML serialization.
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Whether to pretty-print with indentation (default: false for compact output)
    pub pretty: bool,
    /// Indentation unit for pretty-printing (default: one space)
    pub indent: Cow<'static, str>,
    /// Whether void elements end with ` />` (default: true) or a bare `>`
    pub self_closing_void: bool,
    /// Whether text and attribute values are HTML-escaped (default: true)
    pub escape: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: Cow::Borrowed(" "),
            self_closing_void: true,
            escape: true,
        }
    }
}

impl SerializeOptions {
    /// Create new default options (compact output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printing with the default indentation.
    pub const fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Set a custom indentation unit (implies pretty-printing).
    pub fn indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.indent = indent.into();
        self.pretty = true;
        self
    }

    /// Choose between `<br />` (true) and `<br>` (false).
    pub const fn self_closing_void(mut self, value: bool) -> Self {
        self.self_closing_void = value;
        self
    }

    /// Turn escaping of text and attribute values on or off.
    ///
    /// With escaping off, content is written exactly as given, which is only
    /// safe for trusted input.
    pub const fn escape(mut self, value: bool) -> Self {
        self.escape = value;
        self
    }
}

/// Anything that can be written by an [`HtmlWriter`].
pub trait Markup {
    /// Write `self` at the writer's current depth.
    fn write_markup(&self, writer: &mut HtmlWriter);
}

impl Markup for Node {
    fn write_markup(&self, writer: &mut HtmlWriter) {
        writer.write_node(self);
    }
}

impl Markup for Element {
    fn write_markup(&self, writer: &mut HtmlWriter) {
        writer.write_element(self);
    }
}

impl Markup for [Node] {
    fn write_markup(&self, writer: &mut HtmlWriter) {
        for node in self {
            writer.write_node(node);
        }
    }
}

/// Tree walker that accumulates rendered markup.
#[derive(Debug)]
pub struct HtmlWriter {
    out: String,
    options: SerializeOptions,
    depth: usize,
    /// Nesting count of whitespace-sensitive elements currently open.
    preformatted: usize,
    /// True while writing the children of a raw text element.
    raw_text: bool,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    /// Create a writer with default options (compact).
    pub fn new() -> Self {
        Self::with_options(SerializeOptions::default())
    }

    /// Create a writer with the given options.
    pub fn with_options(options: SerializeOptions) -> Self {
        Self {
            out: String::new(),
            options,
            depth: 0,
            preformatted: 0,
            raw_text: false,
        }
    }

    /// Finish and return the rendered markup.
    pub fn finish(self) -> String {
        self.out
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write any node.
    pub fn write_node(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.write_element(element),
            Node::Text(text) => self.write_text(text),
            Node::Comment(content) => self.write_comment(content),
            Node::BlockComment(content) => self.write_block_comment(content),
        }
    }

    /// Write an element and its subtree.
    pub fn write_element(&mut self, element: &Element) {
        self.write_element_with(
            element.tag(),
            element.attributes(),
            element.is_void(),
            |w| {
                for child in element.children() {
                    w.write_node(child);
                }
            },
        );
    }

    /// Write a text run on its own line (pretty) or inline (compact).
    ///
    /// In pretty mode every embedded line is indented to the current depth.
    pub fn write_text(&mut self, text: &str) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.write_indent();
            self.write_text_line(line);
        }
        self.write_newline();
    }

    fn write_text_line(&mut self, line: &str) {
        if !self.options.escape {
            self.out.push_str(line);
        } else if self.raw_text {
            self.write_raw_text_escaped(line);
        } else {
            self.write_text_escaped(line);
        }
    }

    /// Write a `<!-- content -->` comment.
    pub fn write_comment(&mut self, content: &str) {
        self.write_indent();
        self.out.push_str("<!-- ");
        self.write_comment_body(content);
        self.out.push_str(" -->");
        self.write_newline();
    }

    /// Write a block comment with `<!--` and `-->` on their own lines.
    ///
    /// Pretty mode indents the body one level deeper than the markers.
    pub fn write_block_comment(&mut self, content: &str) {
        self.write_indent();
        self.out.push_str("<!--");
        self.out.push('\n');
        self.depth += 1;
        for line in content.split('\n') {
            self.write_indent();
            self.write_comment_body(line);
            self.out.push('\n');
        }
        self.depth -= 1;
        self.write_indent();
        self.out.push_str("-->");
        self.write_newline();
    }

    /// Write pre-rendered markup verbatim, with no indentation or newline.
    pub fn write_raw(&mut self, markup: &str) {
        self.out.push_str(markup);
    }

    /// Write an element whose children are produced by `children`.
    ///
    /// `children` runs one level deeper than the opening tag. It is not
    /// called for void elements.
    pub fn write_element_with(
        &mut self,
        tag: &str,
        attrs: &Attributes,
        void: bool,
        children: impl FnOnce(&mut Self),
    ) {
        self.write_indent();
        self.write_open_tag(tag, attrs, void);
        if void {
            self.write_newline();
            return;
        }

        let preformatted = is_whitespace_sensitive(tag);
        if preformatted {
            self.preformatted += 1;
        }
        let outer_raw_text = core::mem::replace(&mut self.raw_text, is_raw_text_element(tag));

        self.write_newline();
        self.depth += 1;
        children(self);
        self.depth -= 1;
        self.write_indent();
        self.write_close_tag(tag);

        self.raw_text = outer_raw_text;
        if preformatted {
            self.preformatted -= 1;
        }
        self.write_newline();
    }

    fn write_open_tag(&mut self, tag: &str, attrs: &Attributes, void: bool) {
        self.out.push('<');
        self.out.push_str(tag);

        for (name, value) in attrs.iter() {
            match value {
                AttrValue::Bool(false) => continue,
                AttrValue::Bool(true) => {
                    self.out.push(' ');
                    self.out.push_str(name);
                }
                other => {
                    self.out.push(' ');
                    self.out.push_str(name);
                    self.out.push_str("=\"");
                    if let Some(text) = other.as_text() {
                        self.write_attr_value(&text);
                    }
                    self.out.push('"');
                }
            }
        }

        if void && self.options.self_closing_void {
            self.out.push_str(" />");
        } else {
            self.out.push('>');
        }
    }

    fn write_close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    fn write_attr_value(&mut self, value: &str) {
        if self.options.escape {
            self.write_attr_escaped(value);
        } else {
            self.out.push_str(value);
        }
    }

    fn write_text_escaped(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '&' => self.out.push_str("&amp;"),
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                _ => self.out.push(c),
            }
        }
    }

    /// `</` would end a raw text element early, so it is written as `<\/`.
    fn write_raw_text_escaped(&mut self, text: &str) {
        let mut rest = text;
        while let Some(pos) = rest.find("</") {
            self.out.push_str(&rest[..pos]);
            self.out.push_str("<\\/");
            rest = &rest[pos + 2..];
        }
        self.out.push_str(rest);
    }

    /// Comment bodies never contain `--`, so they cannot close the comment.
    fn write_comment_body(&mut self, content: &str) {
        if !self.options.escape {
            self.out.push_str(content);
            return;
        }
        let mut previous = None;
        for c in content.chars() {
            if c == '-' && previous == Some('-') {
                self.out.push(' ');
            }
            self.out.push(c);
            previous = Some(c);
        }
    }

    fn write_attr_escaped(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '&' => self.out.push_str("&amp;"),
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                '"' => self.out.push_str("&quot;"),
                _ => self.out.push(c),
            }
        }
    }

    fn write_indent(&mut self) {
        if self.options.pretty && self.preformatted == 0 {
            for _ in 0..self.depth {
                self.out.push_str(&self.options.indent);
            }
        }
    }

    fn write_newline(&mut self) {
        if self.options.pretty && self.preformatted == 0 {
            self.out.push('\n');
        }
    }
}

fn is_whitespace_sensitive(tag: &str) -> bool {
    WHITESPACE_SENSITIVE_ELEMENTS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
}

fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Render compactly on a single line.
pub fn to_string<M: Markup + ?Sized>(markup: &M) -> String {
    to_string_with_options(markup, &SerializeOptions::default())
}

/// Render with one-space indentation, one node per line.
pub fn to_string_pretty<M: Markup + ?Sized>(markup: &M) -> String {
    to_string_with_options(markup, &SerializeOptions::default().pretty())
}

/// Render with custom options.
pub fn to_string_with_options<M: Markup + ?Sized>(
    markup: &M,
    options: &SerializeOptions,
) -> String {
    let mut writer = HtmlWriter::with_options(options.clone());
    markup.write_markup(&mut writer);
    writer.finish()
}

impl Element {
    /// Render compactly.
    pub fn render(&self) -> String {
        to_string(self)
    }

    /// Render pretty-printed.
    pub fn render_pretty(&self) -> String {
        to_string_pretty(self)
    }

    /// Render with custom options.
    pub fn render_with_options(&self, options: &SerializeOptions) -> String {
        to_string_with_options(self, options)
    }
}

impl Node {
    /// Render compactly.
    pub fn render(&self) -> String {
        to_string(self)
    }

    /// Render pretty-printed.
    pub fn render_pretty(&self) -> String {
        to_string_pretty(self)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::create_element;
    use crate::tags::{div, hr, li, p, pre, script, span, ul};

    const NO_ATTRS: [(&str, &str); 0] = [];

    #[test]
    fn test_empty_element() {
        let a = create_element("a", (), NO_ATTRS, false).unwrap();
        assert_eq!(a.render(), "<a></a>");
        assert_eq!(a.render_pretty(), "<a>\n</a>\n");
    }

    #[test]
    fn test_void_element() {
        let hr = create_element("hr", (), NO_ATTRS, true).unwrap();
        assert_eq!(hr.render(), "<hr />");
        assert_eq!(hr.render_pretty(), "<hr />\n");
        assert!(!hr.render().contains("</hr>"));
    }

    #[test]
    fn test_void_element_html_style() {
        let options = SerializeOptions::new().self_closing_void(false);
        assert_eq!(hr().render_with_options(&options), "<hr>");
    }

    #[test]
    fn test_attribute_order_and_quoting() {
        let el = create_element("input", (), [("type", "text"), ("name", "q")], true)
            .unwrap()
            .with_attr("maxlength", 10)
            .unwrap()
            .with_attr("step", 0.5)
            .unwrap();
        assert_eq!(
            el.render(),
            r#"<input type="text" name="q" maxlength="10" step="0.5" />"#
        );
    }

    #[test]
    fn test_boolean_attributes() {
        let el = create_element("input", (), NO_ATTRS, true)
            .unwrap()
            .with_attrs([("disabled", true), ("checked", false)])
            .unwrap();
        assert_eq!(el.render(), "<input disabled />");
        assert_eq!(el.render_pretty(), "<input disabled />\n");
    }

    #[test]
    fn test_collision_marker() {
        let el = div("x").with_attr("_class", "value").unwrap();
        assert_eq!(el.render(), r#"<div class="value">x</div>"#);
    }

    #[test]
    fn test_comment() {
        let el = div(vec![Node::comment("note"), Node::text("body")]);
        assert_eq!(el.render(), "<div><!-- note -->body</div>");
        assert_eq!(el.render_pretty(), "<div>\n <!-- note -->\n body\n</div>\n");
    }

    #[test]
    fn test_escape_special_chars() {
        let el = p("<script>alert('x') & \"y\"</script>")
            .with_attr("title", "a \"quoted\" <b>")
            .unwrap();
        assert_eq!(
            el.render(),
            r#"<p title="a &quot;quoted&quot; &lt;b&gt;">&lt;script&gt;alert('x') &amp; "y"&lt;/script&gt;</p>"#
        );
    }

    #[test]
    fn test_escape_disabled() {
        let el = p("<b>bold</b>").with_attr("title", "\"").unwrap();
        let options = SerializeOptions::new().escape(false);
        assert_eq!(
            el.render_with_options(&options),
            r#"<p title="""><b>bold</b></p>"#
        );
    }

    #[test]
    fn test_raw_text_not_escaped() {
        let el = script("if (a < b && c) {}");
        assert_eq!(el.render(), "<script>if (a < b && c) {}</script>");
    }

    #[test]
    fn test_comment_not_escaped() {
        assert_eq!(Node::comment("a < b").render(), "<!-- a < b -->");
    }

    #[test]
    fn test_comment_cannot_close_early() {
        let el = div(vec![
            Node::comment("x --> <b>injected</b> <!--"),
            Node::text("t"),
        ]);
        assert_eq!(
            el.render(),
            "<div><!-- x - -> <b>injected</b> <!- - -->t</div>"
        );
        assert_eq!(Node::comment("a---b").render(), "<!-- a- - -b -->");
    }

    #[test]
    fn test_comment_verbatim_without_escaping() {
        let options = SerializeOptions::new().escape(false);
        assert_eq!(
            to_string_with_options(&Node::comment("a -- b"), &options),
            "<!-- a -- b -->"
        );
    }

    #[test]
    fn test_raw_text_cannot_close_early() {
        let el = script("var s = '</script><img src=x onerror=alert(1)>';");
        assert_eq!(
            el.render(),
            r"<script>var s = '<\/script><img src=x onerror=alert(1)>';</script>"
        );
        assert_eq!(el.render().matches("</script>").count(), 1);
    }

    #[test]
    fn test_pretty_indents_every_text_line() {
        let el = div(p("line1\nline2"));
        assert_eq!(
            el.render_pretty(),
            "<div>\n <p>\n  line1\n  line2\n </p>\n</div>\n"
        );
        assert_eq!(el.render(), "<div><p>line1\nline2</p></div>");
    }

    #[test]
    fn test_block_comment() {
        let note = Node::block_comment("first\nsecond");
        assert_eq!(note.render(), "<!--\nfirst\nsecond\n-->");

        let el = div(vec![note, span("x").into()]);
        assert_eq!(
            el.render_pretty(),
            "<div>\n <!--\n  first\n  second\n -->\n <span>\n  x\n </span>\n</div>\n"
        );
    }

    #[test]
    fn test_writer_depth_tracks_nesting() {
        let mut writer = HtmlWriter::with_options(SerializeOptions::new().pretty());
        let attrs = Attributes::new();
        assert_eq!(writer.depth(), 0);
        writer.write_element_with("ul", &attrs, false, |w| {
            assert_eq!(w.depth(), 1);
            w.write_element_with("li", &attrs, false, |w| {
                assert_eq!(w.depth(), 2);
                w.write_text("x");
            });
        });
        assert_eq!(writer.depth(), 0);
        assert_eq!(writer.finish(), "<ul>\n <li>\n  x\n </li>\n</ul>\n");
    }

    #[test]
    fn test_unicode_passthrough() {
        let el = p("Привет, 世界 🌍");
        assert_eq!(el.render(), "<p>Привет, 世界 🌍</p>");
    }

    #[test]
    fn test_pretty_print_nested() {
        let list = ul(vec![li("one"), li(span("two"))]);
        assert_eq!(
            list.render_pretty(),
            "<ul>\n <li>\n  one\n </li>\n <li>\n  <span>\n   two\n  </span>\n </li>\n</ul>\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let list = ul(li("one"));
        let options = SerializeOptions::new().indent("    ");
        assert_eq!(
            list.render_with_options(&options),
            "<ul>\n    <li>\n        one\n    </li>\n</ul>\n"
        );
    }

    #[test]
    fn test_preformatted_stays_inline() {
        let el = div(pre("  keep\n   this"));
        assert_eq!(
            el.render_pretty(),
            "<div>\n <pre>  keep\n   this</pre>\n</div>\n"
        );
    }

    #[test]
    fn test_children_between_tags() {
        let children = vec![Node::text("a"), span("b").into(), Node::comment("c")];
        let el = div(children.clone());
        let rendered = el.render();
        let inner: String = children.iter().map(Node::render).collect();
        assert_eq!(rendered, format!("<div>{inner}</div>"));
        assert_eq!(rendered.matches("<div>").count(), 1);
        assert_eq!(rendered.matches("</div>").count(), 1);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let el = div(vec![p("x"), hr()]).with_attr("id", "main").unwrap();
        assert_eq!(el.render(), el.render());
        assert_eq!(el.render_pretty(), el.render_pretty());
        assert_eq!(el.to_string(), el.render());
    }

    #[test]
    fn test_slice_markup() {
        let nodes = [Node::text("a"), Node::comment("b")];
        assert_eq!(to_string(&nodes[..]), "a<!-- b -->");
    }
}
