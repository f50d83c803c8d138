//! A complete HTML page: doctype, `<html lang>`, head and body.

use std::fmt;
use std::path::Path;

use crate::attr::{AttrValue, Attributes};
use crate::error::{MarkupError, Result};
use crate::node::{Element, Node};
use crate::serializer::{HtmlWriter, Markup, SerializeOptions, to_string, to_string_pretty};
use crate::tracing_macros::{debug, trace};

/// Default value of the `lang` attribute on `<html>`.
pub const DEFAULT_LANG: &str = "en";

/// How [`Document::export_with`] renders the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// Single line.
    Compact,
    /// Indented, one node per line.
    #[default]
    Pretty,
}

/// An HTML document owning exactly one head and one body.
///
/// ```
/// use markupify::{Document, tags};
///
/// let mut doc = Document::new();
/// doc.append_to_head([tags::meta().with_attr("charset", "UTF-8").unwrap()]).unwrap();
/// doc.append_to_body([tags::div(tags::h1("Greetings text"))]).unwrap();
///
/// assert_eq!(
///     doc.render(),
///     r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8" /></head><body><div><h1>Greetings text</h1></div></body></html>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    head: Element,
    body: Element,
    lang: String,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty head and body and `lang="en"`.
    pub fn new() -> Self {
        Self {
            head: Element::new("head"),
            body: Element::new("body"),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Set the `lang` attribute of `<html>`.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// The `lang` attribute of `<html>`.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The `<head>` element.
    pub fn head(&self) -> &Element {
        &self.head
    }

    /// The `<body>` element.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Set an attribute on `<head>`.
    pub fn add_head_property(&mut self, key: &str, value: impl Into<AttrValue>) -> Result<()> {
        self.head.add_property(key, value)
    }

    /// Set an attribute on `<body>`, e.g. a theme class.
    pub fn add_body_property(&mut self, key: &str, value: impl Into<AttrValue>) -> Result<()> {
        self.body.add_property(key, value)
    }

    /// Append nodes to `<head>` in order.
    pub fn append_to_head<I, N>(&mut self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        for node in nodes {
            self.head.add_child(node)?;
        }
        Ok(())
    }

    /// Append nodes to `<body>` in order.
    pub fn append_to_body<I, N>(&mut self, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        for node in nodes {
            self.body.add_child(node)?;
        }
        Ok(())
    }

    /// Render on a single line.
    pub fn render(&self) -> String {
        to_string(self)
    }

    /// Render indented, with head and body one level under `<html>`.
    pub fn render_pretty(&self) -> String {
        to_string_pretty(self)
    }

    /// Render with custom options.
    pub fn render_with_options(&self, options: &SerializeOptions) -> String {
        crate::serializer::to_string_with_options(self, options)
    }

    /// Write the pretty rendering to `path`, replacing any existing file.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        self.export_with(path, ExportMode::Pretty)
    }

    /// Write the rendering selected by `mode` to `path`, replacing any existing file.
    pub fn export_with(&self, path: impl AsRef<Path>, mode: ExportMode) -> Result<()> {
        let path = path.as_ref();
        let html = match mode {
            ExportMode::Compact => self.render(),
            ExportMode::Pretty => self.render_pretty(),
        };
        trace!(path = %path.display(), ?mode, "exporting document");

        std::fs::write(path, &html).map_err(|source| MarkupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = html.len(), "document exported");
        Ok(())
    }
}

/// Build a document from optional pre-built head and body.
///
/// Missing sections default to empty ones. A supplied head must be a `<head>`
/// element and a supplied body a `<body>` element.
pub fn create_document(
    head: Option<Element>,
    body: Option<Element>,
    lang: impl Into<String>,
) -> Result<Document> {
    let head = section(head, "head")?;
    let body = section(body, "body")?;
    Ok(Document {
        head,
        body,
        lang: lang.into(),
    })
}

fn section(element: Option<Element>, expected: &'static str) -> Result<Element> {
    match element {
        None => Ok(Element::new(expected)),
        Some(e) if e.tag().eq_ignore_ascii_case(expected) && !e.is_void() => Ok(e),
        Some(e) => Err(MarkupError::SectionMismatch {
            expected,
            got: e.tag().to_string(),
        }),
    }
}

impl Markup for Document {
    fn write_markup(&self, writer: &mut HtmlWriter) {
        let mut attrs = Attributes::new();
        attrs.insert_normalized("lang", AttrValue::Str(self.lang.clone()));

        writer.write_raw("<!DOCTYPE html>");
        writer.write_element_with("html", &attrs, false, |w| {
            w.write_element(&self.head);
            w.write_element(&self.body);
        });
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
