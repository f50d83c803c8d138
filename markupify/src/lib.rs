#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

//! Build HTML as a tree of typed nodes and render it compact or pretty-printed.
//!
//! # Data Model
//!
//! A [`Node`] is an [`Element`] (tag, ordered attributes, ordered children),
//! a text run, or a comment (inline or block). Void elements such as `<br />` and `<meta />`
//! never hold children: every attempt to add one fails with a structural
//! [`MarkupError`], eagerly, at the call that tried.
//!
//! A [`Document`] pairs one `<head>` with one `<body>` under
//! `<!DOCTYPE html><html lang="...">`.
//!
//! # Attribute keys
//!
//! A leading `_` is stripped and the remaining underscores become hyphens:
//! `_class` renders as `class`, `data_user_id` as `data-user-id`. Values may
//! be strings, numbers or booleans; `true` renders as a bare attribute and
//! `false` is left out.
//!
//! # Example
//!
//! ```rust
//! use markupify::{Document, tags::*};
//!
//! let mut doc = Document::new();
//! doc.append_to_head([meta().with_attr("charset", "UTF-8")?, title("Hello")])?;
//! doc.append_to_body([
//!     div(vec![h1("Greetings"), p("Built without string concatenation.")])
//!         .with_attr("_class", "card")?,
//! ])?;
//!
//! assert_eq!(
//!     doc.render(),
//!     concat!(
//!         r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8" /><title>Hello</title></head>"#,
//!         r#"<body><div class="card"><h1>Greetings</h1><p>Built without string concatenation.</p></div></body></html>"#,
//!     )
//! );
//!
//! print!("{}", doc.render_pretty());
//! # Ok::<(), markupify::MarkupError>(())
//! ```
//!
//! # Escaping
//!
//! Text and attribute values are HTML-escaped by default. The contents of
//! `<script>` and `<style>` are not entity-escaped, but `</` is written as
//! `<\/`; comment bodies have `--` broken up as `- -`. Neither can close early.
//! Use [`SerializeOptions::escape`] to write everything verbatim.

mod tracing_macros;

pub mod attr;
pub mod document;
pub mod error;
pub mod node;
pub mod serializer;
pub mod tags;

pub use attr::{AttrValue, Attributes, COLLISION_MARKER, normalize_key};
pub use document::{DEFAULT_LANG, Document, ExportMode, create_document};
pub use error::{ErrorKind, MarkupError, Result};
pub use node::{Content, Element, Node, create_element};
pub use serializer::{
    HtmlWriter, Markup, SerializeOptions, to_string, to_string_pretty, to_string_with_options,
};
pub use tags::{TagDescriptor, is_void_element};
