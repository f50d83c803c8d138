//! Attribute values, the ordered attribute map, and key normalization.
//!
//! Keys go through [`normalize_key`] before they are stored:
//!
//! - one leading [`COLLISION_MARKER`] is stripped, so callers mirroring Rust
//!   field names can write `_class`, `_for` or `_type`;
//! - every remaining underscore becomes a hyphen, so `data_user_id` is stored
//!   as `data-user-id` and `_http_equiv` as `http-equiv`.
//!
//! Reserved words are accepted as-is (`class` is a perfectly good string), so
//! the only keys rejected are malformed ones.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{MarkupError, Result};

/// Leading character that marks a key written to dodge a reserved word.
pub const COLLISION_MARKER: char = '_';

/// Attributes valid on every HTML element, regardless of tag.
const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "autocapitalize",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "nonce",
    "part",
    "popover",
    "role",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
];

/// Returns true if `key` (already normalized) may appear on any element.
///
/// Covers the global attribute list, `data-*`, `aria-*` and `on*` event
/// handlers.
pub fn is_global_attribute(key: &str) -> bool {
    GLOBAL_ATTRIBUTES.contains(&key)
        || key.starts_with("data-")
        || key.starts_with("aria-")
        || (key.len() > 2 && key.starts_with("on"))
}

/// Map a caller-facing key to the attribute name written to the output.
pub fn normalize_key(key: &str) -> Result<Cow<'_, str>> {
    let name = key.strip_prefix(COLLISION_MARKER).unwrap_or(key);

    let invalid = |reason| MarkupError::InvalidAttributeKey {
        key: key.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("attribute name is empty"));
    }
    for c in name.chars() {
        if c.is_whitespace() {
            return Err(invalid("contains whitespace"));
        }
        if c.is_control() {
            return Err(invalid("contains a control character"));
        }
        if matches!(c, '"' | '\'' | '<' | '>' | '/' | '=') {
            return Err(invalid("contains a character not allowed in attribute names"));
        }
    }

    if name.contains('_') {
        Ok(Cow::Owned(name.replace('_', "-")))
    } else {
        Ok(Cow::Borrowed(name))
    }
}

/// Value of a single attribute.
///
/// Strings and numbers render double-quoted. `Bool(true)` renders as a bare
/// attribute name and `Bool(false)` is left out of the output.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Text value.
    Str(String),
    /// Presence flag.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
}

impl AttrValue {
    /// The string form of a valued attribute, or `None` for booleans.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Str(s) => Some(Cow::Borrowed(s)),
            Self::Bool(_) => None,
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::UInt(n) => Some(Cow::Owned(n.to_string())),
            Self::Float(x) => Some(Cow::Owned(x.to_string())),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(n: $ty) -> Self {
                    Self::$variant(<$wide>::from(n))
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64);
impl_from_int!(UInt as u64: u8, u16, u32, u64);

impl From<usize> for AttrValue {
    fn from(n: usize) -> Self {
        Self::UInt(n as u64)
    }
}

impl From<f32> for AttrValue {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for AttrValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

/// Ordered attribute map with unique keys.
///
/// Keys keep the position of their first insertion; setting a key again
/// replaces only its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    map: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `key` and upsert `value` under it.
    ///
    /// Returns the normalized key.
    pub fn set(&mut self, key: &str, value: impl Into<AttrValue>) -> Result<String> {
        let name = normalize_key(key)?.into_owned();
        self.map.insert(name.clone(), value.into());
        Ok(name)
    }

    /// Upsert under a name that is already in rendered form.
    pub(crate) fn insert_normalized(&mut self, name: impl Into<String>, value: AttrValue) {
        self.map.insert(name.into(), value);
    }

    /// Look up a value by its rendered (normalized) name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.map.get(name)
    }

    /// Mutable lookup by rendered name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttrValue> {
        self.map.get_mut(name)
    }

    /// True if an attribute with this rendered name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Number of attributes, including `false` booleans that will not render.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}
