//! Error types for building and exporting markup.

use std::fmt;
use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MarkupError>;

/// Coarse classification of a [`MarkupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The tree shape is invalid: content on a void element, a bad tag name,
    /// a heading level outside 1..=6, or a misplaced document section.
    Structural,
    /// An attribute key is malformed or not allowed on its element.
    AttributeKey,
    /// Writing rendered output to disk failed.
    Io,
}

/// Error type for markup construction and export.
#[derive(Debug)]
pub enum MarkupError {
    /// Content was given to, or a child appended to, a void element.
    VoidContent {
        /// The void element's tag name.
        tag: String,
    },

    /// A tag name is empty or contains characters that cannot appear in a tag.
    InvalidTagName {
        /// The rejected name.
        name: String,
    },

    /// A heading level outside 1..=6.
    InvalidHeadingLevel {
        /// The rejected level.
        level: u8,
    },

    /// A document head or body was built from the wrong element.
    SectionMismatch {
        /// The tag the document expected (`head` or `body`).
        expected: &'static str,
        /// The tag it was given.
        got: String,
    },

    /// An attribute key is malformed.
    InvalidAttributeKey {
        /// The key as supplied by the caller.
        key: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An attribute key is not in the element's allowed set.
    AttributeNotAllowed {
        /// The element's tag name.
        tag: String,
        /// The normalized attribute key.
        key: String,
    },

    /// Writing an export file failed.
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl MarkupError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VoidContent { .. }
            | Self::InvalidTagName { .. }
            | Self::InvalidHeadingLevel { .. }
            | Self::SectionMismatch { .. } => ErrorKind::Structural,
            Self::InvalidAttributeKey { .. } | Self::AttributeNotAllowed { .. } => {
                ErrorKind::AttributeKey
            }
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// True for [`ErrorKind::Structural`] errors.
    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VoidContent { tag } => {
                write!(f, "void element <{tag}> cannot contain content")
            }
            Self::InvalidTagName { name } => write!(f, "invalid tag name: {name:?}"),
            Self::InvalidHeadingLevel { level } => {
                write!(f, "heading level must be in 1..=6, got {level}")
            }
            Self::SectionMismatch { expected, got } => {
                write!(f, "document section mismatch: expected <{expected}>, got <{got}>")
            }
            Self::InvalidAttributeKey { key, reason } => {
                write!(f, "invalid attribute key {key:?}: {reason}")
            }
            Self::AttributeNotAllowed { tag, key } => {
                write!(f, "attribute {key:?} is not allowed on <{tag}>")
            }
            Self::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for MarkupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
