use thiserror::Error;

/// Errors raised while building a tree.
///
/// Both variants are raised at construction time, before any rendering
/// starts, and carry the name exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Tag name is empty, non-ASCII, or contains non-alphanumeric characters.
    ///
    /// See "Tag name" in
    /// <https://www.w3.org/TR/html52/syntax.html#writing-html-documents-elements>.
    #[error("invalid html tag: {0:?}")]
    InvalidTagName(String),
    /// Normalized attribute name is empty or not a valid ASCII attribute name.
    #[error("invalid html attribute name: {0:?}")]
    InvalidAttributeName(String),
}
