use brick_dom::DomError;
use thiserror::Error;

/// Errors raised while rendering.
///
/// Rendering stops at the first error and the partial output is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// An attribute value has no text form, such as binary data.
    #[error("cannot render {kind} as value of html attribute `{name}`")]
    UnsupportedAttributeType {
        /// The normalized attribute name.
        name: String,
        /// What kind of value was found.
        kind: &'static str,
    },
    /// A content item is of a kind the renderer does not know how to write.
    #[error("cannot render {0} as html content")]
    UnsupportedContentType(String),
    /// A tag or attribute name in dynamic content failed validation.
    #[error(transparent)]
    Dom(#[from] DomError),
}
