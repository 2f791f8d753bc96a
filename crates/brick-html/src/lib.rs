//! HTML renderer for the brick builder.
//!
//! # Scope
//!
//! This crate turns a tree built with `brick-dom` into an HTML string:
//! - **Escaping** - text content and double-quoted attribute values
//! - **Attribute formatting** - bare boolean attributes, omitted values,
//!   space-joined token lists
//! - **Rendering** - one depth-first pass into a single output buffer, with
//!   fragments and nested sequences flattened
//! - **Dynamic content** - `serde_json::Value` content rendered with the same
//!   rules, for trees that arrive as data
//!
//! # Output conventions
//!
//! - Attribute values are always double-quoted.
//! - Children are concatenated with no added whitespace.
//! - An element with no children is written as its start tag alone (`<br>`),
//!   with no void-element list consulted.
//! - A document root starts with `<!DOCTYPE html>`.
//!
//! # Not Supported
//!
//! - Parsing HTML
//! - Validating content models or nesting rules
//! - Streaming output to a writer

/// Render errors.
pub mod error;
/// Text and attribute-value escaping.
pub mod escape;
/// Rendering of `serde_json::Value` content.
pub mod json;
/// The renderer and the `Render` trait.
pub mod render;

pub use brick_dom::{
    AttributeValue, Attributes, DomError, Element, Node, Scalar, Tag, document, element,
    fragment, raw, tags, text,
};
pub use error::RenderError;
pub use escape::{escape_attr_value, escape_text};
pub use render::{DOCTYPE, Render, Renderer, render, write_attribute};
