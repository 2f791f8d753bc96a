//! Document tree for the brick HTML builder.
//!
//! This crate provides the node model that callers assemble in plain Rust
//! before handing it to the renderer in `brick-html`.
//!
//! # Design
//!
//! A tree is a strict ownership tree: every [`Element`] owns its attribute
//! list and its children, and there are no parent links. Names are checked
//! when they enter the tree, so a tree that was built successfully only has
//! valid tag and attribute names in it.
//!
//! - [`Node`] is the closed set of renderable variants.
//! - [`AttributeValue`] is the closed set of attribute values.
//! - [`Tag`] is the catalog of standard tag names, with one constructor per
//!   tag in [`tags`].

/// Attribute names, values and the ordered attribute list.
pub mod attr;
/// Construction errors.
pub mod error;
/// Nodes, elements and the document root.
pub mod node;
/// The standard tag catalog.
pub mod tags;

pub use attr::{AttributeValue, Attributes, Scalar, normalize_attr_name};
pub use error::DomError;
pub use node::{Element, Node, document, element, fragment, raw, text};
pub use tags::Tag;
