use std::fmt;

use brick_dom::{AttributeValue, Element, Node, Scalar};

use crate::error::RenderError;
use crate::escape::{escape_attr_value, escape_text};

/// Written before the start tag of a document root.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Anything that can be written into a [`Renderer`].
///
/// Implemented for the tree types, for plain strings and integers (written
/// as escaped text), and for `Option`, slices and vectors of renderable
/// items, which render their contents in order with no wrapping markup.
pub trait Render {
    /// Append this item's HTML to `renderer`.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] when the item, or anything nested in it,
    /// cannot be rendered.
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError>;
}

/// Render `item` to an HTML string.
///
/// The whole tree is walked once, depth-first, writing into one buffer.
/// Rendering does not modify the tree, so rendering the same tree again
/// gives the same output.
///
/// # Errors
///
/// Returns the first [`RenderError`] met during the walk. No partial
/// output is returned in that case.
pub fn render<R: Render + ?Sized>(item: &R) -> Result<String, RenderError> {
    let mut renderer = Renderer::new();
    item.render_into(&mut renderer)?;
    Ok(renderer.finish())
}

/// Accumulates HTML output.
///
/// All `write_*` methods append to the same buffer; [`Renderer::finish`]
/// hands it back.
#[derive(Debug, Default)]
pub struct Renderer {
    out: String,
}

impl Renderer {
    /// Create a renderer with an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { out: String::new() }
    }

    /// Create a renderer whose buffer can hold `capacity` bytes without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// The output written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take the finished output.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    /// Write text content, escaped.
    pub fn write_text(&mut self, text: &str) {
        self.out.push_str(&escape_text(text));
    }

    /// Write markup verbatim.
    pub fn write_raw(&mut self, html: &str) {
        self.out.push_str(html);
    }

    /// Write a value whose `Display` form needs no escaping, such as a number.
    pub(crate) fn write_display(&mut self, value: impl fmt::Display) {
        self.out.push_str(&value.to_string());
    }

    /// Write a node and everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedAttributeType`] if an element in
    /// the subtree carries a value with no text form.
    pub fn write_node(&mut self, node: &Node) -> Result<(), RenderError> {
        match node {
            Node::Element(element) => self.write_element(element),
            Node::Text(text) => {
                self.write_text(text);
                Ok(())
            }
            Node::Raw(html) => {
                self.write_raw(html);
                Ok(())
            }
            Node::Fragment(children) => children
                .iter()
                .try_for_each(|child| self.write_node(child)),
            Node::Empty => Ok(()),
        }
    }

    /// Write an element: start tag, children, end tag.
    ///
    /// An element without children is written as its start tag alone.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedAttributeType`] if the element or a
    /// descendant carries a value with no text form.
    pub fn write_element(&mut self, element: &Element) -> Result<(), RenderError> {
        self.write_start_tag(element)?;
        if element.child_nodes().is_empty() {
            return Ok(());
        }
        for child in element.child_nodes() {
            self.write_node(child)?;
        }
        self.write_end_tag(element.name());
        Ok(())
    }

    /// Write `<name attr="value" ...>`, preceded by [`DOCTYPE`] for a
    /// document root. Children are not written.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedAttributeType`] if an attribute
    /// value has no text form.
    pub fn write_start_tag(&mut self, element: &Element) -> Result<(), RenderError> {
        if element.is_document() {
            self.out.push_str(DOCTYPE);
        }
        self.out.push('<');
        self.out.push_str(element.name());
        for (name, value) in element.attributes().iter() {
            write_attribute(&mut self.out, name, value)?;
        }
        self.out.push('>');
        Ok(())
    }

    /// Write `</name>`.
    pub fn write_end_tag(&mut self, name: &str) {
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
    }
}

/// Append one attribute, with its leading space, to `out`.
///
/// `name` must already be normalized, as it is for every name stored in an
/// element. Values that omit the attribute write nothing; `true` and the
/// empty string write the bare name.
///
/// # Errors
///
/// Returns [`RenderError::UnsupportedAttributeType`] for binary values.
pub fn write_attribute(
    out: &mut String,
    name: &str,
    value: &AttributeValue,
) -> Result<(), RenderError> {
    match value {
        AttributeValue::Bool(false) | AttributeValue::Null => {}
        AttributeValue::Bool(true) => write_bare(out, name),
        AttributeValue::Str(text) => write_pair(out, name, text),
        AttributeValue::Int(number) => write_pair(out, name, &number.to_string()),
        AttributeValue::List(items) => {
            if let Some(joined) = join_tokens(items) {
                write_pair(out, name, &joined);
            }
        }
        AttributeValue::Bytes(_) => {
            return Err(RenderError::UnsupportedAttributeType {
                name: name.to_string(),
                kind: "bytes",
            });
        }
    }
    Ok(())
}

fn write_bare(out: &mut String, name: &str) {
    out.push(' ');
    out.push_str(name);
}

fn write_pair(out: &mut String, name: &str, value: &str) {
    write_bare(out, name);
    // An empty value uses the empty attribute syntax.
    if value.is_empty() {
        return;
    }
    out.push_str("=\"");
    out.push_str(&escape_attr_value(value));
    out.push('"');
}

/// Space-join the non-null items, or `None` if there are none.
fn join_tokens(items: &[Scalar]) -> Option<String> {
    let mut joined: Option<String> = None;
    for item in items {
        let token = match item {
            Scalar::Str(text) => text.clone(),
            Scalar::Int(number) => number.to_string(),
            Scalar::Null => continue,
        };
        match joined.as_mut() {
            Some(buffer) => {
                buffer.push(' ');
                buffer.push_str(&token);
            }
            None => joined = Some(token),
        }
    }
    joined
}

impl Render for Node {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        renderer.write_node(self)
    }
}

impl Render for Element {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        renderer.write_element(self)
    }
}

impl Render for str {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        renderer.write_text(self);
        Ok(())
    }
}

impl Render for String {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        renderer.write_text(self);
        Ok(())
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        (**self).render_into(renderer)
    }
}

impl<T: Render> Render for Option<T> {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        self.as_ref()
            .map_or(Ok(()), |item| item.render_into(renderer))
    }
}

impl<T: Render> Render for [T] {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        self.iter().try_for_each(|item| item.render_into(renderer))
    }
}

impl<T: Render> Render for Vec<T> {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        self.as_slice().render_into(renderer)
    }
}

macro_rules! impl_render_int {
    ($($int:ty),*) => {
        $(
            impl Render for $int {
                fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
                    renderer.write_display(self);
                    Ok(())
                }
            }
        )*
    };
}

impl_render_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
