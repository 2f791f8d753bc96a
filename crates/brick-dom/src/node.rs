use std::borrow::Cow;

use crate::attr::{AttributeValue, Attributes, normalize_attr_name};
use crate::tags::Tag;
use crate::DomError;

/// A renderable unit of the document tree.
///
/// Sequences of renderable items are expressed as [`Node::Fragment`]; any
/// `Vec` or iterator of things convertible to `Node` collects into one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Node {
    /// A tag with attributes and children.
    Element(Element),
    /// Text content, escaped when rendered.
    Text(String),
    /// Pre-rendered markup, written to the output verbatim.
    ///
    /// Only reachable through [`raw`], so that unescaped content is always
    /// spelled out at the call site.
    Raw(String),
    /// An ordered group of nodes with no wrapping tag.
    Fragment(Vec<Node>),
    /// Nothing. Renders to the empty string.
    #[default]
    Empty,
}

/// An HTML element: a tag name, an ordered attribute list and ordered
/// children.
///
/// Builder methods taking `self` return the same element back, and
/// in-place methods taking `&mut self` return `&mut Self`, so chained calls
/// always extend one element rather than copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: Cow<'static, str>,
    attributes: Attributes,
    children: Vec<Node>,
    doctype: bool,
}

impl Element {
    /// Create an empty element.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidTagName`] if `name` is empty or contains
    /// anything other than ASCII letters and digits.
    pub fn new(name: impl Into<String>) -> Result<Self, DomError> {
        let name = name.into();
        if name.is_empty() || !name.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
            return Err(DomError::InvalidTagName(name));
        }
        Ok(Self::with_name(Cow::Owned(name)))
    }

    /// Create an element for a catalog tag, whose name is known to be valid.
    pub(crate) const fn from_tag(tag: &'static str) -> Self {
        Self::with_name(Cow::Borrowed(tag))
    }

    const fn with_name(name: Cow<'static, str>) -> Self {
        Self {
            name,
            attributes: Attributes::new(),
            children: Vec::new(),
            doctype: false,
        }
    }

    /// The tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes, in output order.
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The children, in output order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Whether this element is a document root, rendered after a
    /// `<!DOCTYPE html>` line.
    #[must_use]
    pub const fn is_document(&self) -> bool {
        self.doctype
    }

    /// Set an attribute (last write wins) and return the element.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidAttributeName`] if `name` does not
    /// normalize to a valid attribute name.
    pub fn attr(mut self, name: &str, value: impl Into<AttributeValue>) -> Result<Self, DomError> {
        let _ = self.set_attr(name, value)?;
        Ok(self)
    }

    /// Set several attributes in order and return the element.
    ///
    /// Either every name is valid and all are set, or none is.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidAttributeName`] for the first name that
    /// does not normalize to a valid attribute name.
    pub fn attrs<I, K, V>(mut self, attributes: I) -> Result<Self, DomError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
    {
        let _ = self.extend(Vec::<Node>::new(), attributes)?;
        Ok(self)
    }

    /// Append one child and return the element.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let _ = self.push_child(child);
        self
    }

    /// Append children in order and return the element.
    #[must_use]
    pub fn children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set an attribute in place (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidAttributeName`] if `name` does not
    /// normalize to a valid attribute name.
    pub fn set_attr(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<&mut Self, DomError> {
        self.attributes.set(name, value)?;
        Ok(self)
    }

    /// Append one child in place.
    pub fn push_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Append children and merge attributes in place.
    ///
    /// Children go after the existing ones; attributes already present are
    /// overwritten where they stand, new ones are added at the end. All
    /// names are validated before anything is changed.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidAttributeName`] for the first name that
    /// does not normalize to a valid attribute name. The element is left
    /// untouched in that case.
    pub fn extend<C, T, A, K, V>(
        &mut self,
        children: C,
        attributes: A,
    ) -> Result<&mut Self, DomError>
    where
        C: IntoIterator<Item = T>,
        T: Into<Node>,
        A: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
    {
        let normalized = attributes
            .into_iter()
            .map(|(name, value)| Ok((normalize_attr_name(name.as_ref())?, value.into())))
            .collect::<Result<Vec<_>, DomError>>()?;

        self.children.extend(children.into_iter().map(Into::into));
        for (name, value) in normalized {
            self.attributes.insert_normalized(name, value);
        }
        Ok(self)
    }
}

/// Create an empty element with a caller-chosen tag name.
///
/// # Errors
///
/// Returns [`DomError::InvalidTagName`] if `name` is not a valid tag name.
pub fn element(name: impl Into<String>) -> Result<Element, DomError> {
    Element::new(name)
}

/// Text content. Equivalent to converting a string into a [`Node`].
#[must_use]
pub fn text(value: impl Into<String>) -> Node {
    Node::Text(value.into())
}

/// Markup inserted into the output without escaping.
///
/// The caller vouches that `html` is well-formed and safe. This is the only
/// way to bypass escaping.
#[must_use]
pub fn raw(html: impl Into<String>) -> Node {
    Node::Raw(html.into())
}

/// Group nodes without a wrapping tag.
#[must_use]
pub fn fragment<I, T>(children: I) -> Node
where
    I: IntoIterator<Item = T>,
    T: Into<Node>,
{
    children.into_iter().collect()
}

/// Create a document root: `<html>` holding a head and a body, rendered
/// after `<!DOCTYPE html>`.
///
/// `content` goes inside the body: it fills the default `<body>` when
/// `body` is `None`, and is appended after the existing children of a
/// supplied body. A missing head is replaced by an empty `<head>`.
/// Attributes for `<html>` can be added with the regular [`Element`]
/// methods.
#[must_use]
pub fn document<I, T>(head: Option<Element>, body: Option<Element>, content: I) -> Element
where
    I: IntoIterator<Item = T>,
    T: Into<Node>,
{
    let head = head.unwrap_or_else(|| Tag::Head.element());
    let body = body.unwrap_or_else(|| Tag::Body.element()).children(content);

    let mut root = Tag::Html.element().child(head).child(body);
    root.doctype = true;
    root
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Cow<'_, str>> for Node {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<()> for Node {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

impl<T: Into<Self>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Node {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Into<Self>> FromIterator<T> for Node {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Fragment(iter.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Node {
                fn from(value: $int) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
