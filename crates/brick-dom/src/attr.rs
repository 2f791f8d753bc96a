use std::num::TryFromIntError;

use crate::DomError;

/// Spellings that stand in for `class`, which is a reserved word in many
/// host languages.
const CLASS_ALIASES: [&str; 2] = ["klass", "class_name"];

/// One item of a list-valued attribute such as `class`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    /// A string item, rendered as-is (escaped).
    Str(String),
    /// An integer item, rendered in decimal.
    Int(i64),
    /// A missing item. Skipped when the list is joined.
    Null,
}

/// The value of a single attribute.
///
/// How each variant renders:
///
/// | Variant | Output |
/// |---|---|
/// | `Bool(false)`, `Null`, empty `List` | attribute omitted |
/// | `Bool(true)`, `Str("")` | bare name, e.g. `disabled` |
/// | `Str(s)` | `name="s"` |
/// | `Int(n)` | `name="n"` |
/// | `List(items)` | `name="a b c"` |
/// | `Bytes(_)` | render error, binary has no text form |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A boolean flag: `true` is a bare attribute, `false` omits it.
    Bool(bool),
    /// A space-separated token list.
    List(Vec<Scalar>),
    /// Binary data. Accepted into the tree but rejected by the renderer.
    Bytes(Vec<u8>),
    /// No value: the attribute is omitted.
    Null,
}

impl AttributeValue {
    /// Wrap binary data as an attribute value.
    ///
    /// Building the tree succeeds; rendering an element that carries this
    /// value fails with an unsupported attribute type error.
    #[must_use]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(data.into())
    }

    /// Whether this value causes the attribute to be left out of the output.
    #[must_use]
    pub fn is_omitted(&self) -> bool {
        match self {
            Self::Bool(flag) => !flag,
            Self::Null => true,
            Self::List(items) => items.iter().all(|item| matches!(item, Scalar::Null)),
            Self::Str(_) | Self::Int(_) | Self::Bytes(_) => false,
        }
    }
}

macro_rules! impl_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Scalar {
                fn from(value: $int) -> Self {
                    Self::Int(i64::from(value))
                }
            }

            impl From<$int> for AttributeValue {
                fn from(value: $int) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Integers that may not fit in `i64` convert fallibly, so a length or count
// is passed as `AttributeValue::try_from(items.len())?`.
macro_rules! impl_try_from_int {
    ($($int:ty),*) => {
        $(
            impl TryFrom<$int> for Scalar {
                type Error = TryFromIntError;

                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Self::Int)
                }
            }

            impl TryFrom<$int> for AttributeValue {
                type Error = TryFromIntError;

                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Self::Int)
                }
            }
        )*
    };
}

impl_try_from_int!(isize, u64, usize, i128, u128);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for AttributeValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for AttributeValue {
    fn from(value: [T; N]) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// Normalize a logical attribute name into the name written to the output.
///
/// Steps, in order:
///
/// 1. `klass` and `class_name` become `class`.
/// 2. One trailing underscore is stripped (`type_` becomes `type`).
/// 3. Remaining underscores become hyphens (`data_value` becomes `data-value`).
/// 4. The result must be non-empty and made of printable ASCII other than
///    the characters that end an attribute name (`"`, `'`, `>`, `/`, `=`).
///
/// Slightly more restrictive than "Attribute names" in
/// <https://www.w3.org/TR/html52/syntax.html#elements-attributes>.
///
/// # Errors
///
/// Returns [`DomError::InvalidAttributeName`] when the normalized name fails
/// step 4.
pub fn normalize_attr_name(name: &str) -> Result<String, DomError> {
    if CLASS_ALIASES.contains(&name) {
        return Ok("class".to_string());
    }

    let stripped = name.strip_suffix('_').unwrap_or(name);
    let normalized = stripped.replace('_', "-");

    if normalized.is_empty() || !normalized.bytes().all(is_attr_name_byte) {
        return Err(DomError::InvalidAttributeName(name.to_string()));
    }
    Ok(normalized)
}

const fn is_attr_name_byte(byte: u8) -> bool {
    byte.is_ascii_graphic() && !matches!(byte, b'"' | b'\'' | b'>' | b'/' | b'=')
}

/// Insertion-ordered attribute list of an element.
///
/// Names are stored normalized. Setting a name that is already present
/// replaces its value but keeps its original position, so output order is
/// the order in which each name was first set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    /// Create an empty attribute list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Normalize `name` and set it to `value` (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidAttributeName`] if `name` does not
    /// normalize to a valid attribute name. The list is unchanged then.
    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) -> Result<(), DomError> {
        let name = normalize_attr_name(name)?;
        self.insert_normalized(name, value.into());
        Ok(())
    }

    /// Set an already-normalized name.
    pub(crate) fn insert_normalized(&mut self, name: String, value: AttributeValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up a value by its normalized name (`data-value`, not `data_value`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Iterate over `(name, value)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Number of attributes, including ones whose value omits them.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attribute has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
