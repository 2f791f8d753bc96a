//! Content that arrives as JSON rather than as a built tree.
//!
//! A [`serde_json::Value`] renders under the same rules as a [`Node`]:
//!
//! | JSON | Rendered as |
//! |---|---|
//! | `"text"` | escaped text |
//! | integer | decimal text |
//! | `null` | nothing |
//! | array | its items in order, flattened |
//! | `{"raw": "<b>x</b>"}` | the string, unescaped |
//! | `{"tag": "div", "attributes": {..}, "children": ..}` | an element |
//!
//! Booleans, floats, any other object and any key not listed above are
//! rejected with [`RenderError::UnsupportedContentType`]. Element objects
//! may use any valid tag name, in the catalog or not. They go through the
//! same name validation as [`Element::new`] and [`Element::attr`], so an
//! invalid name surfaces as [`RenderError::Dom`] when the object is reached.
//! Attribute order follows key order in the source document.
//!
//! [`Node`]: brick_dom::Node

use brick_dom::{AttributeValue, Element, Scalar, normalize_attr_name};
use serde_json::{Map, Value};

use crate::error::RenderError;
use crate::render::{Render, Renderer};

/// Key holding the tag name of an element object.
const TAG_KEY: &str = "tag";
/// Key holding the attribute object of an element object.
const ATTRIBUTES_KEY: &str = "attributes";
/// Key holding the children of an element object.
const CHILDREN_KEY: &str = "children";
/// Key holding the markup of a raw object.
const RAW_KEY: &str = "raw";

impl Render for Value {
    fn render_into(&self, renderer: &mut Renderer) -> Result<(), RenderError> {
        match self {
            Self::Null => Ok(()),
            Self::String(text) => {
                renderer.write_text(text);
                Ok(())
            }
            Self::Number(number) if number.is_i64() || number.is_u64() => {
                renderer.write_display(number);
                Ok(())
            }
            Self::Array(items) => items.as_slice().render_into(renderer),
            Self::Object(object) => render_object(object, renderer),
            Self::Bool(_) | Self::Number(_) => {
                Err(RenderError::UnsupportedContentType(describe(self)))
            }
        }
    }
}

fn render_object(object: &Map<String, Value>, renderer: &mut Renderer) -> Result<(), RenderError> {
    if let Some(tag) = object.get(TAG_KEY) {
        return render_element(tag, object, renderer);
    }
    match object.get(RAW_KEY) {
        Some(Value::String(html)) => {
            reject_unknown_keys(object, &[RAW_KEY])?;
            renderer.write_raw(html);
            Ok(())
        }
        Some(other) => Err(RenderError::UnsupportedContentType(format!(
            "raw content {}",
            describe(other)
        ))),
        None => Err(RenderError::UnsupportedContentType(
            "an object without a `tag` or `raw` key".to_string(),
        )),
    }
}

fn render_element(
    tag: &Value,
    object: &Map<String, Value>,
    renderer: &mut Renderer,
) -> Result<(), RenderError> {
    let Value::String(name) = tag else {
        return Err(RenderError::UnsupportedContentType(format!(
            "tag name {}",
            describe(tag)
        )));
    };
    reject_unknown_keys(object, &[TAG_KEY, ATTRIBUTES_KEY, CHILDREN_KEY])?;

    let mut element = Element::new(name.as_str())?;

    match object.get(ATTRIBUTES_KEY) {
        None | Some(Value::Null) => {}
        Some(Value::Object(attributes)) => {
            for (key, value) in attributes {
                match attribute_value(value) {
                    Ok(value) => {
                        let _ = element.set_attr(key, value)?;
                    }
                    Err(kind) => {
                        return Err(RenderError::UnsupportedAttributeType {
                            name: normalize_attr_name(key)?,
                            kind,
                        });
                    }
                }
            }
        }
        Some(other) => {
            return Err(RenderError::UnsupportedContentType(format!(
                "attribute list {}",
                describe(other)
            )));
        }
    }

    let children = object.get(CHILDREN_KEY).filter(|children| has_children(children));
    renderer.write_start_tag(&element)?;
    if let Some(children) = children {
        children.render_into(renderer)?;
        renderer.write_end_tag(element.name());
    }
    Ok(())
}

/// Whether a `children` entry counts as at least one child.
fn has_children(children: &Value) -> bool {
    match children {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Convert a JSON attribute value, or describe why it has no text form.
fn attribute_value(value: &Value) -> Result<AttributeValue, &'static str> {
    match value {
        Value::Null => Ok(AttributeValue::Null),
        Value::Bool(flag) => Ok(AttributeValue::Bool(*flag)),
        Value::String(text) => Ok(AttributeValue::Str(text.clone())),
        Value::Number(number) => number
            .as_i64()
            .map(AttributeValue::Int)
            .ok_or("a non-integer number"),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => Ok(Scalar::Null),
                Value::String(text) => Ok(Scalar::Str(text.clone())),
                Value::Number(number) => number
                    .as_i64()
                    .map(Scalar::Int)
                    .ok_or("a list holding a non-integer number"),
                Value::Bool(_) => Err("a list holding a boolean"),
                Value::Array(_) => Err("a nested list"),
                Value::Object(_) => Err("a list holding an object"),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(AttributeValue::List),
        Value::Object(_) => Err("an object"),
    }
}

fn reject_unknown_keys(object: &Map<String, Value>, known: &[&str]) -> Result<(), RenderError> {
    match object.keys().find(|key| !known.contains(&key.as_str())) {
        Some(key) => Err(RenderError::UnsupportedContentType(format!(
            "an object with unknown key `{key}`"
        ))),
        None => Ok(()),
    }
}

/// Short description of a JSON value for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => format!("boolean `{flag}`"),
        Value::Number(number) => format!("number `{number}`"),
        Value::String(_) => "a string".to_string(),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
