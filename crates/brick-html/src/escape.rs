use std::borrow::Cow;

/// Escape text content: `&`, `<` and `>` become character references.
///
/// Quotes are left alone since text never sits inside an attribute value.
/// Returns the input unchanged (borrowed) when there is nothing to escape.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape a value for use inside a double-quoted attribute.
///
/// Text escaping runs first and `"` becomes `&quot;` afterwards, so the
/// inserted `&quot;` is never escaped a second time.
#[must_use]
pub fn escape_attr_value(value: &str) -> Cow<'_, str> {
    match escape_text(value) {
        Cow::Borrowed(text) if !text.contains('"') => Cow::Borrowed(text),
        escaped => Cow::Owned(escaped.replace('"', "&quot;")),
    }
}
