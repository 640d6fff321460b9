//! Renderers shared by the built-in registries.
//!
//! Every function here has the [`RenderFn`](crate::RenderFn) shape so custom
//! registries can reuse them. Containers recurse through
//! [`RenderCx::nested`]; scalars ignore the indent entirely.

pub mod number;

use crate::error::InspectError;
use crate::kind::RenderCx;
use inspector_value::{Slot, Value};

pub use number::format_number;

const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// What the host's `String(value)` would produce, without invoking any
/// user-visible conversion hooks.
pub fn to_display(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(*n),
        Value::String(text) => text.clone(),
        Value::Symbol(description) => {
            format!("Symbol({})", description.as_deref().unwrap_or_default())
        }
        Value::Object(object) => match object.slot() {
            Slot::Function { source } => source.clone(),
            Slot::Date(at) => at.format(DATE_FORMAT).to_string(),
            _ => value.string_tag(),
        },
    }
}

/// Generic string conversion. Also the number renderer, since
/// [`to_display`] already follows the host's number formatting.
pub fn plain(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(to_display(value))
}

/// Double-quoted string. Embedded quotes are left alone unless
/// `escape_strings` is on.
pub fn string(cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(quote(cx, &to_display(value)))
}

pub(crate) fn quote(cx: &RenderCx<'_>, text: &str) -> String {
    quote_with(text, cx.options().escape_strings)
}

pub(crate) fn quote_with(text: &str, escape: bool) -> String {
    if !escape {
        return format!("\"{text}\"");
    }
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// `[a, b, c]`, each element rendered one level deeper.
pub fn sequence(cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    let elements = value
        .as_object()
        .and_then(|object| object.elements())
        .unwrap_or_default();
    sequence_of(cx, elements)
}

pub(crate) fn sequence_of(cx: &RenderCx<'_>, elements: &[Value]) -> Result<String, InspectError> {
    let rendered = elements
        .iter()
        .map(|element| cx.nested(element))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", rendered.join(", ")))
}

/// Own enumerable properties in insertion order, one per line:
///
/// ```text
/// {
///     "key": value,
///     "other": value
/// }
/// ```
///
/// An object without properties renders as `{}`.
pub fn keyed(cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    match value.as_object() {
        Some(object) => keyed_entries(cx, object.properties()),
        None => plain(cx, value),
    }
}

pub(crate) fn keyed_entries<'v>(
    cx: &RenderCx<'_>,
    entries: impl ExactSizeIterator<Item = (&'v str, &'v Value)>,
) -> Result<String, InspectError> {
    if entries.len() == 0 {
        return Ok("{}".to_string());
    }
    let level = cx.indent().level();
    let inner = cx.pad(level.saturating_add(1))?;
    let outer = cx.pad(level)?;
    let lines = entries
        .map(|(key, child)| Ok(format!("{inner}{}: {}", quote(cx, key), cx.nested(child)?)))
        .collect::<Result<Vec<_>, InspectError>>()?;
    Ok(format!("{{\n{}\n{outer}}}", lines.join(",\n")))
}

/// `Name({ Message / Line / File })`, with the block only when at least one
/// of the fields is present.
pub fn error(cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    let message = value.member("message");
    let line = first_truthy(value, &["lineNumber", "line"]);
    let file = first_truthy(value, &["fileName", "sourceURL"]);

    let mut out = format!("{}(", to_display(value.member("name")));
    if message.is_truthy() || line.is_truthy() || file.is_truthy() {
        out.push_str("{\n");
        if message.is_truthy() {
            out.push_str(&format!("\tMessage: {}\n", quote(cx, &to_display(message))));
        }
        if line.is_truthy() {
            out.push_str(&format!("\tLine: {}\n", to_display(line)));
        }
        if file.is_truthy() {
            out.push_str(&format!("\tFile: {}\n", quote(cx, &to_display(file))));
        }
        out.push('}');
    }
    out.push(')');
    Ok(out)
}

fn first_truthy<'v>(value: &'v Value, keys: &[&str]) -> &'v Value {
    static UNDEFINED: Value = Value::Undefined;
    keys.iter()
        .map(|key| value.member(key))
        .find(|member| member.is_truthy())
        .unwrap_or(&UNDEFINED)
}

/// Source text up to the opening brace; the body is never printed.
pub fn function_signature(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    let source = to_display(value);
    let head = source.find('{').map_or("", |brace| &source[..=brace]);
    Ok(format!("{head} [ignore code] }}"))
}

pub fn date(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(format!("Date: {}", to_display(value)))
}

/// `/source/flags`. Duck-typed regexps without a source fall back to their
/// string tag.
pub fn regexp(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(match value.member("source").as_str() {
        Some(source) => format!(
            "/{source}/{}",
            value.member("flags").as_str().unwrap_or_default()
        ),
        None => to_display(value),
    })
}

/// Buffers report their size only, never their contents.
pub fn array_buffer(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(format!(
        "[].byteLength: {}",
        to_display(value.member("byteLength"))
    ))
}

/// Views report the byte length of the buffer they look into.
pub fn buffer_view(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    Ok(format!(
        "[].buffer.byteLength: {}",
        to_display(value.member("buffer").member("byteLength"))
    ))
}

/// Element-like hosts as markup: `<tag attrs>content</tag>`, or
/// `<tag attrs />` when there is no content. Documents borrow tag name and
/// content from their root element.
pub fn element(_cx: &RenderCx<'_>, value: &Value) -> Result<String, InspectError> {
    let root = value.member("documentElement");
    let tag_name = member_or_root(value, root, "tagName").to_lowercase();
    let content = member_or_root(value, root, "innerHTML");

    let attributes = value
        .member("attributes")
        .as_object()
        .and_then(|map| map.elements())
        .unwrap_or_default()
        .iter()
        .map(|attr| {
            format!(
                "{}=\"{}\"",
                to_display(attr.member("nodeName")),
                to_display(attr.member("nodeValue"))
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    let attributes = if attributes.is_empty() {
        attributes
    } else {
        format!(" {attributes}")
    };

    Ok(if content.is_empty() {
        format!("<{tag_name}{attributes} />")
    } else {
        format!("<{tag_name}{attributes}>{content}</{tag_name}>")
    })
}

fn member_or_root<'v>(value: &'v Value, root: &'v Value, key: &str) -> &'v str {
    value
        .get(key)
        .or_else(|| root.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_follows_host_string_conversion() {
        assert_eq!(to_display(&Value::Undefined), "undefined");
        assert_eq!(to_display(&Value::Bool(false)), "false");
        assert_eq!(to_display(&Value::Symbol(Some("id".into()))), "Symbol(id)");
        assert_eq!(to_display(&Value::host("BarProp")), "[object BarProp]");
        assert_eq!(to_display(&Value::function("function () {}")), "function () {}");
    }
}
