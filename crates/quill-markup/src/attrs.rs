//! Attribute encoding.
//!
//! Attributes are passed as a flat list of tokens read pairwise as
//! `name, value`. When the list has odd length the last token has no partner
//! and is emitted as a bare attribute (`checked`, `disabled`, ...).

/// Serialize attribute tokens into ` name="value"` fragments.
///
/// Values are emitted verbatim; escape them with [`escape_html`] first if they
/// may contain quotes or markup.
///
/// # Examples
///
/// ```
/// use quill_markup::encode_attributes;
///
/// assert_eq!(encode_attributes(&["type", "text", "checked"]), r#" type="text" checked"#);
/// assert_eq!(encode_attributes(&[]), "");
/// ```
pub fn encode_attributes(attrs: &[&str]) -> String {
    let mut out = String::new();
    let mut tokens = attrs.iter();
    while let Some(name) = tokens.next() {
        out.push(' ');
        out.push_str(name);
        if let Some(value) = tokens.next() {
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }
    out
}

/// Append `name` and `value` to an attribute list when both are non-empty.
///
/// Used by wrappers with optional attributes (`href`, `title`, `action`, ...)
/// so that unset parameters do not produce `name=""`.
pub fn push_attribute(attrs: &mut Vec<String>, name: &str, value: &str) {
    if !name.is_empty() && !value.is_empty() {
        attrs.push(name.to_owned());
        attrs.push(value.to_owned());
    }
}

/// Build an attribute list from optional `(name, value)` pairs followed by
/// caller-supplied tokens.
pub(crate) fn optional_attributes(pairs: &[(&str, &str)], extra: &[&str]) -> Vec<String> {
    let mut attrs = Vec::with_capacity(pairs.len() * 2 + extra.len());
    for (name, value) in pairs {
        push_attribute(&mut attrs, name, value);
    }
    attrs.extend(extra.iter().map(|token| (*token).to_owned()));
    attrs
}

/// Borrow an owned attribute list as the `&[&str]` form the renderer takes.
pub(crate) fn as_strs(attrs: &[String]) -> Vec<&str> {
    attrs.iter().map(String::as_str).collect()
}

/// Combine a base CSS class with an additional one.
///
/// Returns `None` when both are empty so callers can omit the attribute.
pub(crate) fn join_classes(base: &str, extra: &str) -> Option<String> {
    match (base.is_empty(), extra.is_empty()) {
        (true, true) => None,
        (false, true) => Some(base.to_owned()),
        (true, false) => Some(extra.to_owned()),
        (false, false) => Some(format!("{base} {extra}")),
    }
}

/// Escape HTML special characters.
///
/// Nothing in this crate escapes implicitly; use this on untrusted text
/// before passing it as content or attribute value.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
