//! Stateless tag rendering.
//!
//! These functions build tag strings without touching a [`Document`](crate::Document).
//! They are handy for nesting inline markup inside the content of another tag:
//!
//! ```
//! use quill_markup::{Document, NewlineMode, tag};
//!
//! let mut doc = Document::new("", NewlineMode::NONE);
//! doc.p(&format!("{} {}", tag::i("Hello"), tag::b("World!")), &[]);
//! assert_eq!(doc.as_str(), "<p><i>Hello</i> <b>World!</b></p>");
//! ```

use std::fmt;

use crate::attrs::encode_attributes;

/// Render a complete tag.
///
/// Empty `content` produces a self-closing tag (`<br />`); otherwise the
/// content is wrapped in an opening and closing tag. Works for any tag-based
/// markup (HTML, SVG, XML).
///
/// # Examples
///
/// ```
/// use quill_markup::render_tag;
///
/// assert_eq!(render_tag("br", "", &[]), "<br />");
/// assert_eq!(render_tag("p", "hi", &[]), "<p>hi</p>");
/// assert_eq!(
///     render_tag("input", "", &["type", "text", "checked"]),
///     r#"<input type="text" checked />"#
/// );
/// ```
pub fn render_tag(name: &str, content: &str, attrs: &[&str]) -> String {
    let attrs = encode_attributes(attrs);
    if content.is_empty() {
        format!("<{name}{attrs} />")
    } else {
        format!("<{name}{attrs}>{content}</{name}>")
    }
}

/// Render a complete tag with formatted content and an optional class.
///
/// The `class` attribute is only emitted when `class` is non-empty.
pub fn render_tagf(name: &str, class: &str, args: fmt::Arguments<'_>) -> String {
    let content = args.to_string();
    if class.is_empty() {
        render_tag(name, &content, &[])
    } else {
        render_tag(name, &content, &["class", class])
    }
}

/// Render an opening tag: `<name attrs>`.
pub(crate) fn render_open_tag(name: &str, attrs: &[&str]) -> String {
    format!("<{name}{}>", encode_attributes(attrs))
}

/// Render a closing tag: `</name>`.
pub(crate) fn render_close_tag(name: &str) -> String {
    format!("</{name}>")
}

/// `<b>content</b>`
pub fn b(content: &str) -> String {
    render_tag("b", content, &[])
}

/// `<em>content</em>`
pub fn em(content: &str) -> String {
    render_tag("em", content, &[])
}

/// `<i>content</i>`
pub fn i(content: &str) -> String {
    render_tag("i", content, &[])
}

/// `<q>content</q>`
pub fn q(content: &str) -> String {
    render_tag("q", content, &[])
}

/// `<s>content</s>`
pub fn s(content: &str) -> String {
    render_tag("s", content, &[])
}

/// `<strong>content</strong>`
pub fn strong(content: &str) -> String {
    render_tag("strong", content, &[])
}

/// `<sub>content</sub>`
pub fn sub(content: &str) -> String {
    render_tag("sub", content, &[])
}

/// `<sup>content</sup>`
pub fn sup(content: &str) -> String {
    render_tag("sup", content, &[])
}

/// `<u>content</u>`
pub fn u(content: &str) -> String {
    render_tag("u", content, &[])
}

/// `<span attrs>content</span>`
pub fn span(content: &str, attrs: &[&str]) -> String {
    render_tag("span", content, attrs)
}

// Formatted variants; `class` is omitted when empty.

pub fn bf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("b", class, args)
}

pub fn emf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("em", class, args)
}

/// `<i>`; named with a trailing underscore since `if` is a keyword.
pub fn if_(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("i", class, args)
}

pub fn qf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("q", class, args)
}

pub fn sf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("s", class, args)
}

pub fn strongf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("strong", class, args)
}

pub fn subf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("sub", class, args)
}

pub fn supf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("sup", class, args)
}

pub fn uf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("u", class, args)
}

pub fn spanf(class: &str, args: fmt::Arguments<'_>) -> String {
    render_tagf("span", class, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_without_content() {
        assert_eq!(render_tag("br", "", &[]), "<br />");
    }

    #[test]
    fn test_content_wrapped() {
        assert_eq!(render_tag("p", "hi", &[]), "<p>hi</p>");
    }

    #[test]
    fn test_attributes_and_content() {
        assert_eq!(
            render_tag("a", "Home", &["href", "/", "title", "Start"]),
            r#"<a href="/" title="Start">Home</a>"#
        );
    }

    #[test]
    fn test_bare_trailing_attribute() {
        assert_eq!(
            render_tag("input", "", &["type", "text", "checked"]),
            r#"<input type="text" checked />"#
        );
    }

    #[test]
    fn test_svg_element() {
        assert_eq!(
            render_tag("circle", "", &["cx", "125", "cy", "125", "r", "75"]),
            r#"<circle cx="125" cy="125" r="75" />"#
        );
    }

    #[test]
    fn test_content_is_not_escaped() {
        assert_eq!(render_tag("p", "<b>x</b>", &[]), "<p><b>x</b></p>");
    }

    #[test]
    fn test_render_tagf_with_class() {
        assert_eq!(
            render_tagf("span", "price", format_args!("{:.2}", 4.5)),
            r#"<span class="price">4.50</span>"#
        );
    }

    #[test]
    fn test_render_tagf_without_class() {
        assert_eq!(
            render_tagf("b", "", format_args!("Value is '{}'.", 4711)),
            "<b>Value is '4711'.</b>"
        );
    }

    #[test]
    fn test_open_and_close() {
        assert_eq!(render_open_tag("g", &["opacity", "0.8"]), r#"<g opacity="0.8">"#);
        assert_eq!(render_close_tag("g"), "</g>");
    }

    #[test]
    fn test_inline_helpers() {
        assert_eq!(q("quote"), "<q>quote</q>");
        assert_eq!(s("gone"), "<s>gone</s>");
        assert_eq!(sup("2"), "<sup>2</sup>");
        assert_eq!(span("x", &["class", "k"]), r#"<span class="k">x</span>"#);
    }

    #[test]
    fn test_formatted_inline_helpers() {
        let total = 42;
        assert_eq!(bf("", format_args!("{total}")), "<b>42</b>");
        assert_eq!(emf("x", format_args!("{total}")), r#"<em class="x">42</em>"#);
        assert_eq!(if_("", format_args!("n={total}")), "<i>n=42</i>");
        assert_eq!(qf("", format_args!("{total}")), "<q>42</q>");
        assert_eq!(sf("", format_args!("{total}")), "<s>42</s>");
        assert_eq!(strongf("", format_args!("{total}")), "<strong>42</strong>");
        assert_eq!(subf("", format_args!("{}", 2)), "<sub>2</sub>");
        assert_eq!(supf("", format_args!("{}", 3)), "<sup>3</sup>");
        assert_eq!(uf("", format_args!("{total}")), "<u>42</u>");
        assert_eq!(
            spanf("num", format_args!("{:>4}", total)),
            r#"<span class="num">  42</span>"#
        );
    }
}
