//! Thin HTML element wrappers over [`Document::tag`] and [`Document::open`].

use std::fmt;

use crate::attrs::{as_strs, optional_attributes};
use crate::document::Document;
use crate::tag::render_tag;

impl Document {
    // Structure

    /// Open `<html>`.
    pub fn html_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("html", attrs)
    }

    /// Open `<head>`.
    pub fn head_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("head", attrs)
    }

    /// Open `<body>`.
    pub fn body_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("body", attrs)
    }

    // Document head

    /// `<base href target />`; empty values are omitted.
    pub fn base(&mut self, href: &str, target: &str) -> &mut Self {
        let attrs = optional_attributes(&[("href", href), ("target", target)], &[]);
        self.tag("base", "", &as_strs(&attrs))
    }

    /// `<link type rel href ... />`; empty values are omitted.
    pub fn link(&mut self, rel: &str, mime_type: &str, href: &str, attrs: &[&str]) -> &mut Self {
        let attrs = optional_attributes(
            &[("type", mime_type), ("rel", rel), ("href", href)],
            attrs,
        );
        self.tag("link", "", &as_strs(&attrs))
    }

    /// `<meta ... />`
    pub fn meta(&mut self, attrs: &[&str]) -> &mut Self {
        self.tag("meta", "", attrs)
    }

    /// `<style>content</style>`
    pub fn style(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("style", content, attrs)
    }

    /// `<title>content</title>`
    pub fn title(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("title", content, attrs)
    }

    // Content

    /// Heading `<h{level}>`.
    pub fn header(&mut self, level: u8, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag(&format!("h{level}"), content, attrs)
    }

    pub fn br(&mut self, attrs: &[&str]) -> &mut Self {
        self.tag("br", "", attrs)
    }

    pub fn hr(&mut self, attrs: &[&str]) -> &mut Self {
        self.tag("hr", "", attrs)
    }

    pub fn div(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("div", content, attrs)
    }

    pub fn div_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("div", attrs)
    }

    pub fn p(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("p", content, attrs)
    }

    /// Paragraph with formatted content and optional class.
    pub fn pf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("p", class, args)
    }

    pub fn p_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("p", attrs)
    }

    pub fn span(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("span", content, attrs)
    }

    /// Span with formatted content and optional class.
    pub fn spanf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("span", class, args)
    }

    pub fn span_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("span", attrs)
    }

    // Formatting

    pub fn b(&mut self, content: &str) -> &mut Self {
        self.tag("b", content, &[])
    }

    pub fn em(&mut self, content: &str) -> &mut Self {
        self.tag("em", content, &[])
    }

    pub fn i(&mut self, content: &str) -> &mut Self {
        self.tag("i", content, &[])
    }

    pub fn q(&mut self, content: &str) -> &mut Self {
        self.tag("q", content, &[])
    }

    pub fn s(&mut self, content: &str) -> &mut Self {
        self.tag("s", content, &[])
    }

    pub fn strong(&mut self, content: &str) -> &mut Self {
        self.tag("strong", content, &[])
    }

    pub fn sub(&mut self, content: &str) -> &mut Self {
        self.tag("sub", content, &[])
    }

    pub fn sup(&mut self, content: &str) -> &mut Self {
        self.tag("sup", content, &[])
    }

    pub fn u(&mut self, content: &str) -> &mut Self {
        self.tag("u", content, &[])
    }

    // Formatting with formatted content; `class` is omitted when empty.

    pub fn bf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("b", class, args)
    }

    pub fn emf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("em", class, args)
    }

    /// `<i>`; named with a trailing underscore since `if` is a keyword.
    pub fn if_(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("i", class, args)
    }

    pub fn qf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("q", class, args)
    }

    pub fn sf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("s", class, args)
    }

    pub fn strongf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("strong", class, args)
    }

    pub fn subf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("sub", class, args)
    }

    pub fn supf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("sup", class, args)
    }

    pub fn uf(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("u", class, args)
    }

    // Links and comments

    /// Hyperlink; empty `href` or `title` are omitted.
    pub fn a(&mut self, content: &str, href: &str, title: &str, attrs: &[&str]) -> &mut Self {
        let attrs = optional_attributes(&[("href", href), ("title", title)], attrs);
        self.tag("a", content, &as_strs(&attrs))
    }

    /// Hyperlink with formatted content and optional class.
    pub fn af(&mut self, class: &str, href: &str, title: &str, args: fmt::Arguments<'_>) -> &mut Self {
        let attrs = optional_attributes(&[("class", class)], &[]);
        self.a(&args.to_string(), href, title, &as_strs(&attrs))
    }

    /// `<!-- content -->` on its own line.
    pub fn comment(&mut self, content: &str) -> &mut Self {
        self.push_fmt(format_args!("<!-- {content} -->")).newline()
    }

    /// [`comment`](Self::comment) with formatted content.
    pub fn commentf(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.push_fmt(format_args!("<!-- {args} -->")).newline()
    }

    // Lists

    pub fn ol_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("ol", attrs)
    }

    pub fn ul_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("ul", attrs)
    }

    pub fn li_open(&mut self, attrs: &[&str]) -> &mut Self {
        self.open("li", attrs)
    }

    pub fn li(&mut self, content: &str, attrs: &[&str]) -> &mut Self {
        self.tag("li", content, attrs)
    }

    /// List item with formatted content and optional class.
    pub fn lif(&mut self, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.tagf("li", class, args)
    }
}

/// Hyperlink as a string, for nesting inside other content.
#[must_use]
pub fn a(content: &str, href: &str, title: &str) -> String {
    let attrs = optional_attributes(&[("href", href), ("title", title)], &[]);
    render_tag("a", content, &as_strs(&attrs))
}
