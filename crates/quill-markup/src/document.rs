//! Document buffer and open-tag stack.

use std::fmt::{self, Write as _};
use std::io;

use crate::error::MarkupError;
use crate::gate::Gate;
use crate::newline::{NEWLINE, NewlineMode};
use crate::tag::{render_close_tag, render_open_tag, render_tag, render_tagf};

/// Generator comment written after the doctype line.
const GENERATOR: &str = concat!("quill-markup ", env!("CARGO_PKG_VERSION"));

/// A markup document under construction.
///
/// Text is only ever appended. Opening tags are remembered on a stack so they
/// can be closed later with [`close_top`](Self::close_top),
/// [`close_until`](Self::close_until) or [`close_all`](Self::close_all).
///
/// Every append goes through the conditional gate: between
/// [`when(false)`](Self::when) and [`otherwise`](Self::otherwise) or
/// [`end_when`](Self::end_when) nothing reaches the buffer. The tag stack is
/// maintained regardless of the gate, so a tag opened inside a suppressed
/// block is still closed (visibly) later.
///
/// # Examples
///
/// ```
/// use quill_markup::{Document, NewlineMode};
///
/// let mut doc = Document::new("", NewlineMode::NONE);
/// doc.open("ul", &["class", "menu"])
///     .tag("li", "Home", &[])
///     .tag("li", "About", &[])
///     .close_all();
/// assert_eq!(
///     doc.as_str(),
///     r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    buffer: String,
    stack: Vec<String>,
    newline: NewlineMode,
    gate: Gate,
}

impl Document {
    /// Create a document.
    ///
    /// A non-empty `doctype` (see [`doctype`](crate::doctype)) seeds the buffer
    /// with `<!DOCTYPE doctype>` and a generator comment, each on its own line.
    #[must_use]
    pub fn new(doctype: &str, newline: NewlineMode) -> Self {
        let mut doc = Self {
            buffer: String::new(),
            stack: Vec::with_capacity(10),
            newline,
            gate: Gate::Inactive,
        };
        if !doctype.is_empty() {
            doc.push_fmt(format_args!("<!DOCTYPE {doctype}>"))
                .newline()
                .push_fmt(format_args!("<!-- {GENERATOR} -->"))
                .newline();
        }
        doc
    }

    /// Newline policy of this document.
    #[must_use]
    pub fn newline_mode(&self) -> NewlineMode {
        self.newline
    }

    /// Append raw text.
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        if self.gate.allows() {
            self.buffer.push_str(text);
        }
        self
    }

    /// Append formatted text.
    ///
    /// ```
    /// use quill_markup::{Document, NewlineMode};
    ///
    /// let mut doc = Document::new("", NewlineMode::NONE);
    /// doc.push_fmt(format_args!("{} + {} = {}", 1, 2, 1 + 2));
    /// assert_eq!(doc.as_str(), "1 + 2 = 3");
    /// ```
    pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        if self.gate.allows() {
            let _ = self.buffer.write_fmt(args);
        }
        self
    }

    /// Append a line break (`\r\n`).
    pub fn newline(&mut self) -> &mut Self {
        self.push_str(NEWLINE)
    }

    fn newline_if(&mut self, flag: NewlineMode) -> &mut Self {
        if self.newline.contains(flag) {
            self.newline();
        }
        self
    }

    /// Append a complete tag; see [`render_tag`].
    ///
    /// Does not touch the tag stack.
    pub fn tag(&mut self, name: &str, content: &str, attrs: &[&str]) -> &mut Self {
        self.push_str(&render_tag(name, content, attrs))
            .newline_if(NewlineMode::AFTER_TAG)
    }

    /// Append a complete tag with formatted content; `class` is omitted when empty.
    pub fn tagf(&mut self, name: &str, class: &str, args: fmt::Arguments<'_>) -> &mut Self {
        self.push_str(&render_tagf(name, class, args))
            .newline_if(NewlineMode::AFTER_TAG)
    }

    /// Append an opening tag and push it onto the stack.
    pub fn open(&mut self, name: &str, attrs: &[&str]) -> &mut Self {
        self.stack.push(name.to_owned());
        self.push_str(&render_open_tag(name, attrs))
            .newline_if(NewlineMode::AFTER_OPEN)
    }

    fn push_close(&mut self, name: &str) {
        self.push_str(&render_close_tag(name))
            .newline_if(NewlineMode::AFTER_CLOSE);
    }

    /// Close the innermost open tag. Does nothing when no tag is open.
    pub fn close_top(&mut self) -> &mut Self {
        if let Some(name) = self.stack.pop() {
            self.push_close(&name);
        }
        self
    }

    /// Close every open tag, innermost first.
    pub fn close_all(&mut self) -> &mut Self {
        while let Some(name) = self.stack.pop() {
            self.push_close(&name);
        }
        self
    }

    /// Close tags up to and including the innermost `name`.
    ///
    /// If `name` is not open at all, every open tag is closed. Use
    /// [`try_close_until`](Self::try_close_until) to treat that as an error.
    pub fn close_until(&mut self, name: &str) -> &mut Self {
        if !self.is_open(name) {
            tracing::warn!(
                tag = name,
                open = self.stack.len(),
                "close_until target is not open, closing all tags"
            );
        }
        while let Some(open) = self.stack.pop() {
            self.push_close(&open);
            if open == name {
                break;
            }
        }
        self
    }

    /// Like [`close_until`](Self::close_until), but fails without closing
    /// anything when `name` is not open.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::TagNotOpen`] if `name` is not on the stack.
    pub fn try_close_until(&mut self, name: &str) -> Result<&mut Self, MarkupError> {
        if !self.is_open(name) {
            return Err(MarkupError::TagNotOpen(name.to_owned()));
        }
        Ok(self.close_until(name))
    }

    /// Innermost open tag.
    #[must_use]
    pub fn peek_tag(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Open tags, outermost first.
    #[must_use]
    pub fn open_tags(&self) -> &[String] {
        &self.stack
    }

    /// Whether `name` is currently open.
    #[must_use]
    pub fn is_open(&self, name: &str) -> bool {
        self.stack.iter().any(|open| open == name)
    }

    /// Start a conditional block: appends are suppressed unless `condition`.
    ///
    /// ```
    /// use quill_markup::{Document, NewlineMode};
    ///
    /// # fn main() -> Result<(), quill_markup::MarkupError> {
    /// let logged_in = false;
    /// let mut doc = Document::new("", NewlineMode::NONE);
    /// doc.when(logged_in)?
    ///     .p("Welcome back", &[])
    ///     .otherwise()?
    ///     .p("Please sign in", &[])
    ///     .end_when()?;
    /// assert_eq!(doc.as_str(), "<p>Please sign in</p>");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::NestedCondition`] if a block is already active.
    pub fn when(&mut self, condition: bool) -> Result<&mut Self, MarkupError> {
        self.gate.enter(condition)?;
        Ok(self)
    }

    /// Invert the condition of the active block.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::OtherwiseWithoutWhen`] outside a block.
    pub fn otherwise(&mut self) -> Result<&mut Self, MarkupError> {
        self.gate.invert()?;
        Ok(self)
    }

    /// End the active block; appends are unconditional again.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EndWithoutWhen`] outside a block.
    pub fn end_when(&mut self) -> Result<&mut Self, MarkupError> {
        self.gate.exit()?;
        Ok(self)
    }

    /// Whether a `when` block is active.
    #[must_use]
    pub fn in_condition(&self) -> bool {
        self.gate.is_active()
    }

    /// Document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Document bytes (UTF-8).
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Length of the document in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the document, returning its text. Open tags stay unclosed.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Write the document to a byte sink and flush it.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.buffer.as_bytes())?;
        writer.flush()
    }

    /// Close every open tag, then write the document to a byte sink.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `writer`.
    pub fn close_all_and_write_to<W: io::Write>(&mut self, writer: W) -> io::Result<()> {
        self.close_all().write_to(writer)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl fmt::Write for Document {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::doctype;

    fn fragment() -> Document {
        Document::new(doctype::NONE, NewlineMode::NONE)
    }

    #[test]
    fn test_new_without_doctype_is_empty() {
        let doc = fragment();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }

    #[test]
    fn test_new_with_doctype_writes_header() {
        let doc = Document::new(doctype::HTML5, NewlineMode::NONE);
        let expected = format!("<!DOCTYPE html>\r\n<!-- {GENERATOR} -->\r\n");
        assert_eq!(doc.as_str(), expected);
    }

    #[test]
    fn test_close_all_balances_stack() {
        let mut doc = fragment();
        doc.open("html", &[]).open("body", &[]).open("div", &["id", "main"]);
        assert_eq!(doc.open_tags(), ["html", "body", "div"]);
        doc.close_all();
        assert_eq!(
            doc.as_str(),
            r#"<html><body><div id="main"></div></body></html>"#
        );
        assert!(doc.open_tags().is_empty());
    }

    #[test]
    fn test_second_close_all_appends_nothing() {
        let mut doc = fragment();
        doc.open("p", &[]).close_all();
        let first = doc.as_str().to_owned();
        doc.close_all();
        assert_eq!(doc.as_str(), first);
        assert_eq!(doc.as_str(), doc.as_str());
    }

    #[test]
    fn test_close_top_on_empty_stack_is_noop() {
        let mut doc = Document::new(doctype::NONE, NewlineMode::ALL);
        doc.close_top().close_top();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_close_until_inclusive() {
        let mut doc = fragment();
        doc.open("a", &[]).open("b", &[]).open("c", &[]).close_until("a");
        assert_eq!(doc.as_str(), "<a><b><c></c></b></a>");
        assert!(doc.open_tags().is_empty());
    }

    #[test]
    fn test_close_until_stops_at_innermost_match() {
        let mut doc = fragment();
        doc.open("div", &[]).open("div", &[]).open("p", &[]).close_until("div");
        assert_eq!(doc.open_tags(), ["div"]);
        assert_eq!(doc.peek_tag(), Some("div"));
    }

    #[test]
    fn test_close_until_absent_closes_everything() {
        let mut doc = fragment();
        doc.open("a", &[]).open("b", &[]).close_until("z");
        assert_eq!(doc.as_str(), "<a><b></b></a>");
        assert!(doc.open_tags().is_empty());
    }

    #[test]
    fn test_try_close_until_absent_leaves_stack() {
        let mut doc = fragment();
        doc.open("a", &[]).open("b", &[]);
        let err = doc.try_close_until("z").unwrap_err();
        assert!(matches!(err, MarkupError::TagNotOpen(ref tag) if tag == "z"));
        assert_eq!(doc.open_tags(), ["a", "b"]);
        assert_eq!(doc.as_str(), "<a><b>");
    }

    #[test]
    fn test_try_close_until_present() {
        let mut doc = fragment();
        doc.open("a", &[]).open("b", &[]);
        doc.try_close_until("b").unwrap();
        assert_eq!(doc.open_tags(), ["a"]);
    }

    #[test]
    fn test_tag_does_not_touch_stack() {
        let mut doc = fragment();
        doc.open("p", &[]).tag("br", "", &[]);
        assert_eq!(doc.open_tags(), ["p"]);
    }

    #[test]
    fn test_newline_modes() {
        let mut doc = Document::new(doctype::NONE, NewlineMode::ALL);
        doc.open("ul", &[]).tag("li", "x", &[]).close_top();
        assert_eq!(doc.as_str(), "<ul>\r\n<li>x</li>\r\n</ul>\r\n");

        let mut doc = Document::new(doctype::NONE, NewlineMode::AFTER_CLOSE);
        doc.open("ul", &[]).tag("li", "x", &[]).close_top();
        assert_eq!(doc.as_str(), "<ul><li>x</li></ul>\r\n");

        let mut doc = Document::new(doctype::NONE, NewlineMode::AFTER_TAG);
        doc.tag("br", "", &[]).tag("hr", "", &["class", "x"]);
        assert_eq!(doc.as_str(), "<br />\r\n<hr class=\"x\" />\r\n");
    }

    #[test]
    fn test_when_false_suppresses() {
        let mut doc = fragment();
        doc.when(false).unwrap().push_str("X").end_when().unwrap();
        doc.push_str("Y");
        assert_eq!(doc.as_str(), "Y");
        assert!(!doc.in_condition());
    }

    #[test]
    fn test_when_true_then_otherwise_matches_when_false() {
        let mut inverted = fragment();
        inverted
            .when(true)
            .unwrap()
            .otherwise()
            .unwrap()
            .push_str("X")
            .end_when()
            .unwrap();

        let mut direct = fragment();
        direct.when(false).unwrap().push_str("X").end_when().unwrap();

        assert_eq!(inverted.as_str(), direct.as_str());
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_when_otherwise_branches() {
        let mut doc = fragment();
        doc.when(true)
            .unwrap()
            .push_str("yes")
            .otherwise()
            .unwrap()
            .push_str("no")
            .end_when()
            .unwrap();
        assert_eq!(doc.as_str(), "yes");
    }

    #[test]
    fn test_nested_when_is_error() {
        let mut doc = fragment();
        doc.when(true).unwrap();
        assert!(matches!(doc.when(false), Err(MarkupError::NestedCondition)));
    }

    #[test]
    fn test_otherwise_and_end_without_when() {
        let mut doc = fragment();
        assert!(matches!(doc.otherwise(), Err(MarkupError::OtherwiseWithoutWhen)));
        assert!(matches!(doc.end_when(), Err(MarkupError::EndWithoutWhen)));
    }

    #[test]
    fn test_suppressed_open_still_tracked() {
        let mut doc = fragment();
        doc.when(false).unwrap().open("div", &[]).end_when().unwrap();
        assert_eq!(doc.open_tags(), ["div"]);
        doc.close_all();
        assert_eq!(doc.as_str(), "</div>");
    }

    #[test]
    fn test_fmt_write_routes_through_gate() {
        let mut doc = fragment();
        write!(doc, "{}-{}", 1, 2).unwrap();
        doc.when(false).unwrap();
        write!(doc, "hidden").unwrap();
        doc.end_when().unwrap();
        assert_eq!(doc.as_str(), "1-2");
    }

    #[test]
    fn test_tagf_adds_class() {
        let mut doc = fragment();
        doc.tagf("td", "num", format_args!("{:>5}", 42));
        assert_eq!(doc.as_str(), r#"<td class="num">   42</td>"#);
    }

    #[test]
    fn test_write_to_and_close() {
        let mut doc = fragment();
        doc.open("svg", &["width", "10"]).tag("rect", "", &["x", "0"]);
        let mut out = Vec::new();
        doc.close_all_and_write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"<svg width="10"><rect x="0" /></svg>"#
        );
        assert_eq!(doc.as_bytes(), doc.to_string().as_bytes());
    }
}
