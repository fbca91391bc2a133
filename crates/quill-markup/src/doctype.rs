//! Document type declarations accepted by [`Document::new`](crate::Document::new).
//!
//! The value is inserted verbatim into `<!DOCTYPE ...>`.

/// HTML5.
pub const HTML5: &str = "html";

/// MathML 2.0.
pub const MATHML20: &str =
    r#"math PUBLIC "-//W3C//DTD MathML 2.0//EN" "http://www.w3.org/Math/DTD/mathml2/mathml2.dtd""#;

/// MathML 1.0.
pub const MATHML10: &str = r#"math SYSTEM "http://www.w3.org/Math/DTD/mathml1/mathml.dtd""#;

/// XHTML + MathML + SVG 1.1.
pub const SVG11: &str =
    r#"SVG 1.1//EN "http://www.w3.org/2002/04/xhtml-math-svg/xhtml-math-svg.dtd""#;

/// No declaration; use for fragments and for markup with its own prolog.
pub const NONE: &str = "";

/// XML prolog, for documents created with [`NONE`] and filled via `push_str`.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
