//! [`Document`] as an HTTP response.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use quill_markup::Document;

/// Content type of rendered documents.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Response wrapper sending a document as `text/html`.
///
/// Tags still open when the response is produced are closed first.
#[derive(Debug)]
pub struct HtmlDocument(pub Document);

impl From<Document> for HtmlDocument {
    fn from(doc: Document) -> Self {
        Self(doc)
    }
}

impl IntoResponse for HtmlDocument {
    fn into_response(self) -> Response {
        let mut doc = self.0;
        doc.close_all();
        ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], doc.into_string()).into_response()
    }
}
