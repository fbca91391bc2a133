//! Request parameters page.
//!
//! Echoes everything the server received (headers, query string, url-encoded
//! body and decoded basic-auth credentials) as an HTML table.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, header};
use quill_markup::{Document, NewlineMode, Value, cmp_asc, escape_html, values};

use crate::PageSettings;
use crate::error::ServerError;
use crate::html::HtmlDocument;
use crate::params::read_request_parameters;
use crate::state::AppState;

/// Handle GET and POST /.
pub(crate) async fn parameters_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<HtmlDocument, ServerError> {
    let form = form_values(&headers, query.as_deref(), &body)?;
    let params = read_request_parameters(&headers, &form);
    tracing::debug!(count = params.len(), "Rendering request parameters");

    let doc = render_parameters(&state.page, &params)?;
    Ok(HtmlDocument(doc))
}

/// Url-encoded body values followed by query string values.
fn form_values(
    headers: &HeaderMap,
    query: Option<&str>,
    body: &[u8],
) -> Result<Vec<(String, String)>, ServerError> {
    let mut form = Vec::new();
    if is_form_body(headers) && !body.is_empty() {
        form.extend(serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)?);
    }
    if let Some(query) = query {
        form.extend(serde_urlencoded::from_str::<Vec<(String, String)>>(query)?);
    }
    Ok(form)
}

fn is_form_body(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}

/// Full page with one row per parameter, sorted by name.
fn render_parameters(
    page: &PageSettings,
    params: &BTreeMap<String, String>,
) -> Result<Document, ServerError> {
    let rows: BTreeMap<String, String> = params
        .iter()
        .map(|(name, value)| (escape_html(name), escape_html(value)))
        .collect();

    let title = escape_html(&page.title);
    let mut doc = Document::new(&page.doctype, NewlineMode::from_bits(page.newline));
    doc.html_open(&[])
        .head_open(&[])
        .meta(&["charset", "utf-8"])
        .title(&title, &[])
        .close_until("head")
        .body_open(&[])
        .header(1, &title, &[]);

    let table_attrs = if page.table_class.is_empty() {
        Vec::new()
    } else {
        vec!["class", page.table_class.as_str()]
    };
    doc.table_open(&table_attrs);
    if let Some(caption) = &page.caption {
        doc.caption(&escape_html(caption), &[]);
    }
    doc.thead_open(&[])
        .tr_th(&page.row_class, &page.header_class, &values!["Name", "Value"])
        .close_top()
        .tbody_open(&[])
        .tr_td_map(&page.row_class, &page.data_class, Some(cmp_asc), &Value::from(rows))?
        .close_all();

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    use super::*;

    fn bare_page() -> PageSettings {
        PageSettings {
            doctype: String::new(),
            title: "Params".to_owned(),
            newline: 0,
            ..PageSettings::default()
        }
    }

    #[test]
    fn test_render_parameters_table() {
        let params: BTreeMap<String, String> = [
            ("b".to_owned(), "2".to_owned()),
            ("a".to_owned(), "<1>".to_owned()),
        ]
        .into();

        let doc = render_parameters(&bare_page(), &params).unwrap();

        assert_eq!(
            doc.as_str(),
            "<html><head><meta charset=\"utf-8\" /><title>Params</title></head>\
             <body><h1>Params</h1><table><thead><tr><th>Name</th><th>Value</th></tr></thead>\
             <tbody><tr><td>a</td><td>&lt;1&gt;</td></tr><tr><td>b</td><td>2</td></tr>\
             </tbody></table></body></html>"
        );
    }

    #[test]
    fn test_render_parameters_uses_table_classes() {
        let page = PageSettings {
            table_class: "params".to_owned(),
            row_class: "row".to_owned(),
            data_class: "cell".to_owned(),
            caption: Some("Request".to_owned()),
            ..bare_page()
        };
        let params: BTreeMap<String, String> = [("k".to_owned(), "v".to_owned())].into();

        let doc = render_parameters(&page, &params).unwrap();

        assert!(doc.as_str().contains(
            "<table class=\"params\"><caption>Request</caption><thead><tr class=\"row\">"
        ));
        assert!(doc.as_str().contains(
            "<tr class=\"row\"><td class=\"cell\">k</td><td class=\"cell\">v</td></tr>"
        ));
    }

    #[test]
    fn test_render_parameters_escapes_title_and_caption() {
        let page = PageSettings {
            title: "Echo <dev>".to_owned(),
            caption: Some("Q & A".to_owned()),
            ..bare_page()
        };

        let doc = render_parameters(&page, &BTreeMap::new()).unwrap();

        assert!(doc.as_str().contains("<title>Echo &lt;dev&gt;</title>"));
        assert!(doc.as_str().contains("<h1>Echo &lt;dev&gt;</h1>"));
        assert!(doc.as_str().contains("<caption>Q &amp; A</caption>"));
        assert!(!doc.as_str().contains("<dev>"));
    }

    #[test]
    fn test_form_values_body_then_query() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        let form = form_values(&headers, Some("a=q&c=3"), b"a=body&b=two+words").unwrap();

        assert_eq!(
            form,
            [
                ("a".to_owned(), "body".to_owned()),
                ("b".to_owned(), "two words".to_owned()),
                ("a".to_owned(), "q".to_owned()),
                ("c".to_owned(), "3".to_owned()),
            ]
        );
    }

    #[test]
    fn test_form_values_ignores_other_bodies() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let form = form_values(&headers, None, b"a=1").unwrap();

        assert!(form.is_empty());
    }
}
