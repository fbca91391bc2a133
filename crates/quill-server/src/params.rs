//! Request parameter collection.
//!
//! Flattens request headers and form values into a single name/value map.
//! Multiple values for one name are joined with `;`.

use std::collections::BTreeMap;

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Separator between repeated values of one parameter.
const VALUE_SEPARATOR: &str = ";";

/// Decoded `user:secret` from a basic `Authorization` header.
pub const USER_CRED: &str = "UserCred";
/// User part of [`USER_CRED`].
pub const USER_NAME: &str = "UserName";
/// Secret part of [`USER_CRED`].
pub const USER_AUTH: &str = "UserAuth";

/// Collect headers and form values into one map.
///
/// Header names are canonicalized (`content-type` becomes `Content-Type`).
/// A decodable `Authorization: Basic` header adds [`USER_CRED`], and when the
/// credentials contain a `:` also [`USER_NAME`] and [`USER_AUTH`]. Form values
/// are applied last and replace headers of the same name.
#[must_use]
pub fn read_request_parameters(
    headers: &HeaderMap,
    form: &[(String, String)],
) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    for name in headers.keys() {
        let values: Vec<&str> = headers
            .get_all(name)
            .iter()
            .filter_map(|value| match value.to_str() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::debug!(header = %name, "Skipping non-ASCII header value");
                    None
                }
            })
            .collect();
        let joined = values.join(VALUE_SEPARATOR);

        if *name == AUTHORIZATION {
            decode_basic_auth(&joined, &mut params);
        }
        params.insert(canonical_header_name(name.as_str()), joined);
    }

    for (name, value) in join_form_values(form) {
        params.insert(name, value);
    }

    params
}

/// Store decoded basic-auth credentials; other schemes are left alone.
fn decode_basic_auth(header: &str, params: &mut BTreeMap<String, String>) {
    let encoded = header.strip_prefix("Basic ").unwrap_or(header);
    let credentials = match BASE64_STANDARD.decode(encoded.trim()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "Authorization header is not basic credentials");
            return;
        }
    };
    if let Some((user, secret)) = credentials.split_once(':') {
        params.insert(USER_NAME.to_owned(), user.to_owned());
        params.insert(USER_AUTH.to_owned(), secret.to_owned());
    }
    params.insert(USER_CRED.to_owned(), credentials);
}

/// Group form pairs by name, keeping first-seen value order.
fn join_form_values(form: &[(String, String)]) -> BTreeMap<String, String> {
    let mut joined: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in form {
        joined
            .entry(name.clone())
            .and_modify(|existing| {
                existing.push_str(VALUE_SEPARATOR);
                existing.push_str(value);
            })
            .or_insert_with(|| value.clone());
    }
    joined
}

/// `x-forwarded-for` -> `X-Forwarded-For`.
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use pretty_assertions::assert_eq;

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(canonical_header_name("x-forwarded-for"), "X-Forwarded-For");
        assert_eq!(canonical_header_name("accept"), "Accept");
        assert_eq!(canonical_header_name("dnt"), "Dnt");
    }

    #[test]
    fn test_repeated_headers_joined() {
        let mut headers = HeaderMap::new();
        headers.append("accept", HeaderValue::from_static("text/html"));
        headers.append("accept", HeaderValue::from_static("text/plain"));
        headers.insert("host", HeaderValue::from_static("localhost"));

        let params = read_request_parameters(&headers, &[]);

        assert_eq!(params["Accept"], "text/html;text/plain");
        assert_eq!(params["Host"], "localhost");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_basic_auth_decoded() {
        let mut headers = HeaderMap::new();
        // "ada:s3cr:et"
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic YWRhOnMzY3I6ZXQ="));

        let params = read_request_parameters(&headers, &[]);

        assert_eq!(params["Authorization"], "Basic YWRhOnMzY3I6ZXQ=");
        assert_eq!(params[USER_CRED], "ada:s3cr:et");
        assert_eq!(params[USER_NAME], "ada");
        assert_eq!(params[USER_AUTH], "s3cr:et");
    }

    #[test]
    fn test_basic_auth_without_colon() {
        let mut headers = HeaderMap::new();
        // "token"
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dG9rZW4="));

        let params = read_request_parameters(&headers, &[]);

        assert_eq!(params[USER_CRED], "token");
        assert!(!params.contains_key(USER_NAME));
        assert!(!params.contains_key(USER_AUTH));
    }

    #[test]
    fn test_undecodable_authorization_kept_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));

        let params = read_request_parameters(&headers, &[]);

        assert_eq!(params["Authorization"], "Bearer abc.def");
        assert!(!params.contains_key(USER_CRED));
    }

    #[test]
    fn test_form_values_joined_and_override_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("host", HeaderValue::from_static("localhost"));
        let form = pairs(&[("tag", "a"), ("q", "rust"), ("tag", "b"), ("Host", "form")]);

        let params = read_request_parameters(&headers, &form);

        assert_eq!(params["tag"], "a;b");
        assert_eq!(params["q"], "rust");
        assert_eq!(params["Host"], "form");
    }
}
