//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::parameters::parameters_page).post(handlers::parameters::parameters_page),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::content_type_options_layer())
                .layer(middleware::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::PageSettings;
    use crate::html::HTML_CONTENT_TYPE;

    fn router() -> Router {
        let page = PageSettings {
            doctype: String::new(),
            newline: 0,
            ..PageSettings::default()
        };
        create_router(Arc::new(AppState { page }))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_renders_headers_and_query() {
        let request = Request::builder()
            .uri("/?name=Ada&tag=a&tag=b")
            .header("x-request-id", "42")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], HTML_CONTENT_TYPE);
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        let body = body_text(response).await;
        assert!(body.contains("<tr><td>X-Request-Id</td><td>42</td></tr>"));
        assert!(body.contains("<tr><td>name</td><td>Ada</td></tr>"));
        assert!(body.contains("<tr><td>tag</td><td>a;b</td></tr>"));
        assert!(body.ends_with("</tbody></table></body></html>"));
    }

    #[tokio::test]
    async fn test_post_form_and_basic_auth() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/?source=query")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            // "ada:secret"
            .header(header::AUTHORIZATION, "Basic YWRhOnNlY3JldA==")
            .body(Body::from("comment=%3Cb%3Ehi%3C%2Fb%3E&source=body"))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("<tr><td>comment</td><td>&lt;b&gt;hi&lt;/b&gt;</td></tr>"));
        assert!(body.contains("<tr><td>source</td><td>body;query</td></tr>"));
        assert!(body.contains("<tr><td>UserCred</td><td>ada:secret</td></tr>"));
        assert!(body.contains("<tr><td>UserName</td><td>ada</td></tr>"));
        assert!(body.contains("<tr><td>UserAuth</td><td>secret</td></tr>"));
    }

    #[tokio::test]
    async fn test_other_methods_rejected() {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_path_not_found() {
        let request = Request::builder().uri("/missing").body(Body::empty()).unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
