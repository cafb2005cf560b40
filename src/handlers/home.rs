use axum::response::Html;

static CONTROL_PAGE: &str = include_str!("../../assets/index.html");

/// GET / handler - Browser control page
///
/// Serves the static HTML page that drives the API from a browser.
pub async fn home_handler() -> Html<&'static str> {
    Html(CONTROL_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_home_serves_html() {
        let app = Router::new().route(crate::routes::HOME, get(home_handler));

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("<!doctype html>"));
        assert!(page.contains("/items"));
    }
}
