use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Build the application router.
///
/// Lookup order for any path other than `/health`:
/// 1. the data directory (`/events.json`, `/categories.json`)
/// 2. the frontend build output
/// 3. `index.html`, so client-side routes like `/event/3/edit` load the app
pub fn router(data_dir: &Path, dist_dir: &Path) -> Router {
    let spa_index = ServeFile::new(dist_dir.join("index.html"));
    let static_files = ServeDir::new(data_dir).fallback(ServeDir::new(dist_dir).fallback(spa_index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(static_files)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}

/// Logs method, path, status, size and duration of every request
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let elapsed_ms = start.elapsed().as_millis();
    let at = chrono::Local::now().format("%H:%M:%S");

    if response.status().is_success() || response.status().is_redirection() {
        tracing::info!("{} | {:>5}ms | {:>8} | {} {:>6} {}", at, elapsed_ms, size, status, method, path);
    } else {
        tracing::warn!("{} | {:>5}ms | {:>8} | {} {:>6} {}", at, elapsed_ms, size, status, method, path);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use contracts::domain::a002_category::aggregate::CategoriesPayload;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
    }

    fn missing_dist() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-dist")
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get(router(&data_dir(), &missing_dist()), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_serves_categories_from_data_dir() {
        let response = get(router(&data_dir(), &missing_dist()), "/categories.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let payload: CategoriesPayload = serde_json::from_str(&body_text(response).await).unwrap();
        let names: Vec<_> = payload.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["sports", "games", "relaxation"]);
    }

    #[tokio::test]
    async fn test_unknown_path_without_frontend_is_404() {
        let response = get(router(&data_dir(), &missing_dist()), "/event/1/edit").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dist = std::env::temp_dir().join(format!("events-dist-{}", std::process::id()));
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::write(dist.join("index.html"), "<html>app</html>").unwrap();

        let response = get(router(&data_dir(), &dist), "/event/1/edit").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>app</html>");

        let _ = std::fs::remove_dir_all(&dist);
    }
}
