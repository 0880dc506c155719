//! JSON API over the content loader

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{ContentError, ContentLoader};
use crate::Site;

/// Server state
struct ServerState {
    loader: ContentLoader,
}

/// Build the API router
pub fn router(loader: ContentLoader) -> Router {
    let state = Arc::new(ServerState { loader });

    Router::new()
        .route("/api/posts", get(list_handler))
        .route("/api/posts/:slug", get(post_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site.loader());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Serving {:?} at http://{}:{}/api/posts", site.content_dir, ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/posts
async fn list_handler(State(state): State<Arc<ServerState>>) -> Response {
    let loader = state.loader.clone();
    match tokio::task::spawn_blocking(move || loader.list_posts()).await {
        Ok(Ok(posts)) => Json(posts).into_response(),
        Ok(Err(e)) => content_error_response(e),
        Err(e) => join_error_response(e),
    }
}

/// GET /api/posts/:slug
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let loader = state.loader.clone();
    match tokio::task::spawn_blocking(move || loader.get_post(&slug)).await {
        Ok(Ok(post)) => Json(post).into_response(),
        Ok(Err(e)) => content_error_response(e),
        Err(e) => join_error_response(e),
    }
}

fn content_error_response(e: ContentError) -> Response {
    let status = match &e {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        ContentError::InvalidSlug(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!("{}", e);
    } else {
        tracing::debug!("{}", e);
    }

    (status, Json(json!({ "error": e.to_string() }))).into_response()
}

fn join_error_response(e: tokio::task::JoinError) -> Response {
    tracing::error!("Loader task failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal error" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MarkdownRenderer;
    use std::fs;
    use tempfile::TempDir;

    fn state() -> (TempDir, Arc<ServerState>) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("first.md"),
            "---\ntitle: First\ndate: 2024-01-01\nreadTime: 2 min read\n---\n# Hi\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("second.md"),
            "---\ntitle: Second\ndate: 2024-03-01\n---\nSecond body\n",
        )
        .unwrap();
        let loader = ContentLoader::new(dir.path(), MarkdownRenderer::new());
        (dir, Arc::new(ServerState { loader }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_posts() {
        let (_dir, state) = state();
        let response = list_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let slugs: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(slugs, vec!["second", "first"]);
        assert_eq!(body[1]["readTime"], "2 min read");
    }

    #[tokio::test]
    async fn test_get_post() {
        let (_dir, state) = state();
        let response = post_handler(State(state), Path("first".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["metadata"]["slug"], "first");
        assert!(body["content"].as_str().unwrap().contains("<h1>Hi</h1>"));
    }

    #[tokio::test]
    async fn test_missing_post_is_404() {
        let (_dir, state) = state();
        let response = post_handler(State(state), Path("nope".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("nope.md"));
    }

    #[tokio::test]
    async fn test_invalid_slug_is_400() {
        let (_dir, state) = state();
        let response = post_handler(State(state), Path("..".to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_dir_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ContentLoader::new(dir.path().join("gone"), MarkdownRenderer::new());
        let state = Arc::new(ServerState { loader });

        let response = list_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
