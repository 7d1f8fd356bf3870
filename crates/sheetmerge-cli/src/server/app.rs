//! Axum application setup.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;

/// Uploads beyond this total size are rejected outright.
const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

/// Create the Axum router with all routes.
pub fn create_router() -> Router {
    // CORS configuration for a frontend on a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::availability))
        .route("/merge", post(handlers::merge_files))
        .route("/generate-hm", post(handlers::generate_matching_file))
        .route("/transform", post(handlers::transform_file))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
}

/// Start the web server.
pub async fn run_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    println!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
