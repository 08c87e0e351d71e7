use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use templates::{PageResult, head_page, sum_page};

pub mod config;
mod templates;

/// Builds the route table, constructed once at process start. Unknown paths
/// fall through to axum's default 404, wrong methods on known paths to 405.
pub fn app() -> Router {
    Router::new()
        .route("/", get(head_handler))
        .route("/sum", get(sum_handler))
        .layer(TraceLayer::new_for_http())
}

async fn head_handler() -> PageResult {
    head_page(7, 8)
}

async fn sum_handler() -> PageResult {
    let x = 78;
    let y = 89;
    sum_page(x, y)
}
