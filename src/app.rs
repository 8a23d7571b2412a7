use axum::Router;
use axum::extract::DefaultBodyLimit;
use crate::state::AppState;
use tower_http::trace::TraceLayer;

pub async fn create_app(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    crate::routes::configure_routes()
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
