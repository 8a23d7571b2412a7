use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use axum::response::Html;
use crate::state::AppState;

use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", axum::routing::get(index))
        .route("/health", axum::routing::get(|| async { "ok" }))
        .merge(crate::modules::convert::router())
        .merge(crate::modules::download::router())
        .layer(cors)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
