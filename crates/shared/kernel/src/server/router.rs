use super::state::ApiState;
use super::{health, index};
use axum::routing::get;
use chub_domain::constants::API_PREFIX;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Health probe and the API banner (served on both `/api` and `/api/`).
pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(health::health_handler))
        .routes(routes!(index::index_handler))
        .route(API_PREFIX, get(index::index_handler))
}
