use axum::Router;
use axum::http::HeaderValue;
use axum::middleware;
use chub::domain::config::CorsConfig;
use chub::kernel::server::request_id::request_id;
use chub::kernel::server::state::ApiState;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "Income Insurance Claims API", version = "1.0"))]
struct ApiDoc;

pub(crate) fn init(state: ApiState) -> Router {
    let cors = cors_layer(&state.config.cors);

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(chub::server::router::api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/scalar", api_doc);

    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .layer(cors)
        .layer(middleware::from_fn(request_id))
}

/// Credentials are always allowed, so `*` mirrors the caller's origin instead of
/// answering with a literal wildcard.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins = if cors.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(cors.allowed_origins.iter().filter_map(|origin| {
            HeaderValue::from_str(origin.trim())
                .inspect_err(|_| warn!(%origin, "Ignoring invalid CORS origin"))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
