use axum::Json;
use chub_derive::{api_handler, api_model};
use chub_domain::constants::{API_BANNER, SYSTEM_TAG};

#[api_model]
/// API greeting
pub struct IndexResponse {
    pub message: String,
}

#[api_handler(
    get,
    path = "/api/",
    responses((status = OK, description = "API banner", body = IndexResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse { message: API_BANNER.to_owned() })
}
