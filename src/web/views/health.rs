use poem::web::Json;
use poem::{handler, IntoResponse};

use crate::prelude::*;
use crate::web::models::HealthResponse;

const CACHE_CONTROL: &str = "no-cache";

#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get_health() -> impl IntoResponse {
    Json(HealthResponse::healthy()).with_header("Cache-Control", CACHE_CONTROL)
}
