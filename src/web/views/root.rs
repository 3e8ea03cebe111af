use poem::web::Json;
use poem::{handler, IntoResponse};

use crate::prelude::*;
use crate::web::models::StatusResponse;

#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get_root() -> impl IntoResponse {
    Json(StatusResponse::running())
}
