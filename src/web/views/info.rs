use poem::web::Json;
use poem::{handler, IntoResponse};

use crate::prelude::*;
use crate::web::models::InfoResponse;

/// Static model metadata.
#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get_info() -> impl IntoResponse {
    Json(InfoResponse::current())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn get_info_ok() -> crate::Result {
        let client = create_test_client()?;
        for _ in 0..2 {
            let response = client.get("/info").send().await;
            response.assert_status_is_ok();
            response
                .assert_json(json!({
                    "model": "Linear Regression",
                    "author": "Sumit Gatade",
                    "version": "2.0",
                }))
                .await;
        }
        Ok(())
    }
}
