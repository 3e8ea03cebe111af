use poem::web::{Data, Json};
use poem::{handler, Body, IntoResponse, Response};

use crate::model::Regression;
use crate::prelude::*;
use crate::web::models::{PredictRequest, PredictResponse};

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_predict(
    body: Body,
    Data(regression): Data<&Regression>,
) -> poem::Result<Response> {
    let body = body.into_vec().await?;
    let request = match PredictRequest::try_from(body.as_slice()) {
        Ok(request) => request,
        Err(error) => {
            info!(kind = error.kind(), "{:#}", error);
            return Ok(error.into_response());
        }
    };

    let prediction = regression.predict(request.value);
    debug!(input = request.value, prediction);
    Ok(Json(PredictResponse {
        input: request.value,
        prediction,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn predict_integer_ok() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({"value": 3}))
            .send()
            .await;
        response.assert_status_is_ok();
        response
            .assert_json(json!({"input": 3.0, "prediction": 6.0}))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_zero_ok() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({"value": 0}))
            .send()
            .await;
        response.assert_status_is_ok();
        response
            .assert_json(json!({"input": 0.0, "prediction": 0.0}))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_negative_ok() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({"value": -2.5}))
            .send()
            .await;
        response.assert_status_is_ok();
        response
            .assert_json(json!({"input": -2.5, "prediction": -5.0}))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_doubles_input() -> crate::Result {
        let client = create_test_client()?;
        for value in [-1e6, -7.25, -1.0, 0.1, 1.0, 42.0, 123_456.789] {
            // Repeated requests must give the same answer.
            for _ in 0..2 {
                let response = client
                    .post("/predict")
                    .body_json(&json!({ "value": value }))
                    .send()
                    .await;
                response.assert_status_is_ok();
                response
                    .assert_json(json!({"input": value, "prediction": 2.0 * value}))
                    .await;
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn predict_numeric_string_ok() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({"value": "4.5"}))
            .send()
            .await;
        response.assert_status_is_ok();
        response
            .assert_json(json!({"input": 4.5, "prediction": 9.0}))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_boolean_ok() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({"value": true}))
            .send()
            .await;
        response.assert_status_is_ok();
        response
            .assert_json(json!({"input": 1.0, "prediction": 2.0}))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_non_numeric_string_fails() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({"value": "abc"}))
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response
            .assert_json(json!({
                "detail": [{
                    "loc": ["body", "value"],
                    "msg": "Input should be a valid number, unable to parse string as a number",
                    "type": "float_parsing",
                }],
            }))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_missing_value_fails() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({}))
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response
            .assert_json(json!({
                "detail": [{"loc": ["body", "value"], "msg": "Field required", "type": "missing"}],
            }))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_wrong_type_fails() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .body_json(&json!({"value": [3]}))
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response
            .assert_json(json!({
                "detail": [{"loc": ["body", "value"], "msg": "Input should be a valid number", "type": "float_type"}],
            }))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn predict_malformed_body_fails() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .content_type("application/json")
            .body("{\"value\": ")
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        Ok(())
    }

    #[tokio::test]
    async fn predict_empty_body_fails() -> crate::Result {
        let client = create_test_client()?;
        let response = client
            .post("/predict")
            .content_type("application/json")
            .send()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        response
            .assert_json(json!({
                "detail": [{"loc": ["body"], "msg": "Field required", "type": "missing"}],
            }))
            .await;
        Ok(())
    }

    #[tokio::test]
    async fn get_predict_not_allowed() -> crate::Result {
        let client = create_test_client()?;
        let response = client.get("/predict").send().await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        Ok(())
    }
}
