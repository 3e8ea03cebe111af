use poem::error::{MethodNotAllowedError, NotFoundError, ReadBodyError};
use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::prelude::*;
use crate::web::models::DetailResponse;

/// Converts framework errors into JSON `{"detail": ...}` responses.
pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        match self.ep.call(request).await {
            Err(error) if error.is::<NotFoundError>() => {
                debug!(?method, ?uri, "{:#}", error);
                Ok(render_detail(StatusCode::NOT_FOUND, "Not Found"))
            }
            Err(error) if error.is::<MethodNotAllowedError>() => {
                debug!(?method, ?uri, "{:#}", error);
                Ok(render_detail(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"))
            }
            // Request body could not be read off the connection.
            Err(error) if error.is::<ReadBodyError>() => {
                info!(?method, ?uri, "{:#}", error);
                Ok(render_detail(StatusCode::BAD_REQUEST, &error.to_string()))
            }
            Err(error) => {
                error!(?method, ?uri, "{:#}", error);
                Ok(render_detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"))
            }
            result => result,
        }
    }
}

fn render_detail(status: StatusCode, detail: &str) -> Response {
    Json(DetailResponse { detail })
        .with_status(status)
        .into_response()
}
