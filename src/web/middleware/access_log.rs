use poem::{Endpoint, Middleware, Request, Response, Result};

use crate::prelude::*;

/// Logs every request and tags the Sentry scope with it.
///
/// Expects errors to be already rendered by [`super::ErrorMiddleware`].
pub struct AccessLogMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for AccessLogMiddleware {
    type Output = AccessLogMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AccessLogMiddlewareImpl { ep }
    }
}

pub struct AccessLogMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for AccessLogMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        sentry::configure_scope(|scope| {
            scope.set_tag("request.method", method.as_str());
            scope.set_tag("request.path", uri.path());
            scope.set_tag("request.remote_addr", request.remote_addr());
        });

        let start_instant = Instant::now();
        let response = self.ep.call(request).await?;
        info!(?method, ?uri, status = response.status().as_u16(), elapsed = ?start_instant.elapsed());
        Ok(response)
    }
}
