use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::CatchPanic;
use poem::{get, post, Endpoint, EndpointExt, Response, Route, Server};

use crate::model::Regression;
use crate::opts::WebOpts;
use crate::prelude::*;
use crate::web::middleware::{AccessLogMiddleware, ErrorMiddleware};

mod middleware;
mod models;
#[cfg(test)]
mod test;
mod validation;
mod views;

/// Serves the regression until a shutdown signal arrives.
#[instrument(skip_all)]
pub async fn run(opts: &WebOpts, regression: Regression) -> Result {
    let host = IpAddr::from_str(&opts.host)
        .with_context(|| format!("`{}` is not a valid IP address", opts.host))?;
    info!(%host, port = opts.port, "listening…");
    Server::new(TcpListener::bind((host, opts.port)))
        .run_with_graceful_shutdown(
            create_app(regression),
            wait_for_shutdown_signal(),
            Some(opts.shutdown_timeout),
        )
        .await
        .context("the server has failed")?;
    info!("the server has stopped");
    Ok(())
}

pub fn create_app(regression: Regression) -> impl Endpoint<Output = Response> {
    Route::new()
        .at("/", get(views::root::get_root))
        .at("/health", get(views::health::get_health))
        .at("/predict", post(views::predict::post_predict))
        .at("/info", get(views::info::get_info))
        .data(regression)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(AccessLogMiddleware)
}

async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {:#}", error);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                error!("failed to listen for SIGTERM: {:#}", error);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutting down…");
}
