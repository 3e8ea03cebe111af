use clap::Parser;

use crate::helpers::tracing::format_elapsed;
use crate::model::{Regression, Residuals, TRAINING_SET};
use crate::opts::Opts;
use crate::prelude::*;

mod helpers;
mod model;
mod opts;
mod prelude;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn, opts.traces_sample_rate)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let result = run(opts.web).await;
    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}

async fn run(opts: opts::WebOpts) -> Result {
    let start_instant = Instant::now();
    let regression = Regression::fit(&TRAINING_SET).context("failed to fit the model")?;
    let rmse = Residuals::evaluate(&regression, &TRAINING_SET).rmse();
    info!(
        slope = regression.slope,
        intercept = regression.intercept,
        rmse,
        n_points = TRAINING_SET.len(),
        elapsed = %format_elapsed(start_instant),
        "the model is fit",
    );

    web::run(&opts, regression).await
}
