//! CLI options.

use std::str::FromStr;

use clap::{Args, Parser};

use crate::prelude::*;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Sentry DSN, Sentry is disabled when omitted
    #[arg(long, env = "ML_API_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance traces sample rate for Sentry (0.0..=1.0)
    #[arg(
        long,
        default_value = "0",
        env = "ML_API_TRACES_SAMPLE_RATE",
        value_parser = parse_sample_rate,
    )]
    pub traces_sample_rate: f32,

    #[command(flatten)]
    pub web: WebOpts,
}

/// Runs the web application.
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, default_value = "127.0.0.1", env = "ML_API_HOST")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "8000", env = "ML_API_PORT")]
    pub port: u16,

    /// Time to wait for in-flight requests on shutdown
    #[arg(
        long,
        default_value = "10s",
        env = "ML_API_SHUTDOWN_TIMEOUT",
        value_parser = humantime::parse_duration,
    )]
    pub shutdown_timeout: StdDuration,
}

fn parse_sample_rate(value: &str) -> Result<f32> {
    let sample_rate = f32::from_str(value)?;
    if (0.0..=1.0).contains(&sample_rate) {
        Ok(sample_rate)
    } else {
        Err(anyhow!("expected a sample rate between 0 and 1, got {}", sample_rate))
    }
}
