//! Scenario rating service binary.
//!
//! Runs the HTTP API with the rule classifier, optionally preferring an
//! external worker process when one is configured.

use std::time::Duration;

use clap::Parser;
use scenario_core::WorkerConfig;
use scenario_server::{Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use tracing_subscriber::EnvFilter;

/// Scenario age-rating API server
#[derive(Parser, Debug)]
#[command(name = "scenario-server", version, about)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// External classifier program (e.g. python3); rule classifier only
    /// when omitted
    #[arg(long)]
    worker: Option<String>,

    /// Argument for the worker program (repeatable)
    #[arg(long = "worker-arg")]
    worker_args: Vec<String>,

    /// Worker timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = ServerConfig {
        host: args.host,
        port: args.port,
        worker: None,
    };
    if let Some(program) = args.worker {
        config = config.with_worker(
            WorkerConfig::new(program, args.worker_args)
                .with_timeout(Duration::from_secs(args.timeout_secs)),
        );
    }

    let server = Server::new(config)?;
    server.run().await?;
    Ok(())
}
