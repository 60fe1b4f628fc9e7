//! logkit demo service.
//!
//! Serves a tiny HTTP app whose every request and response is logged through
//! the logkit helpers.
//!
//! ```text
//! main
//!     → config (file or defaults, CLI overrides)
//!     → init_tracing
//!     → log_startup
//!     → HttpServer::run (until SIGINT/SIGTERM)
//!     → log_shutdown
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use tokio::net::TcpListener;

use logkit::config::{load_config, validate_config, ConfigError, ServiceConfig};
use logkit::http::HttpServer;
use logkit::lifecycle::{log_shutdown, log_startup, wait_for_signal, Shutdown};
use logkit::observability::{init_tracing, TracingLogger};
use logkit::Logger;

#[derive(Parser)]
#[command(name = "logkit")]
#[command(about = "Demo HTTP service logging through logkit helpers", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_tracing(&config.logging)?;

    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr: SocketAddr = listener.local_addr()?;

    log_startup(
        Some(logger.as_ref()),
        &config.service.name,
        &config.service.version,
        local_addr.port(),
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(logger.clone());
    let server_shutdown = shutdown.subscribe();

    let serving = tokio::spawn(server.run(listener, server_shutdown));

    wait_for_signal().await;
    shutdown.trigger();

    match serving.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            logger.error_kv("HTTP server failed", &logkit::fields!["error" => e.to_string()])
        }
        Err(e) => logger.error_kv(
            "HTTP server task aborted",
            &logkit::fields!["error" => e.to_string()],
        ),
    }

    log_shutdown(Some(logger.as_ref()), &config.service.name, started.elapsed());
    let _ = logger.sync();
    Ok(())
}
