//! Contact Book client - main entry point
//!
//! Interactive terminal client for the Contact Book HTTP API. Commands are
//! read from stdin; logs go to stderr.

use anyhow::Result;
use contactbook_client::client::{AsyncContactClient, AsyncContactClientImpl};
use contactbook_client::repositories::{ContactRepository, HttpContactRepository};
use contactbook_client::view::ContactView;
use contactbook_client::{Config, ContactBookClient, Metrics, RequestCoordinator, TerminalView};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Using contact book API at {}", config.api_url);

    let metrics = Metrics::new();
    let sync_client = ContactBookClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncContactClientImpl::new(sync_client)) as Arc<dyn AsyncContactClient>;
    let repository = Arc::new(HttpContactRepository::new(client)) as Arc<dyn ContactRepository>;

    let input = Arc::new(tokio::sync::Mutex::new(
        BufReader::new(tokio::io::stdin()).lines(),
    ));
    let view = Arc::new(TerminalView::new(input.clone(), std::io::stdout())) as Arc<dyn ContactView>;

    let coordinator =
        RequestCoordinator::with_metrics(repository, view, config.debounce(), metrics.clone());

    println!("Contact Book - type `help` for commands");
    let mut out = std::io::stdout();
    contactbook_client::app::run(coordinator, input, &mut out).await?;

    let summary = metrics.summary();
    info!(
        requests = summary.http_requests_total,
        errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        searches = summary.searches_total,
        stale = summary.stale_responses_total,
        "Session metrics"
    );

    Ok(())
}
