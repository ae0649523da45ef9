//! Ticket purchase binary.
//!
//! Reads a JSON purchase request from the file given as the first argument,
//! `PURCHASE_REQUEST_FILE`, or stdin, and runs it through the ticket service.

use std::path::PathBuf;
use std::process::ExitCode;
use ticket_purchase::config::Config;
use ticket_purchase::{build_service, describe_outcome, read_request};
use ticket_service_core::TicketService;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?.with_request_file(std::env::args().nth(1).map(PathBuf::from));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let metrics = if config.render_metrics {
        let handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;
        ticket_service_core::metrics::register_purchase_metrics();
        Some(handle)
    } else {
        None
    };

    info!(
        request_file = ?config.request_file,
        render_metrics = config.render_metrics,
        "Configuration loaded"
    );

    let request = match read_request(&config) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Could not read purchase request");
            return Err(e);
        }
    };

    let service = build_service(&config);
    let outcome = service.purchase(&request).await;

    println!("{}", describe_outcome(&outcome));

    if let Some(handle) = metrics {
        println!("\n{}", handle.render());
    }

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
