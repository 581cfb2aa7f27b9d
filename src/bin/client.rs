//! Display client: prints the greeting served by a hola-k8s backend.

use clap::Parser;

use hola_k8s::client::{fetch_mensaje, DisplayState};
use hola_k8s::config::{DEFAULT_LOG_FILTER, DEFAULT_MENSAJE_URL};
use hola_k8s::logging::{init_tracing, select_filter};

/// Fetch and display the greeting from a hola-k8s backend
#[derive(Parser, Debug)]
#[command(name = "hola-k8s-client", version, about)]
struct Args {
    /// Greeting endpoint URL
    #[arg(short, long, default_value = DEFAULT_MENSAJE_URL)]
    url: String,

    /// Log level filter (e.g., "hola_k8s=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_filter = select_filter([
        args.log_level,
        std::env::var("RUST_LOG").ok(),
        Some(DEFAULT_LOG_FILTER.to_string()),
    ]);
    init_tracing(&log_filter, false);

    println!("{}", DisplayState::Loading);

    let client = reqwest::Client::builder().build()?;
    let state = DisplayState::from_result(fetch_mensaje(&client, &args.url).await);

    println!("{}", state);

    Ok(())
}
