//! services/client/src/bin/notes.rs

use client_lib::{
    adapters::{HttpBackend, TokenFile},
    app::App,
    cli::Args,
    config::Config,
    error::ClientError,
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    let args = Args::parse();

    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    info!(backend = %config.backend_url, "Configuration loaded.");

    // --- 2. Initialize Adapters ---
    let backend = Arc::new(HttpBackend::new(&config.backend_url, config.request_timeout)?);
    let tokens = Arc::new(TokenFile::new(config.token_path.clone()));

    // --- 3. Run the Command ---
    let app = App::new(backend, tokens);
    let output = app.run(args.command).await?;
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    Ok(())
}
