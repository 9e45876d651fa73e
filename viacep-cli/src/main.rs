//! ViaCEP gateway CLI
//!
//! Runs the HTTP gateway or performs one-off address lookups.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use viacep_api::{ApiConfig, ApiServer};
use viacep_core::types::AddressQuery;
use viacep_lookup::AddressLookup;

/// ViaCEP gateway - cached, retrying front for the ViaCEP address search
#[derive(Parser)]
#[command(name = "viacep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "PORT")]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Look up postal codes for an address
    Lookup {
        /// Two-letter state code, e.g. SP
        state: String,
        /// City name
        city: String,
        /// Street name (partial names are accepted)
        street: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "viacep=debug,tower_http=debug,info"
    } else {
        "viacep=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::Lookup { state, city, street } => cmd_lookup(state, city, street).await,
    }
}

/// Run API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    println!("{}", "🚀 Starting ViaCEP gateway...".cyan().bold());
    println!("   {} http://{}:{}", "Listening on:".green(), bind, port);
    println!("   {} http://{}:{}/api/health", "Health check:".dimmed(), bind, port);
    println!("\n   Press Ctrl+C to stop.\n");

    let config = ApiConfig::from_env();
    debug!(?config, "Loaded configuration");
    let server = ApiServer::new(config).context("Invalid gateway configuration")?;

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", bind, port))?;
    server.run(addr).await?;

    Ok(())
}

/// Look up one address and print the matches as JSON
async fn cmd_lookup(state: String, city: String, street: String) -> Result<()> {
    let query = AddressQuery::new(state, city, street);
    println!("{} {}", "🔍 Looking up:".cyan().bold(), query);

    let config = ApiConfig::from_env().to_lookup_config();
    let lookup = AddressLookup::with_config(config).context("Invalid lookup configuration")?;

    let outcome = lookup
        .lookup(&query)
        .await
        .with_context(|| format!("Lookup failed for {}", query))?;

    if outcome.results.is_empty() {
        println!("\n{}", "No postal code found.".yellow());
        return Ok(());
    }

    println!(
        "\n{} {} match(es):",
        "✅".green(),
        outcome.results.len()
    );
    println!("{}", serde_json::to_string_pretty(&outcome.results)?);

    Ok(())
}
