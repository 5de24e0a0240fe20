//! Shoebox CLI - Inspect page resolution against the live catalog.
//!
//! # Usage
//!
//! ```bash
//! # Resolve a products path the way the storefront would
//! shoebox-cli resolve /products/shoes/nav123/red --order price-asc
//!
//! # List the navigation tree with canonical URLs
//! shoebox-cli navigations
//! ```
//!
//! # Commands
//!
//! - `resolve` - Print product list page props, a redirect target or not-found
//! - `navigations` - Print every navigation with its canonical listing URL

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shoebox-cli")]
#[command(author, version, about = "Shoebox storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a products path into page props
    Resolve {
        /// Path such as `/products/shoes/nav123/red` or `shoes/nav123`
        path: String,

        /// Sort order (`newest`, `price-asc`, `price-desc`)
        #[arg(short, long)]
        order: Option<String>,
    },
    /// List navigations with their canonical URLs
    Navigations,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so command output can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shoebox_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Resolve { path, order } => {
            commands::resolve::run(&path, order.as_deref()).await?;
        }
        Commands::Navigations => commands::navigations::run().await?,
    }
    Ok(())
}
