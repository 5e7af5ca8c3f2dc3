//! Painpoint Server
//!
//! Axum server that embeds and serves the idea generator frontend with API
//! routes, plus command-line access to the same core.

mod api;
mod assets;

use anyhow::Context;
use clap::{Parser, Subcommand};
use painpoint_core::config::{AppConfig, CONFIG_PATH};
use painpoint_core::{view, Catalog, IdeaStudio};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use api::{AppState, SharedState};

#[derive(Parser, Clone)]
#[command(author, version, about = "Pain Point Idea Generator")]
struct Args {
    /// Path to the persisted config file
    #[arg(long, default_value = CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the web server (default)
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the pain point catalog
    Catalog {
        /// Only show pain points matching this term
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Generate ideas for the given pain points (CLI mode, no server)
    Generate {
        /// Pain point names, e.g. "Procrastination"
        #[arg(required = true)]
        pain_points: Vec<String>,
    },
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

// === Server Entry ===

pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    if !config.has_api_key() {
        tracing::warn!("No Gemini API key found (GEMINI_API_KEY or API_KEY); generation will fail");
    }

    let port = config.port;
    let state: SharedState = Arc::new(AppState::new(config));
    let app = api::router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("🚀 Painpoint Server running at http://{}", addr);
    println!("   API v1 Routes:");
    println!("   Catalog:   /api/v1/catalog?search=");
    println!("   Session:   /api/v1/session, /selection/toggle, /generate");
    println!("   Config:    /api/v1/config (GET)");
    println!("   OpenAPI:   /api/v1/openapi.json");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_catalog(search: &str) {
    let groups = painpoint_core::catalog::filter(search, Catalog::builtin());
    print!("{}", view::render_catalog(&groups, &[]));
}

/// Select each named pain point once, run one generation and render the cards
async fn generate_report(studio: &IdeaStudio, names: &[String]) -> anyhow::Result<String> {
    for name in names {
        if studio.snapshot().selected.contains(name) {
            continue;
        }
        studio.toggle(name)?;
    }

    let snapshot = studio.generate().await?;
    if let Some(error) = snapshot.error {
        anyhow::bail!(error);
    }

    Ok(view::render_snapshot(&snapshot))
}

async fn run_generate(config: AppConfig, names: Vec<String>) -> anyhow::Result<()> {
    let studio = IdeaStudio::new(config.generator());
    println!("Generating brilliant ideas...\n");
    print!("{}", generate_report(&studio, &names).await?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let command = args.command.unwrap_or(CliCommand::Serve { port: None });

    init_tracing(match &command {
        CliCommand::Serve { .. } => "info",
        _ => "warn",
    });

    let mut config = AppConfig::load(&args.config)
        .await
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    match command {
        CliCommand::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            println!("╔══════════════════════════════════════╗");
            println!("║         PAINPOINT SERVER             ║");
            println!("╚══════════════════════════════════════╝");
            run_server(config).await
        }
        CliCommand::Catalog { search } => {
            print_catalog(&search);
            Ok(())
        }
        CliCommand::Generate { pain_points } => run_generate(config, pain_points).await,
    }
}
