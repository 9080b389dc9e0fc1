//! fleetsimd — the fleetsim daemon.
//!
//! Single binary with two modes:
//! - `serve`: REST API + dashboard over HTTP
//! - `run`: one simulation, pretty JSON on stdout
//!
//! # Usage
//!
//! ```text
//! fleetsimd serve --port 8080
//! fleetsimd run --hosts 100 --apps 300 --mean-instances-per-app 5 --seed 42
//! ```

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tracing::info;

use fleetsim_core::{Geometric, SteadyStateEngine, SteadyStateRequest, validate};

#[derive(Parser)]
#[command(name = "fleetsimd", about = "fleetsim daemon")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the REST API and dashboard over HTTP.
    Serve {
        /// Port to listen on. Falls back to the PORT environment
        /// variable, then 8080.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one simulation and print the result as JSON.
    Run {
        /// Number of hosts (1 - 1000).
        #[arg(long)]
        hosts: u32,

        /// Number of apps (1 - 65534).
        #[arg(long)]
        apps: u32,

        /// Desired mean instances per app (1 - 100).
        #[arg(long)]
        mean_instances_per_app: u32,

        /// Seed for the sampler, for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fleetsimd=debug,fleetsim_core=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => run_serve(port).await,
        Command::Run { hosts, apps, mean_instances_per_app, seed } => {
            run_once(hosts, apps, mean_instances_per_app, seed)
        }
    }
}

async fn run_serve(port: Option<u16>) -> anyhow::Result<()> {
    let port = port
        .or_else(|| std::env::var("PORT").ok()?.parse().ok())
        .unwrap_or(8080);

    let router = fleetsim_api::build_router();

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "fleetsim listening");
    axum::serve(listener, router).await?;
    Ok(())
}

fn run_once(
    hosts: u32,
    apps: u32,
    mean_instances_per_app: u32,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let req = SteadyStateRequest { hosts, apps, mean_instances_per_app };
    validate(&req)?;

    let sampler = match seed {
        Some(seed) => Geometric::seeded(seed),
        None => Geometric::from_entropy(),
    };
    let resp = SteadyStateEngine::new(sampler).execute(&req)?;

    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}
