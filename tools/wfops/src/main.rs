//! Operator CLI for the workforce server
//!
//! `wfops load` drives concurrent HTTP traffic at a running server and
//! reports latency percentiles. `wfops auto-close` triggers the stale-ticket
//! sweep the way an external cron would.

mod cron;
mod load;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "wfops", about = "Workforce server operations toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate HTTP load against a running server
    Load(load::LoadArgs),
    /// Trigger the stale-ticket auto-close sweep
    AutoClose(cron::AutoCloseArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match Cli::parse().command {
        Command::Load(args) => load::run(args).await,
        Command::AutoClose(args) => cron::run(args).await,
    }
}
