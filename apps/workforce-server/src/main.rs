//! Workforce management server binary

mod app;
mod config;
mod jobs;

use anyhow::Context;
use app::{CronSecret, Services};
use auth_core::TokenVerifier;
use clap::Parser;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "workforce-server", about = "Workforce management HTTP server")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = config::load(args.config.as_deref())?;

    init_tracing(cfg.server.json_logs);

    let db = connect(&cfg).await?;
    migrate(&db).await?;

    let db = Arc::new(db);
    let services = build_services(&cfg, &db)?;
    let verifier = Arc::new(TokenVerifier::new(&cfg.auth.jwt_secret));
    let cron_secret = CronSecret(Arc::new(cfg.auth.cron_secret.clone()));

    let router = app::build_router(&services, verifier, cron_secret);

    let cancel = CancellationToken::new();
    let auto_close = match cfg.jobs.auto_close_interval_minutes {
        0 => None,
        minutes => Some(tokio::spawn(jobs::auto_close_loop(
            services.tickets.clone(),
            Duration::from_secs(minutes * 60),
            cancel.clone(),
        ))),
    };

    let listener = tokio::net::TcpListener::bind(&cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    tracing::info!(addr = %cfg.server.bind_addr, "server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    cancel.cancel();
    if let Some(task) = auto_close {
        if let Err(e) = task.await {
            tracing::warn!("auto-close task did not stop cleanly: {}", e);
        }
    }

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(json_logs: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn connect(cfg: &config::AppConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(&cfg.database.url);
    opts.max_connections(cfg.database.max_connections);
    Database::connect(opts)
        .await
        .context("failed to connect to the database")
}

async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    ticketing::infra::storage::migrations::Migrator::up(db, None)
        .await
        .context("ticketing migrations failed")?;
    attendance::infra::storage::migrations::Migrator::up(db, None)
        .await
        .context("attendance migrations failed")?;
    leave::infra::storage::migrations::Migrator::up(db, None)
        .await
        .context("leave migrations failed")?;
    kta_cards::infra::storage::migrations::Migrator::up(db, None)
        .await
        .context("kta_cards migrations failed")?;
    payroll::infra::storage::migrations::Migrator::up(db, None)
        .await
        .context("payroll migrations failed")?;
    Ok(())
}

fn build_services(
    cfg: &config::AppConfig,
    db: &Arc<DatabaseConnection>,
) -> anyhow::Result<Services> {
    use attendance::infra::storage::repositories::SeaOrmAttendanceRepository;
    use kta_cards::infra::storage::repositories::SeaOrmCardRepository;
    use leave::infra::storage::repositories::{SeaOrmLeaveRepository, SeaOrmShiftSwapRepository};
    use payroll::infra::storage::repositories::SeaOrmPayrollRepository;
    use ticketing::infra::storage::repositories::{
        SeaOrmAssignmentRepository, SeaOrmHistoryRepository, SeaOrmTicketRepository,
    };

    let tickets = Arc::new(ticketing::domain::Service::new(
        Arc::new(SeaOrmTicketRepository::new(db.clone())),
        Arc::new(SeaOrmHistoryRepository::new(db.clone())),
        Arc::new(SeaOrmAssignmentRepository::new(db.clone())),
        cfg.ticketing.clone(),
    ));

    let attendance = Arc::new(attendance::domain::Service::new(
        Arc::new(SeaOrmAttendanceRepository::new(db.clone())),
        &cfg.attendance,
    )?);

    let leave = Arc::new(leave::domain::Service::new(
        Arc::new(SeaOrmLeaveRepository::new(db.clone())),
        Arc::new(SeaOrmShiftSwapRepository::new(db.clone())),
    ));

    let cards = Arc::new(kta_cards::domain::Service::new(Arc::new(
        SeaOrmCardRepository::new(db.clone()),
    )));

    let payroll = Arc::new(payroll::domain::Service::new(Arc::new(
        SeaOrmPayrollRepository::new(db.clone()),
    )));

    Ok(Services {
        tickets,
        attendance,
        leave,
        cards,
        payroll,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install ctrl-c handler: {}", e);
        // Fall through and keep serving; shutdown then needs a kill signal
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
