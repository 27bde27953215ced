//! Background jobs

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Periodic auto-close sweep; runs until the token is cancelled
pub async fn auto_close_loop(
    tickets: Arc<ticketing::domain::Service>,
    every: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately; skip it so startup stays quiet
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("auto-close task stopping");
                return;
            }
            _ = ticker.tick() => {
                match tickets.auto_close_stale(Utc::now()).await {
                    Ok(closed) if closed > 0 => {
                        tracing::info!(closed, "auto-closed stale tickets");
                    }
                    Ok(_) => tracing::debug!("auto-close sweep found nothing to do"),
                    Err(e) => tracing::warn!("auto-close sweep failed: {}", e),
                }
            }
        }
    }
}
