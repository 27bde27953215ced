//! Cron-style trigger for the internal auto-close endpoint

use anyhow::Context;
use clap::Args;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct AutoCloseArgs {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Shared secret sent in the x-cron-secret header
    #[arg(long, env = "WORKFORCE_CRON_SECRET")]
    pub cron_secret: String,

    /// Attempts before giving up on connection errors
    #[arg(long, default_value_t = 5)]
    pub retries: u32,

    /// Fixed delay between attempts, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub retry_delay_ms: u64,
}

pub async fn run(args: AutoCloseArgs) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("failed to build HTTP client")?;

    let url = format!(
        "{}/internal/tickets/auto-close",
        args.base_url.trim_end_matches('/')
    );

    let mut attempt = 0;
    let response = loop {
        attempt += 1;
        match client
            .post(&url)
            .header("x-cron-secret", &args.cron_secret)
            .send()
            .await
        {
            Ok(response) => break response,
            Err(e) if e.is_connect() && attempt < args.retries => {
                tracing::warn!(attempt, "connection failed, retrying: {}", e);
                tokio::time::sleep(Duration::from_millis(args.retry_delay_ms)).await;
            }
            Err(e) => return Err(e).context("auto-close request failed"),
        }
    };

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if !status.is_success() {
        anyhow::bail!("auto-close returned {}: {}", status, body);
    }

    tracing::info!(%status, body, "auto-close sweep triggered");
    println!("{}", body);
    Ok(())
}
