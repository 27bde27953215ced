//! Concurrent load generation against a running server

use anyhow::Context;
use auth_core::{Claims, Role, TokenVerifier};
use clap::{Args, ValueEnum};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Create tickets and list them
    Tickets,
    /// Check today's attendance record
    Attendance,
    /// Alternate between the two
    Mixed,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Traffic shape
    #[arg(long, value_enum, default_value_t = Scenario::Mixed)]
    pub scenario: Scenario,

    /// Concurrent workers
    #[arg(long, default_value_t = 8)]
    pub concurrency: u32,

    /// Requests per worker
    #[arg(long, default_value_t = 50)]
    pub requests: u32,

    /// JWT secret used to mint worker tokens (must match the server)
    #[arg(long, env = "WORKFORCE_JWT_SECRET")]
    pub jwt_secret: String,

    /// Attempts per request before counting a connection error
    #[arg(long, default_value_t = 3)]
    pub retries: u32,

    /// Fixed delay between attempts, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub retry_delay_ms: u64,
}

struct WorkerReport {
    latencies_ms: Vec<u128>,
    http_errors: u64,
    transport_errors: u64,
}

pub async fn run(args: LoadArgs) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("failed to build HTTP client")?;

    let verifier = TokenVerifier::new(&args.jwt_secret);
    let base_url = Arc::new(args.base_url.trim_end_matches('/').to_string());

    tracing::info!(
        scenario = ?args.scenario,
        concurrency = args.concurrency,
        requests = args.requests,
        "starting load run"
    );
    let started = Instant::now();

    let mut workers = Vec::with_capacity(args.concurrency as usize);
    for worker_id in 0..args.concurrency {
        let nik = format!("990000{:04}", worker_id);
        let claims = Claims::new(&nik, format!("load worker {}", worker_id), Role::Employee, 60);
        let token = verifier
            .sign(&claims)
            .map_err(|e| anyhow::anyhow!("failed to mint worker token: {}", e))?;

        workers.push(tokio::spawn(worker(
            client.clone(),
            base_url.clone(),
            token,
            args.scenario,
            worker_id,
            args.requests,
            args.retries,
            args.retry_delay_ms,
        )));
    }

    let mut latencies = Vec::new();
    let mut http_errors = 0;
    let mut transport_errors = 0;
    for handle in workers {
        let report = handle.await.context("load worker panicked")?;
        latencies.extend(report.latencies_ms);
        http_errors += report.http_errors;
        transport_errors += report.transport_errors;
    }

    let elapsed = started.elapsed();
    latencies.sort_unstable();
    let total = latencies.len() as u64 + transport_errors;

    println!("requests:         {}", total);
    println!("completed:        {}", latencies.len());
    println!("http errors:      {}", http_errors);
    println!("transport errors: {}", transport_errors);
    println!("elapsed:          {:.2}s", elapsed.as_secs_f64());
    if !latencies.is_empty() {
        println!(
            "throughput:       {:.1} req/s",
            latencies.len() as f64 / elapsed.as_secs_f64()
        );
        println!("latency p50:      {} ms", percentile(&latencies, 50));
        println!("latency p95:      {} ms", percentile(&latencies, 95));
        println!("latency p99:      {} ms", percentile(&latencies, 99));
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn worker(
    client: reqwest::Client,
    base_url: Arc<String>,
    token: String,
    scenario: Scenario,
    worker_id: u32,
    requests: u32,
    retries: u32,
    retry_delay_ms: u64,
) -> WorkerReport {
    let mut report = WorkerReport {
        latencies_ms: Vec::with_capacity(requests as usize),
        http_errors: 0,
        transport_errors: 0,
    };

    for i in 0..requests {
        let use_tickets = match scenario {
            Scenario::Tickets => true,
            Scenario::Attendance => false,
            Scenario::Mixed => (worker_id + i) % 2 == 0,
        };

        let request = if use_tickets && i % 2 == 0 {
            client
                .post(format!("{}/api/tickets", base_url))
                .bearer_auth(&token)
                .json(&json!({
                    "category": "it-support",
                    "priority": "medium",
                    "subject": format!("load ticket {}-{}", worker_id, i),
                    "description": "generated by wfops load",
                }))
        } else if use_tickets {
            client
                .get(format!("{}/api/tickets?limit=10", base_url))
                .bearer_auth(&token)
        } else {
            client
                .get(format!("{}/api/attendance/today", base_url))
                .bearer_auth(&token)
        };

        match send_with_retry(request, retries, retry_delay_ms).await {
            Ok((status, latency)) => {
                report.latencies_ms.push(latency.as_millis());
                // 404 on an empty attendance day is expected traffic
                if status.is_server_error() {
                    report.http_errors += 1;
                }
            }
            Err(e) => {
                tracing::debug!(worker_id, "request failed: {}", e);
                report.transport_errors += 1;
            }
        }
    }

    report
}

async fn send_with_retry(
    request: reqwest::RequestBuilder,
    retries: u32,
    retry_delay_ms: u64,
) -> anyhow::Result<(reqwest::StatusCode, Duration)> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let cloned = request
            .try_clone()
            .context("request body is not cloneable")?;

        let started = Instant::now();
        match cloned.send().await {
            Ok(response) => return Ok((response.status(), started.elapsed())),
            Err(e) if e.is_connect() && attempt < retries => {
                tokio::time::sleep(Duration::from_millis(retry_delay_ms)).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn percentile(sorted: &[u128], p: usize) -> u128 {
    if sorted.is_empty() {
        return 0;
    }
    let rank = (sorted.len() * p).div_ceil(100);
    sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_picks_expected_ranks() {
        let data: Vec<u128> = (1..=100).collect();
        assert_eq!(percentile(&data, 50), 50);
        assert_eq!(percentile(&data, 95), 95);
        assert_eq!(percentile(&data, 99), 99);
        assert_eq!(percentile(&[42], 99), 42);
        assert_eq!(percentile(&[], 50), 0);
    }
}
