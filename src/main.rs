//! draw-watch: terminal dashboard for a draw prediction service.
//!
//! Single-binary Tokio application that:
//! 1. Polls the prediction service on a fixed interval
//! 2. Keeps the latest prediction, distribution, and statistics in memory
//! 3. Renders them as text cards
//! 4. Accepts console commands for manual refresh

mod config;

use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use dashboard::{new_shared_state, render_dashboard, Refresher, Screen, SharedState};
use predict_client::PredictClient;

/// Draw prediction dashboard
#[derive(Parser)]
#[command(name = "draw-watch", about = "Terminal dashboard for a draw prediction service")]
struct Cli {
    /// Run a single refresh cycle, print the dashboard, and exit.
    #[arg(long)]
    once: bool,

    /// Probe the service and exit.
    #[arg(long)]
    check: bool,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

async fn print_dashboard(state: &SharedState) {
    let snapshot = state.read().await.clone();
    let rendered = render_dashboard(&snapshot);
    if rendered.is_empty() {
        info!("No data loaded yet");
        return;
    }
    println!("\n=== Draw Predictions ({}) ===", now_iso());
    print!("{}", rendered);
}

#[tokio::main]
async fn main() {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "draw_watch=info,predict_client=info,dashboard=info".into()),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    info!("🎱 draw-watch starting up...");

    // Load configuration.
    let cfg = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    info!("Service: {}", cfg.base_url);
    info!(
        "Timing: refresh={}s, heartbeat={}s",
        cfg.timing.refresh_interval_secs, cfg.timing.heartbeat_interval_secs
    );

    let client = PredictClient::new(cfg.base_url.clone());

    // ── Check mode ───────────────────────────────────────────────────
    if cli.check {
        info!("Probing service...");
        match client.get_statistics().await {
            Ok(stats) => {
                info!(
                    "✅ Service reachable: {} draws analyzed, hot={}, cold={}",
                    stats.total_draws_analyzed,
                    stats.most_frequent_number,
                    stats.least_frequent_number
                );
            }
            Err(e) => {
                error!("❌ Service probe failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let state = new_shared_state();
    let refresher = Refresher::new(client, state.clone());

    // ── Once mode ────────────────────────────────────────────────────
    if cli.once {
        refresher.refresh_all().await;
        print_dashboard(&state).await;
        return;
    }

    // ── Mount the screen ─────────────────────────────────────────────
    let refresh_interval = Duration::from_secs(cfg.timing.refresh_interval_secs);
    let screen = Screen::mount(refresher.clone(), refresh_interval);

    // Console commands: manual refresh triggers and quit.
    let console_refresher = refresher.clone();
    let console_state = state.clone();
    let console_handle = tokio::spawn(async move {
        info!("Commands: [Enter] refresh now, r = recompute predictions, s = show, q = quit");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match line.trim() {
                "q" | "quit" => break,
                "r" | "refresh" => {
                    console_refresher.refresh_predictions().await;
                    print_dashboard(&console_state).await;
                }
                "" | "p" => {
                    console_refresher.pull_refresh().await;
                    print_dashboard(&console_state).await;
                }
                "s" | "show" => print_dashboard(&console_state).await,
                other => warn!("Unknown command: {:?}", other),
            }
        }
    });

    // Heartbeat: periodic status line plus a dashboard redraw.
    let hb_state = state.clone();
    let hb_interval = Duration::from_secs(cfg.timing.heartbeat_interval_secs);
    let heartbeat_handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(hb_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // Skip the immediate tick; the mount cycle is still loading.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            {
                let snapshot = hb_state.read().await;
                info!(
                    "HEARTBEAT: prediction={} numbers={} stats={} loading={} refreshing={}",
                    snapshot.current_prediction.is_some(),
                    snapshot.number_wise.is_some(),
                    snapshot.statistics.is_some(),
                    snapshot.loading,
                    snapshot.refreshing,
                );
            }
            print_dashboard(&hb_state).await;
        }
    });

    // ── Wait for shutdown ────────────────────────────────────────────
    info!("🚀 draw-watch is running. Press Ctrl+C to stop.");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = console_handle => {
            info!("Console closed");
        }
    }

    heartbeat_handle.abort();
    screen.unmount();
    info!("draw-watch shut down.");
}
