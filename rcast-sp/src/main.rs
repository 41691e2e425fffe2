//! Replay Cast spectator (rcast-sp) - Main entry point
//!
//! `analyze` runs the offline decision pass and writes the result as JSON.
//! `spectate` plays a queue of matches into the client, reading the match
//! clock from a file and writing commands to stdout as JSON lines.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rcast_common::events::{DirectorEvent, EventBus};
use rcast_common::{DirectorConfig, MatchTimeline};
use rcast_sp::io::{FileClockReader, JsonLinesCommandSink};
use rcast_sp::Director;
use tokio::signal;
use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for rcast-sp
#[derive(Parser, Debug)]
#[command(name = "rcast-sp")]
#[command(about = "Automatic spectator director for recorded matches")]
#[command(version)]
struct Args {
    /// Director configuration file (TOML)
    #[arg(long, global = true, env = "RCAST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute focus and panel decisions for one match without playing it
    Analyze {
        /// Match JSON export
        #[arg(long = "match")]
        match_file: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Play matches into the spectator client, one after another
    Spectate {
        /// Match JSON exports, played in order
        #[arg(long = "match", required = true, num_args = 1..)]
        matches: Vec<PathBuf>,

        /// File the external clock reader keeps updated with the timer text
        #[arg(long, env = "RCAST_CLOCK_FILE")]
        clock_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = DirectorConfig::resolve_and_load(args.config.as_deref())
        .context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        git_hash = env!("RCAST_GIT_HASH"),
        built = env!("RCAST_BUILD_TIMESTAMP"),
        profile = env!("RCAST_BUILD_PROFILE"),
        "Starting rcast-sp"
    );

    match args.command {
        Command::Analyze { match_file, out } => run_analyze(&config, match_file, out).await,
        Command::Spectate { matches, clock_file } => run_spectate(config, matches, clock_file).await,
    }
}

async fn run_analyze(config: &DirectorConfig, match_file: PathBuf, out: Option<PathBuf>) -> Result<()> {
    // Loading and the rayon pass both block
    let config = config.clone();
    let report = tokio::task::spawn_blocking(move || -> Result<String> {
        let timeline = MatchTimeline::load(&match_file)
            .with_context(|| format!("Failed to load match {}", match_file.display()))?;
        let analysis = rcast_an::analyze(&timeline, &config).context("Analysis failed")?;
        Ok(serde_json::to_string_pretty(&analysis.report(timeline.duration_secs))?)
    })
    .await
    .context("Analysis task failed")??;

    match out {
        Some(path) => {
            tokio::fs::write(&path, report)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(out = %path.display(), "Analysis written");
        }
        None => println!("{}", report),
    }
    Ok(())
}

async fn run_spectate(config: DirectorConfig, matches: Vec<PathBuf>, clock_file: PathBuf) -> Result<()> {
    info!(matches = matches.len(), clock_file = %clock_file.display(), "Spectating queue");

    let events = Arc::new(EventBus::new(config.runtime.event_capacity));
    let director = Director::new(
        Arc::new(config),
        Arc::clone(&events),
        Arc::new(FileClockReader::new(clock_file)),
        Arc::new(JsonLinesCommandSink::stdout()),
    );

    let root = CancellationToken::new();
    tokio::spawn({
        let root = root.clone();
        async move {
            shutdown_signal().await;
            root.cancel();
        }
    });
    tokio::spawn(log_events(events.subscribe()));

    let reports = director.run_queue(&matches, &root).await;
    for report in &reports {
        match &report.outcome {
            Ok(outcome) => info!(match_file = %report.path.display(), outcome = %outcome, "Match finished"),
            Err(e) => warn!(match_file = %report.path.display(), error = %e, "Match failed"),
        }
    }

    info!(played = reports.len(), "Queue complete");
    Ok(())
}

/// Stand-in consumer for reporting integrations
async fn log_events(mut rx: tokio::sync::broadcast::Receiver<DirectorEvent>) {
    loop {
        match rx.recv().await {
            Ok(DirectorEvent::StatsSnapshot { session_id, second, stats }) => {
                let kills: u32 = stats.iter().map(|s| s.kills).sum();
                info!(session_id = %session_id, second, kills, "Stats snapshot");
            }
            Ok(event) => debug!(?event, "Director event"),
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "Event log lagging, events dropped"),
            Err(RecvError::Closed) => break,
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
