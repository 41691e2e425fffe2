//! Match queue runner
//!
//! Plays queued matches one after another. A match that fails to load,
//! analyze or synchronize is logged and skipped; the next one still runs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rcast_an::{analyze, Analysis};
use rcast_common::events::{EventBus, SessionOutcome};
use rcast_common::{DirectorConfig, MatchTimeline};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::io::{ClockReader, CommandSink};
use crate::session::SpectatorSession;
use crate::{Error, Result};

/// Result of one queued match
#[derive(Debug)]
pub struct MatchReport {
    pub path: PathBuf,
    pub outcome: Result<SessionOutcome>,
}

pub struct Director {
    config: Arc<DirectorConfig>,
    events: Arc<EventBus>,
    reader: Arc<dyn ClockReader>,
    sink: Arc<dyn CommandSink>,
}

impl Director {
    pub fn new(
        config: Arc<DirectorConfig>,
        events: Arc<EventBus>,
        reader: Arc<dyn ClockReader>,
        sink: Arc<dyn CommandSink>,
    ) -> Self {
        Self {
            config,
            events,
            reader,
            sink,
        }
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Play every match in order until the queue drains or `root` is cancelled
    pub async fn run_queue(&self, matches: &[PathBuf], root: &CancellationToken) -> Vec<MatchReport> {
        let mut reports = Vec::with_capacity(matches.len());

        for (index, path) in matches.iter().enumerate() {
            if root.is_cancelled() {
                info!(remaining = matches.len() - index, "Shutdown requested, leaving queue");
                break;
            }

            info!(match_file = %path.display(), position = index + 1, total = matches.len(), "Starting match");
            let outcome = self.run_path(path, root).await;
            if let Err(e) = &outcome {
                error!(match_file = %path.display(), error = %e, "Match skipped");
            }
            reports.push(MatchReport {
                path: path.clone(),
                outcome,
            });

            if !root.is_cancelled() {
                info!("Ready for next match");
            }
        }

        reports
    }

    async fn run_path(&self, path: &Path, root: &CancellationToken) -> Result<SessionOutcome> {
        let owned = path.to_path_buf();
        let timeline = tokio::task::spawn_blocking(move || MatchTimeline::load(&owned))
            .await
            .map_err(|e| Error::Internal(format!("match load task failed: {}", e)))??;
        self.run_match(timeline, root).await
    }

    /// Analyze an in-memory match and spectate it
    pub async fn run_match(&self, timeline: MatchTimeline, root: &CancellationToken) -> Result<SessionOutcome> {
        let timeline = Arc::new(timeline);
        let analysis = self.analyze(Arc::clone(&timeline)).await?;

        let session = SpectatorSession::new(
            timeline,
            Arc::new(analysis),
            Arc::clone(&self.config),
            Arc::clone(&self.events),
        );
        Ok(session
            .run(Arc::clone(&self.reader), Arc::clone(&self.sink), root)
            .await)
    }

    /// Offline pass on the blocking pool; it fans out over rayon
    async fn analyze(&self, timeline: Arc<MatchTimeline>) -> Result<Analysis> {
        let config = Arc::clone(&self.config);
        let analysis = tokio::task::spawn_blocking(move || analyze(&timeline, &config))
            .await
            .map_err(|e| Error::Internal(format!("analysis task failed: {}", e)))??;
        Ok(analysis)
    }
}
