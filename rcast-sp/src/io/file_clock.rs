use std::path::PathBuf;

use async_trait::async_trait;
use rcast_common::time::parse_clock_text;
use rcast_common::MatchSecond;
use tracing::trace;

use super::ClockReader;

/// Reads the timer text an external screen reader keeps writing to a file
/// (`mm:ss` or `h:mm:ss`). A missing file or unreadable text means the
/// timer is not visible.
pub struct FileClockReader {
    path: PathBuf,
}

impl FileClockReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ClockReader for FileClockReader {
    async fn try_read(&self) -> Option<MatchSecond> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) => {
                trace!(path = %self.path.display(), error = %e, "Clock file not readable");
                return None;
            }
        };
        let reading = parse_clock_text(&text);
        if reading.is_none() {
            trace!(path = %self.path.display(), text = text.trim(), "Clock text not recognized");
        }
        reading
    }
}
