use async_trait::async_trait;
use rcast_common::events::PanelKind;
use rcast_common::match_data::Seat;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use super::CommandSink;
use crate::{Error, Result};

/// One command line as written for the input-injection process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SinkCommand {
    FocusParticipant { slot: Seat },
    ShowPanel { panel: PanelKind },
}

/// Writes each command as a JSON line and flushes it immediately
pub struct JsonLinesCommandSink<W> {
    writer: Mutex<W>,
}

impl<W> JsonLinesCommandSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    async fn write(&self, command: &SinkCommand) -> Result<()> {
        let mut line = serde_json::to_vec(command)
            .map_err(|e| Error::Command(format!("encode {:?}: {}", command, e)))?;
        line.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(&line).await?;
        writer.flush().await?;
        Ok(())
    }
}

impl JsonLinesCommandSink<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> CommandSink for JsonLinesCommandSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn focus_participant(&self, slot: Seat) -> Result<()> {
        self.write(&SinkCommand::FocusParticipant { slot }).await
    }

    async fn show_panel(&self, panel: PanelKind) -> Result<()> {
        self.write(&SinkCommand::ShowPanel { panel }).await
    }
}
