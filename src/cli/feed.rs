//! Feed command implementation

use std::path::Path;
use std::sync::PoisonError;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use xtm_achievements::config::Config;
use xtm_achievements::tracker::{MiningEvent, MiningTracker};

use super::{open_manager, print_unlocks};

/// Run newline-delimited JSON mining events through the tracker.
///
/// Reads stdin unless `file` is given. Lines that do not parse are skipped.
pub async fn feed_command(config: &Config, file: Option<&Path>) -> Result<()> {
    let manager = open_manager(config)?.into_shared();
    let mut tracker = MiningTracker::new(manager, config.tracker.clone());

    let processed = match file {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open feed: {}", path.display()))?;
            feed_lines(&mut tracker, BufReader::new(file)).await?
        }
        None => feed_lines(&mut tracker, BufReader::new(tokio::io::stdin())).await?,
    };

    tracker.shutdown();
    tracing::info!("Processed {} mining events", processed);
    Ok(())
}

async fn feed_lines<R>(tracker: &mut MiningTracker, reader: R) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut processed = 0;
    let mut line_no = 0;

    while let Some(line) = lines.next_line().await.context("Failed to read feed")? {
        line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: MiningEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping feed line {}: {}", line_no, e);
                continue;
            }
        };

        tracker.handle(event);
        let unlocked = tracker
            .manager()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain_recent_unlocks();
        print_unlocks(&unlocked);
        processed += 1;
    }

    Ok(processed)
}
