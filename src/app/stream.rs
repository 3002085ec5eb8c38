use crate::events::app_event::AppEvent;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// Reads newline-delimited JSON statuses until the reader closes, a read
/// fails, or the receiving side goes away.
pub async fn read_statuses<R>(reader: R, event_tx: mpsc::Sender<AppEvent>, idle_timeout: Duration)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let event = match tokio::time::timeout(idle_timeout, lines.next_line()).await {
            Err(_) => AppEvent::Timeout,
            Ok(Ok(Some(line))) if line.trim().is_empty() => continue,
            Ok(Ok(Some(line))) => match serde_json::from_str(&line) {
                Ok(status) => AppEvent::Status(Box::new(status)),
                Err(e) => AppEvent::StreamError(format!("Undecodable status: {}", e)),
            },
            Ok(Ok(None)) => break,
            Ok(Err(e)) => {
                forward(&event_tx, AppEvent::StreamError(format!("Failed to read input: {}", e)))
                    .await;
                break;
            }
        };

        if !forward(&event_tx, event).await {
            break;
        }
    }
}

async fn forward(event_tx: &mpsc::Sender<AppEvent>, event: AppEvent) -> bool {
    if event_tx.send(event).await.is_err() {
        tracing::error!("Failed to send event: channel is closed.");
        return false;
    }
    true
}
