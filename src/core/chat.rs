use super::listener::ChipReply;
use super::reply::REPLY_BUDGET;
use async_trait::async_trait;
use eyre::{Context, Report, eyre};
use tokio::io::AsyncWriteExt;

/// Delivers replies to the messaging platform.
#[async_trait]
pub trait Outbox: Send + Sync {
    async fn send_reply(&self, reply: &ChipReply) -> Result<(), Report>;
}

/// Helper function to validate reply length against the platform budget.
pub fn validate_reply(text: &str) -> Result<(), Report> {
    if text.is_empty() {
        return Err(eyre!("Reply cannot be empty"));
    }
    let length = text.chars().count();
    if length > REPLY_BUDGET {
        return Err(eyre!(
            "Reply too long ({} characters, max {})",
            length,
            REPLY_BUDGET
        ));
    }
    Ok(())
}

/// Writes each reply as one line of JSON on stdout, for whatever posts them.
#[derive(Clone, Default)]
pub struct StdoutOutbox;

#[async_trait]
impl Outbox for StdoutOutbox {
    async fn send_reply(&self, reply: &ChipReply) -> Result<(), Report> {
        validate_reply(&reply.text)?;

        let mut line = serde_json::to_vec(reply).context("Failed to serialize reply")?;
        line.push(b'\n');

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(&line)
            .await
            .context("Failed to write reply")?;
        stdout.flush().await.context("Failed to flush stdout")?;

        tracing::info!("Reply sent to status {}", reply.in_reply_to_status_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::text_processing::extract_colors;

    #[test]
    fn test_validate_reply() {
        assert!(validate_reply("@someone Enjoy!").is_ok());
        assert!(validate_reply(&"x".repeat(REPLY_BUDGET)).is_ok());
        assert!(validate_reply("").is_err());
        assert!(validate_reply(&"x".repeat(REPLY_BUDGET + 1)).is_err());
    }

    #[tokio::test]
    async fn test_stdout_outbox_rejects_oversized_reply() {
        let reply = ChipReply {
            in_reply_to_status_id: 1,
            text: "x".repeat(REPLY_BUDGET + 1),
            colors: extract_colors("#fff"),
        };
        assert!(StdoutOutbox.send_reply(&reply).await.is_err());
    }

    #[test]
    fn test_reply_wire_format() {
        let reply = ChipReply {
            in_reply_to_status_id: 7,
            text: "@someone Enjoy!".to_string(),
            colors: extract_colors("#f00 #00ff00\n0x00f"),
        };
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            serde_json::json!({
                "in_reply_to_status_id": 7,
                "text": "@someone Enjoy!",
                "colors": [["#ff0000", "#00ff00"], ["#0000ff"]]
            })
        );
    }
}
