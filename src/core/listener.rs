use super::phrases::PhrasePicker;
use super::reply::{ComposeError, ReplyComposer};
use crate::models::color::ExtractionResult;
use crate::models::message::Status;
use crate::utils::text_processing::extract_colors;
use serde::Serialize;

/// An outgoing reply: the text plus the colors the chip image is drawn from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChipReply {
    pub in_reply_to_status_id: u64,
    pub text: String,
    pub colors: ExtractionResult,
}

/// Turns statuses addressed to the bot into chip replies.
pub struct ChipListener<P> {
    bot_id: u64,
    composer: ReplyComposer<P>,
}

impl<P: PhrasePicker> ChipListener<P> {
    pub fn new(bot_id: u64, composer: ReplyComposer<P>) -> Self {
        Self { bot_id, composer }
    }

    /// Returns `Ok(None)` for statuses that are not replies to the bot or that
    /// carry no colors.
    pub fn on_status(&mut self, status: &Status) -> Result<Option<ChipReply>, ComposeError> {
        if status.in_reply_to_user_id != Some(self.bot_id) {
            tracing::debug!("Ignoring status {}: not a reply to us", status.id);
            return Ok(None);
        }

        let colors = extract_colors(&status.text);
        if colors.is_empty() {
            tracing::debug!("Ignoring status {}: no colors", status.id);
            return Ok(None);
        }
        tracing::info!(
            "Found {} colors on {} lines in status {}",
            colors.flatten().len(),
            colors.len(),
            status.id
        );

        // Everyone mentioned except ourselves and the author.
        let mentions = status.mentions_excluding(&[self.bot_id, status.user.id]);
        let text = self.composer.compose(&status.user.screen_name, &mentions)?;

        Ok(Some(ChipReply {
            in_reply_to_status_id: status.id,
            text,
            colors,
        }))
    }
}
