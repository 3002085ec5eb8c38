//! Builds the reply text that goes out with a chip.
//!
//! Replies to messages with mentions use the richest template that fits the
//! platform's character budget. Replies without mentions use a phrase from
//! the composer's [`PhrasePicker`].

use super::phrases::PhrasePicker;
use crate::models::user::Mention;

/// Maximum reply length in characters, the platform's status limit.
pub const REPLY_BUDGET: usize = 140;

pub const LONG_PHRASE: &str = "sent you a Chroma Chip!";
pub const SHORT_PHRASE: &str = "sent you a chip!";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("reply is {length} characters, budget is {budget}")]
    ReplyTooLong { length: usize, budget: usize },
}

/// Reply templates for a message with mentions, richest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyCandidate {
    LongMentions,
    ShortMentions,
    NoMentions,
}

impl ReplyCandidate {
    pub const PREFERENCE: [ReplyCandidate; 3] = [
        ReplyCandidate::LongMentions,
        ReplyCandidate::ShortMentions,
        ReplyCandidate::NoMentions,
    ];
}

pub struct ReplyComposer<P> {
    picker: P,
    long_phrase: String,
    short_phrase: String,
}

impl<P: PhrasePicker> ReplyComposer<P> {
    pub fn new(picker: P) -> Self {
        Self {
            picker,
            long_phrase: LONG_PHRASE.to_string(),
            short_phrase: SHORT_PHRASE.to_string(),
        }
    }

    pub fn with_phrases(mut self, long_phrase: String, short_phrase: String) -> Self {
        self.long_phrase = long_phrase;
        self.short_phrase = short_phrase;
        self
    }

    /// Composes the reply to `recipient`, notifying `mentions` in order.
    pub fn compose(
        &mut self,
        recipient: &str,
        mentions: &[Mention],
    ) -> Result<String, ComposeError> {
        if mentions.is_empty() {
            let reply = format!("@{} {}", recipient, self.picker.pick());
            return fit(reply);
        }

        let joined = mentions
            .iter()
            .map(Mention::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        let mut shortest = usize::MAX;
        for candidate in ReplyCandidate::PREFERENCE {
            let reply = self.render(candidate, recipient, &joined);
            let length = reply.chars().count();
            if length <= REPLY_BUDGET {
                return Ok(reply);
            }
            tracing::debug!(?candidate, length, "Reply candidate over budget");
            shortest = shortest.min(length);
        }

        Err(ComposeError::ReplyTooLong {
            length: shortest,
            budget: REPLY_BUDGET,
        })
    }

    fn render(&self, candidate: ReplyCandidate, recipient: &str, joined: &str) -> String {
        match candidate {
            ReplyCandidate::LongMentions => {
                format!("@{} {} {}", recipient, self.long_phrase, joined)
            }
            ReplyCandidate::ShortMentions => {
                format!("@{} {} {}", recipient, self.short_phrase, joined)
            }
            ReplyCandidate::NoMentions => format!("@{} {}", recipient, joined),
        }
    }
}

fn fit(reply: String) -> Result<String, ComposeError> {
    let length = reply.chars().count();
    if length > REPLY_BUDGET {
        return Err(ComposeError::ReplyTooLong {
            length,
            budget: REPLY_BUDGET,
        });
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Hands out a fixed sequence of phrases.
    struct ScriptedPicker(VecDeque<&'static str>);

    impl PhrasePicker for ScriptedPicker {
        fn pick(&mut self) -> String {
            self.0.pop_front().unwrap_or("out of phrases").to_string()
        }
    }

    fn composer() -> ReplyComposer<ScriptedPicker> {
        ReplyComposer::new(ScriptedPicker(VecDeque::from(["Enjoy!", "Great!"])))
    }

    /// Two mentions whose space-joined form (`@bob @xxx...`) is `joined_len` long.
    fn mentions_with_joined_len(joined_len: usize) -> Vec<Mention> {
        vec![Mention::new("bob"), Mention::new("x".repeat(joined_len - 6))]
    }

    fn long_len(recipient: &str, joined_len: usize) -> usize {
        recipient.len() + LONG_PHRASE.len() + joined_len + 3
    }

    #[test]
    fn test_long_form_with_mentions() {
        let reply = composer()
            .compose(
                "IWantToGive",
                &[Mention::new("GiftToMe"), Mention::new("GiftToMeToo")],
            )
            .unwrap();
        assert_eq!(reply, "@IWantToGive sent you a Chroma Chip! @GiftToMe @GiftToMeToo");
    }

    #[test]
    fn test_long_form_exactly_at_budget() {
        // "@alice " + phrase + " " is 31 characters.
        let mentions = mentions_with_joined_len(109);
        assert_eq!(long_len("alice", 109), 140);

        let reply = composer().compose("alice", &mentions).unwrap();
        assert_eq!(reply.chars().count(), 140);
        assert!(reply.starts_with("@alice sent you a Chroma Chip! "));
        assert!(reply.ends_with(&format!("@bob @{}", "x".repeat(103))));
    }

    #[test]
    fn test_short_form_when_long_is_one_over() {
        let mentions = mentions_with_joined_len(110);
        assert_eq!(long_len("alice", 110), 141);

        let reply = composer().compose("alice", &mentions).unwrap();
        assert!(reply.starts_with("@alice sent you a chip! @bob "));
        assert_eq!(reply.chars().count(), 134);
    }

    #[test]
    fn test_short_form_exactly_at_budget() {
        let mentions = mentions_with_joined_len(116);

        let reply = composer().compose("alice", &mentions).unwrap();
        assert!(reply.starts_with("@alice sent you a chip! "));
        assert_eq!(reply.chars().count(), 140);
    }

    #[test]
    fn test_one_character_phrase_difference() {
        let mentions = mentions_with_joined_len(110);
        let mut composer = composer().with_phrases(
            "sent you a Chroma Chip!".to_string(),
            "sent you a Chroma Chip".to_string(),
        );

        let reply = composer.compose("alice", &mentions).unwrap();
        assert!(reply.starts_with("@alice sent you a Chroma Chip @bob"));
        assert_eq!(reply.chars().count(), 140);
    }

    #[test]
    fn test_phrase_less_form_exactly_at_budget() {
        // "@alice " + joined.
        let mentions = mentions_with_joined_len(133);

        let reply = composer().compose("alice", &mentions).unwrap();
        assert_eq!(reply, format!("@alice @bob @{}", "x".repeat(127)));
        assert_eq!(reply.chars().count(), 140);
    }

    #[test]
    fn test_reply_too_long() {
        let mentions = mentions_with_joined_len(134);

        let err = composer().compose("alice", &mentions).unwrap_err();
        assert_eq!(
            err,
            ComposeError::ReplyTooLong {
                length: 141,
                budget: REPLY_BUDGET
            }
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 'é' is two bytes but one character.
        let mentions = vec![Mention::new("é".repeat(108))];
        let reply = composer().compose("alice", &mentions).unwrap();
        assert!(reply.starts_with("@alice sent you a Chroma Chip! "));
        assert_eq!(reply.chars().count(), 140);
    }

    #[test]
    fn test_no_mentions_uses_picked_phrase() {
        let mut composer = composer();
        assert_eq!(composer.compose("IWantToGive", &[]).unwrap(), "@IWantToGive Enjoy!");
        assert_eq!(composer.compose("IWantToGive", &[]).unwrap(), "@IWantToGive Great!");
    }

    #[test]
    fn test_no_mentions_over_budget() {
        let recipient = "r".repeat(140);
        let err = composer().compose(&recipient, &[]).unwrap_err();
        assert_eq!(
            err,
            ComposeError::ReplyTooLong {
                length: 148,
                budget: REPLY_BUDGET
            }
        );
    }
}
