use super::user::Mention;
use serde::Deserialize;

/// The part of an inbound status the bot acts on. Unknown fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct Status {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub in_reply_to_user_id: Option<u64>,
    pub user: StatusUser,
    #[serde(default)]
    pub entities: Entities,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatusUser {
    pub id: u64,
    pub screen_name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Entities {
    #[serde(default)]
    pub user_mentions: Vec<UserMention>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserMention {
    pub id: u64,
    pub screen_name: String,
}

impl Status {
    /// Mentioned accounts whose id is not in `exclude_ids`, in order of appearance.
    pub fn mentions_excluding(&self, exclude_ids: &[u64]) -> Vec<Mention> {
        self.entities
            .user_mentions
            .iter()
            .filter(|m| !exclude_ids.contains(&m.id))
            .map(|m| Mention::new(m.screen_name.as_str()))
            .collect()
    }
}
