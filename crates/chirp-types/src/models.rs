use serde::{Deserialize, Serialize};

/// A registered account. Only ever constructed by a store, so `id` is always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(alias = "account_id")]
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Registration candidate, before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

/// One-shot login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(alias = "message_id")]
    pub message_id: i64,
    #[serde(alias = "posted_by")]
    pub posted_by: i64,
    #[serde(alias = "message_text")]
    pub message_text: String,
    /// Caller-supplied, stored as given.
    #[serde(alias = "time_posted_epoch")]
    pub time_posted_epoch: i64,
}

/// Message submission, before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[serde(alias = "posted_by")]
    pub posted_by: i64,
    #[serde(alias = "message_text")]
    pub message_text: String,
    #[serde(alias = "time_posted_epoch")]
    pub time_posted_epoch: i64,
}

impl NewAccount {
    pub fn with_id(self, id: i64) -> Account {
        Account {
            id,
            username: self.username,
            password: self.password,
        }
    }
}

impl NewMessage {
    pub fn with_id(self, message_id: i64) -> Message {
        Message {
            message_id,
            posted_by: self.posted_by,
            message_text: self.message_text,
            time_posted_epoch: self.time_posted_epoch,
        }
    }
}
