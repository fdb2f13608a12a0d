use serde::{Deserialize, Serialize};

use crate::models::{Credentials, NewAccount, NewMessage};

// -- Auth --

pub type RegisterRequest = NewAccount;

pub type LoginRequest = Credentials;

// -- Messages --

pub type SendMessageRequest = NewMessage;

/// Body of `PATCH /messages/{id}`. Only the text is replaceable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    #[serde(alias = "message_text")]
    pub message_text: String,
}
