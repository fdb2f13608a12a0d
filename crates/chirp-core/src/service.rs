use std::sync::Arc;

use tracing::{info, warn};

use chirp_types::models::{Account, Credentials, Message, NewAccount, NewMessage};

use crate::error::{ServiceError, ServiceResult};
use crate::store::{AccountStore, MessageStore, UsernameTaken};

pub const MIN_PASSWORD_LEN: usize = 4;
pub const MAX_MESSAGE_LEN: usize = 254;

/// Validates account and message requests and orchestrates the store calls
/// behind them.
///
/// Each operation makes at most two store calls and never retries. Storage
/// failures propagate as [`ServiceError::Storage`].
#[derive(Clone)]
pub struct SocialService {
    accounts: Arc<dyn AccountStore>,
    messages: Arc<dyn MessageStore>,
}

impl SocialService {
    pub fn new(accounts: Arc<dyn AccountStore>, messages: Arc<dyn MessageStore>) -> Self {
        Self { accounts, messages }
    }

    // -- Accounts --

    /// Register a new account.
    ///
    /// Input shape is checked before any store read. If a concurrent
    /// registration takes the username between the lookup and the insert,
    /// the store's unique constraint turns that into `AccountAlreadyExists`.
    pub fn register(&self, candidate: &NewAccount) -> ServiceResult<Account> {
        info!(username = %candidate.username, "Registering account");

        if candidate.username.is_empty() || candidate.password.chars().count() < MIN_PASSWORD_LEN {
            warn!(username = %candidate.username, "Rejected registration: invalid username or password");
            return Err(ServiceError::InvalidAccountInput);
        }

        if self
            .accounts
            .find_account_by_username(&candidate.username)?
            .is_some()
        {
            warn!("Account already exists for username: {}", candidate.username);
            return Err(ServiceError::AccountAlreadyExists);
        }

        self.accounts.add_account(candidate).map_err(|e| {
            if e.is::<UsernameTaken>() {
                warn!("Lost registration race for username: {}", candidate.username);
                ServiceError::AccountAlreadyExists
            } else {
                ServiceError::Storage(e)
            }
        })
    }

    /// Check credentials. Unknown usernames and wrong passwords fail the same way.
    pub fn login(&self, credentials: &Credentials) -> ServiceResult<Account> {
        info!(username = %credentials.username, "Login attempt");

        match self.accounts.find_account_by_username(&credentials.username)? {
            Some(account) if account.password == credentials.password => Ok(account),
            _ => {
                warn!(username = %credentials.username, "Rejected login");
                Err(ServiceError::InvalidCredentials)
            }
        }
    }

    // -- Messages --

    pub fn create_message(&self, candidate: &NewMessage) -> ServiceResult<Message> {
        info!(posted_by = candidate.posted_by, "Creating message");

        check_message_text(&candidate.message_text)?;

        if self
            .accounts
            .find_account_by_id(candidate.posted_by)?
            .is_none()
        {
            warn!("Rejected message from unknown account {}", candidate.posted_by);
            return Err(ServiceError::AccountDoesNotExist);
        }

        Ok(self.messages.add_message(candidate)?)
    }

    pub fn list_messages(&self) -> ServiceResult<Vec<Message>> {
        Ok(self.messages.list_messages()?)
    }

    /// Never checks that the account exists; an unknown id is just an empty list.
    pub fn list_messages_by_account(&self, account_id: i64) -> ServiceResult<Vec<Message>> {
        Ok(self.messages.list_messages_by_author(account_id)?)
    }

    pub fn get_message(&self, id: i64) -> ServiceResult<Option<Message>> {
        Ok(self.messages.find_message_by_id(id)?)
    }

    /// Delete a message and return what it held before deletion, or `None`
    /// (with no store mutation) if it was never there.
    pub fn delete_message(&self, id: i64) -> ServiceResult<Option<Message>> {
        info!(message_id = id, "Deleting message");

        let Some(message) = self.messages.find_message_by_id(id)? else {
            return Ok(None);
        };

        self.messages.delete_message(id)?;
        Ok(Some(message))
    }

    /// Replace a message's text.
    ///
    /// The returned message is the one read before the write, with its text
    /// swapped locally. The store is not read again after the update.
    pub fn update_message_text(&self, id: i64, new_text: &str) -> ServiceResult<Message> {
        info!(message_id = id, "Updating message text");

        check_message_text(new_text)?;

        let Some(mut message) = self.messages.find_message_by_id(id)? else {
            warn!("Rejected update of unknown message {}", id);
            return Err(ServiceError::MessageDoesNotExist);
        };

        self.messages.update_message_text(id, new_text)?;
        message.message_text = new_text.to_string();
        Ok(message)
    }
}

fn check_message_text(text: &str) -> ServiceResult<()> {
    let len = text.chars().count();
    if len == 0 || len > MAX_MESSAGE_LEN {
        warn!(len, "Rejected message text");
        return Err(ServiceError::InvalidMessageText);
    }
    Ok(())
}
