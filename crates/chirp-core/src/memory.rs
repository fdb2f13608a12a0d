use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};

use chirp_types::models::{Account, Message, NewAccount, NewMessage};

use crate::store::{AccountStore, MessageStore, UsernameTaken};

/// In-process store implementing both store traits.
///
/// Ids start at 1 and are never reused. Usernames are unique, matching the
/// SQLite schema.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    accounts: BTreeMap<i64, Account>,
    messages: BTreeMap<i64, Message>,
    last_account_id: i64,
    last_message_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| anyhow!("Memory store lock poisoned: {}", e))
    }
}

impl AccountStore for MemoryStore {
    fn add_account(&self, account: &NewAccount) -> Result<Account> {
        let mut inner = self.lock()?;

        if inner.accounts.values().any(|a| a.username == account.username) {
            return Err(UsernameTaken(account.username.clone()).into());
        }

        inner.last_account_id += 1;
        let stored = account.clone().with_id(inner.last_account_id);
        inner.accounts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        let inner = self.lock()?;
        Ok(inner
            .accounts
            .values()
            .find(|a| a.username == username)
            .cloned())
    }

    fn find_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        Ok(self.lock()?.accounts.get(&id).cloned())
    }
}

impl MessageStore for MemoryStore {
    fn add_message(&self, message: &NewMessage) -> Result<Message> {
        let mut inner = self.lock()?;
        inner.last_message_id += 1;
        let stored = message.clone().with_id(inner.last_message_id);
        inner.messages.insert(stored.message_id, stored.clone());
        Ok(stored)
    }

    fn list_messages(&self) -> Result<Vec<Message>> {
        Ok(self.lock()?.messages.values().cloned().collect())
    }

    fn list_messages_by_author(&self, account_id: i64) -> Result<Vec<Message>> {
        let inner = self.lock()?;
        Ok(inner
            .messages
            .values()
            .filter(|m| m.posted_by == account_id)
            .cloned()
            .collect())
    }

    fn find_message_by_id(&self, id: i64) -> Result<Option<Message>> {
        Ok(self.lock()?.messages.get(&id).cloned())
    }

    fn delete_message(&self, id: i64) -> Result<()> {
        self.lock()?.messages.remove(&id);
        Ok(())
    }

    fn update_message_text(&self, id: i64, text: &str) -> Result<()> {
        if let Some(msg) = self.lock()?.messages.get_mut(&id) {
            msg.message_text = text.to_string();
        }
        Ok(())
    }
}
