use anyhow::Result;

use chirp_types::models::{Account, Message, NewAccount, NewMessage};

/// Persistence for accounts. Stores hold no validation logic; any failure
/// of the backing medium comes back as an `anyhow::Error`.
pub trait AccountStore: Send + Sync {
    /// Persist a new account and return it with its generated id.
    ///
    /// The store is not required to check for an existing username. A store
    /// that enforces uniqueness reports a duplicate as [`UsernameTaken`].
    fn add_account(&self, account: &NewAccount) -> Result<Account>;

    /// Exact-match lookup.
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>>;

    fn find_account_by_id(&self, id: i64) -> Result<Option<Account>>;
}

/// Persistence for messages.
pub trait MessageStore: Send + Sync {
    /// Persist a new message and return it with its generated id.
    fn add_message(&self, message: &NewMessage) -> Result<Message>;

    /// Every message, in the store's natural order. Empty when there are none.
    fn list_messages(&self) -> Result<Vec<Message>>;

    /// Messages whose `posted_by` equals `account_id`. The account itself is
    /// not checked, so an unknown id yields an empty list.
    fn list_messages_by_author(&self, account_id: i64) -> Result<Vec<Message>>;

    fn find_message_by_id(&self, id: i64) -> Result<Option<Message>>;

    /// No-op when the id does not exist.
    fn delete_message(&self, id: i64) -> Result<()>;

    /// Replace the text of a message. No-op when the id does not exist; the
    /// text is not validated here.
    fn update_message_text(&self, id: i64, text: &str) -> Result<()>;
}

/// Raised by a store whose uniqueness constraint rejected an insert.
#[derive(Debug, thiserror::Error)]
#[error("username already taken: {0}")]
pub struct UsernameTaken(pub String);
