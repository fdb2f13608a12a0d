use anyhow::Result;
use tracing::debug;

use chirp_core::{AccountStore, MessageStore};
use chirp_types::models::{Account, Message, NewAccount, NewMessage};

use crate::Database;
use crate::models::{AccountRow, MessageRow};

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.account_id,
            username: row.username,
            password: row.password,
        }
    }
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            message_id: row.message_id,
            posted_by: row.posted_by,
            message_text: row.message_text,
            time_posted_epoch: row.time_posted_epoch,
        }
    }
}

impl AccountStore for Database {
    fn add_account(&self, account: &NewAccount) -> Result<Account> {
        let id = self.insert_account(&account.username, &account.password)?;
        Ok(account.clone().with_id(id))
    }

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.get_account_by_username(username)?.map(Account::from))
    }

    fn find_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        Ok(self.get_account_by_id(id)?.map(Account::from))
    }
}

impl MessageStore for Database {
    fn add_message(&self, message: &NewMessage) -> Result<Message> {
        let id = self.insert_message(
            message.posted_by,
            &message.message_text,
            message.time_posted_epoch,
        )?;
        Ok(message.clone().with_id(id))
    }

    fn list_messages(&self) -> Result<Vec<Message>> {
        Ok(self.get_messages()?.into_iter().map(Message::from).collect())
    }

    fn list_messages_by_author(&self, account_id: i64) -> Result<Vec<Message>> {
        Ok(self
            .get_messages_by_author(account_id)?
            .into_iter()
            .map(Message::from)
            .collect())
    }

    fn find_message_by_id(&self, id: i64) -> Result<Option<Message>> {
        Ok(self.get_message(id)?.map(Message::from))
    }

    fn delete_message(&self, id: i64) -> Result<()> {
        let n = self.remove_message(id)?;
        debug!("Messages deleted for id {}: {}", id, n);
        Ok(())
    }

    fn update_message_text(&self, id: i64, text: &str) -> Result<()> {
        let n = self.set_message_text(id, text)?;
        debug!("Messages updated for id {}: {}", id, n);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chirp_core::{ServiceError, SocialService};
    use chirp_types::models::Credentials;

    use super::*;

    fn service() -> SocialService {
        let db = Arc::new(Database::open_in_memory().unwrap());
        SocialService::new(db.clone(), db)
    }

    #[test]
    fn service_over_sqlite() {
        let svc = service();

        let account = svc
            .register(&NewAccount {
                username: "testuser1".into(),
                password: "password".into(),
            })
            .unwrap();
        assert_eq!(account.id, 1);

        let logged_in = svc
            .login(&Credentials {
                username: "testuser1".into(),
                password: "password".into(),
            })
            .unwrap();
        assert_eq!(logged_in, account);

        let created = svc
            .create_message(&NewMessage {
                posted_by: account.id,
                message_text: "hello".into(),
                time_posted_epoch: 1669947792,
            })
            .unwrap();
        assert_eq!(svc.get_message(created.message_id).unwrap(), Some(created.clone()));

        let updated = svc
            .update_message_text(created.message_id, "edited")
            .unwrap();
        assert_eq!(updated.message_text, "edited");
        assert_eq!(
            svc.get_message(created.message_id).unwrap().unwrap().message_text,
            "edited"
        );

        let deleted = svc.delete_message(created.message_id).unwrap().unwrap();
        assert_eq!(deleted.message_text, "edited");
        assert!(svc.list_messages().unwrap().is_empty());
    }

    #[test]
    fn duplicate_registration_maps_to_already_exists() {
        let svc = service();
        let candidate = NewAccount {
            username: "dup".into(),
            password: "password".into(),
        };
        svc.register(&candidate).unwrap();

        let err = svc.register(&candidate).unwrap_err();
        assert!(matches!(err, ServiceError::AccountAlreadyExists));
    }

    #[test]
    fn store_level_duplicate_is_username_taken() {
        let db = Database::open_in_memory().unwrap();
        let candidate = NewAccount {
            username: "dup".into(),
            password: "password".into(),
        };
        db.add_account(&candidate).unwrap();

        let err = db.add_account(&candidate).unwrap_err();
        assert!(err.is::<chirp_core::UsernameTaken>());
    }
}
