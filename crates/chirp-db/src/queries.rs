use crate::models::{AccountRow, MessageRow};
use crate::Database;
use anyhow::{Result, anyhow};
use rusqlite::{Connection, OptionalExtension, Row};
use tracing::debug;

use chirp_core::UsernameTaken;

impl Database {
    // -- Accounts --

    /// Insert an account and return its generated id. A duplicate username
    /// fails with [`UsernameTaken`].
    pub fn insert_account(&self, username: &str, password: &str) -> Result<i64> {
        self.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT INTO account (username, password) VALUES (?1, ?2)",
                (username, password),
            );

            match inserted {
                Ok(n) => debug!("Accounts inserted: {}", n),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
                {
                    return Err(UsernameTaken(username.to_string()).into());
                }
                Err(e) => return Err(e.into()),
            }

            generated_id(conn)
        })
    }

    pub fn get_account_by_username(&self, username: &str) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT account_id, username, password FROM account WHERE username = ?1",
                [username],
                account_row,
            )
            .optional()
            .map_err(Into::into)
        })
    }

    pub fn get_account_by_id(&self, account_id: i64) -> Result<Option<AccountRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT account_id, username, password FROM account WHERE account_id = ?1",
                [account_id],
                account_row,
            )
            .optional()
            .map_err(Into::into)
        })
    }

    // -- Messages --

    pub fn insert_message(
        &self,
        posted_by: i64,
        message_text: &str,
        time_posted_epoch: i64,
    ) -> Result<i64> {
        self.with_conn(|conn| {
            let n = conn.execute(
                "INSERT INTO message (posted_by, message_text, time_posted_epoch) VALUES (?1, ?2, ?3)",
                rusqlite::params![posted_by, message_text, time_posted_epoch],
            )?;
            debug!("Messages inserted: {}", n);

            generated_id(conn)
        })
    }

    pub fn get_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "SELECT message_id, posted_by, message_text, time_posted_epoch
                 FROM message
                 ORDER BY message_id",
                rusqlite::params![],
            )
        })
    }

    pub fn get_messages_by_author(&self, posted_by: i64) -> Result<Vec<MessageRow>> {
        self.with_conn(|conn| {
            query_messages(
                conn,
                "SELECT message_id, posted_by, message_text, time_posted_epoch
                 FROM message
                 WHERE posted_by = ?1
                 ORDER BY message_id",
                [posted_by],
            )
        })
    }

    pub fn get_message(&self, message_id: i64) -> Result<Option<MessageRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT message_id, posted_by, message_text, time_posted_epoch
                 FROM message WHERE message_id = ?1",
                [message_id],
                message_row,
            )
            .optional()
            .map_err(Into::into)
        })
    }

    /// Returns the number of rows removed (0 or 1).
    pub fn remove_message(&self, message_id: i64) -> Result<usize> {
        self.with_conn(|conn| {
            let n = conn.execute("DELETE FROM message WHERE message_id = ?1", [message_id])?;
            Ok(n)
        })
    }

    /// Returns the number of rows changed (0 or 1).
    pub fn set_message_text(&self, message_id: i64, message_text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let n = conn.execute(
                "UPDATE message SET message_text = ?1 WHERE message_id = ?2",
                rusqlite::params![message_text, message_id],
            )?;
            Ok(n)
        })
    }
}

fn generated_id(conn: &Connection) -> Result<i64> {
    match conn.last_insert_rowid() {
        0 => Err(anyhow!("Row inserted but no generated id was returned")),
        id => Ok(id),
    }
}

fn account_row(row: &Row<'_>) -> rusqlite::Result<AccountRow> {
    Ok(AccountRow {
        account_id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_row(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        message_id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}

fn query_messages<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare(sql)?;

    let rows = stmt
        .query_map(params, message_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
