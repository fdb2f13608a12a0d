//! Database row types. These map directly to SQLite rows and are kept apart
//! from the chirp-types models so the schema can drift from the wire shape.

pub struct AccountRow {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

pub struct MessageRow {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}
