//! Business rules for accounts and messages, and the storage contracts they
//! depend on.

pub mod error;
pub mod memory;
pub mod service;
pub mod store;

pub use error::ServiceError;
pub use memory::MemoryStore;
pub use service::SocialService;
pub use store::{AccountStore, MessageStore, UsernameTaken};
