/// Every way a service operation can fail.
///
/// All variants except `Storage` are rejections of client input and carry no
/// detail beyond the kind.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("username must be non-empty and password at least 4 characters")]
    InvalidAccountInput,
    #[error("account already exists")]
    AccountAlreadyExists,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("message text must be between 1 and 254 characters")]
    InvalidMessageText,
    #[error("account does not exist")]
    AccountDoesNotExist,
    #[error("message does not exist")]
    MessageDoesNotExist,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    /// True for failures of the backing store rather than of the request.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
