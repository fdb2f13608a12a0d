use axum::http::StatusCode;
use tracing::error;

use chirp_core::{ServiceError, SocialService};

use crate::auth::AppState;

/// Map a service failure to the response status. Bodies are always empty.
pub fn service_error_to_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::InvalidAccountInput
        | ServiceError::AccountAlreadyExists
        | ServiceError::InvalidMessageText
        | ServiceError::AccountDoesNotExist
        | ServiceError::MessageDoesNotExist => StatusCode::BAD_REQUEST,
        ServiceError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Run a service call on the blocking pool. SQLite access must stay off the
/// async runtime threads.
pub async fn run_blocking<F, T>(state: &AppState, f: F) -> Result<T, StatusCode>
where
    F: FnOnce(&SocialService) -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.service))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            if e.is_storage() {
                error!("Storage failure: {:#}", e);
            }
            service_error_to_status(&e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_are_bad_request() {
        for err in [
            ServiceError::InvalidAccountInput,
            ServiceError::AccountAlreadyExists,
            ServiceError::InvalidMessageText,
            ServiceError::AccountDoesNotExist,
            ServiceError::MessageDoesNotExist,
        ] {
            assert_eq!(service_error_to_status(&err), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn invalid_credentials_is_unauthorized() {
        assert_eq!(
            service_error_to_status(&ServiceError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn storage_is_internal_error() {
        let err = ServiceError::Storage(anyhow::anyhow!("disk full"));
        assert_eq!(service_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
