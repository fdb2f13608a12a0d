use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use chirp_types::api::{SendMessageRequest, UpdateMessageRequest};
use chirp_types::models::Message;

use crate::auth::AppState;
use crate::error::run_blocking;

pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let message = run_blocking(&state, move |svc| svc.create_message(&req)).await?;
    Ok(Json(message))
}

pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse, StatusCode> {
    let messages = run_blocking(&state, |svc| svc.list_messages()).await?;
    Ok(Json(messages))
}

/// Unknown accounts get an empty array, not an error.
pub async fn get_account_messages(
    State(state): State<AppState>,
    Path(account_id): Path<i64>,
) -> Result<impl IntoResponse, StatusCode> {
    let messages =
        run_blocking(&state, move |svc| svc.list_messages_by_account(account_id)).await?;
    Ok(Json(messages))
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let message = run_blocking(&state, move |svc| svc.get_message(message_id)).await?;
    Ok(optional_json(message))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Response, StatusCode> {
    let deleted = run_blocking(&state, move |svc| svc.delete_message(message_id)).await?;
    Ok(optional_json(deleted))
}

pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let message = run_blocking(&state, move |svc| {
        svc.update_message_text(message_id, &req.message_text)
    })
    .await?;
    Ok(Json(message))
}

/// A missing message is still a 200, just with an empty body.
fn optional_json(message: Option<Message>) -> Response {
    match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    }
}
