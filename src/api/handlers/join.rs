//! Lobby join handler.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{JoinRequest, JoinResponse};
use crate::app_state::AppState;
use crate::error::{BingoError, ErrorResponse};

/// `POST /join` — Join the lobby with an identity and a card.
///
/// # Errors
///
/// Returns [`BingoError::InvalidPayload`] for malformed JSON or failed
/// validation, [`BingoError::AlreadyJoined`] / [`BingoError::CardTaken`]
/// on conflicts, and [`BingoError::RoundInProgress`] while a round runs.
#[utoipa::path(
    post,
    path = "/join",
    tag = "Lobby",
    summary = "Join the lobby",
    description = "Registers a player with a bingo card. The join that brings the lobby to the player threshold starts the round; while a round is running the lobby is closed.",
    request_body = JoinRequest,
    responses(
        (status = 200, description = "Player joined", body = JoinResponse),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 409, description = "Identity or card taken, or round in progress", body = ErrorResponse),
    )
)]
pub async fn join_handler(
    State(state): State<AppState>,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<Json<JoinResponse>, BingoError> {
    let Json(req) = payload.map_err(|rejection| BingoError::InvalidPayload(rejection.body_text()))?;
    let (phone_number, card_id) = req.validate()?;

    let outcome = state.game_service.join(phone_number, card_id).await?;

    Ok(Json(JoinResponse {
        message: "Joined successfully".to_string(),
        players_count: outcome.players_count,
        round_started: outcome.started_round.is_some(),
    }))
}

/// Lobby routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/join", post(join_handler))
}
