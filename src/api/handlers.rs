use super::error::ApiError;
use super::models::{CreateDeckRequest, DrawCardsRequest};
use super::AppState;
use crate::models::{Cards, Deck};
use crate::DeckError;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Largest count a single draw request may ask for
pub const MAX_DRAW_COUNT: u64 = 52;

/// Decode a JSON body regardless of the declared content type
fn parse_payload<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "request body rejected");
        DeckError::invalid_input("failed parse payload").into()
    })
}

/// `POST /v1/deck`
pub async fn create_deck(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Deck>, ApiError> {
    let request: CreateDeckRequest = parse_payload(&body)?;
    let deck = state
        .service
        .create(request.cards, request.is_shuffled)
        .await?;
    Ok(Json(deck))
}

/// `GET /v1/deck/{deck_id}`
pub async fn open_deck(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Deck>, ApiError> {
    let deck = state.service.open(&deck_id).await?;
    Ok(Json(deck))
}

/// `PATCH /v1/deck/{deck_id}/cards`
pub async fn draw_cards(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
    body: Bytes,
) -> Result<Json<Cards>, ApiError> {
    let request: DrawCardsRequest = parse_payload(&body)?;

    if request.count == 0 || request.count > MAX_DRAW_COUNT {
        return Err(DeckError::invalid_input("count cannot be more than 52 or 0").into());
    }

    let cards = state.service.draw(&deck_id, request.count as u32).await?;
    Ok(Json(cards))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
