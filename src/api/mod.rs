//! HTTP boundary.
//!
//! ```text
//! POST  /v1/deck                   create a deck
//! GET   /v1/deck/{deck_id}         open a deck (cards expanded)
//! PATCH /v1/deck/{deck_id}/cards   draw cards
//! GET   /health                    liveness
//! ```
//!
//! Failures render as `{"error": <message>}` with 400, 404 or 500.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use error::ApiError;

use crate::service::DeckService;
use axum::routing::{get, patch, post};
use axum::Router;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: DeckService,
}

impl AppState {
    pub fn new(service: DeckService) -> Self {
        Self { service }
    }
}

/// Build the router with every route and the request logger
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/deck", post(handlers::create_deck))
        .route("/v1/deck/{deck_id}", get(handlers::open_deck))
        .route("/v1/deck/{deck_id}/cards", patch(handlers::draw_cards))
        .route("/health", get(handlers::health))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}
