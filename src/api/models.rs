use serde::{Deserialize, Serialize};

/// Body of `POST /v1/deck`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDeckRequest {
    #[serde(default)]
    pub is_shuffled: bool,

    /// Explicit card codes; empty means the full default deck
    #[serde(default)]
    pub cards: Vec<String>,
}

/// Body of `PATCH /v1/deck/{deck_id}/cards`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawCardsRequest {
    /// Wider than any valid count so oversized values reach range checking
    #[serde(default)]
    pub count: u64,
}
