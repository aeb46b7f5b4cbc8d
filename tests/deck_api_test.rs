//! End-to-end tests for the deck HTTP API.
//!
//! Each test binds a real server on an ephemeral port and talks to it with
//! reqwest.

use card_deck::api::AppState;
use card_deck::engine::RandomSource;
use card_deck::server;
use card_deck::service::DeckService;
use card_deck::store::{DeckStore, MemoryDeckStore, SqliteDeckStore};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    stop: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start(store: Arc<dyn DeckStore>) -> Self {
        let listener = server::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = AppState::new(DeckService::new(store, RandomSource::seeded(42)));
        let (stop, stopped) = oneshot::channel::<()>();

        tokio::spawn(server::serve(
            listener,
            state,
            async move {
                let _ = stopped.await;
            },
            Duration::from_secs(1),
        ));

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            stop: Some(stop),
        }
    }

    async fn in_memory() -> Self {
        Self::start(Arc::new(MemoryDeckStore::new())).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create(&self, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url("/v1/deck"))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    async fn open(&self, deck_id: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(self.url(&format!("/v1/deck/{}", deck_id)))
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }

    async fn draw(&self, deck_id: &str, count: u32) -> (StatusCode, Value) {
        let response = self
            .client
            .patch(self.url(&format!("/v1/deck/{}/cards", deck_id)))
            .json(&json!({ "count": count }))
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

fn codes_of(cards: &Value) -> Vec<String> {
    cards
        .as_array()
        .unwrap()
        .iter()
        .map(|card| card["code"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_open_draw_until_empty() {
    let server = TestServer::in_memory().await;

    let (status, deck) = server
        .create(json!({ "is_shuffled": false, "cards": ["AS", "KD"] }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deck["remaining"], json!(2));
    assert_eq!(deck["is_shuffled"], json!(false));
    assert!(deck.get("cards").is_none());
    let deck_id = deck["deck_id"].as_str().unwrap().to_string();

    let (status, opened) = server.open(&deck_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(codes_of(&opened["cards"]), vec!["AS", "KD"]);
    assert_eq!(opened["cards"][0]["value"], json!("ACE"));
    assert_eq!(opened["cards"][0]["suit"], json!("SPADES"));
    assert_eq!(opened["cards"][1]["value"], json!("KING"));
    assert_eq!(opened["cards"][1]["suit"], json!("DIAMONDS"));

    let (status, first) = server.draw(&deck_id, 1).await;
    assert_eq!(status, StatusCode::OK);
    let first = codes_of(&first);
    assert_eq!(first.len(), 1);
    assert!(first[0] == "AS" || first[0] == "KD");

    let (_, opened) = server.open(&deck_id).await;
    assert_eq!(opened["remaining"], json!(1));

    // Asking for more than remains draws what is left
    let (status, second) = server.draw(&deck_id, 5).await;
    assert_eq!(status, StatusCode::OK);
    let second = codes_of(&second);
    assert_eq!(second.len(), 1);
    assert_ne!(second[0], first[0]);

    let (_, opened) = server.open(&deck_id).await;
    assert_eq!(opened["remaining"], json!(0));
    assert_eq!(opened["cards"], json!([]));

    let (status, body) = server.draw(&deck_id, 1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "deck remaining 0 cards" }));
}

#[tokio::test]
async fn test_create_default_deck() {
    let server = TestServer::in_memory().await;

    let (status, deck) = server.create(json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deck["remaining"], json!(52));

    let (_, opened) = server.open(deck["deck_id"].as_str().unwrap()).await;
    let codes = codes_of(&opened["cards"]);
    assert_eq!(codes.len(), 52);
    assert_eq!(codes[0], "AS");
    assert_eq!(codes[12], "KS");
    assert_eq!(codes[13], "AD");
    assert_eq!(codes[51], "KH");
}

#[tokio::test]
async fn test_create_shuffled_deck_keeps_all_cards() {
    let server = TestServer::in_memory().await;

    let (status, deck) = server.create(json!({ "is_shuffled": true })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deck["is_shuffled"], json!(true));

    let (_, opened) = server.open(deck["deck_id"].as_str().unwrap()).await;
    let codes: HashSet<String> = codes_of(&opened["cards"]).into_iter().collect();
    assert_eq!(codes.len(), 52);
}

#[tokio::test]
async fn test_create_rejects_invalid_cards() {
    let memory = Arc::new(MemoryDeckStore::new());
    let server = TestServer::start(memory.clone()).await;

    let (status, body) = server.create(json!({ "cards": ["AS", "AS"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "given cards is not valid" }));

    let (status, _) = server.create(json!({ "cards": ["ZZ"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(memory.is_empty());
}

#[tokio::test]
async fn test_malformed_payload() {
    let server = TestServer::in_memory().await;

    let response = server
        .client
        .post(server.url("/v1/deck"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "failed parse payload" }));

    let response = server
        .client
        .patch(server.url("/v1/deck/some-id/cards"))
        .header("content-type", "application/json")
        .body(r#"{"count": -1}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_decoded_without_json_content_type() {
    let server = TestServer::in_memory().await;

    for content_type in [None, Some("application/x-www-form-urlencoded"), Some("text/plain")] {
        let mut request = server
            .client
            .post(server.url("/v1/deck"))
            .body(r#"{"cards":["AS","KD"]}"#);
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }

        let response = request.send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "content type {:?}", content_type);
        let deck: Value = response.json().await.unwrap();
        assert_eq!(deck["remaining"], json!(2));

        let response = server
            .client
            .patch(server.url(&format!("/v1/deck/{}/cards", deck["deck_id"].as_str().unwrap())))
            .body(r#"{"count":1}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let drawn: Value = response.json().await.unwrap();
        assert_eq!(codes_of(&drawn).len(), 1);
    }
}

#[tokio::test]
async fn test_empty_body_is_rejected() {
    let server = TestServer::in_memory().await;

    let response = server.client.post(server.url("/v1/deck")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "failed parse payload" }));
}

#[tokio::test]
async fn test_draw_count_beyond_u32_is_out_of_range() {
    let server = TestServer::in_memory().await;
    let (_, deck) = server.create(json!({})).await;
    let deck_id = deck["deck_id"].as_str().unwrap();

    let response = server
        .client
        .patch(server.url(&format!("/v1/deck/{}/cards", deck_id)))
        .body(r#"{"count": 10000000000}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "count cannot be more than 52 or 0" }));
}

#[tokio::test]
async fn test_whitespace_deck_id_is_not_found() {
    let server = TestServer::in_memory().await;

    let (status, body) = server.open("%20").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "deck not found" }));

    let (status, body) = server.draw("%20", 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "deck not found" }));
}

#[tokio::test]
async fn test_draw_count_out_of_range() {
    let server = TestServer::in_memory().await;
    let (_, deck) = server.create(json!({})).await;
    let deck_id = deck["deck_id"].as_str().unwrap();

    for count in [0, 53] {
        let (status, body) = server.draw(deck_id, count).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "count cannot be more than 52 or 0" }));
    }

    let (_, opened) = server.open(deck_id).await;
    assert_eq!(opened["remaining"], json!(52));
}

#[tokio::test]
async fn test_unknown_deck_is_not_found() {
    let server = TestServer::in_memory().await;

    let (status, body) = server.open("missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "deck not found" }));

    let (status, body) = server.draw("missing", 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "deck not found" }));
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::in_memory().await;

    let response = server.client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_sqlite_backed_deck_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("decks.db");

    let deck_id = {
        let store = SqliteDeckStore::open(&db_path, Duration::from_secs(5)).unwrap();
        let server = TestServer::start(Arc::new(store)).await;

        let (_, deck) = server.create(json!({ "cards": ["2C", "10H", "QS"] })).await;
        let deck_id = deck["deck_id"].as_str().unwrap().to_string();

        let (status, drawn) = server.draw(&deck_id, 2).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(codes_of(&drawn).len(), 2);
        deck_id
    };

    let store = SqliteDeckStore::open(&db_path, Duration::from_secs(5)).unwrap();
    let server = TestServer::start(Arc::new(store)).await;

    let (status, opened) = server.open(&deck_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(opened["remaining"], json!(1));
    assert_eq!(codes_of(&opened["cards"]).len(), 1);
}
