//! Ollama client against a fake Ollama server.
//!
//! The fake speaks just enough of the chat and tags APIs to exercise the
//! request encoding, response decoding and failure paths.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use lensocr::llm::{LlmClient, LlmConfig, LlmError};
use lensocr::ocr::TextExtractor;

#[derive(Clone, Default)]
struct FakeOllama {
    last_request: Arc<Mutex<Option<Value>>>,
}

async fn chat(State(fake): State<FakeOllama>, Json(body): Json<Value>) -> Json<Value> {
    *fake.last_request.lock().await = Some(body);
    Json(json!({
        "model": "gemma3:4b",
        "created_at": "2025-01-01T00:00:00Z",
        "message": {
            "role": "assistant",
            "content": "ACME Corp\nsupport@acme.example\n+1 555-123-4567\nwww.acme.example"
        },
        "done": true
    }))
}

async fn tags() -> Json<Value> {
    Json(json!({
        "models": [
            {"name": "gemma3:4b", "size": 3338801804u64},
            {"name": "llava:7b", "size": 4733363377u64}
        ]
    }))
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_fake() -> (SocketAddr, FakeOllama) {
    let fake = FakeOllama::default();
    let router = Router::new()
        .route("/api/chat", post(chat))
        .route("/api/tags", get(tags))
        .with_state(fake.clone());
    (spawn(router).await, fake)
}

fn client_for(addr: SocketAddr) -> LlmClient {
    let config = LlmConfig::default().with_endpoint(&format!("http://{}", addr));
    LlmClient::new(config).unwrap()
}

#[tokio::test]
async fn test_transcribe_image_sends_prompt_and_base64() {
    let (addr, fake) = spawn_fake().await;
    let client = client_for(addr);

    let text = client.transcribe_image(b"\x89PNG").await.unwrap();
    assert!(text.starts_with("ACME Corp"));

    let request = fake.last_request.lock().await.clone().unwrap();
    assert_eq!(request["model"], "gemma3:4b");
    assert_eq!(request["stream"], false);
    assert_eq!(request["messages"][0]["role"], "user");
    assert!(request["messages"][0]["content"]
        .as_str()
        .unwrap()
        .contains("Extract ALL readable text"));
    assert_eq!(request["messages"][0]["images"][0], "iVBORw==");
    assert_eq!(request["messages"][0]["content"], lensocr::llm::DEFAULT_OCR_PROMPT);
    assert!(request.get("options").is_none());
}

#[tokio::test]
async fn test_extractor_end_to_end() {
    let (addr, _fake) = spawn_fake().await;
    let extractor = TextExtractor::new(Arc::new(client_for(addr)));

    let result = extractor.extract(b"\x89PNG").await.unwrap();
    assert_eq!(result.line_count, 4);
    assert_eq!(result.word_count, 6);
    assert_eq!(result.entities.emails, vec!["support@acme.example"]);
    assert_eq!(result.entities.phone_numbers, vec!["+1 555-123-4567"]);
    assert_eq!(result.entities.urls, vec!["www.acme.example"]);
}

#[tokio::test]
async fn test_list_models_and_availability() {
    let (addr, _fake) = spawn_fake().await;
    let client = client_for(addr);

    assert!(client.is_available().await);
    assert_eq!(
        client.list_models().await.unwrap(),
        vec!["gemma3:4b", "llava:7b"]
    );
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async { (StatusCode::NOT_FOUND, "model \"gemma3:4b\" not found") }),
    );
    let client = client_for(spawn(router).await);

    let err = client.transcribe_image(b"img").await.unwrap_err();
    assert!(matches!(err, LlmError::Api(ref msg) if msg.contains("404")));
}

#[tokio::test]
async fn test_malformed_reply_is_parse_error() {
    let router = Router::new().route("/api/chat", post(|| async { Json(json!({"done": true})) }));
    let client = client_for(spawn(router).await);

    let err = client.transcribe_image(b"img").await.unwrap_err();
    assert!(matches!(err, LlmError::Parse(_)));
}

#[tokio::test]
async fn test_slow_model_times_out() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"message": {"role": "assistant", "content": "late"}, "done": true}))
        }),
    );
    let addr = spawn(router).await;
    let config = LlmConfig::default().with_endpoint(&format!("http://{}", addr));

    let client = LlmClient::with_timeout(config.clone(), Duration::from_millis(200)).unwrap();
    let err = client.transcribe_image(b"img").await.unwrap_err();
    assert!(matches!(err, LlmError::Connection(_)));

    let client = LlmClient::with_timeout(config, Duration::from_millis(200)).unwrap();
    let extractor = TextExtractor::new(Arc::new(client));
    let err = extractor.extract(b"img").await.unwrap_err();
    assert!(err.to_string().starts_with("Error processing image:"));
}

#[tokio::test]
async fn test_unreachable_server() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    assert!(!client.is_available().await);

    let err = client.transcribe_image(b"img").await.unwrap_err();
    assert!(matches!(err, LlmError::Connection(_)));

    let extractor = TextExtractor::new(Arc::new(client));
    let err = extractor.extract(b"img").await.unwrap_err();
    assert!(err.to_string().starts_with("Error processing image:"));
}
