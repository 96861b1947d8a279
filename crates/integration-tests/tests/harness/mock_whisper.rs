//! Mock speech-to-text backend for integration tests
//!
//! Implements a minimal OpenAI-compatible `/audio/transcriptions` endpoint
//! that returns canned transcripts

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Mock transcription backend that returns predictable responses
pub struct MockWhisper {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockWhisperState>,
}

struct MockWhisperState {
    request_count: AtomicU32,
    /// Number of requests to fail before succeeding (0 = never fail)
    fail_count: AtomicU32,
    /// Status code returned for injected failures
    fail_status: u16,
    /// Custom transcript text (if set)
    transcript: Option<String>,
    /// The `model` form field from the most recent request
    last_model: Mutex<Option<String>>,
}

impl MockWhisper {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0, 500, None).await
    }

    /// Start a mock server that fails the first `n` requests with `status`
    pub async fn start_failing(n: u32, status: u16) -> anyhow::Result<Self> {
        Self::start_inner(n, status, None).await
    }

    /// Start a mock server with a custom transcript
    pub async fn start_with_transcript(text: &str) -> anyhow::Result<Self> {
        Self::start_inner(0, 500, Some(text.to_owned())).await
    }

    async fn start_inner(fail_count: u32, fail_status: u16, transcript: Option<String>) -> anyhow::Result<Self> {
        let state = Arc::new(MockWhisperState {
            request_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            fail_status,
            transcript,
            last_model: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcription))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since the Whisper provider appends `/audio/transcriptions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of transcription requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// The `model` form field from the most recent request
    pub fn last_model(&self) -> Option<String> {
        self.state.last_model.lock().unwrap().clone()
    }
}

impl Drop for MockWhisper {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[derive(Debug, Serialize)]
struct TranscriptionResponse {
    text: String,
}

async fn handle_transcription(
    State(state): State<Arc<MockWhisperState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    // If fail_count > 0, decrement and return the configured failure status
    let remaining = state.fail_count.load(Ordering::Relaxed);
    if remaining > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return (
            StatusCode::from_u16(state.fail_status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(serde_json::json!({
                "error": {
                    "message": "mock backend intentional failure",
                    "type": "server_error"
                }
            })),
        )
            .into_response();
    }

    // Drain the form, remembering what the gateway sent
    let mut file_len = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                if let Ok(bytes) = field.bytes().await {
                    file_len = Some(bytes.len());
                }
            }
            Some("model") => {
                *state.last_model.lock().unwrap() = field.text().await.ok();
            }
            _ => {}
        }
    }

    if file_len.is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": {
                    "message": "no audio file provided",
                    "type": "invalid_request_error"
                }
            })),
        )
            .into_response();
    }

    let text = state.transcript.as_deref().unwrap_or("Hello from the mock transcriber");

    Json(TranscriptionResponse { text: text.to_owned() }).into_response()
}
