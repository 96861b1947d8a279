//! Placeholder accessibility endpoints
//!
//! Each route returns a fixed payload regardless of input and exists only to
//! pin down the future API shape. The real synthesis, captioning, and
//! subtitle pipelines are separate systems and intentionally absent here.

use axum::{Json, Router, response::IntoResponse, routing::post};
use serde::Serialize;

/// Fixed audio returned by the text-to-speech placeholder
const TTS_PLACEHOLDER_AUDIO: &[u8] = b"mock audio data for text to speech";

/// Fixed audio returned by the image-description placeholder
const IMAGE_PLACEHOLDER_AUDIO: &[u8] = b"mock audio data for image description";

/// Create the router for the placeholder endpoints
pub fn endpoint_router() -> Router {
    Router::new()
        .route("/text-to-speech/", post(text_to_speech))
        .route("/image-to-audio/", post(image_to_audio))
        .route("/generate-subtitles/", post(generate_subtitles))
}

/// A single timed subtitle line
#[derive(Debug, Serialize)]
struct SubtitleCue {
    start: u32,
    end: u32,
    text: &'static str,
}

#[derive(Debug, Serialize)]
struct SubtitlesResponse {
    subtitles: Vec<SubtitleCue>,
}

async fn text_to_speech() -> impl IntoResponse {
    ([(http::header::CONTENT_TYPE, "audio/mpeg")], TTS_PLACEHOLDER_AUDIO)
}

async fn image_to_audio() -> impl IntoResponse {
    ([(http::header::CONTENT_TYPE, "audio/mpeg")], IMAGE_PLACEHOLDER_AUDIO)
}

async fn generate_subtitles() -> impl IntoResponse {
    Json(SubtitlesResponse {
        subtitles: vec![
            SubtitleCue {
                start: 0,
                end: 5,
                text: "Mock subtitle: Hello, this is a sample subtitle.",
            },
            SubtitleCue {
                start: 5,
                end: 10,
                text: "Another mock subtitle line.",
            },
        ],
    })
}
