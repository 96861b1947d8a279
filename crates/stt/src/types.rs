use serde::{Deserialize, Serialize};

/// A single uploaded audio payload headed for transcription
///
/// Created per HTTP request, owned by the handler, dropped once the
/// response is produced. Nothing is persisted.
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Original filename, forwarded to the provider as a format hint
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
}

/// Transcription result returned to the caller
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
}
