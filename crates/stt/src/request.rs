use axum::body::Body;

use crate::{error::SttError, types::TranscriptionRequest};

/// Multipart field carrying the uploaded audio (the frontend wire contract)
const AUDIO_FIELD: &str = "audio_file";

/// Body limit for audio uploads (32 MiB)
const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Extractor for multipart form data containing an audio upload
///
/// Rejections surface as [`SttError`] so every failure path produces the
/// same JSON error shape as the handler itself.
pub struct ExtractAudio(pub TranscriptionRequest);

impl<S> axum::extract::FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = SttError;

    async fn from_request(request: http::Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        // Verify content type is multipart/form-data
        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("multipart/form-data") {
            return Err(SttError::UnsupportedMediaType(
                "expected 'Content-Type: multipart/form-data'".to_string(),
            ));
        }

        let bytes = axum::body::to_bytes(body, BODY_LIMIT_BYTES)
            .await
            .map_err(|e| SttError::InvalidRequest(format!("Failed to read request body: {e}")))?;

        // Reassemble the request for multipart parsing
        let mut rebuilt = http::Request::builder()
            .method(parts.method.clone())
            .uri(parts.uri.clone());

        for (key, value) in &parts.headers {
            rebuilt = rebuilt.header(key, value);
        }

        let rebuilt = rebuilt
            .body(Body::from(bytes))
            .map_err(|e| SttError::InternalError(Some(format!("Failed to rebuild request: {e}"))))?;

        let mut multipart = axum::extract::Multipart::from_request(rebuilt, &())
            .await
            .map_err(|e| SttError::InvalidRequest(format!("Failed to parse multipart form: {e}")))?;

        let mut audio: Option<Vec<u8>> = None;
        let mut filename = String::from("audio.wav");
        let mut file_content_type = String::from("audio/wav");

        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() != Some(AUDIO_FIELD) {
                // Skip unknown fields
                continue;
            }

            if let Some(name) = field.file_name() {
                filename = name.to_string();
            }
            if let Some(ct) = field.content_type() {
                file_content_type = ct.to_string();
            }
            audio = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| SttError::InvalidRequest(format!("Failed to read audio data: {e}")))?
                    .to_vec(),
            );
        }

        let audio = audio.ok_or_else(|| {
            SttError::InvalidRequest(format!("Missing required '{AUDIO_FIELD}' field in multipart form"))
        })?;

        Ok(Self(TranscriptionRequest {
            audio,
            filename,
            content_type: file_content_type,
        }))
    }
}
