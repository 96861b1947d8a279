use auris_config::{SttProviderConfig, SttProviderType};
use secrecy::SecretString;

use crate::{
    error::SttError,
    provider::{SttProvider, whisper::WhisperProvider},
    types::{TranscriptionRequest, TranscriptionResponse},
};

/// STT server that owns the configured providers
pub struct Server {
    providers: Vec<Box<dyn SttProvider>>,
}

impl Server {
    /// Transcribe audio using the default provider
    ///
    /// Providers keep config order; the first one serves every request.
    /// Empty payloads are rejected here, before any outbound call.
    pub(crate) async fn transcribe(&self, request: TranscriptionRequest) -> crate::error::Result<TranscriptionResponse> {
        if request.audio.is_empty() {
            return Err(SttError::InvalidRequest("audio payload must not be empty".to_string()));
        }

        let provider = self
            .providers
            .first()
            .ok_or_else(|| SttError::ProviderNotFound("no STT providers configured".to_string()))?;

        tracing::debug!("dispatching transcription to provider: {}", provider.name());

        provider.transcribe(request).await
    }
}

/// Builder for constructing the STT server from configuration
pub struct SttServerBuilder<'a> {
    config: &'a auris_config::Config,
}

impl<'a> SttServerBuilder<'a> {
    pub fn new(config: &'a auris_config::Config) -> Self {
        Self { config }
    }

    /// Instantiate every configured provider
    ///
    /// # Errors
    ///
    /// Returns an error if a provider is missing its API key
    pub fn build(self) -> crate::error::Result<Server> {
        let mut providers: Vec<Box<dyn SttProvider>> = Vec::new();

        for (name, provider_config) in &self.config.stt.providers {
            tracing::debug!("Initializing STT provider: {name}");

            let provider: Box<dyn SttProvider> = match &provider_config.provider_type {
                SttProviderType::Whisper => {
                    let api_key = resolve_api_key(name, provider_config)?;

                    Box::new(WhisperProvider::new(
                        name.clone(),
                        api_key,
                        provider_config.base_url.clone(),
                        provider_config.model.clone(),
                    ))
                }
            };

            providers.push(provider);
        }

        tracing::debug!("STT server initialized with {} provider(s)", providers.len());

        Ok(Server { providers })
    }
}

fn resolve_api_key(name: &str, config: &SttProviderConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| SttError::ConfigError(format!("API key required for STT provider '{name}'")))
}
