//! Speech API client

use serde_json::json;

use crate::config::ServerConfig;
use crate::narration::NarrationError;

/// HTTP client for an OpenAI-compatible speech endpoint.
#[derive(Debug, Clone)]
pub struct HttpSpeechClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl HttpSpeechClient {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.speech_api_url.trim_end_matches('/').to_string(),
            api_key: config.speech_api_key.clone(),
            model: config.speech_model.clone(),
        }
    }

    pub async fn synthesize(&self, api_voice: &str, text: &str) -> Result<Vec<u8>, NarrationError> {
        let mut request = self
            .http
            .post(format!("{}/v1/audio/speech", self.base_url))
            .json(&json!({
                "model": self.model,
                "voice": api_voice,
                "input": text,
                "response_format": "mp3",
            }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NarrationError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Backend dispatch for the narration service. Tests swap in the stub so no
/// network is involved.
#[derive(Debug)]
pub enum SpeechBackend {
    Http(HttpSpeechClient),
    #[cfg(test)]
    Stub(StubSpeech),
}

impl SpeechBackend {
    pub async fn synthesize(&self, api_voice: &str, text: &str) -> Result<Vec<u8>, NarrationError> {
        match self {
            SpeechBackend::Http(client) => client.synthesize(api_voice, text).await,
            #[cfg(test)]
            SpeechBackend::Stub(stub) => stub.synthesize(api_voice, text),
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct StubSpeech {
    pub calls: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl StubSpeech {
    fn synthesize(&self, api_voice: &str, text: &str) -> Result<Vec<u8>, NarrationError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Ok(format!("{api_voice}:{text}").into_bytes())
    }
}
