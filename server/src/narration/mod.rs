//! Narration service
//!
//! Text-to-speech for study content: voice registry, text preprocessing,
//! hash-keyed flat-file cache, and the upstream speech API client. Endpoints
//! return cache metadata; audio bytes never leave the cache directory.

pub mod cache;
pub mod client;
pub mod preprocess;
pub mod voices;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use self::cache::{AudioCache, CacheStats};
use self::client::SpeechBackend;
use self::voices::VoiceSpec;

#[derive(Debug, Error)]
pub enum NarrationError {
    #[error("unknown voice '{0}'")]
    UnknownVoice(String),

    #[error("text is empty after preprocessing")]
    EmptyText,

    #[error("text is {len} characters, maximum is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("speech API returned status {status}")]
    Upstream { status: u16, message: String },

    #[error("speech API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct NarrationResult {
    pub voice: &'static str,
    pub key: String,
    pub file_name: String,
    pub bytes: u64,
    pub cached: bool,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

pub struct NarrationService {
    backend: SpeechBackend,
    cache: AudioCache,
}

impl NarrationService {
    pub fn new(backend: SpeechBackend, cache: AudioCache) -> Self {
        Self { backend, cache }
    }

    pub fn voices(&self) -> &'static [VoiceSpec] {
        voices::VOICES
    }

    /// Narrate one text: preprocess, serve from cache, or synthesize and store.
    pub async fn narrate(
        &self,
        voice_key: &str,
        raw_text: &str,
    ) -> Result<NarrationResult, NarrationError> {
        let voice = voices::find_voice(voice_key)
            .ok_or_else(|| NarrationError::UnknownVoice(voice_key.to_string()))?;
        let text = preprocess::prepare_text(raw_text)?;
        let key = self.cache.key_for(voice.key, &text);

        if let Some(entry) = self.cache.lookup(&key)? {
            return Ok(result(voice, entry, true));
        }

        let audio = self.backend.synthesize(voice.api_voice, &text).await?;
        let entry = self.cache.store(&key, &audio)?;
        info!("narrated {} chars with '{}' ({} bytes)", text.len(), voice.key, entry.bytes);
        Ok(result(voice, entry, false))
    }

    /// Narrate a batch of texts with one voice, in order.
    pub async fn narrate_multiple(
        &self,
        voice_key: &str,
        texts: &[String],
    ) -> Result<Vec<NarrationResult>, NarrationError> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.narrate(voice_key, text).await?);
        }
        Ok(results)
    }

    /// Narrate the fixed preview sentence for a voice.
    pub async fn preview_voice(&self, voice_key: &str) -> Result<NarrationResult, NarrationError> {
        self.narrate(voice_key, voices::PREVIEW_TEXT).await
    }

    pub fn cache_stats(&self) -> Result<CacheStats, NarrationError> {
        Ok(self.cache.stats()?)
    }

    pub fn clear_cache(&self) -> Result<u32, NarrationError> {
        let removed = self.cache.clear()?;
        info!("narration cache cleared ({removed} entries)");
        Ok(removed)
    }
}

fn result(voice: &'static VoiceSpec, entry: cache::CachedAudio, cached: bool) -> NarrationResult {
    NarrationResult {
        voice: voice.key,
        key: entry.key,
        file_name: entry.file_name,
        bytes: entry.bytes,
        cached,
        generated_at: chrono::Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::client::StubSpeech;
    use std::sync::atomic::Ordering;

    fn service() -> (tempfile::TempDir, NarrationService) {
        let dir = tempfile::tempdir().unwrap();
        let cache = AudioCache::new(dir.path()).unwrap();
        let service = NarrationService::new(SpeechBackend::Stub(StubSpeech::default()), cache);
        (dir, service)
    }

    fn backend_calls(service: &NarrationService) -> u64 {
        match &service.backend {
            SpeechBackend::Stub(stub) => stub.calls.load(Ordering::Relaxed),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_narrate_caches_second_request() {
        let (_dir, service) = service();

        let first = service.narrate("narrator", "The UK has four nations.").await.unwrap();
        assert!(!first.cached);

        // Different surface text, same preprocessed form - must hit the cache.
        let second = service.narrate("narrator", "The  UK has four   nations.").await.unwrap();
        assert!(second.cached);
        assert_eq!(first.key, second.key);
        assert_eq!(backend_calls(&service), 1);
    }

    #[tokio::test]
    async fn test_unknown_voice_rejected() {
        let (_dir, service) = service();
        let err = service.narrate("robot", "hello").await.unwrap_err();
        assert!(matches!(err, NarrationError::UnknownVoice(_)));
    }

    #[tokio::test]
    async fn test_narrate_multiple_preserves_order() {
        let (_dir, service) = service();
        let texts = vec!["First.".to_string(), "Second.".to_string()];
        let results = service.narrate_multiple("guide", &texts).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_ne!(results[0].key, results[1].key);
    }

    #[tokio::test]
    async fn test_preview_and_clear() {
        let (_dir, service) = service();
        service.preview_voice("examiner").await.unwrap();
        assert_eq!(service.cache_stats().unwrap().entries, 1);
        assert_eq!(service.clear_cache().unwrap(), 1);
        assert_eq!(service.cache_stats().unwrap().entries, 0);
    }
}
