//! Server configuration from environment variables

use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_CACHE_DIR: &str = "narration-cache";
const DEFAULT_SPEECH_API_URL: &str = "https://api.openai.com";
const DEFAULT_SPEECH_MODEL: &str = "tts-1";
const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cache_dir: PathBuf,
    pub speech_api_url: String,
    pub speech_api_key: Option<String>,
    pub speech_model: String,
    pub poll_interval_ms: u64,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr = match env_or("LIFEINUK_BIND", DEFAULT_BIND).parse() {
            Ok(addr) => addr,
            Err(_) => {
                warn!("invalid LIFEINUK_BIND, falling back to {DEFAULT_BIND}");
                DEFAULT_BIND.parse().unwrap()
            }
        };

        let poll_interval_ms = std::env::var("LIFEINUK_POLL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        Self {
            bind_addr,
            cache_dir: PathBuf::from(env_or("LIFEINUK_CACHE_DIR", DEFAULT_CACHE_DIR)),
            speech_api_url: env_or("SPEECH_API_URL", DEFAULT_SPEECH_API_URL),
            speech_api_key: std::env::var("SPEECH_API_KEY").ok(),
            speech_model: env_or("SPEECH_MODEL", DEFAULT_SPEECH_MODEL),
            poll_interval_ms,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
