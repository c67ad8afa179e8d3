mod config;
mod error;
mod narration;
mod routes;
mod state;

use std::sync::{Arc, Mutex};

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use engine::registry::SessionRegistry;
use engine::runner::FeedbackRunner;

use config::ServerConfig;
use narration::cache::AudioCache;
use narration::client::{HttpSpeechClient, SpeechBackend};
use narration::NarrationService;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env();
    info!(
        "life-in-uk platform starting on {} (cache: {})",
        config.bind_addr,
        config.cache_dir.display()
    );

    let cache = AudioCache::new(&config.cache_dir)?;
    let backend = SpeechBackend::Http(HttpSpeechClient::new(&config));
    let narration = Arc::new(NarrationService::new(backend, cache));

    let registry = Arc::new(Mutex::new(SessionRegistry::new()));

    // Background timer processing so feedback clears even while clients idle.
    let mut runner = FeedbackRunner::new();
    runner.start(
        Arc::clone(&registry),
        config.poll_interval_ms,
        |events| debug!("feedback runner fired {} events", events.len()),
    );

    let app_state = AppState {
        registry,
        runner: Arc::new(Mutex::new(Some(runner))),
        narration,
        config: Arc::new(config.clone()),
    };

    let app = router(app_state);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        // Admin
        .route("/api/health", get(routes::admin::health))
        .route("/api/admin/memory", get(routes::admin::get_memory_usage))
        // Games
        .route("/api/games", get(routes::games::list_games))
        .route("/api/games/{key}", get(routes::games::get_game))
        // Sessions
        .route("/api/sessions", post(routes::sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route("/api/sessions/{id}/select", post(routes::sessions::select))
        .route("/api/sessions/{id}/filters", post(routes::sessions::set_filters))
        .route("/api/sessions/{id}/reset", post(routes::sessions::reset))
        .route("/api/sessions/{id}/stats", get(routes::sessions::get_stats))
        .route("/api/sessions/{id}/export", get(routes::sessions::export_session))
        .route("/api/sessions/import", post(routes::sessions::import_session))
        // Statistics
        .route("/api/stats", get(routes::statistics::get_aggregate_stats))
        .route("/api/events/recent", get(routes::statistics::get_recent_events))
        .route("/api/events/count", get(routes::statistics::get_event_count))
        // Narration
        .route("/api/narration/voices", get(routes::narration::list_voices))
        .route("/api/narration/narrate", post(routes::narration::narrate))
        .route(
            "/api/narration/narrate-multiple",
            post(routes::narration::narrate_multiple),
        )
        .route(
            "/api/narration/preview-voice",
            post(routes::narration::preview_voice),
        )
        .route(
            "/api/narration/cache-stats",
            get(routes::narration::cache_stats),
        )
        .route("/api/narration/cache", delete(routes::narration::clear_cache))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session_view;
    use engine::records::RecordId;
    use engine::registry::SessionId;

    fn test_state() -> AppState {
        let dir = std::env::temp_dir().join(format!("narration-test-{}", std::process::id()));
        let cache = AudioCache::new(&dir).unwrap();
        let config = ServerConfig::from_env();
        let backend = SpeechBackend::Http(HttpSpeechClient::new(&config));
        AppState {
            registry: Arc::new(Mutex::new(SessionRegistry::new())),
            runner: Arc::new(Mutex::new(None)),
            narration: Arc::new(NarrationService::new(backend, cache)),
            config: Arc::new(config),
        }
    }

    #[test]
    fn test_router_builds() {
        let _app = router(test_state());
    }

    #[test]
    fn test_session_view_reflects_play() {
        let state = test_state();
        let mut registry = state.registry.lock().unwrap();
        let id = registry.create_session("battles", &[], Some(5)).unwrap();

        let session = registry.get_mut(id).unwrap();
        let trafalgar = RecordId(10);
        session.select(0, trafalgar, 0).unwrap();
        session.select(1, trafalgar, 0).unwrap();
        session.select(2, trafalgar, 0).unwrap();

        let view = session_view(id, registry.get(id).unwrap());
        assert_eq!(view.score, 1);
        assert_eq!(view.accuracy, 100);
        assert_eq!(view.columns.len(), 3);
        let matched_items = view.columns[0]
            .items
            .iter()
            .filter(|i| i.matched)
            .count();
        assert_eq!(matched_items, 1);
    }

    #[test]
    fn test_unknown_session_view_is_none() {
        let state = test_state();
        let registry = state.registry.lock().unwrap();
        assert!(registry.get(SessionId(999)).is_none());
    }
}
