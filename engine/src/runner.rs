//! Feedback Runner - background thread that polls session timers at regular intervals

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{info, warn};

use crate::events::GameEvent;
use crate::registry::{SessionId, SessionRegistry};

/// Feedback runner that manages a background thread for timer processing
pub struct FeedbackRunner {
    is_running: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl FeedbackRunner {
    pub fn new() -> Self {
        Self {
            is_running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start polling at the specified interval
    ///
    /// # Arguments
    /// * `registry` - Shared reference to the session registry
    /// * `interval_ms` - Milliseconds between polls (e.g., 250 keeps visual
    ///   feedback within a quarter second of its deadline)
    /// * `callback` - Function called with each batch of fired events
    pub fn start<F>(
        &mut self,
        registry: Arc<Mutex<SessionRegistry>>,
        interval_ms: u64,
        callback: F,
    ) where
        F: Fn(Vec<(SessionId, GameEvent)>) + Send + 'static,
    {
        // Don't start if already running
        if self.is_running.load(Ordering::Relaxed) {
            warn!("feedback runner already running");
            return;
        }

        info!("starting feedback runner ({interval_ms}ms intervals)");
        self.is_running.store(true, Ordering::Relaxed);
        let running = Arc::clone(&self.is_running);

        let handle = thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                let fired = {
                    let mut reg = registry.lock().unwrap();
                    let now = reg.now_ms();
                    reg.poll_all(now)
                };

                if !fired.is_empty() {
                    callback(fired);
                }

                thread::sleep(Duration::from_millis(interval_ms));
            }
            info!("feedback runner thread stopped");
        });

        self.thread_handle = Some(handle);
    }

    /// Stop polling
    pub fn stop(&mut self) {
        if !self.is_running.load(Ordering::Relaxed) {
            return;
        }

        info!("stopping feedback runner...");
        self.is_running.store(false, Ordering::Relaxed);

        // Wait for thread to finish
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join(); // Thread panic result intentionally ignored during shutdown
        }
    }

    /// Check if the runner is currently active
    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }
}

impl Default for FeedbackRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FeedbackRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordId;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn test_runner_clears_incorrect_feedback() {
        let registry = Arc::new(Mutex::new(SessionRegistry::new()));
        let session_id = {
            let mut reg = registry.lock().unwrap();
            let id = reg.create_session("battles", &[], Some(9)).unwrap();
            let now = reg.now_ms();
            let session = reg.get_mut(id).unwrap();
            session.select(0, RecordId(1), now).unwrap();
            session.select(1, RecordId(2), now).unwrap();
            session.select(2, RecordId(3), now).unwrap();
            id
        };

        let fired_batches = Arc::new(AtomicU32::new(0));
        let fired_clone = Arc::clone(&fired_batches);

        let mut runner = FeedbackRunner::new();
        runner.start(Arc::clone(&registry), 50, move |_events| {
            fired_clone.fetch_add(1, Ordering::Relaxed);
        });

        // Incorrect feedback lasts 3000ms; give the runner time to clear it.
        thread::sleep(Duration::from_millis(3500));
        runner.stop();

        assert!(fired_batches.load(Ordering::Relaxed) >= 1);
        let reg = registry.lock().unwrap();
        let session = reg.get(session_id).unwrap();
        assert!(session.state.incorrect.is_empty());
        assert!(session.state.selections.iter().all(Option::is_none));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut runner = FeedbackRunner::new();
        assert!(!runner.is_running());
        runner.stop();
        runner.stop();
    }
}
