//! Deferred site-settings fetch.
//!
//! After a sales page loads, site settings are fetched on a background thread
//! once a short delay has passed. Dropping the returned [`DeferredHandle`]
//! cancels the fetch, or suppresses its write if the fetch already ran.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::thread::JoinHandle;
use std::time::Duration;

use lander_content::ContentSource;
use lander_sections::MediaHost;
use tracing::{debug, warn};

use crate::chrome::ChromeLease;

/// What the deferred fetch ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsOutcome {
    /// Title and/or favicon written to the chrome.
    Applied,
    /// Cancelled before or during the fetch; nothing written.
    Cancelled,
    /// Another page claimed the chrome; nothing written.
    Superseded,
    /// Fetch failed; nothing written.
    Failed,
}

/// Handle on a scheduled settings fetch.
///
/// Dropping the handle cancels the fetch.
#[derive(Debug)]
pub struct DeferredHandle {
    shutdown: Option<mpsc::Sender<()>>,
    worker: Option<JoinHandle<SettingsOutcome>>,
}

impl DeferredHandle {
    /// Block until the fetch has finished, without cancelling it.
    pub fn wait(mut self) -> SettingsOutcome {
        let outcome = self
            .worker
            .take()
            .map_or(SettingsOutcome::Cancelled, |worker| {
                worker.join().unwrap_or(SettingsOutcome::Failed)
            });
        self.shutdown.take();
        outcome
    }

    /// Cancel the fetch.
    pub fn cancel(mut self) {
        self.shutdown.take();
    }
}

/// Schedule a site-settings fetch after `delay`.
pub fn schedule_settings(
    source: Arc<dyn ContentSource>,
    lease: Arc<ChromeLease>,
    media: MediaHost,
    delay: Duration,
) -> DeferredHandle {
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

    let worker = std::thread::spawn(move || {
        match shutdown_rx.recv_timeout(delay) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                debug!("Settings fetch cancelled before start");
                return SettingsOutcome::Cancelled;
            }
        }

        let settings = match source.site_settings() {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to fetch site settings: {e}");
                return SettingsOutcome::Failed;
            }
        };

        if !matches!(shutdown_rx.try_recv(), Err(TryRecvError::Empty)) {
            debug!("Settings fetch cancelled, discarding result");
            return SettingsOutcome::Cancelled;
        }

        let favicon = settings.favicon_url().map(|url| media.resolve(url));
        if lease.apply(settings.title(), favicon.as_deref()) {
            SettingsOutcome::Applied
        } else {
            SettingsOutcome::Superseded
        }
    });

    DeferredHandle {
        shutdown: Some(shutdown_tx),
        worker: Some(worker),
    }
}
