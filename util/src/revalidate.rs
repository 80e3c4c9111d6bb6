//! Cache revalidation signals.
//!
//! Every mutation announces the listing path whose rendered view is now stale
//! (`/folders`, `/folders/{name}`). Anything that caches those views subscribes
//! and drops its copy; with no subscribers the signal is only logged.

use tokio::sync::broadcast::{self, error::RecvError};

const CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct Revalidator {
    tx: broadcast::Sender<String>,
}

impl Default for Revalidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Revalidator {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Announces that `path` must be re-rendered.
    pub fn revalidate(&self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!(path = %path, "revalidate");
        // No receivers is fine: nothing is cached yet.
        let _ = self.tx.send(path);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

/// Feeds every received path to `on_path` until all senders are gone.
///
/// A lagging receiver skips the signals it missed and keeps going.
pub async fn consume(mut rx: broadcast::Receiver<String>, mut on_path: impl FnMut(&str)) {
    loop {
        match rx.recv().await {
            Ok(path) => on_path(&path),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "revalidation subscriber lagged");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Listing path for a single folder page.
pub fn folder_path(folder_name: &str) -> String {
    format!("/folders/{folder_name}")
}

pub const FOLDERS_PATH: &str = "/folders";
