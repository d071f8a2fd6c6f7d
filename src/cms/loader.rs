//! Background content loading.
//!
//! The map starts rendering immediately and picks up venues when the worker
//! thread delivers them. A [`PendingLoad`] owns a [`CancelToken`]: cancelling
//! or dropping the handle makes the worker discard its result, so a load
//! that outlives its view never lands in a newer one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use crate::cms::fetch::{
    fetch_site_settings, fetch_venues_with_status, FallbackPolicy, FetchStatus,
};
use crate::cms::settings::SiteSettings;
use crate::cms::source::ContentSource;
use crate::error::VenueAtlasError;
use crate::projection::Bounds;
use crate::venue::VenuePoint;

/// Shared cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether any clone has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Handle to a result being produced on a worker thread.
#[derive(Debug)]
pub struct PendingLoad<T> {
    receiver: mpsc::Receiver<T>,
    token: CancelToken,
}

impl<T: Send + 'static> PendingLoad<T> {
    /// Run `work` on a named worker thread.
    ///
    /// The closure receives the load's token and may check it between
    /// steps; its result is dropped if the token is cancelled by the time
    /// it returns.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::ThreadSpawn`] if the thread cannot be started.
    pub fn spawn(
        name: &str,
        work: impl FnOnce(&CancelToken) -> T + Send + 'static,
    ) -> Result<Self, VenueAtlasError> {
        let (sender, receiver) = mpsc::channel();
        let token = CancelToken::new();
        let worker_token = token.clone();

        let _ = std::thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || {
                let value = work(&worker_token);
                if worker_token.is_cancelled() {
                    log::debug!("load cancelled; discarding result");
                    return;
                }
                let _ = sender.send(value);
            })
            .map_err(VenueAtlasError::ThreadSpawn)?;

        Ok(Self { receiver, token })
    }
}

impl<T> PendingLoad<T> {
    /// Non-blocking check for the result. Yields it at most once; always
    /// `None` after cancellation.
    pub fn poll(&mut self) -> Option<T> {
        if self.token.is_cancelled() {
            return None;
        }
        self.receiver.try_recv().ok()
    }

    /// Block until the result arrives. `None` if cancelled or the worker
    /// died.
    #[must_use]
    pub fn wait(self) -> Option<T> {
        if self.token.is_cancelled() {
            return None;
        }
        self.receiver.recv().ok()
    }

    /// Abandon the load.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the load was abandoned.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token shared with the worker.
    #[must_use]
    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl<T> Drop for PendingLoad<T> {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Everything the site needs from one CMS round.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedContent {
    /// Projected venues (possibly the fallback list).
    pub venues: Vec<VenuePoint>,
    /// Site metadata, if any.
    pub settings: Option<SiteSettings>,
    /// Whether the venues are live or a fallback.
    pub status: FetchStatus,
}

impl LoadedContent {
    /// Fetch venues then settings from `source`, in order.
    #[must_use]
    pub fn fetch(
        source: Option<&dyn ContentSource>,
        bounds: &Bounds,
        policy: FallbackPolicy,
    ) -> Self {
        let (venues, status) = fetch_venues_with_status(source, bounds, policy);
        Self {
            venues,
            settings: fetch_site_settings(source),
            status,
        }
    }
}

fn as_dyn<S: ContentSource>(source: &S) -> &dyn ContentSource {
    source
}

/// Loads venues and site settings in the background.
#[derive(Debug, Clone, Copy, Default)]
pub struct VenueLoader {
    bounds: Bounds,
    policy: FallbackPolicy,
}

impl VenueLoader {
    /// Loader projecting into `bounds` with the given fallback.
    #[must_use]
    pub const fn new(bounds: Bounds, policy: FallbackPolicy) -> Self {
        Self { bounds, policy }
    }

    /// Start a load. `make_source` runs on the worker thread, so the source
    /// itself need not be `Send`; returning `None` means the CMS is not
    /// configured.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::ThreadSpawn`] if the worker cannot be started.
    pub fn spawn<S, F>(
        &self,
        make_source: F,
    ) -> Result<PendingLoad<LoadedContent>, VenueAtlasError>
    where
        S: ContentSource + 'static,
        F: FnOnce() -> Option<S> + Send + 'static,
    {
        let Self { bounds, policy } = *self;
        PendingLoad::spawn("venue-loader", move |token| {
            let source = make_source();
            if token.is_cancelled() {
                return LoadedContent {
                    venues: Vec::new(),
                    settings: None,
                    status: FetchStatus::Offline,
                };
            }
            let source = source.as_ref().map(as_dyn);
            LoadedContent::fetch(source, &bounds, policy)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::cms::source::testing::StaticSource;

    #[test]
    fn load_delivers_once() {
        let loader = VenueLoader::default();
        let pending = loader
            .spawn(|| Some(StaticSource::ok(json!([]))))
            .unwrap();
        let content = pending.wait().unwrap();
        assert_eq!(content.status, FetchStatus::Offline);
        assert_eq!(content.venues[0].slug, "warsaw");
        assert_eq!(content.settings, None);
    }

    #[test]
    fn unconfigured_load_uses_fallback() {
        let pending = VenueLoader::new(Bounds::default(), FallbackPolicy::Empty)
            .spawn(|| None::<StaticSource>)
            .unwrap();
        let content = pending.wait().unwrap();
        assert_eq!(content.status, FetchStatus::Unconfigured);
        assert!(content.venues.is_empty());
    }

    #[test]
    fn poll_yields_result_then_nothing() {
        let (release, gate) = mpsc::channel::<()>();
        let mut pending = PendingLoad::spawn("test-load", move |_| {
            let _ = gate.recv();
            7_u32
        })
        .unwrap();
        assert_eq!(pending.poll(), None);
        release.send(()).unwrap();

        let mut value = None;
        for _ in 0..200 {
            value = pending.poll();
            if value.is_some() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(value, Some(7));
        assert_eq!(pending.poll(), None);
    }

    #[test]
    fn cancelled_load_discards_late_result() {
        let (release, gate) = mpsc::channel::<()>();
        let (done_tx, done_rx) = mpsc::channel::<bool>();
        let mut pending = PendingLoad::spawn("test-cancel", move |token| {
            let _ = gate.recv();
            let _ = done_tx.send(token.is_cancelled());
            "late"
        })
        .unwrap();
        pending.cancel();
        release.send(()).unwrap();

        assert!(done_rx.recv().unwrap());
        assert!(pending.is_cancelled());
        assert_eq!(pending.poll(), None);
    }

    #[test]
    fn dropping_handle_cancels_token() {
        let (release, gate) = mpsc::channel::<()>();
        let pending = PendingLoad::spawn("test-drop", move |_| {
            let _ = gate.recv();
        })
        .unwrap();
        let token = pending.token().clone();
        drop(pending);
        assert!(token.is_cancelled());
        let _ = release.send(());
    }
}
