//! Remote data lifecycle shared by the list and detail screens.
//!
//! Both screens go through the same cycle: mount in `Loading`, settle into
//! `Ready` or `Error`, and re-enter `Loading` on a user retry. The only
//! behavioral difference between the screens is how a failure is surfaced,
//! captured here as [`RetryUi`] so the asymmetry is configuration rather
//! than divergent code.

use std::time::{Duration, Instant};

/// How a screen surfaces a failed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryUi {
    /// Blocking alert with Retry/Cancel on top of the inline error view
    Dialog,
    /// Inline retry hint only
    Inline,
}

/// Lifecycle of one remote payload. Exactly one variant holds at a time.
#[derive(Debug)]
pub enum RemoteData<T> {
    /// Fetch in flight; `since` drives the spinner
    Loading {
        /// When this loading cycle started
        since: Instant,
    },
    /// Fetch settled with a failure
    Error {
        /// Human-readable message for the error view
        message: String,
    },
    /// Payload arrived; `entered` drives the entrance animation
    Ready {
        /// The fetched payload
        payload: T,
        /// When the `Loading → Ready` transition happened
        entered: Instant,
    },
}

/// State machine for one screen's fetch/render/retry cycle.
///
/// Every fetch is tagged with a request id; an outcome whose id does not
/// match the one currently awaited is dropped, which makes late resolutions
/// after a retry or after leaving the screen checked no-ops.
#[derive(Debug)]
pub struct Loader<T> {
    state: RemoteData<T>,
    retry_ui: RetryUi,
    request: u64,
}

impl<T> Loader<T> {
    /// Create a loader already in `Loading`, awaiting `request`.
    pub fn new(retry_ui: RetryUi, request: u64) -> Self {
        Self {
            state: RemoteData::Loading {
                since: Instant::now(),
            },
            retry_ui,
            request,
        }
    }

    /// Re-enter `Loading` for a fresh fetch tagged `request`.
    ///
    /// Clears any previous error or payload; the spinner restarts from zero.
    pub fn begin(&mut self, request: u64) {
        self.request = request;
        self.state = RemoteData::Loading {
            since: Instant::now(),
        };
    }

    /// Apply a settled fetch outcome.
    ///
    /// Returns `false` when the outcome was dropped as stale: either the
    /// request id does not match the awaited one, or the loader is not in
    /// `Loading` (the fetch already settled).
    pub fn resolve(&mut self, request: u64, result: Result<T, String>) -> bool {
        if request != self.request || !matches!(self.state, RemoteData::Loading { .. }) {
            return false;
        }
        self.state = match result {
            Ok(payload) => RemoteData::Ready {
                payload,
                entered: Instant::now(),
            },
            Err(message) => RemoteData::Error { message },
        };
        true
    }

    /// Current state
    pub fn state(&self) -> &RemoteData<T> {
        &self.state
    }

    /// Retry-UI variant configured for this screen
    pub fn retry_ui(&self) -> RetryUi {
        self.retry_ui
    }

    /// Request id of the fetch currently awaited (or last settled)
    pub fn request(&self) -> u64 {
        self.request
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self.state, RemoteData::Loading { .. })
    }

    /// Payload, when `Ready`
    pub fn payload(&self) -> Option<&T> {
        match &self.state {
            RemoteData::Ready { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Error message, when `Error`
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            RemoteData::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Time spent in the current `Loading` state, for the spinner
    pub fn loading_elapsed(&self) -> Option<Duration> {
        match &self.state {
            RemoteData::Loading { since } => Some(since.elapsed()),
            _ => None,
        }
    }

    /// Time since the last `Loading → Ready` transition, for the entrance
    /// animation. Stays monotonic across re-renders while `Ready`, so the
    /// animation never replays without a fresh transition.
    pub fn entrance_elapsed(&self) -> Option<Duration> {
        match &self.state {
            RemoteData::Ready { entered, .. } => Some(entered.elapsed()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_in_loading() {
        let loader: Loader<u32> = Loader::new(RetryUi::Dialog, 1);
        assert!(loader.is_loading());
        assert!(loader.payload().is_none());
        assert!(loader.error_message().is_none());
        assert!(loader.loading_elapsed().is_some());
        assert!(loader.entrance_elapsed().is_none());
    }

    #[test]
    fn success_settles_into_ready() {
        let mut loader = Loader::new(RetryUi::Dialog, 1);
        assert!(loader.resolve(1, Ok(42)));
        assert!(!loader.is_loading());
        assert_eq!(loader.payload(), Some(&42));
        assert!(loader.entrance_elapsed().is_some());
    }

    #[test]
    fn failure_settles_into_error() {
        let mut loader: Loader<u32> = Loader::new(RetryUi::Inline, 1);
        assert!(loader.resolve(1, Err("server returned 500".to_string())));
        assert!(!loader.is_loading());
        assert_eq!(loader.error_message(), Some("server returned 500"));
        assert_eq!(loader.retry_ui(), RetryUi::Inline);
    }

    #[test]
    fn retry_cycles_leave_no_residue() {
        let mut loader = Loader::new(RetryUi::Dialog, 1);
        loader.resolve(1, Err("boom".to_string()));

        // Retry after a terminal error re-enters a clean Loading
        loader.begin(2);
        assert!(loader.is_loading());
        assert!(loader.error_message().is_none());

        // ...and the next success carries no stale error flag
        loader.resolve(2, Ok(7));
        assert_eq!(loader.payload(), Some(&7));
        assert!(loader.error_message().is_none());

        // A further retry from Ready also works
        loader.begin(3);
        assert!(loader.is_loading());
        assert!(loader.payload().is_none());
    }

    #[test]
    fn stale_request_is_dropped() {
        let mut loader = Loader::new(RetryUi::Dialog, 1);
        loader.begin(2); // user retried before the first fetch settled

        // The first fetch resolving late must not touch state
        assert!(!loader.resolve(1, Ok(1)));
        assert!(loader.is_loading());

        assert!(loader.resolve(2, Ok(2)));
        assert_eq!(loader.payload(), Some(&2));
    }

    #[test]
    fn double_resolution_is_dropped() {
        let mut loader = Loader::new(RetryUi::Dialog, 1);
        assert!(loader.resolve(1, Ok(1)));
        assert!(!loader.resolve(1, Err("late duplicate".to_string())));
        assert_eq!(loader.payload(), Some(&1));
    }
}
