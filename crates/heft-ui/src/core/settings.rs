//! Settings accessor state shared by the Yew hook and non-UI callers.
//!
//! # Design
//! - One read per fetch; the mapping is replaced wholesale on success and left alone on failure.
//! - Every read carries a request generation; only the latest one may settle the state.
//! - Failures are recorded, never raised, so consumers can tell stale data from fresh defaults.

use crate::core::error::ApiError;
use crate::core::thresholds::{SizeThresholds, size_thresholds_from_settings};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Raw key/value configuration as served by the API.
pub type SettingsMap = BTreeMap<String, String>;

/// Anything that can produce the current settings map.
#[async_trait(?Send)]
pub trait SettingsSource {
    /// Read the full settings map.
    ///
    /// # Errors
    /// Returns [`ApiError`] when the read fails or the payload is malformed.
    async fn read_settings(&self) -> Result<SettingsMap, ApiError>;
}

/// Transitions applied to [`SettingsState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    /// A read was issued.
    Started {
        /// Generation of the issued read.
        request: u64,
    },
    /// A read finished.
    Settled {
        /// Generation of the read that finished.
        request: u64,
        /// Result reported by the source.
        result: Result<SettingsMap, ApiError>,
    },
}

/// Effect of applying a [`SettingsAction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Loading flag raised for a new read.
    Started,
    /// Mapping replaced with a fresh result.
    Loaded,
    /// Read failed; mapping kept, error recorded.
    Failed,
    /// A newer read was already issued; nothing changed.
    Superseded,
}

/// Settings mapping plus fetch bookkeeping for one consuming unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsState {
    /// Last successfully read mapping (empty until the first success).
    pub settings: SettingsMap,
    /// True while the latest read is outstanding.
    pub loading: bool,
    /// Error from the latest read, cleared by the next success.
    pub error: Option<ApiError>,
    latest_request: u64,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            settings: SettingsMap::new(),
            loading: true,
            error: None,
            latest_request: 0,
        }
    }
}

impl SettingsState {
    /// Generation of the most recently issued read.
    #[must_use]
    pub const fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Thresholds derived from the current mapping.
    #[must_use]
    pub fn thresholds(&self) -> SizeThresholds {
        size_thresholds_from_settings(&self.settings)
    }

    /// Apply a transition, returning what it did.
    pub fn apply(&mut self, action: SettingsAction) -> ApplyOutcome {
        match action {
            SettingsAction::Started { request } => {
                if request < self.latest_request {
                    return ApplyOutcome::Superseded;
                }
                self.latest_request = request;
                self.loading = true;
                ApplyOutcome::Started
            }
            SettingsAction::Settled { request, result } => {
                if request != self.latest_request {
                    return ApplyOutcome::Superseded;
                }
                self.loading = false;
                match result {
                    Ok(settings) => {
                        self.settings = settings;
                        self.error = None;
                        ApplyOutcome::Loaded
                    }
                    Err(err) => {
                        self.error = Some(err);
                        ApplyOutcome::Failed
                    }
                }
            }
        }
    }
}

/// Owned settings accessor for callers outside the component tree.
pub struct SettingsAccessor<S> {
    source: S,
    state: SettingsState,
}

impl<S: SettingsSource> SettingsAccessor<S> {
    /// Wrap a source; the accessor starts empty with the loading flag raised.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: SettingsState::default(),
        }
    }

    /// Issue one read and apply its result.
    pub async fn fetch(&mut self) -> ApplyOutcome {
        let request = self.state.latest_request() + 1;
        self.state.apply(SettingsAction::Started { request });
        let result = self.source.read_settings().await;
        self.state.apply(SettingsAction::Settled { request, result })
    }

    /// Re-issue the read; identical to [`Self::fetch`].
    pub async fn refetch(&mut self) -> ApplyOutcome {
        self.fetch().await
    }

    /// Current settings mapping.
    #[must_use]
    pub const fn settings(&self) -> &SettingsMap {
        &self.state.settings
    }

    /// Whether a read is outstanding (or none has completed yet).
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.state.loading
    }

    /// Error from the latest read, if it failed.
    #[must_use]
    pub const fn error(&self) -> Option<&ApiError> {
        self.state.error.as_ref()
    }

    /// Full state snapshot.
    #[must_use]
    pub const fn state(&self) -> &SettingsState {
        &self.state
    }

    /// Thresholds derived from the current mapping.
    #[must_use]
    pub fn thresholds(&self) -> SizeThresholds {
        self.state.thresholds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> SettingsMap {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    fn offline() -> ApiError {
        ApiError::Transport {
            detail: "offline".into(),
        }
    }

    #[test]
    fn default_state_is_loading_and_empty() {
        let state = SettingsState::default();
        assert!(state.loading);
        assert!(state.settings.is_empty());
        assert!(state.error.is_none());
        assert_eq!(state.latest_request(), 0);
    }

    #[test]
    fn success_replaces_mapping_wholesale() {
        let mut state = SettingsState::default();
        state.settings = map(&[("old", "1"), ("kept?", "no")]);
        state.apply(SettingsAction::Started { request: 1 });
        let outcome = state.apply(SettingsAction::Settled {
            request: 1,
            result: Ok(map(&[("a", "1")])),
        });
        assert_eq!(outcome, ApplyOutcome::Loaded);
        assert!(!state.loading);
        assert_eq!(state.settings, map(&[("a", "1")]));
    }

    #[test]
    fn failure_keeps_mapping_and_records_error() {
        let mut state = SettingsState::default();
        state.apply(SettingsAction::Started { request: 1 });
        state.apply(SettingsAction::Settled {
            request: 1,
            result: Ok(map(&[("a", "1")])),
        });
        state.apply(SettingsAction::Started { request: 2 });
        assert!(state.loading);
        let outcome = state.apply(SettingsAction::Settled {
            request: 2,
            result: Err(offline()),
        });
        assert_eq!(outcome, ApplyOutcome::Failed);
        assert!(!state.loading);
        assert_eq!(state.settings, map(&[("a", "1")]));
        assert_eq!(state.error, Some(offline()));
    }

    #[test]
    fn later_success_clears_error() {
        let mut state = SettingsState::default();
        state.apply(SettingsAction::Started { request: 1 });
        state.apply(SettingsAction::Settled {
            request: 1,
            result: Err(offline()),
        });
        state.apply(SettingsAction::Started { request: 2 });
        state.apply(SettingsAction::Settled {
            request: 2,
            result: Ok(SettingsMap::new()),
        });
        assert!(state.error.is_none());
    }

    #[test]
    fn stale_settlement_is_ignored() {
        let mut state = SettingsState::default();
        state.apply(SettingsAction::Started { request: 1 });
        state.apply(SettingsAction::Started { request: 2 });
        let stale = state.apply(SettingsAction::Settled {
            request: 1,
            result: Ok(map(&[("from", "first")])),
        });
        assert_eq!(stale, ApplyOutcome::Superseded);
        assert!(state.loading);
        assert!(state.settings.is_empty());

        let fresh = state.apply(SettingsAction::Settled {
            request: 2,
            result: Ok(map(&[("from", "second")])),
        });
        assert_eq!(fresh, ApplyOutcome::Loaded);
        assert_eq!(state.settings, map(&[("from", "second")]));
    }

    #[test]
    fn out_of_order_start_does_not_rewind_generation() {
        let mut state = SettingsState::default();
        state.apply(SettingsAction::Started { request: 3 });
        state.apply(SettingsAction::Settled {
            request: 3,
            result: Ok(map(&[("from", "third")])),
        });
        assert!(!state.loading);

        let late_start = state.apply(SettingsAction::Started { request: 2 });
        assert_eq!(late_start, ApplyOutcome::Superseded);
        assert_eq!(state.latest_request(), 3);
        assert!(!state.loading);

        let late_settle = state.apply(SettingsAction::Settled {
            request: 2,
            result: Ok(map(&[("from", "second")])),
        });
        assert_eq!(late_settle, ApplyOutcome::Superseded);
        assert!(!state.loading);
        assert_eq!(state.settings, map(&[("from", "third")]));
    }
}
