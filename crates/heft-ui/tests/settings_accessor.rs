//! Settings accessor scenarios driven through the public API.

use async_trait::async_trait;
use heft_api_models::{DEFAULT_SIZE_WARNING_MB, SIZE_DANGER_MB_KEY, SIZE_WARNING_MB_KEY};
use heft_ui::core::error::ApiError;
use heft_ui::core::settings::{ApplyOutcome, SettingsAccessor, SettingsMap, SettingsSource};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Source that replays scripted results in order.
struct ScriptedSource {
    results: RefCell<VecDeque<Result<SettingsMap, ApiError>>>,
}

impl ScriptedSource {
    fn new(results: Vec<Result<SettingsMap, ApiError>>) -> Self {
        Self {
            results: RefCell::new(results.into()),
        }
    }
}

#[async_trait(?Send)]
impl SettingsSource for ScriptedSource {
    async fn read_settings(&self) -> Result<SettingsMap, ApiError> {
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport {
                detail: "script exhausted".into(),
            }))
    }
}

fn map(pairs: &[(&str, &str)]) -> SettingsMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[tokio::test]
async fn successful_read_replaces_settings_and_clears_loading() {
    let mut accessor = SettingsAccessor::new(ScriptedSource::new(vec![Ok(map(&[("a", "1")]))]));
    assert!(accessor.loading());
    assert!(accessor.settings().is_empty());

    let outcome = accessor.fetch().await;

    assert_eq!(outcome, ApplyOutcome::Loaded);
    assert!(!accessor.loading());
    assert_eq!(accessor.settings(), &map(&[("a", "1")]));
    assert!(accessor.error().is_none());
}

#[tokio::test]
async fn failed_read_clears_loading_and_keeps_empty_settings() {
    let failure = ApiError::Status {
        status: 500,
        detail: None,
    };
    let mut accessor = SettingsAccessor::new(ScriptedSource::new(vec![Err(failure.clone())]));

    let outcome = accessor.fetch().await;

    assert_eq!(outcome, ApplyOutcome::Failed);
    assert!(!accessor.loading());
    assert!(accessor.settings().is_empty());
    assert_eq!(accessor.error(), Some(&failure));
}

#[tokio::test]
async fn refetch_issues_one_read_per_call() {
    let source = ScriptedSource::new(vec![
        Ok(map(&[(SIZE_WARNING_MB_KEY, "10")])),
        Err(ApiError::Decode {
            detail: "missing field `settings`".into(),
        }),
        Ok(map(&[(SIZE_DANGER_MB_KEY, "80")])),
    ]);
    let mut accessor = SettingsAccessor::new(source);

    accessor.fetch().await;
    assert!((accessor.thresholds().warning_mb - 10.0).abs() < f64::EPSILON);

    assert_eq!(accessor.refetch().await, ApplyOutcome::Failed);
    assert_eq!(accessor.settings(), &map(&[(SIZE_WARNING_MB_KEY, "10")]));

    assert_eq!(accessor.refetch().await, ApplyOutcome::Loaded);
    assert!(accessor.error().is_none());
    let thresholds = accessor.thresholds();
    assert_eq!(thresholds.warning_mb.to_bits(), DEFAULT_SIZE_WARNING_MB.to_bits());
    assert!((thresholds.danger_mb - 80.0).abs() < f64::EPSILON);
    assert_eq!(accessor.state().latest_request(), 3);
}
