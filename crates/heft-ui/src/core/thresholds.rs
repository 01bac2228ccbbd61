//! Size thresholds derived from the raw settings map.
//!
//! # Design
//! - Derive on demand; never cache thresholds next to the settings they come from.
//! - Treat missing, unparsable and non-positive values the same way: use the default.
//! - Do not reorder or cross-check the three values; the server owns their relationship.

use crate::core::settings::SettingsMap;
use heft_api_models::{
    DEFAULT_SIZE_BLOCKED_MB, DEFAULT_SIZE_DANGER_MB, DEFAULT_SIZE_WARNING_MB, SIZE_BLOCKED_MB_KEY,
    SIZE_DANGER_MB_KEY, SIZE_WARNING_MB_KEY,
};

/// Warning/danger/blocked boundaries, in megabytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeThresholds {
    /// Sizes at or above this value raise a warning.
    pub warning_mb: f64,
    /// Sizes at or above this value are flagged as dangerous.
    pub danger_mb: f64,
    /// Sizes at or above this value are refused.
    pub blocked_mb: f64,
}

/// Thresholds used for any key the server leaves unset or invalid.
pub const DEFAULT_SIZE_THRESHOLDS: SizeThresholds = SizeThresholds {
    warning_mb: DEFAULT_SIZE_WARNING_MB,
    danger_mb: DEFAULT_SIZE_DANGER_MB,
    blocked_mb: DEFAULT_SIZE_BLOCKED_MB,
};

impl Default for SizeThresholds {
    fn default() -> Self {
        DEFAULT_SIZE_THRESHOLDS
    }
}

/// Classification of a measured size against [`SizeThresholds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeLevel {
    /// Below every threshold.
    Ok,
    /// At or above the warning threshold.
    Warning,
    /// At or above the danger threshold.
    Danger,
    /// At or above the blocked threshold.
    Blocked,
}

impl SizeLevel {
    /// Stable identifier, also used as the translation key suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Blocked => "blocked",
        }
    }

    /// `DaisyUI` badge modifier for the level.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Ok => "badge-success",
            Self::Warning => "badge-warning",
            Self::Danger => "badge-error",
            Self::Blocked => "badge-neutral",
        }
    }
}

impl SizeThresholds {
    /// Classify a size in megabytes, checking the most severe boundary first.
    ///
    /// `NaN` and negative sizes are treated as [`SizeLevel::Ok`].
    #[must_use]
    pub fn classify(&self, size_mb: f64) -> SizeLevel {
        if size_mb.is_nan() || size_mb < 0.0 {
            return SizeLevel::Ok;
        }
        if size_mb >= self.blocked_mb {
            SizeLevel::Blocked
        } else if size_mb >= self.danger_mb {
            SizeLevel::Danger
        } else if size_mb >= self.warning_mb {
            SizeLevel::Warning
        } else {
            SizeLevel::Ok
        }
    }
}

/// Derive the three size thresholds from a settings map.
#[must_use]
pub fn size_thresholds_from_settings(settings: &SettingsMap) -> SizeThresholds {
    SizeThresholds {
        warning_mb: positive_or(settings, SIZE_WARNING_MB_KEY, DEFAULT_SIZE_WARNING_MB),
        danger_mb: positive_or(settings, SIZE_DANGER_MB_KEY, DEFAULT_SIZE_DANGER_MB),
        blocked_mb: positive_or(settings, SIZE_BLOCKED_MB_KEY, DEFAULT_SIZE_BLOCKED_MB),
    }
}

/// Whether the value for `key` would be replaced by its default.
#[must_use]
pub fn uses_default(settings: &SettingsMap, key: &str) -> bool {
    settings
        .get(key)
        .and_then(|raw| parse_positive_mb(raw))
        .is_none()
}

/// Parse a megabyte value, accepting only finite numbers strictly above zero.
#[must_use]
pub fn parse_positive_mb(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

fn positive_or(settings: &SettingsMap, key: &str, default: f64) -> f64 {
    settings
        .get(key)
        .and_then(|raw| parse_positive_mb(raw))
        .unwrap_or(default)
}

/// Human label for a megabyte amount (`"512 MB"`, `"1.5 GB"`).
///
/// The unit is picked from the value as displayed, after rounding to one decimal.
#[must_use]
pub fn format_megabytes(mb: f64) -> String {
    let tenths = (mb * 10.0).round() / 10.0;
    if tenths >= 1024.0 {
        let gb = mb / 1024.0;
        format!("{gb:.1} GB")
    } else if tenths == 0.0 {
        if mb > 0.0 {
            "< 0.1 MB".to_string()
        } else {
            "0 MB".to_string()
        }
    } else if tenths.fract() == 0.0 {
        format!("{tenths:.0} MB")
    } else {
        format!("{tenths:.1} MB")
    }
}
