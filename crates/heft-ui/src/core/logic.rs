//! Pure UI helpers extracted from components for non-wasm testing.

/// Port the dev server (Trunk) listens on.
pub const DEV_UI_PORT: &str = "8080";
/// Port the API listens on next to the dev server.
pub const DEV_API_PORT: &str = "7070";
/// API base used when the page location cannot be read.
pub const FALLBACK_API_BASE: &str = "http://localhost:7070";

/// Join an API base URL and an absolute path without doubling slashes.
#[must_use]
pub fn build_api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Derive the API base from the page origin parts.
///
/// `protocol` is expected in `Location` form (`"https:"`). The dev UI port is
/// mapped to the API port; any other port is kept.
#[must_use]
pub fn api_base_from_location(protocol: &str, host: &str, port: &str) -> String {
    let mut base = format!("{protocol}//{host}");
    let mapped = match port {
        "" => None,
        DEV_UI_PORT => Some(DEV_API_PORT),
        other => Some(other),
    };
    if let Some(port) = mapped {
        base.push(':');
        base.push_str(port);
    }
    base
}

/// Normalise a user-provided API base override; blank values are ignored.
#[must_use]
pub fn normalize_api_base(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse the size preview input into megabytes.
#[must_use]
pub fn parse_size_input(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|size| size.is_finite() && *size >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_cleanly() {
        assert_eq!(
            build_api_url("http://x/", "/v1/settings"),
            "http://x/v1/settings"
        );
        assert_eq!(build_api_url("http://x", "v1/settings"), "http://x/v1/settings");
    }

    #[test]
    fn dev_port_maps_to_api_port() {
        assert_eq!(
            api_base_from_location("http:", "localhost", "8080"),
            "http://localhost:7070"
        );
        assert_eq!(
            api_base_from_location("https:", "heft.example", ""),
            "https://heft.example"
        );
        assert_eq!(
            api_base_from_location("http:", "10.0.0.4", "9000"),
            "http://10.0.0.4:9000"
        );
    }

    #[test]
    fn api_base_override_is_trimmed() {
        assert_eq!(
            normalize_api_base(" http://api.local:7070/ "),
            Some("http://api.local:7070".to_string())
        );
        assert_eq!(normalize_api_base("   "), None);
    }

    #[test]
    fn size_input_accepts_non_negative_numbers() {
        assert_eq!(parse_size_input(" 42 "), Some(42.0));
        assert_eq!(parse_size_input("0"), Some(0.0));
        assert_eq!(parse_size_input("-1"), None);
        assert_eq!(parse_size_input("big"), None);
    }
}
