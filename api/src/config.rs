//! Client configuration.
//!
//! The backend origin is fixed at compile time: `RECIPE_API_BASE_URL` in the
//! build environment overrides the development default. There is no runtime
//! configuration surface in the browser.

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Origin without a trailing slash, e.g. `http://localhost:8080`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Build-environment override, falling back to the development default.
    pub fn resolve() -> Self {
        let base = option_env!("RECIPE_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let cfg = ApiConfig::with_base_url("http://example.com/");
        assert_eq!(cfg.base_url, "http://example.com");
        let cfg = ApiConfig::with_base_url("http://example.com");
        assert_eq!(cfg.base_url, "http://example.com");
    }

    #[test]
    fn resolve_falls_back_to_localhost() {
        // RECIPE_API_BASE_URL is unset in the test environment.
        assert!(ApiConfig::resolve().base_url.starts_with("http://"));
    }
}
