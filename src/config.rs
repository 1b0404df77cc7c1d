//! Build-time Configuration
//!
//! The dashboard has no runtime settings source, so values are baked in
//! from the environment of the build (`FOOD_API_URL`, `FOOD_LOG_LEVEL`).

use log::LevelFilter;

/// Service URL used when `FOOD_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Where the food service lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute URL for a resource path such as `/foods/3`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FOOD_API_URL"), option_env!("FOOD_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api: ApiConfig::new(api_url),
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_values(None, None);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_blank_url_and_bad_level_fall_back() {
        let config = Config::from_values(Some("  "), Some("chatty"));
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_values(Some("https://api.example/v1"), Some("debug"));
        assert_eq!(config.api.base_url, "https://api.example/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let api = ApiConfig::new("http://localhost:3333/");
        assert_eq!(api.endpoint("/foods"), "http://localhost:3333/foods");
        assert_eq!(api.endpoint("foods/7"), "http://localhost:3333/foods/7");
    }
}
