use std::env;

use url::Url;

/// Address of the catalog service when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "backoffice=info";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match lookup("API_BASE_URL") {
            Some(raw) => normalize_base_url(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "Ignoring invalid API_BASE_URL '{}', using {}",
                    raw,
                    defaults.api_base_url
                );
                defaults.api_base_url.clone()
            }),
            None => defaults.api_base_url,
        };

        Self { api_base_url }
    }

    /// Override the service address (from `--base-url`). Invalid values are
    /// rejected and the current address is kept.
    pub fn with_base_url(mut self, raw: &str) -> Self {
        match normalize_base_url(raw) {
            Some(url) => self.api_base_url = url,
            None => tracing::warn!(
                "Ignoring invalid --base-url '{}', using {}",
                raw,
                self.api_base_url
            ),
        }
        self
    }
}

/// Accept only absolute http(s) URLs and drop any trailing slash so paths can
/// be appended with `format!("{}/books", base)`.
fn normalize_base_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return None;
    }
    Some(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_base_url_from_lookup_strips_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[(
            "API_BASE_URL",
            "http://books.internal:9000/api/v2/",
        )]));
        assert_eq!(config.api_base_url, "http://books.internal:9000/api/v2");
    }

    #[test]
    fn test_invalid_base_url_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("API_BASE_URL", "not a url")]));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);

        let config = Config::from_lookup(lookup_from(&[("API_BASE_URL", "ftp://host/api")]));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_cli_override() {
        let config = Config::default().with_base_url("https://shop.example.com/api/v1");
        assert_eq!(config.api_base_url, "https://shop.example.com/api/v1");

        let config = config.with_base_url("garbage");
        assert_eq!(config.api_base_url, "https://shop.example.com/api/v1");
    }
}
