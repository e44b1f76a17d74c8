use serde::Deserialize;
use std::time::Duration;
use std::{env, fs};
use url::Url;

// Runtime configuration: compiled-in defaults, then the optional
// dashboard.toml file, then DASHBOARD_* environment overrides.

const DEFAULT_BASE_URL: &str = "http://localhost:5050";
const DEFAULT_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_CONFIG_PATH: &str = "dashboard.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub request_timeout: Duration,
    // Preset operator id; when set the session starts authenticated.
    pub user_id: Option<String>,
}

// Shape of the optional config file; every field may be omitted.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    base_url: Option<String>,
    request_timeout_ms: Option<u64>,
    user_id: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        let file = read_config_file();

        let base_url = env::var("DASHBOARD_API_URL")
            .ok()
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout_ms = env::var("DASHBOARD_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .or(file.request_timeout_ms)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let user_id = env::var("DASHBOARD_USER_ID").ok().or(file.user_id);

        Self {
            base_url: parse_base_url(&base_url),
            request_timeout: Duration::from_millis(request_timeout_ms),
            user_id,
        }
    }
}

fn read_config_file() -> ConfigFile {
    let path = env::var("DASHBOARD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let Ok(raw) = fs::read_to_string(&path) else {
        return ConfigFile::default();
    };
    match toml::from_str(&raw) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(%path, error = %err, "ignoring malformed config file");
            ConfigFile::default()
        }
    }
}

// Anything that does not parse as a hierarchical URL falls back to the
// default.
fn parse_base_url(raw: &str) -> Url {
    match Url::parse(raw) {
        Ok(url) if url.path_segments().is_some() => url,
        _ => {
            tracing::warn!(
                base_url = %raw,
                default = DEFAULT_BASE_URL,
                "invalid base url, using default"
            );
            Url::parse(DEFAULT_BASE_URL).expect("default base url parses")
        }
    }
}
