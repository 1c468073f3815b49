//! Process configuration read from `BLOG_API_*` environment variables.
//!
//! Server address, port and limits are left to Rocket's own configuration
//! (`Rocket.toml` / `ROCKET_*`).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    All,
    Exact(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cors_origins: CorsOrigins,
    pub log_json: bool,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cors_origins: CorsOrigins::All,
            log_json: false,
            log_level: "info".to_string(),
            seed_demo: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or unparsable values fall
    /// back to the defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let cors_origins = get("BLOG_API_CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or(defaults.cors_origins);
        let log_json = get("BLOG_API_LOG_JSON")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.log_json);
        let log_level = get("BLOG_API_LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log_level);
        let seed_demo = get("BLOG_API_SEED_DEMO")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(defaults.seed_demo);

        Self { cors_origins, log_json, log_level, seed_demo }
    }
}

fn parse_origins(raw: &str) -> CorsOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsOrigins::All
    } else {
        CorsOrigins::Exact(origins)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
