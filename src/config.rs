// src/config.rs

use std::{env, net::SocketAddr, str::FromStr, time::Duration};

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Browser origins allowed by CORS.
    pub allowed_origins: Vec<String>,
    /// Page size used when a listing request does not name one.
    pub page_size: usize,
    /// Load the sample question bank at startup.
    pub seed_sample_questions: bool,
    pub generator_enabled: bool,
    pub generator_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            rust_log: "info".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            page_size: 3,
            seed_sample_questions: true,
            generator_enabled: false,
            generator_interval_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = parse_var("PORT", defaults.port);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        let page_size = parse_var("PAGE_SIZE", defaults.page_size).max(1);
        let seed_sample_questions = parse_var("SEED_SAMPLE_QUESTIONS", defaults.seed_sample_questions);
        let generator_enabled = parse_var("GENERATOR_ENABLED", defaults.generator_enabled);
        let generator_interval_secs =
            parse_var("GENERATOR_INTERVAL_SECS", defaults.generator_interval_secs).max(1);

        Self {
            host,
            port,
            rust_log,
            allowed_origins,
            page_size,
            seed_sample_questions,
            generator_enabled,
            generator_interval_secs,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    pub fn generator_interval(&self) -> Duration {
        Duration::from_secs(self.generator_interval_secs)
    }
}

/// Reads and parses an env var, falling back to `default` when it is unset
/// or unparsable.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring unparsable {}={:?}, using default", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_at_info() {
        let config = Config::default();
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
    }

    #[test]
    fn unset_var_falls_back_to_default() {
        assert_eq!(parse_var("TRIVIADOR_UNSET_PAGE_SIZE", 7usize), 7);
    }
}
