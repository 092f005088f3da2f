use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Filter used when `RUST_LOG` is unset or blank.
pub const DEFAULT_LOG_FILTER: &str = "learn_words_backend=info,tower_http=info,sqlx=warn";

pub const DEFAULT_LOG_DIR: &str = "./logs";

/// How `GET /api/words/:tag` matches the stored tags column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMatch {
    /// The whole column must equal the requested tag.
    #[default]
    Exact,
    /// The requested tag must be one of the comma-separated labels.
    Token,
}

impl TagMatch {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "exact" => Some(TagMatch::Exact),
            "token" | "member" | "membership" => Some(TagMatch::Token),
            _ => None,
        }
    }
}

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives.
    pub filter: String,
    /// Directory of the daily rolling log file; `None` logs to stdout only.
    pub file_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            file_dir: None,
        }
    }
}

impl LogConfig {
    fn from_env() -> Self {
        Self::resolve(
            std::env::var("RUST_LOG").ok(),
            env_bool("ENABLE_FILE_LOGS"),
            std::env::var("LOG_DIR").ok(),
        )
    }

    fn resolve(filter: Option<String>, file_logs: Option<bool>, log_dir: Option<String>) -> Self {
        let filter = filter
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let file_dir = file_logs.unwrap_or(false).then(|| {
            log_dir
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
        });

        Self { filter, file_dir }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub logging: LogConfig,
    pub database_url: String,
    pub seed_demo_words: bool,
    pub empty_result_is_error: bool,
    pub tag_match: TagMatch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3000,
            logging: LogConfig::default(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            seed_demo_words: true,
            empty_result_is_error: true,
            tag_match: TagMatch::Exact,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(defaults.host);

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.database_url);

        let tag_match = std::env::var("TAG_MATCH")
            .ok()
            .and_then(|value| TagMatch::parse(&value))
            .unwrap_or(defaults.tag_match);

        Self {
            host,
            port,
            logging: LogConfig::from_env(),
            database_url,
            seed_demo_words: env_bool("SEED_DEMO_WORDS").unwrap_or(defaults.seed_demo_words),
            empty_result_is_error: env_bool("EMPTY_RESULT_IS_ERROR")
                .unwrap_or(defaults.empty_result_is_error),
            tag_match,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_bool(key: &str) -> Option<bool> {
    let value = std::env::var(key).ok()?;
    parse_bool(&value)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
