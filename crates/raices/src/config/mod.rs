use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub cms: CmsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            cms: CmsConfig::from_env(),
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

const DEFAULT_CMS_BASE_URL: &str = "https://www.wixapis.com/wix-data";
const DEFAULT_CMS_TIMEOUT_SECS: u64 = 10;

/// Credentials and addressing for the hosted CMS that stores applications.
///
/// The API key and account id are both required to construct a client;
/// without them the intake service runs in a non-persisting mode.
#[derive(Debug, Clone, Default)]
pub struct CmsConfig {
    pub api_key: Option<String>,
    pub account_id: Option<String>,
    pub site_id: Option<String>,
    pub collection_id: Option<String>,
    pub base_url: Option<String>,
}

impl CmsConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_var("CMS_API_KEY"),
            account_id: non_empty_var("CMS_ACCOUNT_ID"),
            site_id: non_empty_var("CMS_SITE_ID"),
            collection_id: non_empty_var("CMS_COLLECTION_ID"),
            base_url: non_empty_var("CMS_BASE_URL"),
        }
    }

    /// True when the key/account pair needed for an authenticated client is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.account_id.is_some()
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_CMS_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(DEFAULT_CMS_TIMEOUT_SECS)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("CMS_API_KEY");
        env::remove_var("CMS_ACCOUNT_ID");
        env::remove_var("CMS_SITE_ID");
        env::remove_var("CMS_COLLECTION_ID");
        env::remove_var("CMS_BASE_URL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(!config.cms.is_configured());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }

    #[test]
    fn cms_requires_key_and_account_pair() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CMS_API_KEY", "key-123");
        let config = AppConfig::load().expect("config loads");
        assert!(!config.cms.is_configured(), "key alone is not enough");

        env::set_var("CMS_ACCOUNT_ID", "acct-456");
        let config = AppConfig::load().expect("config loads");
        assert!(config.cms.is_configured());
        assert_eq!(config.cms.base_url(), DEFAULT_CMS_BASE_URL);
    }

    #[test]
    fn blank_cms_values_count_as_absent() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CMS_API_KEY", "   ");
        env::set_var("CMS_ACCOUNT_ID", "acct-456");
        let config = AppConfig::load().expect("config loads");
        assert!(!config.cms.is_configured());
    }
}
