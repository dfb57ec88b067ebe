//! Process configuration read from the environment at startup

use std::net::SocketAddr;
use std::path::PathBuf;

/// Fallback shared secret; override it in any real deployment
const DEFAULT_SECRET_KEY: &str = "change-me";

/// Runtime configuration for the API process
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shared secret expected in the `X-App-Key` header
    pub secret_key: String,
    /// Address the server listens on
    pub listen_addr: SocketAddr,
    /// Cache directory; set selects the file-backed store, unset the
    /// in-memory one
    pub cache_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// - `APP_SECRET_KEY` - shared secret (default: `change-me`)
    /// - `APP_LISTEN_ADDR` - listen address (default: `0.0.0.0:3000`)
    /// - `APP_CACHE_DIR` - optional cache directory
    pub fn from_env() -> Self {
        let secret_key = std::env::var("APP_SECRET_KEY")
            .unwrap_or_else(|_| DEFAULT_SECRET_KEY.to_string());

        let listen_addr = std::env::var("APP_LISTEN_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let cache_dir = std::env::var("APP_CACHE_DIR").ok().map(PathBuf::from);

        Self {
            secret_key,
            listen_addr,
            cache_dir,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            cache_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.secret_key, "change-me");
        assert_eq!(config.listen_addr.port(), 3000);
        assert!(config.cache_dir.is_none());
    }
}
