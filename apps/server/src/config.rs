use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Snapshot file; the bundled sample snapshot is served when unset
    pub data_path: Option<PathBuf>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("FOLIO_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .context("Invalid FOLIO_LISTEN_ADDR")?;
        let data_path = std::env::var("FOLIO_DATA_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let cors_allow = std::env::var("FOLIO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("FOLIO_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("FOLIO_STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            listen_addr,
            data_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            data_path: None,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            static_dir: None,
        }
    }
}
