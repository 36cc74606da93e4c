use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Directory holding `events.json` and `categories.json`
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

/// Output directory of the frontend build
#[derive(Debug, Deserialize, Clone)]
pub struct FrontendConfig {
    #[serde(default = "default_dist_dir")]
    pub dist: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            dist: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid listen address '{}': {}", addr, e))
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[data]
dir = "data"

[frontend]
dist = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. In the current working directory (for `cargo run`)
/// 3. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut candidates = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.push(exe_dir.join("config.toml"));
        }
    }
    candidates.push(PathBuf::from("config.toml"));

    for config_path in candidates {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return parse_config(&contents);
        }
        tracing::debug!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

/// Resolve a configured directory.
/// Relative paths are taken relative to the current working directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.data.dir, "data");
        assert_eq!(config.frontend.dist, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "0.0.0.0:3000".parse().unwrap()
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data.dir, "data");

        let config = parse_config("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_invalid_host_is_rejected() {
        let config = parse_config("[server]\nhost = \"not a host\"\n").unwrap();
        assert!(config.server.socket_addr().is_err());
    }

    #[test]
    fn test_absolute_path_kept() {
        let abs = std::env::temp_dir();
        assert_eq!(resolve_path(abs.to_str().unwrap()), abs);
        assert!(resolve_path("data").ends_with("data"));
    }
}
