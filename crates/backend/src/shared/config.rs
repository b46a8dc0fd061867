use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub menus: MenusConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenusConfig {
    /// Directory holding one `{restaurant_id}.json` document per restaurant
    pub dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[menus]
dir = "menus"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

pub fn get_bind_address(config: &Config) -> anyhow::Result<SocketAddr> {
    let addr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server address: {e}"))?;
    Ok(addr)
}

/// Get the menus directory from configuration
///
/// Relative paths are resolved against the executable directory when the
/// directory exists there, otherwise against the current directory
pub fn get_menus_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.menus.dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.is_dir() {
                return resolved;
            }
        }
    }

    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.menus.dir, "menus");
        assert_eq!(
            get_bind_address(&config).unwrap(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_absolute_menus_dir_is_kept() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        let abs = std::env::temp_dir().join("menus");
        config.menus.dir = abs.to_string_lossy().into_owned();
        assert_eq!(get_menus_dir(&config), abs);
    }

    #[test]
    fn test_bad_host_is_rejected() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".into();
        assert!(get_bind_address(&config).is_err());
    }

    #[test]
    fn test_missing_section_fails() {
        assert!(parse_config("[server]\nhost = \"127.0.0.1\"\nport = 80\n").is_err());
    }
}
