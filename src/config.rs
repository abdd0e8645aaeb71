use crate::error::{Result, ShelfError};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".shelf.yml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on GET requests
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ShelfError::InvalidAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl ShelfConfig {
    /// Load the config file, either the explicit `path` or the nearest
    /// `.shelf.yml` above `start_path`. No file at all means defaults.
    pub fn load(start_path: &Path, path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(ShelfError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => p.to_path_buf(),
            None => match Self::find_config_file(start_path) {
                Some(p) => p,
                None => {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %config_path.display(), "loading config");
        let content = std::fs::read_to_string(&config_path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ShelfConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
