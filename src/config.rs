use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the persisted registry lives
    pub data_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            bind_addr: "127.0.0.1:9000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("NEOSEARCH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(addr) = std::env::var("NEOSEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }

    /// Path of the persisted registry file.
    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join("registry.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_path_is_under_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/ns"),
            ..Config::default()
        };
        assert_eq!(config.registry_path(), PathBuf::from("/tmp/ns/registry.json"));
    }
}
