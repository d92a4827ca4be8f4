use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Configuration for rolodex, stored next to the data as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// File name of the contact book inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Address the web interface binds to (e.g. "127.0.0.1:5000")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

impl RolodexConfig {
    /// Read `config.json` from the directory; a missing file means defaults
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Write `config.json` into the directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.data_file, "contacts.json");
        assert_eq!(config.listen_addr, "127.0.0.1:5000");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = env::temp_dir().join("rolodex_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = RolodexConfig::load(&temp_dir).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = env::temp_dir().join("rolodex_test_config_save");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let config = RolodexConfig {
            data_file: "book.json".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
        };
        config.save(&temp_dir).unwrap();

        let loaded = RolodexConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded, config);

        // Cleanup
        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = env::temp_dir().join("rolodex_test_config_partial");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        fs::write(
            temp_dir.join("config.json"),
            r#"{ "listen_addr": "0.0.0.0:9000" }"#,
        )
        .unwrap();

        let loaded = RolodexConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded.data_file, "contacts.json");
        assert_eq!(loaded.listen_addr, "0.0.0.0:9000");

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
