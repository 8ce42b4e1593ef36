use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the JSON store document.
    pub store: String,
    #[serde(default = "default_category")]
    pub default_category: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_category() -> String {
    "frontend".to_string()
}

fn default_debounce_ms() -> u64 {
    400
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            default_category: default_category(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("techtrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".techtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("techtrack.conf")
    }

    /// Return the full path of the JSON store document
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("technologies.json")
    }

    /// Load configuration from file. Missing or malformed files fall back
    /// to defaults; a bad config is never fatal.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warning(format!("Could not read config file: {e}. Using defaults."));
                return Self::default();
            }
        };

        match serde_yaml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!("Malformed config file: {e}. Using defaults."));
                Self::default()
            }
        }
    }

    /// Initialize configuration and store files.
    ///
    /// `custom_store` overrides the default store path; relative paths are
    /// resolved inside the config directory. In test mode the config file
    /// is not written.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let store_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            default_category: default_category(),
            debounce_ms: default_debounce_ms(),
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
