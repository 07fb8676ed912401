use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

/// Fixed name of the exported visitor list.
pub const EXPORT_FILE_NAME: &str = "Besucher_DEW.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    /// Program that receives the exported file path. `None` uses the
    /// platform opener.
    #[serde(default)]
    pub share_command: Option<String>,
    #[serde(default = "default_ack_seconds")]
    pub ack_seconds: u64,
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_export_dir() -> String {
    Config::config_dir()
        .join("exports")
        .to_string_lossy()
        .to_string()
}
fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}
fn default_ack_seconds() -> u64 {
    10
}
fn default_greeting() -> String {
    "Hallo! Um Fördergelder zu bekommen, würden wir uns freuen, wenn Sie sich bei \
     Ihrem Besuch eintragen. Alle Angaben sind natürlich freiwillig. Vielen Dank!"
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            export_dir: default_export_dir(),
            export_file_name: default_export_file_name(),
            share_command: None,
            ack_seconds: default_ack_seconds(),
            greeting: default_greeting(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("visitor-kiosk")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".visitor-kiosk")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("visitor-kiosk.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("visitors.sqlite")
    }

    /// A relative database path lives in the config directory, an absolute
    /// one is kept as given.
    pub fn resolve_database(name: &str) -> String {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_string_lossy().to_string()
        } else {
            Self::config_dir().join(p).to_string_lossy().to_string()
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration directory and config file.
    ///
    /// In test mode the config file is left untouched and only the database
    /// location is returned.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = Self::default();
        if let Some(name) = custom_db {
            config.database = Self::resolve_database(name);
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
